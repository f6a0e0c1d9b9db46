//! Callable values and nominal classes.
//!
//! A [`Function`] is an opaque behaviour attached to a value tree: the getter of
//! an accessor property, or a `valueOf`/`toString` override. Functions are leaf
//! values that compare by reference identity only; the comparator invokes one
//! solely when it resolves an override or reads an accessor.
//!
//! A [`Class`] is the nominal kind tag of user-defined objects. Two instances
//! share a kind only when they were built from the same `Class` handle, so two
//! classes that happen to share a name are still different kinds.

use std::{fmt, sync::Arc};

use crate::errors::Exception;

use super::{Object, Value};

type Callable = dyn Fn(&Object) -> Result<Value, Exception> + Send + Sync;

struct FunctionDef {
    name: String,
    call: Box<Callable>,
}

/// A named behaviour invoked with the object it belongs to.
///
/// Cloning is cheap and preserves identity.
///
/// ```
/// use loose_deep_equal::{Function, Value};
///
/// let answer = Function::new("valueOf", |_this| Ok(Value::Number(42.0)));
/// let same = answer.clone();
/// assert!(answer.ptr_eq(&same));
/// ```
#[derive(Clone)]
pub struct Function(Arc<FunctionDef>);

impl Function {
    pub fn new<F>(name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&Object) -> Result<Value, Exception> + Send + Sync + 'static,
    {
        Self(Arc::new(FunctionDef {
            name: name.into(),
            call: Box::new(call),
        }))
    }

    /// A function that always returns the given value.
    pub fn constant(name: impl Into<String>, value: Value) -> Self {
        Self::new(name, move |_| Ok(value.clone()))
    }

    /// A function that always raises an exception with the given message.
    pub fn throwing(name: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(name, move |_| Err(Exception::new(message.clone())))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn call(&self, this: &Object) -> Result<Value, Exception> {
        (self.0.call)(this)
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function {}]", self.0.name)
    }
}

struct ClassDef {
    name: String,
    parent: Option<Class>,
    value_of: Option<Function>,
    to_string: Option<Function>,
}

/// A user-defined nominal kind with optional behaviour overrides.
///
/// Overrides are looked up through the parent chain, nearest first. A class
/// with neither override produces instances that compare as plain records.
#[derive(Clone)]
pub struct Class(Arc<ClassDef>);

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        ClassBuilder::new(name).build()
    }

    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Nearest `valueOf` override on the class chain.
    pub fn value_of(&self) -> Option<&Function> {
        self.ancestors().find_map(|class| class.0.value_of.as_ref())
    }

    /// Nearest `toString` override on the class chain.
    pub fn to_string_fn(&self) -> Option<&Function> {
        self.ancestors().find_map(|class| class.0.to_string.as_ref())
    }

    /// This class followed by each parent in turn.
    pub fn ancestors(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.parent())
    }

    /// Reference identity; this is what makes two instances the same kind.
    pub fn ptr_eq(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[class {}]", self.0.name)
    }
}

/// Builder for [`Class`].
///
/// ```
/// use loose_deep_equal::{Class, Function, Value};
///
/// let version = Class::builder("Version")
///     .to_string(Function::constant("toString", Value::from("1.2.3")))
///     .build();
/// assert!(version.to_string_fn().is_some());
/// assert!(version.value_of().is_none());
/// ```
pub struct ClassBuilder {
    name: String,
    parent: Option<Class>,
    value_of: Option<Function>,
    to_string: Option<Function>,
}

impl ClassBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            value_of: None,
            to_string: None,
        }
    }

    pub fn extends(mut self, parent: &Class) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    pub fn value_of(mut self, function: Function) -> Self {
        self.value_of = Some(function);
        self
    }

    pub fn to_string(mut self, function: Function) -> Self {
        self.to_string = Some(function);
        self
    }

    pub fn build(self) -> Class {
        Class(Arc::new(ClassDef {
            name: self.name,
            parent: self.parent,
            value_of: self.value_of,
            to_string: self.to_string,
        }))
    }
}
