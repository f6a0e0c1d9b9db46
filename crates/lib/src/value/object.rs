//! Compound values.
//!
//! An [`Object`] is an immutable, reference-counted node of a value tree. It
//! carries a nominal [`Kind`] tag, a map of own [`Property`] entries, and the
//! internal slots its kind requires (array elements, a pattern, a time value).
//!
//! Objects are built once through an [`ObjectBuilder`] and never mutated
//! afterwards, so a value tree can be shared across threads and can not contain
//! reference cycles.

use std::{borrow::Cow, collections::BTreeMap, fmt, sync::Arc};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    Result,
    errors::{Behavior, Error},
};

use super::{Class, Function, Pattern, Value};

/// The nominal category an object reports as its constructing origin.
///
/// Two objects with different kinds are never equal, whatever their contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Ordinary record with the universal default behaviour
    Object,
    /// Record with no inherited behaviour at all
    Bare,
    /// Ordered, length-bearing sequence
    Array,
    /// Text-matching pattern
    RegExp,
    /// Point in time
    Date,
    /// Instance of a user-defined class
    Instance(Class),
}

impl Kind {
    pub fn name(&self) -> &str {
        match self {
            Kind::Object => "Object",
            Kind::Bare => "null-prototype",
            Kind::Array => "Array",
            Kind::RegExp => "RegExp",
            Kind::Date => "Date",
            Kind::Instance(class) => class.name(),
        }
    }
}

/// An own property of an object.
#[derive(Debug, Clone)]
pub enum Property {
    /// A stored value
    Data { value: Value, enumerable: bool },
    /// A computed value, produced by invoking `getter` on every read
    Accessor { getter: Function, enumerable: bool },
}

impl Property {
    pub fn is_enumerable(&self) -> bool {
        match self {
            Property::Data { enumerable, .. } | Property::Accessor { enumerable, .. } => {
                *enumerable
            }
        }
    }

    /// The stored value of a data property.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Property::Data { value, .. } => Some(value),
            Property::Accessor { .. } => None,
        }
    }
}

/// Largest distance from the epoch a date can represent, in milliseconds.
const MAX_TIME_MILLIS: f64 = 8.64e15;

fn time_clip(millis: f64) -> f64 {
    if !millis.is_finite() || millis.abs() > MAX_TIME_MILLIS {
        return f64::NAN;
    }
    // Adding zero turns -0 into +0
    millis.trunc() + 0.0
}

/// Kind-specific internal state.
#[derive(Debug, Clone)]
pub(crate) enum Internal {
    None,
    /// `None` entries are holes
    Elements(Vec<Option<Value>>),
    Pattern(Pattern),
    /// Milliseconds since the Unix epoch, NaN for an invalid date
    Time(f64),
}

#[derive(Debug)]
struct ObjectData {
    kind: Kind,
    properties: BTreeMap<String, Property>,
    internal: Internal,
}

/// Shared handle to an immutable compound value.
///
/// Cloning is cheap and preserves identity; [`Object::ptr_eq`] is the
/// reference equality the comparator short-circuits on.
#[derive(Clone)]
pub struct Object(Arc<ObjectData>);

impl Object {
    /// Builder for an ordinary record.
    pub fn record() -> ObjectBuilder {
        ObjectBuilder::new(Kind::Object, Internal::None)
    }

    /// Builder for a record with no inherited behaviour.
    pub fn bare() -> ObjectBuilder {
        ObjectBuilder::new(Kind::Bare, Internal::None)
    }

    /// Builder for an array; add elements with [`ObjectBuilder::element`].
    pub fn array() -> ObjectBuilder {
        ObjectBuilder::new(Kind::Array, Internal::Elements(Vec::new()))
    }

    /// Builder for an instance of a user-defined class.
    pub fn instance(class: &Class) -> ObjectBuilder {
        ObjectBuilder::new(Kind::Instance(class.clone()), Internal::None)
    }

    /// Builder for a pattern object.
    pub fn regexp(pattern: Pattern) -> ObjectBuilder {
        ObjectBuilder::new(Kind::RegExp, Internal::Pattern(pattern))
    }

    /// Builder for a date holding milliseconds since the epoch.
    ///
    /// The time value is truncated toward zero. Values that are not finite or
    /// lie beyond ±8.64e15 ms make an invalid date (NaN time).
    pub fn date_millis(millis: f64) -> ObjectBuilder {
        ObjectBuilder::new(Kind::Date, Internal::Time(time_clip(millis)))
    }

    /// Builder for a date at the given instant.
    pub fn date(instant: DateTime<Utc>) -> ObjectBuilder {
        Self::date_millis(instant.timestamp_millis() as f64)
    }

    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// All own properties, enumerable or not, in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.0.properties.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Own enumerable keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties()
            .filter(|(_, property)| property.is_enumerable())
            .map(|(key, _)| key)
    }

    pub fn own_property(&self, key: &str) -> Option<&Property> {
        self.0.properties.get(key)
    }

    /// Reads an own property, invoking its getter if it is an accessor.
    ///
    /// Returns `Ok(None)` when the key is not an own property. A getter that
    /// raises yields [`Error::Thrown`].
    pub fn get(&self, key: &str) -> Result<Option<Cow<'_, Value>>> {
        match self.0.properties.get(key) {
            None => Ok(None),
            Some(Property::Data { value, .. }) => Ok(Some(Cow::Borrowed(value))),
            Some(Property::Accessor { getter, .. }) => match getter.call(self) {
                Ok(value) => Ok(Some(Cow::Owned(value))),
                Err(exception) => {
                    tracing::debug!(key, getter = getter.name(), "Accessor raised");
                    Err(Error::thrown(
                        Behavior::Getter {
                            key: key.to_string(),
                        },
                        exception,
                    ))
                }
            },
        }
    }

    /// An own data property holding a function, used for per-object overrides.
    pub(crate) fn own_function(&self, key: &str) -> Option<&Function> {
        match self.own_property(key)?.value()? {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub(crate) fn internal(&self) -> &Internal {
        &self.0.internal
    }

    /// Array elements, `None` marking a hole.
    pub fn elements(&self) -> Option<&[Option<Value>]> {
        match &self.0.internal {
            Internal::Elements(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        match &self.0.internal {
            Internal::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// Time value of a date in milliseconds since the epoch.
    pub fn time(&self) -> Option<f64> {
        match self.0.internal {
            Internal::Time(millis) => Some(millis),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.0.kind, Kind::Array)
    }

    /// Renders a date's time value the way its built-in `toString` does.
    pub(crate) fn render_time(millis: f64) -> String {
        if !millis.is_finite() {
            return "Invalid Date".to_string();
        }
        match DateTime::<Utc>::from_timestamp_millis(millis as i64) {
            Some(instant) => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            None => "Invalid Date".to_string(),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.internal {
            Internal::Elements(elements) => {
                write!(f, "[")?;
                for (i, slot) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match slot {
                        Some(value) => write!(f, "{value:?}")?,
                        None => write!(f, "<hole>")?,
                    }
                }
                return write!(f, "]");
            }
            Internal::Pattern(pattern) => return write!(f, "{pattern}"),
            Internal::Time(millis) => return write!(f, "{}", Self::render_time(*millis)),
            Internal::None => {}
        }

        match &self.0.kind {
            Kind::Bare => write!(f, "[null-prototype] ")?,
            Kind::Instance(class) => write!(f, "{} ", class.name())?,
            _ => {}
        }
        write!(f, "{{")?;
        for (i, (key, property)) in self.properties().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match property {
                Property::Data { value, .. } => write!(f, " {key}: {value:?}")?,
                Property::Accessor { .. } => write!(f, " {key}: [Getter]")?,
            }
        }
        if self.0.properties.is_empty() {
            write!(f, "}}")
        } else {
            write!(f, " }}")
        }
    }
}

/// Builder for [`Object`].
///
/// ```
/// use loose_deep_equal::{Object, Value};
///
/// let point = Object::record()
///     .property("x", 1)
///     .property("y", Value::Undefined)
///     .build();
/// assert_eq!(point.keys().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
pub struct ObjectBuilder {
    kind: Kind,
    properties: BTreeMap<String, Property>,
    internal: Internal,
    next_index: usize,
}

impl ObjectBuilder {
    fn new(kind: Kind, internal: Internal) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
            internal,
            next_index: 0,
        }
    }

    /// Sets an enumerable data property, replacing any previous one.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(
            key.into(),
            Property::Data {
                value: value.into(),
                enumerable: true,
            },
        );
        self
    }

    /// Sets a non-enumerable data property.
    pub fn hidden(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(
            key.into(),
            Property::Data {
                value: value.into(),
                enumerable: false,
            },
        );
        self
    }

    /// Sets an enumerable accessor property.
    pub fn accessor(mut self, key: impl Into<String>, getter: Function) -> Self {
        self.properties.insert(
            key.into(),
            Property::Accessor {
                getter,
                enumerable: true,
            },
        );
        self
    }

    /// Appends an element.
    ///
    /// On arrays this grows the sequence. On any other kind it sets the next
    /// index-named property ("0", "1", ...), which is how array-like records
    /// look.
    pub fn element(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        if let Internal::Elements(elements) = &mut self.internal {
            elements.push(Some(value));
        } else {
            self.properties.insert(
                self.next_index.to_string(),
                Property::Data {
                    value,
                    enumerable: true,
                },
            );
        }
        self.next_index += 1;
        self
    }

    /// Appends a hole. Outside arrays this only advances the index.
    pub fn hole(mut self) -> Self {
        if let Internal::Elements(elements) = &mut self.internal {
            elements.push(None);
        }
        self.next_index += 1;
        self
    }

    pub fn elements<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().fold(self, |builder, v| builder.element(v))
    }

    pub fn build(self) -> Object {
        Object(Arc::new(ObjectData {
            kind: self.kind,
            properties: self.properties,
            internal: self.internal,
        }))
    }
}
