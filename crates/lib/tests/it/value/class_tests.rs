//! Class and Function integration tests

use loose_deep_equal::{Class, Function, Object, Value};

use crate::helpers::*;

#[test]
fn test_function_call_receives_object() {
    let getter = Function::new("describe", |this| {
        Ok(Value::from(format!("{} keys", this.keys().count())))
    });
    let obj = Object::record().property("a", 1).property("b", 2).build();
    assert_eq!(getter.call(&obj).unwrap(), "2 keys");
    assert_eq!(getter.name(), "describe");
}

#[test]
fn test_throwing_function() {
    let f = Function::throwing("boom", "BOOM!");
    let err = f.call(&Object::record().build()).unwrap_err();
    assert_eq!(err.message(), "BOOM!");
}

#[test]
fn test_class_behaviour_invocation() {
    let class = money_class();
    let price = money(&class, 19.99, "USD");
    let obj = price.as_object().unwrap();
    let value_of = class.value_of().unwrap();
    assert_eq!(value_of.call(obj).unwrap(), 1999.0);
    assert!(class.to_string_fn().is_none());

    let vclass = version_class();
    let v = version(&vclass, 1, 2, 3);
    let rendered = vclass.to_string_fn().unwrap().call(v.as_object().unwrap());
    assert_eq!(rendered.unwrap(), "1.2.3");
}

#[test]
fn test_subclass_inherits_overrides() {
    let base = money_class();
    let child = Class::builder("Salary").extends(&base).build();
    assert_eq!(child.parent().map(Class::name), Some("Money"));
    assert!(child.value_of().is_some());
    assert_ne!(child, base);
}
