//! Exceptions raised by user behaviour during comparison

use loose_deep_equal::{Behavior, Class, Exception, Function, Object, Value, equal, record};

fn throwing_getter_record(key: &str) -> Value {
    Object::record()
        .property("a", 1)
        .accessor(key, Function::throwing("get", "getter exploded"))
        .build()
        .into()
}

#[test]
fn test_getter_raises_when_key_is_compared() {
    let a = throwing_getter_record("b");
    let b = record! { "a" => 1, "b" => 2 };

    let err = equal(&a, &b).unwrap_err();
    assert!(err.is_thrown());
    assert_eq!(err.key(), Some("b"));
    assert_eq!(
        err.behavior(),
        Some(&Behavior::Getter { key: "b".to_string() })
    );
    assert_eq!(err.exception().unwrap().message(), "getter exploded");
}

#[test]
fn test_getter_not_read_after_mismatch() {
    // Keys are visited last to first, so "z" is compared before the getter on "b"
    let a: Value = Object::record()
        .accessor("b", Function::throwing("get", "getter exploded"))
        .property("z", 1)
        .build()
        .into();
    let b = record! { "b" => 2, "z" => 2 };
    assert!(!equal(&a, &b).unwrap());
}

#[test]
fn test_getter_not_read_across_kinds() {
    let a = throwing_getter_record("b");
    assert!(!equal(&a, &Value::array([1, 2])).unwrap());
    assert!(!equal(&a, &Value::Null).unwrap());
}

#[test]
fn test_getter_value_is_compared() {
    let a: Value = Object::record()
        .accessor("x", Function::constant("get", Value::from(5)))
        .build()
        .into();
    assert!(equal(&a, &record! { "x" => 5 }).unwrap());
    assert!(!equal(&a, &record! { "x" => 6 }).unwrap());
}

#[test]
fn test_value_of_exception_propagates() {
    let class = Class::builder("Broken")
        .value_of(Function::throwing("valueOf", "no primitive"))
        .build();
    let a: Value = Object::instance(&class).build().into();
    let b: Value = Object::instance(&class).build().into();

    let err = equal(&a, &b).unwrap_err();
    assert_eq!(err.behavior(), Some(&Behavior::ValueOf));
    assert_eq!(err.key(), None);
    assert_eq!(err.exception().unwrap().message(), "no primitive");
}

#[test]
fn test_to_string_exception_propagates() {
    let a: Value = Object::record()
        .property("toString", Function::throwing("toString", "no text"))
        .build()
        .into();
    let err = equal(&a, &record! {}).unwrap_err();
    assert_eq!(err.behavior(), Some(&Behavior::ToString));
}

#[test]
fn test_exception_payload_survives() {
    let payload = record! { "code" => 7 };
    let thrown = payload.clone();
    let class = Class::builder("Payload")
        .value_of(Function::new("valueOf", move |_| {
            Err(Exception::with_payload("custom", thrown.clone()))
        }))
        .build();
    let a: Value = Object::instance(&class).build().into();
    let b: Value = Object::instance(&class).build().into();

    let err = equal(&a, &b).unwrap_err();
    let recovered = err.exception().unwrap().payload().unwrap();
    assert!(recovered.strict_equals(&payload));
}

#[test]
fn test_error_display() {
    let err = equal(&throwing_getter_record("b"), &record! { "a" => 1, "b" => 2 }).unwrap_err();
    assert_eq!(
        err.to_string(),
        "getter for `b` raised an exception: getter exploded"
    );
}

#[test]
fn test_identical_objects_never_invoke_behaviour() {
    let a = throwing_getter_record("b");
    assert!(equal(&a, &a.clone()).unwrap());
}
