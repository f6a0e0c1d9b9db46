//! Records carrying keys named after internal helpers

use loose_deep_equal::{Function, Object, Value, equal, record};

use crate::helpers::*;

#[test]
fn test_has_own_property_as_string() {
    let malicious = record! { "x" => 1, "hasOwnProperty" => "gotcha!" };
    let normal = record! {
        "x" => 1,
        "hasOwnProperty" => "gotcha!",
        "y" => Value::Undefined,
    };
    assert_loose_eq(&malicious, &normal);
}

#[test]
fn test_has_own_property_compared_as_data() {
    let a = record! { "x" => 1, "hasOwnProperty" => "a" };
    let b = record! { "x" => 1, "hasOwnProperty" => "b" };
    let c = record! { "x" => 1, "hasOwnProperty" => "a" };
    assert_loose_ne(&a, &b);
    assert_loose_eq(&a, &c);
}

#[test]
fn test_throwing_function_property_is_never_invoked() {
    let boom = Function::throwing("hasOwnProperty", "BOOM!");
    let a = record! { "x" => 1, "hasOwnProperty" => boom.clone() };
    let b = record! { "x" => 1, "hasOwnProperty" => boom };
    // Same function reference on both sides: equal, and nothing raised
    assert!(equal(&a, &b).unwrap());

    let normal = record! { "x" => 1, "y" => Value::Undefined };
    assert!(!equal(&a, &normal).unwrap());
    assert!(!equal(&normal, &a).unwrap());
}

#[test]
fn test_distinct_throwing_functions_are_unequal() {
    let a = record! { "hasOwnProperty" => Function::throwing("f", "BOOM!") };
    let b = record! { "hasOwnProperty" => Function::throwing("f", "BOOM!") };
    assert_loose_ne(&a, &b);
}

#[test]
fn test_constructor_key_is_data() {
    assert_loose_ne(&record! { "constructor" => "x" }, &record! {});
    assert_loose_eq(
        &record! { "constructor" => record! { "prototype" => record! { "isAdmin" => true } } },
        &record! { "constructor" => record! { "prototype" => record! { "isAdmin" => true } } },
    );
    assert_loose_eq(
        &record! { "constructor" => Value::Undefined },
        &record! {},
    );
}

#[test]
fn test_proto_key_is_data() {
    let a = record! { "__proto__" => record! { "foo" => "bar" } };
    let b = record! { "__proto__" => record! { "foo" => "baz" } };
    let c = record! { "__proto__" => record! { "foo" => "bar" } };
    assert_loose_ne(&a, &b);
    assert_loose_eq(&a, &c);
    assert_loose_ne(&a, &record! {});
}

#[test]
fn test_helper_named_keys_on_bare_records() {
    let a = Value::bare_record([
        ("hasOwnProperty", Value::from("x")),
        ("own property test", Value::from(1)),
    ]);
    let b = Value::bare_record([
        ("hasOwnProperty", Value::from("x")),
        ("own property test", Value::from(1)),
        ("extra", Value::Undefined),
    ]);
    assert_loose_eq(&a, &b);
}

#[test]
fn test_named_accessor_on_array_is_never_read() {
    let guarded: Value = Object::array()
        .element(1)
        .accessor("boom", Function::throwing("get", "never"))
        .build()
        .into();
    assert_loose_eq(&guarded, &Value::array([1]));
}
