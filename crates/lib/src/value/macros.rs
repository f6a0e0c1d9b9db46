//! Construction macros for value trees.

/// Builds a plain record [`Value`](crate::Value).
///
/// Values go through `Into<Value>`, so literals, nested `record!` calls and
/// any other convertible expression can be mixed.
///
/// ```
/// use loose_deep_equal::{Value, record};
///
/// let v = record! {
///     "a" => 1,
///     "b" => record! { "c" => "two" },
///     "d" => Value::Undefined,
/// };
/// assert_eq!(v.as_object().unwrap().keys().count(), 3);
///
/// let empty = record! {};
/// assert_eq!(empty.as_object().unwrap().keys().count(), 0);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::from($crate::Object::record().build())
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let builder = $crate::Object::record();
        $(
            let builder = builder.property($key, $value);
        )+
        $crate::Value::from(builder.build())
    }};
}
