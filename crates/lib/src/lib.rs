//!
//! loose-deep-equal: structural equality for dynamically-typed value trees.
//! A property missing on one side equals a property explicitly set to
//! `Undefined` on the other, while `Undefined` stays distinct from `Null`,
//! `false`, `0` and the empty string.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: Immutable trees of primitives, callables and shared compound nodes.
//! * **Objects (`value::Object`)**: Compound nodes with a nominal kind tag, own properties and kind-specific slots:
//!     * **Records**: Plain or bare key-value mappings, compared by key reconciliation.
//!     * **Arrays**: Positional sequences, compared element-wise; holes read as `Undefined`.
//!     * **Patterns**: Source text plus canonical flags, compared exactly.
//!     * **Dates and class instances**: Compared through their overridden `valueOf`/`toString`.
//! * **Comparator (`compare::equal`)**: The single entry point, recursing through both trees at once.
//!
//! ```
//! use loose_deep_equal::{Value, equal, record};
//!
//! assert!(equal(&record! { "a" => 1 }, &record! { "a" => 1, "b" => Value::Undefined }).unwrap());
//! assert!(!equal(&record! { "a" => Value::Null }, &record! { "a" => Value::Undefined }).unwrap());
//! ```

pub mod compare;
pub mod errors;
pub mod value;

pub use compare::equal;
pub use errors::{Behavior, Error, Exception};
pub use value::{Class, ClassBuilder, Function, Kind, Object, ObjectBuilder, Pattern, Property, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
