//! Error types for value construction and comparison.
//!
//! Comparison itself never fails on shape or type mismatches; those are plain
//! `false` results. The only runtime failure is an [`Exception`] raised by a
//! user-supplied behaviour (an accessor, `valueOf` or `toString`) that the
//! comparator had to invoke. It is surfaced untouched inside [`Error::Thrown`].

use std::fmt;

use thiserror::Error;

use crate::value::Value;

/// A failure raised by user-supplied behaviour.
///
/// Getters and `valueOf`/`toString` overrides return `Result<Value, Exception>`.
/// The comparator never catches these; it wraps them in [`Error::Thrown`] so the
/// caller can tell which behaviour raised and still recover the original value.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Exception {
    message: String,
    payload: Option<Value>,
}

impl Exception {
    /// Creates an exception carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            payload: None,
        }
    }

    /// Creates an exception carrying an arbitrary thrown value.
    pub fn with_payload(message: impl Into<String>, payload: Value) -> Self {
        Self {
            message: message.into(),
            payload: Some(payload),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The thrown value, if the behaviour attached one.
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

/// The user-supplied behaviour that was running when an [`Exception`] was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    /// An overridden reduce-to-primitive (`valueOf`)
    ValueOf,
    /// An overridden render-as-text (`toString`)
    ToString,
    /// An accessor property read while comparing a record key
    Getter { key: String },
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::ValueOf => write!(f, "valueOf"),
            Behavior::ToString => write!(f, "toString"),
            Behavior::Getter { key } => write!(f, "getter for `{key}`"),
        }
    }
}

/// Common error type for the crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// User-supplied behaviour raised while the comparator was running
    #[error("{behavior} raised an exception: {source}")]
    Thrown {
        behavior: Behavior,
        #[source]
        source: Exception,
    },

    /// A pattern was built with an unknown or repeated flag character
    #[error("Invalid pattern flags: {flags:?}")]
    InvalidPatternFlags { flags: String },
}

impl Error {
    pub(crate) fn thrown(behavior: Behavior, source: Exception) -> Self {
        Error::Thrown { behavior, source }
    }

    /// Check if this error was raised by user-supplied behaviour
    pub fn is_thrown(&self) -> bool {
        matches!(self, Error::Thrown { .. })
    }

    /// Check if this error came from pattern construction
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, Error::InvalidPatternFlags { .. })
    }

    /// Get the behaviour that raised, if this is a thrown error
    pub fn behavior(&self) -> Option<&Behavior> {
        match self {
            Error::Thrown { behavior, .. } => Some(behavior),
            _ => None,
        }
    }

    /// Get the original exception, if this is a thrown error
    pub fn exception(&self) -> Option<&Exception> {
        match self {
            Error::Thrown { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Get the record key whose getter raised, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Thrown {
                behavior: Behavior::Getter { key },
                ..
            } => Some(key),
            _ => None,
        }
    }
}
