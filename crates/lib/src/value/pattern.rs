//! Text-matching patterns.
//!
//! A [`Pattern`] is the internal slot of a `RegExp` object: its source text and
//! its mode flags. Flags are canonicalised on construction so equality is a
//! plain field comparison.

use std::fmt;

use crate::{Error, Result};

/// Flag characters in canonical order.
pub const FLAG_ORDER: &str = "dgimsuvy";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    flags: String,
}

impl Pattern {
    /// Creates a pattern, rejecting unknown or repeated flags.
    ///
    /// ```
    /// use loose_deep_equal::value::Pattern;
    ///
    /// let p = Pattern::new("ab+c", "ig").unwrap();
    /// assert_eq!(p.flags(), "gi");
    /// assert!(Pattern::new("x", "gg").is_err());
    /// assert!(Pattern::new("x", "q").is_err());
    /// ```
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self> {
        let mut seen = [false; FLAG_ORDER.len()];
        for flag in flags.chars() {
            let slot = FLAG_ORDER
                .find(flag)
                .ok_or_else(|| Error::InvalidPatternFlags {
                    flags: flags.to_string(),
                })?;
            if seen[slot] {
                return Err(Error::InvalidPatternFlags {
                    flags: flags.to_string(),
                });
            }
            seen[slot] = true;
        }

        let flags = FLAG_ORDER
            .chars()
            .zip(seen)
            .filter_map(|(flag, set)| set.then_some(flag))
            .collect();

        let source = source.into();
        Ok(Self {
            // An empty source renders as the empty non-capturing group
            source: if source.is_empty() {
                "(?:)".to_string()
            } else {
                source
            },
            flags,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flags in canonical order.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
