//! Key reconciliation between two records.
//!
//! Own keys and the own-property test are read straight from the record's
//! storage. A record can hold a key named `hasOwnProperty`, `constructor` or
//! `__proto__`; that key is data like any other and is never consulted as
//! behaviour.

use std::{borrow::Cow, collections::BTreeSet};

use crate::{Result, value::Object, value::Value};

use super::{UNDEFINED, equal};

/// Own enumerable keys of a record.
pub fn own_keys(object: &Object) -> Vec<&str> {
    object.keys().collect()
}

/// Whether `key` is an own property of `object`, enumerable or not.
pub fn has_own(object: &Object, key: &str) -> bool {
    object.own_property(key).is_some()
}

/// Reads `key`, resolving a missing own property to the absence marker.
fn resolve<'a>(object: &'a Object, key: &str) -> Result<Cow<'a, Value>> {
    Ok(object
        .get(key)?
        .unwrap_or(Cow::Borrowed(&UNDEFINED)))
}

fn equal_at(a: &Object, b: &Object, key: &str) -> Result<bool> {
    let left = resolve(a, key)?;
    let right = resolve(b, key)?;
    let same = equal(&left, &right)?;
    if !same {
        tracing::trace!(key, "Record values differ");
    }
    Ok(same)
}

/// Whether `key` is an own enumerable property of `object`.
fn lists(object: &Object, key: &str) -> bool {
    object
        .own_property(key)
        .is_some_and(|property| property.is_enumerable())
}

/// Compares two records key by key.
///
/// When both sides list exactly the same keys, only `a`'s keys need visiting.
/// Otherwise every key either side lists is visited, reading the other side
/// through [`Object::get`] so a hidden own property still supplies its value
/// and a missing key reads as [`Value::Undefined`].
pub(crate) fn reconcile(a: &Object, b: &Object) -> Result<bool> {
    let a_keys = own_keys(a);
    let b_count = b.keys().count();

    if a_keys.len() == b_count && a_keys.iter().all(|key| lists(b, key)) {
        for key in a_keys.iter().rev() {
            if !equal_at(a, b, key)? {
                return Ok(false);
            }
        }
        return Ok(true);
    }

    tracing::trace!(
        left = a_keys.len(),
        right = b_count,
        "Key sets differ, reconciling union"
    );

    for key in a_keys.iter().rev() {
        if !equal_at(a, b, key)? {
            return Ok(false);
        }
    }

    // Keys b lists that a does not, even if a holds them as hidden properties
    let listed_on_a: BTreeSet<&str> = a_keys.into_iter().collect();
    for key in b.keys().filter(|key| !listed_on_a.contains(key)) {
        if !equal_at(a, b, key)? {
            return Ok(false);
        }
    }

    Ok(true)
}
