//! Value matcher - tests a declared value against a set/range pattern
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Pattern syntax:
//! - `A` - exact value
//! - `A|B|C` - any of the alternatives
//! - `A~C` - any value between `A` and `C` inclusive, compared as strings
//! - `A|F~H` - alternatives may themselves be ranges

/// Check if a value is inside a range alternative (`lo~hi`)
///
/// An alternative without `~` is an exact comparison. Bounds are compared
/// lexicographically, so `"10"` sorts before `"9"`. A range missing one of
/// its bounds matches nothing.
#[must_use]
pub fn is_in_range(value: &str, range: &str) -> bool {
    if !range.contains('~') {
        return value == range;
    }

    let mut bounds = range.split('~').filter(|b| !b.is_empty());
    match (bounds.next(), bounds.next()) {
        (Some(lo), Some(hi)) => lo <= value && value <= hi,
        _ => false,
    }
}

/// Check if a value satisfies a set pattern (`a|b|c`)
///
/// Each alternative may be a range. Empty alternatives are ignored.
#[must_use]
pub fn is_in_set(value: &str, set: &str) -> bool {
    if !set.contains('|') {
        return is_in_range(value, set);
    }

    set.split('|').filter(|alt| !alt.is_empty()).any(|alt| is_in_range(value, alt))
}
