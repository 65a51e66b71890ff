//! Length rules. Lengths are counted in characters, not bytes.

use crate::rule::Rule;

/// `minLength`: at least `min` characters.
pub fn min_length(min: usize) -> Rule {
    Rule::builtin(
        "minLength",
        format!("Password must be at least {} characters", min),
        move |pwd: &str| pwd.chars().count() >= min,
    )
}

/// `longerThan`: strictly more than `len` characters.
pub fn longer_than(len: usize) -> Rule {
    Rule::builtin(
        "longerThan",
        format!("Password must be longer than {} characters", len),
        move |pwd: &str| pwd.chars().count() > len,
    )
}
