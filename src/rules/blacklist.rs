//! Blacklist rule - rejects passwords found in a common-password list.

use std::sync::Arc;

use crate::blacklist::Blacklist;
use crate::rule::Rule;

/// `notCommon`: the password is not in `blacklist` (case-insensitive).
pub fn not_common(blacklist: Arc<Blacklist>) -> Rule {
    Rule::builtin(
        "notCommon",
        "Password must not be a commonly used password".to_string(),
        move |pwd: &str| !blacklist.contains(pwd),
    )
}
