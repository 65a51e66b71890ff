//! Built-in rules
//!
//! Each constructor returns a ready-made [`Rule`](crate::Rule) with a fixed
//! name, usable on its own or through [`RuleSet`](crate::RuleSet).

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::not_common;
pub use length::{longer_than, min_length};
pub use pattern::{no_repetition, no_sequence};
pub use variety::{has_digit, has_lowercase, has_special_char, has_uppercase};
