//! Rule model - a named predicate plus the message shown when it fails.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{PredicateFailure, RuleError};

/// A deterministic, side-effect-free check over a candidate value.
///
/// Implemented for every `Fn(&str) -> bool + Send + Sync`, so plain closures
/// and function items can be used directly.
pub trait Predicate: Send + Sync {
    /// Returns `true` if `value` satisfies the check.
    fn evaluate(&self, value: &str) -> bool;

    /// Fallible form of [`Predicate::evaluate`].
    ///
    /// Predicates that can fail override this; the validator always calls it.
    fn try_evaluate(&self, value: &str) -> Result<bool, String> {
        Ok(self.evaluate(value))
    }
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn evaluate(&self, value: &str) -> bool {
        self(value)
    }
}

/// Adapter for predicates that report errors instead of a plain boolean.
struct Fallible<F>(F);

impl<F, E> Predicate for Fallible<F>
where
    F: Fn(&str) -> Result<bool, E> + Send + Sync,
    E: fmt::Display,
{
    fn evaluate(&self, value: &str) -> bool {
        self.try_evaluate(value).unwrap_or(false)
    }

    fn try_evaluate(&self, value: &str) -> Result<bool, String> {
        (self.0)(value).map_err(|e| e.to_string())
    }
}

/// The atomic unit of validation.
///
/// Cloning a rule is cheap: the predicate is shared.
#[derive(Clone)]
pub struct Rule {
    name: String,
    message: String,
    predicate: Arc<dyn Predicate>,
}

impl Rule {
    /// Creates a rule from a closure.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidRule`] if `name` is empty or blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwd_rules::Rule;
    ///
    /// let rule = Rule::new(
    ///     "customRule",
    ///     "Password must be longer than 10 characters",
    ///     |pwd: &str| pwd.chars().count() > 10,
    /// )
    /// .unwrap();
    /// assert!(!rule.evaluate("short"));
    /// ```
    pub fn new<F>(
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: F,
    ) -> Result<Self, RuleError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(name, message, predicate)
    }

    /// Creates a rule whose predicate may fail.
    ///
    /// An `Err` from the predicate marks the rule as failed for that value and
    /// is reported as a [`RulePredicateError`](crate::RulePredicateError).
    pub fn try_new<F, E>(
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: F,
    ) -> Result<Self, RuleError>
    where
        F: Fn(&str) -> Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display + 'static,
    {
        Self::from_predicate(name, message, Fallible(predicate))
    }

    /// Creates a rule from any [`Predicate`] implementation.
    pub fn from_predicate<P>(
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: P,
    ) -> Result<Self, RuleError>
    where
        P: Predicate + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RuleError::InvalidRule);
        }
        Ok(Self {
            name,
            message: message.into(),
            predicate: Arc::new(predicate),
        })
    }

    /// Built-in rules have constant, non-empty names.
    pub(crate) fn builtin<F>(name: &'static str, message: String, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            message,
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluates the rule, treating any predicate failure as `false`.
    pub fn evaluate(&self, value: &str) -> bool {
        self.check(value).unwrap_or(false)
    }

    /// Runs the predicate, isolating errors and panics.
    pub(crate) fn check(&self, value: &str) -> Result<bool, PredicateFailure> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.predicate.try_evaluate(value))) {
            Ok(Ok(passed)) => Ok(passed),
            Ok(Err(reason)) => Err(PredicateFailure::Failed(reason)),
            Err(payload) => Err(PredicateFailure::Panicked(panic_message(payload.as_ref()))),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new_valid() {
        let rule = Rule::new("minLength", "At least 8 characters", |v: &str| v.len() >= 8).unwrap();
        assert_eq!(rule.name(), "minLength");
        assert_eq!(rule.message(), "At least 8 characters");
        assert!(rule.evaluate("12345678"));
        assert!(!rule.evaluate("1234567"));
    }

    #[test]
    fn test_rule_empty_name_rejected() {
        let result = Rule::new("", "message", |_: &str| true);
        assert!(matches!(result, Err(RuleError::InvalidRule)));
    }

    #[test]
    fn test_rule_blank_name_rejected() {
        let result = Rule::new("   ", "message", |_: &str| true);
        assert!(matches!(result, Err(RuleError::InvalidRule)));
    }

    #[test]
    fn test_fallible_rule_error_is_reported() {
        let rule = Rule::try_new("strict", "Strict check", |v: &str| {
            if v.is_empty() {
                Err("empty input")
            } else {
                Ok(true)
            }
        })
        .unwrap();

        assert_eq!(rule.check("abc"), Ok(true));
        assert_eq!(
            rule.check(""),
            Err(PredicateFailure::Failed("empty input".to_string()))
        );
        assert!(!rule.evaluate(""));
    }

    #[test]
    fn test_panicking_rule_is_caught() {
        let rule = Rule::new("explodes", "Never works", |_: &str| panic!("kaboom")).unwrap();
        assert_eq!(
            rule.check("anything"),
            Err(PredicateFailure::Panicked("kaboom".to_string()))
        );
        assert!(!rule.evaluate("anything"));
    }

    #[test]
    fn test_custom_predicate_impl() {
        struct Exactly(usize);

        impl Predicate for Exactly {
            fn evaluate(&self, value: &str) -> bool {
                value.chars().count() == self.0
            }
        }

        let rule = Rule::from_predicate("exactly3", "Exactly 3 characters", Exactly(3)).unwrap();
        assert!(rule.evaluate("abc"));
        assert!(!rule.evaluate("abcd"));
    }

    #[test]
    fn test_rule_debug_hides_predicate() {
        let rule = Rule::new("hasDigit", "Needs a digit", |v: &str| v.chars().any(|c| c.is_ascii_digit())).unwrap();
        let debug = format!("{:?}", rule);
        assert!(debug.contains("hasDigit"));
        assert!(debug.contains(".."));
    }
}
