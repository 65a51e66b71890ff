//! Error types for rule construction and evaluation.

use thiserror::Error;

/// Errors raised while building a [`Rule`](crate::Rule) or a
/// [`RuleSet`](crate::RuleSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid rule: name must not be empty")]
    InvalidRule,
    #[error("Duplicate rule name: {0}")]
    DuplicateRuleName(String),
}

/// What went wrong inside a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateFailure {
    /// A fallible predicate returned an error.
    Failed(String),
    /// The predicate panicked.
    Panicked(String),
}

/// A predicate could not produce a verdict for a value.
///
/// The rule it belongs to is reported as failed and the validation pass
/// carries on with the next rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulePredicateError {
    #[error("Rule '{rule_name}' predicate failed: {reason}")]
    Failed { rule_name: String, reason: String },
    #[error("Rule '{rule_name}' predicate panicked: {message}")]
    Panicked { rule_name: String, message: String },
}

impl RulePredicateError {
    pub(crate) fn new(rule_name: &str, failure: PredicateFailure) -> Self {
        let rule_name = rule_name.to_string();
        match failure {
            PredicateFailure::Failed(reason) => Self::Failed { rule_name, reason },
            PredicateFailure::Panicked(message) => Self::Panicked { rule_name, message },
        }
    }

    /// Name of the rule whose predicate failed.
    pub fn rule_name(&self) -> &str {
        match self {
            Self::Failed { rule_name, .. } | Self::Panicked { rule_name, .. } => rule_name,
        }
    }
}

/// Invalid value in an environment variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Caller-side submission was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fix the password requirements ({failed} unmet)")]
    Rejected { failed: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_error_keeps_rule_name() {
        let err = RulePredicateError::new("hasDigit", PredicateFailure::Failed("boom".into()));
        assert_eq!(err.rule_name(), "hasDigit");
        assert_eq!(err.to_string(), "Rule 'hasDigit' predicate failed: boom");

        let err = RulePredicateError::new("minLength", PredicateFailure::Panicked("oops".into()));
        assert_eq!(err.rule_name(), "minLength");
        assert!(matches!(err, RulePredicateError::Panicked { .. }));
    }

    #[test]
    fn test_duplicate_name_message() {
        let err = RuleError::DuplicateRuleName("minLength".into());
        assert_eq!(err.to_string(), "Duplicate rule name: minLength");
    }
}
