//! Validator - evaluates a value against every rule of a rule set.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::RulePredicateError;
use crate::rule_set::RuleSet;

#[cfg(feature = "async")]
use crate::aggregate::{aggregate, Verdict};

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE_DELAY: std::time::Duration = std::time::Duration::from_millis(300);

/// Outcome of one rule for one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub rule_name: String,
    pub message: String,
    pub is_valid: bool,
}

/// Results of a validation pass plus the predicate failures met along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// One entry per rule, in rule order.
    pub results: Vec<ValidationResult>,
    /// Rules whose predicate failed; each is also present in `results` as
    /// invalid.
    pub errors: Vec<RulePredicateError>,
}

/// Validates `value` against every rule in `rule_set`.
///
/// Returns exactly one result per rule, in rule order. A predicate that fails
/// or panics marks its rule invalid without stopping the pass; use
/// [`validate_detailed`] to see those failures.
///
/// # Example
///
/// ```rust
/// use pwd_rules::{validate, Rule, RuleSet};
///
/// let rules = RuleSet::new([
///     Rule::new("minLength", "At least 8 characters", |v: &str| v.chars().count() >= 8).unwrap(),
///     Rule::new("hasDigit", "At least one digit", |v: &str| v.chars().any(|c| c.is_ascii_digit())).unwrap(),
/// ])
/// .unwrap();
///
/// let results = validate(&rules, "abcdefgh");
/// assert!(results[0].is_valid);
/// assert!(!results[1].is_valid);
/// ```
pub fn validate(rule_set: &RuleSet, value: &str) -> Vec<ValidationResult> {
    validate_detailed(rule_set, value).results
}

/// Like [`validate`], also returning the predicate failures.
pub fn validate_detailed(rule_set: &RuleSet, value: &str) -> ValidationReport {
    let mut report = ValidationReport {
        results: Vec::with_capacity(rule_set.len()),
        errors: Vec::new(),
    };

    for rule in rule_set {
        let is_valid = match rule.check(value) {
            Ok(passed) => passed,
            Err(failure) => {
                let error = RulePredicateError::new(rule.name(), failure);
                #[cfg(feature = "tracing")]
                tracing::warn!("{}", error);
                report.errors.push(error);
                false
            }
        };

        report.results.push(ValidationResult {
            rule_name: rule.name().to_string(),
            message: rule.message().to_string(),
            is_valid,
        });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Validated against {} rules: {} passed, {} predicate errors",
        report.results.len(),
        report.results.iter().filter(|r| r.is_valid).count(),
        report.errors.len()
    );

    report
}

/// Validates a password held in a [`SecretString`].
pub fn validate_secret(rule_set: &RuleSet, password: &SecretString) -> Vec<ValidationResult> {
    validate(rule_set, password.expose_secret())
}

/// A debounced evaluation, tagged with the generation of the request that
/// produced it.
#[cfg(feature = "async")]
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub generation: u64,
    pub verdict: Verdict,
    pub results: Vec<ValidationResult>,
    /// Predicate failures met during this evaluation.
    pub errors: Vec<RulePredicateError>,
}

/// Async version that waits [`DEBOUNCE_DELAY`], then sends the evaluation via
/// channel unless `token` was cancelled in the meantime.
#[cfg(feature = "async")]
pub async fn validate_tx(
    rule_set: RuleSet,
    password: SecretString,
    generation: u64,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    validate_after(DEBOUNCE_DELAY, rule_set, password, generation, token, tx).await
}

#[cfg(feature = "async")]
pub(crate) async fn validate_after(
    delay: std::time::Duration,
    rule_set: RuleSet,
    password: SecretString,
    generation: u64,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation {} is about to start...", generation);

    tokio::time::sleep(delay).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation {} cancelled", generation);
        return;
    }

    let report = validate_detailed(&rule_set, password.expose_secret());
    let evaluation = Evaluation {
        generation,
        verdict: aggregate(&report.results),
        results: report.results,
        errors: report.errors,
    };

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
