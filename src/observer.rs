//! Integration with the presentation layer.
//!
//! The engine stays stateless: the caller owns the current value and the last
//! verdict, and re-runs [`evaluate_and_notify`] on every input change.

use secrecy::{ExposeSecret, SecretString};

use crate::aggregate::{aggregate, Verdict};
use crate::error::{RulePredicateError, SubmitError};
use crate::rule_set::RuleSet;
use crate::validator::{validate, validate_detailed, ValidationReport, ValidationResult};

/// Receives the outcome of each evaluation.
pub trait ValidationObserver {
    /// Called after every evaluation with the overall validity and the
    /// per-rule results.
    fn on_validation_change(&mut self, is_valid: bool, results: &[ValidationResult]);

    /// Called with the raw value, independent of validity.
    fn on_value_change(&mut self, _value: &str) {}

    /// Called once per rule whose predicate failed or panicked during the
    /// pass. The rule is already reported as invalid in the results.
    fn on_predicate_error(&mut self, _error: &RulePredicateError) {}
}

/// Observer built from two closures.
pub struct Callbacks<V, C> {
    on_validation_change: V,
    on_value_change: C,
}

impl<V> Callbacks<V, fn(&str)>
where
    V: FnMut(bool, &[ValidationResult]),
{
    pub fn new(on_validation_change: V) -> Self {
        Self {
            on_validation_change,
            on_value_change: |_| {},
        }
    }
}

impl<V, C> Callbacks<V, C> {
    pub fn with_value_change<C2>(self, on_value_change: C2) -> Callbacks<V, C2>
    where
        C2: FnMut(&str),
    {
        Callbacks {
            on_validation_change: self.on_validation_change,
            on_value_change,
        }
    }
}

impl<V, C> ValidationObserver for Callbacks<V, C>
where
    V: FnMut(bool, &[ValidationResult]),
    C: FnMut(&str),
{
    fn on_validation_change(&mut self, is_valid: bool, results: &[ValidationResult]) {
        (self.on_validation_change)(is_valid, results)
    }

    fn on_value_change(&mut self, value: &str) {
        (self.on_value_change)(value)
    }
}

fn notify<O>(observer: &mut O, report: &ValidationReport, verdict: &Verdict, value: &str)
where
    O: ValidationObserver + ?Sized,
{
    for error in &report.errors {
        observer.on_predicate_error(error);
    }
    observer.on_validation_change(verdict.is_valid, &report.results);
    observer.on_value_change(value);
}

/// Runs one validate/aggregate pass and notifies `observer` synchronously.
///
/// Predicate failures are delivered through
/// [`ValidationObserver::on_predicate_error`] before the validation change.
pub fn evaluate_and_notify<O>(rule_set: &RuleSet, value: &str, observer: &mut O) -> Verdict
where
    O: ValidationObserver + ?Sized,
{
    let report = validate_detailed(rule_set, value);
    let verdict = aggregate(&report.results);
    notify(observer, &report, &verdict, value);
    verdict
}

/// Caller-side state for a password input: the current value and the last
/// verdict, with submission gating.
///
/// The value is kept in a [`SecretString`], so `Debug` output never shows it.
#[derive(Debug)]
pub struct PasswordField {
    rule_set: RuleSet,
    value: SecretString,
    results: Vec<ValidationResult>,
    verdict: Verdict,
}

impl PasswordField {
    /// Creates a field evaluated against `rule_set`, starting from an empty
    /// value.
    pub fn new(rule_set: RuleSet) -> Self {
        let results = validate(&rule_set, "");
        let verdict = aggregate(&results);
        Self {
            rule_set,
            value: SecretString::new(String::new().into()),
            results,
            verdict,
        }
    }

    /// Replaces the value, re-evaluates and notifies `observer`.
    pub fn set_value<O>(&mut self, value: impl Into<String>, observer: &mut O) -> Verdict
    where
        O: ValidationObserver + ?Sized,
    {
        let value: String = value.into();
        self.value = SecretString::new(value.into_boxed_str());
        let value = self.value.expose_secret();

        let report = validate_detailed(&self.rule_set, value);
        self.verdict = aggregate(&report.results);
        notify(observer, &report, &self.verdict, value);

        self.results = report.results;
        self.verdict
    }

    pub fn value(&self) -> &SecretString {
        &self.value
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Returns the value if the last verdict was valid.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Rejected`] with the number of unmet rules.
    pub fn submit(&self) -> Result<&SecretString, SubmitError> {
        if !self.verdict.is_valid {
            return Err(SubmitError::Rejected {
                failed: self.verdict.failed_count(),
            });
        }
        Ok(&self.value)
    }
}
