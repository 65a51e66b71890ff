//! Debounced async evaluation where the last-issued request wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::rule_set::RuleSet;
use crate::validator::{validate_after, Evaluation, DEBOUNCE_DELAY};

/// Read-only view of the latest issued generation, for the receiving side.
#[derive(Debug, Clone)]
pub struct LatestGeneration(Arc<AtomicU64>);

impl LatestGeneration {
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// `true` if `evaluation` answers the most recent request.
    pub fn is_current(&self, evaluation: &Evaluation) -> bool {
        evaluation.generation == self.get()
    }
}

/// Issues debounced evaluations for a stream of input values.
///
/// Each [`Debouncer::submit`] cancels the previous in-flight request and
/// bumps the generation. Receivers drop any [`Evaluation`] for which
/// [`LatestGeneration::is_current`] is false.
pub struct Debouncer {
    rule_set: RuleSet,
    delay: Duration,
    generation: Arc<AtomicU64>,
    in_flight: Option<CancellationToken>,
    tx: mpsc::Sender<Evaluation>,
}

impl Debouncer {
    pub fn new(rule_set: RuleSet, tx: mpsc::Sender<Evaluation>) -> Self {
        Self {
            rule_set,
            delay: DEBOUNCE_DELAY,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
            tx,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn latest(&self) -> LatestGeneration {
        LatestGeneration(Arc::clone(&self.generation))
    }

    /// Schedules an evaluation of `password` and returns its generation.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self, password: SecretString) -> u64 {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        tokio::spawn(validate_after(
            self.delay,
            self.rule_set.clone(),
            password,
            generation,
            token,
            self.tx.clone(),
        ));

        generation
    }

    /// Cancels the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn rules() -> RuleSet {
        RuleSet::new([
            Rule::new("minLength", "At least 8 characters", |v: &str| v.chars().count() >= 8).unwrap(),
        ])
        .unwrap()
    }

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_submission_wins() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(rules(), tx);
        let latest = debouncer.latest();

        debouncer.submit(secret("abc"));
        debouncer.submit(secret("abcd"));
        let last = debouncer.submit(secret("abcdefgh"));
        assert_eq!(last, 3);

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.generation, 3);
        assert!(latest.is_current(&evaluation));
        assert!(evaluation.verdict.is_valid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_evaluation_is_detected() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(rules(), tx).with_delay(Duration::from_millis(10));
        let latest = debouncer.latest();

        debouncer.submit(secret("abcdefgh"));
        let stale = rx.recv().await.expect("Should receive evaluation");
        assert!(latest.is_current(&stale));

        debouncer.submit(secret("abc"));
        assert!(!latest.is_current(&stale));

        let fresh = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(fresh.generation, 2);
        assert!(!fresh.verdict.is_valid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_result() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(rules(), tx);

        debouncer.submit(secret("abcdefgh"));
        debouncer.cancel();
        drop(debouncer);

        assert!(rx.recv().await.is_none());
    }
}
