//! Aggregator - overall verdict and progress from a list of results.

use crate::validator::ValidationResult;

/// Overall outcome of a validation pass.
///
/// `progress_percent` is `100 * valid_count / total_count`, unrounded. With
/// no results the verdict is valid (vacuously) and progress is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub is_valid: bool,
    pub progress_percent: f64,
    pub valid_count: usize,
    pub total_count: usize,
}

impl Verdict {
    /// Progress rounded half away from zero, for progress bars.
    pub fn progress_rounded(&self) -> u8 {
        self.progress_percent.round().clamp(0.0, 100.0) as u8
    }

    pub fn failed_count(&self) -> usize {
        self.total_count.saturating_sub(self.valid_count)
    }
}

/// The failing results, in rule order.
pub fn failed(results: &[ValidationResult]) -> impl Iterator<Item = &ValidationResult> {
    results.iter().filter(|r| !r.is_valid)
}

/// Derives the verdict for `results`.
///
/// # Example
///
/// ```rust
/// use pwd_rules::{aggregate, ValidationResult};
///
/// let verdict = aggregate(&[]);
/// assert!(verdict.is_valid);
/// assert_eq!(verdict.progress_percent, 0.0);
/// ```
pub fn aggregate(results: &[ValidationResult]) -> Verdict {
    let total_count = results.len();
    let valid_count = results.iter().filter(|r| r.is_valid).count();

    let progress_percent = if total_count == 0 {
        0.0
    } else {
        100.0 * valid_count as f64 / total_count as f64
    };

    Verdict {
        is_valid: valid_count == total_count,
        progress_percent,
        valid_count,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(outcomes: &[bool]) -> Vec<ValidationResult> {
        outcomes
            .iter()
            .enumerate()
            .map(|(i, &is_valid)| ValidationResult {
                rule_name: format!("rule{}", i),
                message: format!("Rule {} message", i),
                is_valid,
            })
            .collect()
    }

    #[test]
    fn test_aggregate_empty() {
        let verdict = aggregate(&[]);
        assert!(verdict.is_valid);
        assert_eq!(verdict.progress_percent, 0.0);
        assert_eq!(verdict.progress_rounded(), 0);
        assert_eq!(verdict.total_count, 0);
    }

    #[test]
    fn test_aggregate_all_valid() {
        let verdict = aggregate(&results(&[true, true, true]));
        assert!(verdict.is_valid);
        assert_eq!(verdict.progress_percent, 100.0);
        assert_eq!(verdict.progress_rounded(), 100);
    }

    #[test]
    fn test_aggregate_none_valid() {
        let verdict = aggregate(&results(&[false, false]));
        assert!(!verdict.is_valid);
        assert_eq!(verdict.progress_percent, 0.0);
        assert_eq!(verdict.failed_count(), 2);
    }

    #[test]
    fn test_aggregate_half() {
        let verdict = aggregate(&results(&[true, false]));
        assert!(!verdict.is_valid);
        assert_eq!(verdict.progress_percent, 50.0);
    }

    #[test]
    fn test_aggregate_k_of_n() {
        for n in 1..=7usize {
            for k in 0..=n {
                let outcomes: Vec<bool> = (0..n).map(|i| i < k).collect();
                let verdict = aggregate(&results(&outcomes));
                let expected = 100.0 * k as f64 / n as f64;
                assert!(
                    (verdict.progress_percent - expected).abs() < 1e-9,
                    "k={} n={} got {}",
                    k,
                    n,
                    verdict.progress_percent
                );
                assert_eq!(verdict.is_valid, k == n);
            }
        }
    }

    #[test]
    fn test_progress_rounding() {
        // 1/3 -> 33.33, 2/3 -> 66.67, 1/8 -> 12.5
        assert_eq!(aggregate(&results(&[true, false, false])).progress_rounded(), 33);
        assert_eq!(aggregate(&results(&[true, true, false])).progress_rounded(), 67);
        let eighth: Vec<bool> = (0..8).map(|i| i == 0).collect();
        assert_eq!(aggregate(&results(&eighth)).progress_rounded(), 13);
    }

    #[test]
    fn test_failed_count_on_inconsistent_verdict() {
        let verdict = Verdict {
            is_valid: true,
            progress_percent: 100.0,
            valid_count: 3,
            total_count: 2,
        };
        assert_eq!(verdict.failed_count(), 0);
    }

    #[test]
    fn test_failed_keeps_order() {
        let list = results(&[false, true, false]);
        let names: Vec<_> = failed(&list).map(|r| r.rule_name.as_str()).collect();
        assert_eq!(names, vec!["rule0", "rule2"]);
    }
}
