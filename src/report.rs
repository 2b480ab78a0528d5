//! Aggregation of run results into the final tally.
//!
//! "Expected" means the outcome matched the case's group: valid programs are
//! supposed to compile, invalid programs are supposed to be rejected. An
//! unexpected pass or failure is a compiler defect signal.

use crate::cli::output::{ReportSink, Tone};
use crate::runner::TestResult;

/// Pass/fail counts split by group expectation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub expected_passes: usize,
    pub unexpected_passes: usize,
    pub expected_failures: usize,
    pub unexpected_failures: usize,
}

impl Summary {
    /// Pure aggregation over the two result sequences.
    pub fn tally(valid: &[TestResult], invalid: &[TestResult]) -> Self {
        let valid_passes = valid.iter().filter(|r| r.is_pass()).count();
        let invalid_passes = invalid.iter().filter(|r| r.is_pass()).count();
        Self {
            expected_passes: valid_passes,
            unexpected_failures: valid.len() - valid_passes,
            unexpected_passes: invalid_passes,
            expected_failures: invalid.len() - invalid_passes,
        }
    }

    pub fn total(&self) -> usize {
        self.expected_passes
            + self.unexpected_passes
            + self.expected_failures
            + self.unexpected_failures
    }

    /// True when any outcome contradicted its group's expectation.
    pub fn has_unexpected(&self) -> bool {
        self.unexpected_passes > 0 || self.unexpected_failures > 0
    }
}

/// Tallies both groups and prints the summary table.
pub fn summarize(
    valid: &[TestResult],
    invalid: &[TestResult],
    sink: &mut dyn ReportSink,
) -> Summary {
    let summary = Summary::tally(valid, invalid);

    sink.emit("", Tone::Plain);
    sink.emit("Test summary:", Tone::Plain);
    let rows = [
        ("expected passes", summary.expected_passes, Tone::Plain),
        (
            "unexpected passes",
            summary.unexpected_passes,
            if summary.unexpected_passes > 0 {
                Tone::Bad
            } else {
                Tone::Plain
            },
        ),
        ("expected failures", summary.expected_failures, Tone::Plain),
        (
            "unexpected failures",
            summary.unexpected_failures,
            if summary.unexpected_failures > 0 {
                Tone::Bad
            } else {
                Tone::Plain
            },
        ),
        ("total", summary.total(), Tone::Plain),
    ];
    for (title, count, tone) in rows {
        sink.emit(&format!("  {:<20} {:>5}", title, count), tone);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputBuffer;
    use crate::errors::GauntletError;

    fn pass() -> TestResult {
        TestResult::Pass("artifact".into())
    }

    fn fail() -> TestResult {
        TestResult::Fail(GauntletError::codegen("boom"))
    }

    #[test]
    fn tally_splits_by_group_expectation() {
        let valid = vec![pass(), fail(), pass()];
        let invalid = vec![fail(), pass()];
        let summary = Summary::tally(&valid, &invalid);
        assert_eq!(summary.expected_passes, 2);
        assert_eq!(summary.unexpected_passes, 1);
        assert_eq!(summary.expected_failures, 1);
        assert_eq!(summary.unexpected_failures, 1);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn tally_of_nothing_is_empty() {
        let summary = Summary::tally(&[], &[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.total(), 0);
        assert!(!summary.has_unexpected());
    }

    #[test]
    fn summarize_prints_every_counter() {
        let mut sink = OutputBuffer::new();
        let summary = summarize(&[pass()], &[fail()], &mut sink);
        assert!(!summary.has_unexpected());
        let text = sink.as_str();
        assert!(text.contains("Test summary:"));
        assert!(text.contains("expected passes"));
        assert!(text.contains("unexpected failures"));
        assert!(text.contains("total"));
    }
}
