//! Sequential execution of one group of test cases.
//!
//! Each case is compiled under isolation: a recoverable compiler error
//! becomes a `Fail` result, and a panic from the compile closure is caught
//! and wrapped so that no single case can abort the batch. Only structural
//! errors (see [`ErrorKind::is_fatal`]) propagate, and those abort the whole
//! run immediately.

use std::panic::{self, AssertUnwindSafe};

use crate::cli::output::{ReportSink, Tone};
use crate::errors::{ErrorKind, GauntletError};
use crate::suite::TestCase;

/// Outcome of one executed test case.
#[derive(Debug)]
pub enum TestResult {
    /// The compiler produced an artifact.
    Pass(String),
    /// The compiler failed in a recognized (or wrapped) way.
    Fail(GauntletError),
}

impl TestResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass(_))
    }
}

/// Runs every case in order, one result per case.
///
/// An empty group produces no output at all, not even the header. Cases are
/// never retried; the index printed per line is the position within the
/// *selected* sequence, not the original group.
pub fn run<F>(
    label: &str,
    compile: &mut F,
    cases: &[TestCase],
    sink: &mut dyn ReportSink,
) -> Result<Vec<TestResult>, GauntletError>
where
    F: FnMut(&TestCase) -> Result<String, GauntletError>,
{
    if cases.is_empty() {
        return Ok(Vec::new());
    }

    sink.emit(&format!("Testing {} programs:", label), Tone::Plain);

    let mut results = Vec::with_capacity(cases.len());
    for (index, case) in cases.iter().enumerate() {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| compile(case)));
        let result = match outcome {
            Ok(Ok(artifact)) => {
                sink.emit(&format!("  {:>3}: pass", index), Tone::Good);
                TestResult::Pass(artifact)
            }
            Ok(Err(error)) if error.kind().is_fatal() => return Err(error),
            Ok(Err(error)) => {
                sink.emit(&format!("  {:>3}: fail ({})", index, error), Tone::Bad);
                TestResult::Fail(error)
            }
            Err(payload) => {
                let error = GauntletError::unhandled(panic_text(payload));
                sink.emit(&format!("  {:>3}: fail ({})", index, error), Tone::Bad);
                TestResult::Fail(error)
            }
        };
        results.push(result);
    }
    Ok(results)
}

fn panic_text(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    "opaque panic payload".to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cli::output::OutputBuffer;

    fn cases(n: usize) -> Vec<TestCase> {
        (0..n).map(|i| TestCase::new(json!(i))).collect()
    }

    #[test]
    fn empty_group_emits_nothing() {
        let mut sink = OutputBuffer::new();
        let results = run("valid", &mut |_| Ok("out".into()), &[], &mut sink).unwrap();
        assert!(results.is_empty());
        assert_eq!(sink.as_str(), "");
    }

    #[test]
    fn header_and_indices_use_selected_positions() {
        let mut sink = OutputBuffer::new();
        let results = run("valid", &mut |_| Ok("out".into()), &cases(2), &mut sink).unwrap();
        assert_eq!(results.len(), 2);
        assert!(sink.as_str().starts_with("Testing valid programs:"));
        assert!(sink.as_str().contains("0: pass"));
        assert!(sink.as_str().contains("1: pass"));
    }
}
