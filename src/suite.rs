//! Test-suite loading.
//!
//! A suite file describes two labeled groups of test cases: programs the
//! compiler is expected to accept ("valid") and programs it is expected to
//! reject ("invalid"). The grammar of the description format is not the
//! harness's business; it lives behind the [`SuiteParser`] trait. The loader
//! here is a thin wrapper that reads the file, hands the text to a parser,
//! and enforces the structural invariant that both groups are present and
//! non-empty.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::GauntletError;

/// Group label for programs expected to compile successfully.
pub const GROUP_VALID: &str = "valid";
/// Group label for programs expected to be rejected.
pub const GROUP_INVALID: &str = "invalid";

/// One parsed test-suite entry.
///
/// The harness treats the payload as opaque: it is produced by a
/// [`SuiteParser`] and handed unmodified to the compiler function. Nothing in
/// the core inspects its structure.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    entry: Value,
}

impl TestCase {
    pub fn new(entry: Value) -> Self {
        Self { entry }
    }

    /// The raw parsed entry, for collaborators that feed it to a compiler.
    pub fn payload(&self) -> &Value {
        &self.entry
    }
}

impl std::fmt::Display for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entry)
    }
}

/// A loaded suite: both groups, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSet {
    pub valid: Vec<TestCase>,
    pub invalid: Vec<TestCase>,
}

/// Parses a suite description into labeled groups of test cases.
///
/// Implementations own the grammar of the description format entirely. The
/// loader only looks the groups up by label afterward.
pub trait SuiteParser {
    fn parse_suite(&self, source: &str) -> Result<Vec<(String, Vec<TestCase>)>, GauntletError>;
}

/// The built-in suite format: a JSON object mapping group labels to arrays
/// of arbitrary entries.
///
/// ```json
/// { "valid": [["+", 1, 2], "x"], "invalid": [["let"]] }
/// ```
#[derive(Debug, Default)]
pub struct JsonSuiteParser;

impl SuiteParser for JsonSuiteParser {
    fn parse_suite(&self, source: &str) -> Result<Vec<(String, Vec<TestCase>)>, GauntletError> {
        let root: Value = serde_json::from_str(source)
            .map_err(|e| GauntletError::suite_parse(e.to_string()))?;

        let Value::Object(groups) = root else {
            return Err(GauntletError::suite_parse(
                "suite description must be an object mapping group labels to arrays",
            ));
        };

        let mut out = Vec::with_capacity(groups.len());
        for (label, entries) in groups {
            let Value::Array(entries) = entries else {
                return Err(GauntletError::suite_parse(format!(
                    "group {:?} must be an array of test cases",
                    label
                )));
            };
            out.push((label, entries.into_iter().map(TestCase::new).collect()));
        }
        Ok(out)
    }
}

/// Reads a suite file and validates its structure.
///
/// Fails with [`GauntletError::SuiteParse`] if the file cannot be read or
/// parsed, and with the dedicated structural errors if either group is
/// missing or empty. Structural errors are fatal to the run that requested
/// the load.
pub fn load_suite(path: &Path, parser: &dyn SuiteParser) -> Result<TestSet, GauntletError> {
    let source = fs::read_to_string(path).map_err(|e| {
        GauntletError::suite_parse(format!("failed to read {}: {}", path.display(), e))
    })?;
    let mut groups = parser.parse_suite(&source)?;

    let valid = take_group(&mut groups, GROUP_VALID).ok_or(GauntletError::NoValidTests)?;
    let invalid = take_group(&mut groups, GROUP_INVALID).ok_or(GauntletError::NoInvalidTests)?;

    Ok(TestSet { valid, invalid })
}

fn take_group(groups: &mut Vec<(String, Vec<TestCase>)>, label: &str) -> Option<Vec<TestCase>> {
    let pos = groups.iter().position(|(l, _)| l == label)?;
    let (_, cases) = groups.remove(pos);
    if cases.is_empty() {
        return None;
    }
    Some(cases)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn json_parser_splits_labeled_groups_preserving_case_order() {
        // Group labels are looked up by name downstream; only the order of
        // cases within a group is contractual.
        let groups = JsonSuiteParser
            .parse_suite(r#"{ "valid": [1, 2], "invalid": [["let"]] }"#)
            .unwrap();
        assert_eq!(groups.len(), 2);
        let (_, valid) = groups.iter().find(|(label, _)| label == "valid").unwrap();
        assert_eq!(
            valid,
            &vec![TestCase::new(json!(1)), TestCase::new(json!(2))]
        );
        let (_, invalid) = groups.iter().find(|(label, _)| label == "invalid").unwrap();
        assert_eq!(invalid.len(), 1);
    }

    #[test]
    fn json_parser_rejects_non_object_root() {
        let err = JsonSuiteParser.parse_suite("[1, 2]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuiteParse);
    }

    #[test]
    fn json_parser_rejects_non_array_group() {
        let err = JsonSuiteParser
            .parse_suite(r#"{ "valid": "not-a-list" }"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuiteParse);
    }

    #[test]
    fn json_parser_reports_syntax_errors() {
        let err = JsonSuiteParser.parse_suite("{ not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuiteParse);
    }
}
