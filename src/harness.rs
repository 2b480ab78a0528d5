//! Top-level run operations.
//!
//! Everything funnels through [`run_selection`]: load the suite, narrow it,
//! run the valid group then the invalid group, tally and print the summary.
//! Structural errors from any stage propagate out of the whole operation and
//! the reporter is never reached for an aborted run.

use std::path::Path;

use crate::cli::output::ReportSink;
use crate::config::{CompilerConfig, DEFAULT_SUITE_FILE};
use crate::errors::GauntletError;
use crate::report::summarize;
use crate::runner::{run, TestResult};
use crate::select::Selection;
use crate::suite::{load_suite, SuiteParser, TestCase};

/// The valid-group and invalid-group results of one run, in that order.
pub type RunResults = (Vec<TestResult>, Vec<TestResult>);

/// The general form: run whatever the selection describes.
pub fn run_selection<F>(
    selection: &Selection,
    parser: &dyn SuiteParser,
    compile: &mut F,
    sink: &mut dyn ReportSink,
) -> Result<RunResults, GauntletError>
where
    F: FnMut(&TestCase) -> Result<String, GauntletError>,
{
    let set = load_suite(selection.path(), parser)?;
    let narrowed = selection.apply(&set);

    let valid_results = run("valid", compile, &narrowed.valid, sink)?;
    let invalid_results = run("invalid", compile, &narrowed.invalid, sink)?;

    summarize(&valid_results, &invalid_results, sink);
    Ok((valid_results, invalid_results))
}

/// Runs every case from the given suite file.
pub fn run_file<F>(
    path: &Path,
    config: &CompilerConfig,
    parser: &dyn SuiteParser,
    compile: &mut F,
    sink: &mut dyn ReportSink,
) -> Result<RunResults, GauntletError>
where
    F: FnMut(&TestCase, &CompilerConfig) -> Result<String, GauntletError>,
{
    run_selection(
        &Selection::all(path),
        parser,
        &mut |case| compile(case, config),
        sink,
    )
}

/// Runs every case from the default suite file.
pub fn run_all<F>(
    config: &CompilerConfig,
    parser: &dyn SuiteParser,
    compile: &mut F,
    sink: &mut dyn ReportSink,
) -> Result<RunResults, GauntletError>
where
    F: FnMut(&TestCase, &CompilerConfig) -> Result<String, GauntletError>,
{
    run_file(Path::new(DEFAULT_SUITE_FILE), config, parser, compile, sink)
}

/// Runs only the chosen valid-group cases from the default suite file.
/// The invalid group still runs in full.
pub fn run_valid_subset<F>(
    indices: &[isize],
    config: &CompilerConfig,
    parser: &dyn SuiteParser,
    compile: &mut F,
    sink: &mut dyn ReportSink,
) -> Result<RunResults, GauntletError>
where
    F: FnMut(&TestCase, &CompilerConfig) -> Result<String, GauntletError>,
{
    run_selection(
        &Selection::all(DEFAULT_SUITE_FILE).valid(indices.to_vec()),
        parser,
        &mut |case| compile(case, config),
        sink,
    )
}

/// Runs only the chosen invalid-group cases from the default suite file.
/// The valid group still runs in full.
pub fn run_invalid_subset<F>(
    indices: &[isize],
    config: &CompilerConfig,
    parser: &dyn SuiteParser,
    compile: &mut F,
    sink: &mut dyn ReportSink,
) -> Result<RunResults, GauntletError>
where
    F: FnMut(&TestCase, &CompilerConfig) -> Result<String, GauntletError>,
{
    run_selection(
        &Selection::all(DEFAULT_SUITE_FILE).invalid(indices.to_vec()),
        parser,
        &mut |case| compile(case, config),
        sink,
    )
}
