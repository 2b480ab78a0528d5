//! The Gauntlet command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the harness library functions. The core stays parser- and
//! compiler-agnostic; here the blanks are filled with the built-in JSON suite
//! format and the external-compiler adapter.

use std::process;

use clap::Parser;

use crate::cli::args::{Command, GauntletArgs, RunOptions};
use crate::cli::external::CommandCompiler;
use crate::cli::output::StdoutSink;
use crate::config::{CompilerConfig, DEFAULT_CONFIG};
use crate::errors::GauntletError;
use crate::harness::{run_selection, RunResults};
use crate::report::Summary;
use crate::select::Selection;
use crate::suite::JsonSuiteParser;

pub mod args;
pub mod external;
pub mod output;

/// The main entry point for the CLI.
///
/// Exits non-zero when a structural error aborts the run or when any outcome
/// contradicted its group's expectation.
pub fn run() {
    let args = GauntletArgs::parse();

    let result = match args.command {
        Command::Run { options } => {
            execute(&options, Selection::all(options.suite.clone()))
        }
        Command::Valid { options, indices } => {
            execute(&options, Selection::all(options.suite.clone()).valid(indices))
        }
        Command::Invalid { options, indices } => {
            execute(&options, Selection::all(options.suite.clone()).invalid(indices))
        }
    };

    match result {
        Ok((valid_results, invalid_results)) => {
            let summary = Summary::tally(&valid_results, &invalid_results);
            if summary.has_unexpected() {
                process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            process::exit(1);
        }
    }
}

fn execute(options: &RunOptions, selection: Selection) -> Result<RunResults, GauntletError> {
    let config = match &options.config {
        Some(path) => CompilerConfig::from_file(path)?,
        None => DEFAULT_CONFIG.clone(),
    };

    let compiler = CommandCompiler::new(&options.compiler);
    let mut sink = StdoutSink::new();
    run_selection(
        &selection,
        &JsonSuiteParser,
        &mut |case| compiler.compile(case, &config),
        &mut sink,
    )
}
