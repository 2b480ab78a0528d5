//! Defines the command-line arguments and subcommands for the Gauntlet CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_SUITE_FILE;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "gauntlet",
    version,
    about = "A test-suite driver for a compiler under development."
)]
pub struct GauntletArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every run variant.
#[derive(Debug, Args)]
pub struct RunOptions {
    /// The test-suite description file to load.
    #[arg(long, default_value = DEFAULT_SUITE_FILE)]
    pub suite: PathBuf,

    /// The compiler executable to drive, one invocation per test case.
    #[arg(long)]
    pub compiler: PathBuf,

    /// Alternate compiler configuration (JSON); defaults to the stock
    /// register assignment.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every case in both groups.
    Run {
        #[command(flatten)]
        options: RunOptions,
    },
    /// Run only the chosen valid-group cases (the invalid group runs in full).
    Valid {
        #[command(flatten)]
        options: RunOptions,

        /// Indices into the valid group, in the order they should run.
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<isize>,
    },
    /// Run only the chosen invalid-group cases (the valid group runs in full).
    Invalid {
        #[command(flatten)]
        options: RunOptions,

        /// Indices into the invalid group, in the order they should run.
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<isize>,
    },
}
