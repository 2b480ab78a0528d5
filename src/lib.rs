pub use crate::errors::{ErrorKind, GauntletError};

pub mod cli;
pub mod config;
pub mod errors;
pub mod harness;
pub mod report;
pub mod runner;
pub mod select;
pub mod suite;
