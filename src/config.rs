//! Compiler configuration.
//!
//! The harness never interprets these fields; they are carried through to
//! the compiler function unchanged. The defaults are named constants passed
//! explicitly into run operations, never ambient globals.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::GauntletError;

/// Suite file consulted by the run-all entry points.
pub const DEFAULT_SUITE_FILE: &str = "tests.json";

/// Register and ABI assignment handed to the compiler function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    pub parameter_registers: Vec<String>,
    pub return_register: String,
    pub frame_pointer: String,
    pub allocatable_registers: Vec<String>,
}

/// The stock System V-flavored assignment.
pub static DEFAULT_CONFIG: Lazy<CompilerConfig> = Lazy::new(|| CompilerConfig {
    parameter_registers: to_strings(&["rdi", "rsi", "rdx", "rcx", "r8", "r9"]),
    return_register: "rax".to_string(),
    frame_pointer: "rbp".to_string(),
    allocatable_registers: to_strings(&[
        "rbx", "r10", "r11", "r12", "r13", "r14", "r15",
    ]),
});

impl CompilerConfig {
    /// Loads an alternate configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, GauntletError> {
        let source = fs::read_to_string(path).map_err(|e| {
            GauntletError::wrapper_mismatch(format!(
                "failed to read compiler config {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&source).map_err(|e| {
            GauntletError::wrapper_mismatch(format!(
                "malformed compiler config {}: {}",
                path.display(),
                e
            ))
        })
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}
