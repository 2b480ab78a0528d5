//! Adapter that drives an external compiler executable.
//!
//! The harness core only knows the compile-function contract; this adapter
//! satisfies it by spawning the configured executable once per test case.
//! The case and the register assignment are written to the child's stdin as
//! one JSON envelope, the artifact is read from stdout, and exit codes are
//! mapped onto the closed error set:
//!
//! | exit code | meaning                          |
//! |-----------|----------------------------------|
//! | 0         | success, stdout is the artifact  |
//! | 2         | compiler rejected the case's AST |
//! | 3         | assembly generation failed       |
//! | 4         | result mismatch                  |
//! | 5         | wrapper/harness mismatch         |
//! | other     | unrecognized fault (stderr text) |

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use serde_json::json;

use crate::config::CompilerConfig;
use crate::errors::GauntletError;
use crate::suite::TestCase;

const EXIT_AST_PARSE: i32 = 2;
const EXIT_CODEGEN: i32 = 3;
const EXIT_RESULT_MISMATCH: i32 = 4;
const EXIT_WRAPPER_MISMATCH: i32 = 5;

/// Runs an external compiler executable, one process per case.
#[derive(Debug, Clone)]
pub struct CommandCompiler {
    program: PathBuf,
}

impl CommandCompiler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn compile(
        &self,
        case: &TestCase,
        config: &CompilerConfig,
    ) -> Result<String, GauntletError> {
        let envelope = json!({
            "config": config,
            "case": case.payload(),
        });

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                GauntletError::wrapper_mismatch(format!(
                    "failed to launch compiler {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        // Feed stdin from a separate thread while wait_with_output drains
        // stdout and stderr. Writing the whole envelope first would deadlock
        // once it outgrows the pipe buffer and the child starts producing
        // output before finishing its read.
        let stdin = child.stdin.take();
        let payload = envelope.to_string();
        let writer = thread::spawn(move || {
            if let Some(mut stdin) = stdin {
                // A broken pipe means the child stopped reading; its exit
                // status carries the verdict.
                let _ = stdin.write_all(payload.as_bytes());
            }
        });

        let output = child.wait_with_output().map_err(|e| {
            GauntletError::wrapper_mismatch(format!("failed to collect compiler output: {}", e))
        })?;
        let _ = writer.join();

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            Some(EXIT_AST_PARSE) => Err(GauntletError::ast_parse(stderr)),
            Some(EXIT_CODEGEN) => Err(GauntletError::codegen(stderr)),
            Some(EXIT_RESULT_MISMATCH) => Err(GauntletError::result_mismatch(stderr)),
            Some(EXIT_WRAPPER_MISMATCH) => Err(GauntletError::wrapper_mismatch(stderr)),
            Some(code) => Err(GauntletError::unhandled(format!(
                "compiler exited with code {}: {}",
                code, stderr
            ))),
            None => Err(GauntletError::unhandled(format!(
                "compiler terminated by signal: {}",
                stderr
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::DEFAULT_CONFIG;
    use crate::errors::ErrorKind;

    #[test]
    fn cases_larger_than_the_pipe_buffer_complete() {
        // `cat` echoes stdin to stdout as it reads, so a case well past the
        // pipe buffer size fills both pipes at once.
        let case = TestCase::new(json!("x".repeat(1 << 20)));
        let artifact = CommandCompiler::new("cat")
            .compile(&case, &DEFAULT_CONFIG)
            .unwrap();
        assert!(artifact.len() > 1 << 20);
    }

    #[test]
    fn unknown_exit_codes_map_to_unhandled() {
        // `false` exits 1 without reading stdin; the dropped pipe must not
        // surface as a harness error of its own.
        let err = CommandCompiler::new("false")
            .compile(&TestCase::new(json!(["+", 1, 2])), &DEFAULT_CONFIG)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unhandled);
    }

    #[test]
    fn missing_executables_are_a_wrapper_mismatch() {
        let err = CommandCompiler::new("no-such-compiler-anywhere")
            .compile(&TestCase::new(json!(1)), &DEFAULT_CONFIG)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrapperMismatch);
    }
}
