//! The unified, `miette`-based error type for the whole harness.
//!
//! Every failure mode the driver can observe is a variant of [`GauntletError`].
//! The variants split into two families, distinguished by [`ErrorKind::is_fatal`]:
//!
//! - **Per-case failures** (codegen, AST parse, result mismatch, wrapper
//!   mismatch, unhandled fault): the runner records these as a `Fail` result
//!   and carries on with the next case.
//! - **Structural failures** (malformed suite file, empty "valid" or
//!   "invalid" group): these abort the entire run.
//!
//! The harness itself constructs only [`GauntletError::Unhandled`] — all
//! other variants are produced by collaborators (the compiler function or the
//! suite parser) and merely classified here.

use miette::Diagnostic;
use thiserror::Error;

/// Type-safe classification of [`GauntletError`] variants.
///
/// Used by the runner to decide whether a failure is scoped to one test case
/// or fatal to the run, and by tests to assert on outcomes without string
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Assembly generation failed for a test case.
    Codegen,
    /// The compiler rejected the structure of a test case.
    AstParse,
    /// The compiler produced output that does not match the expectation.
    ResultMismatch,
    /// The harness wrapper around the compiler disagreed with its output.
    WrapperMismatch,
    /// The test-suite description file itself could not be parsed.
    SuiteParse,
    /// The loaded suite contains no "valid" group.
    NoValidTests,
    /// The loaded suite contains no "invalid" group.
    NoInvalidTests,
    /// A fault the compiler raised that is not part of the closed error set.
    Unhandled,
}

impl ErrorKind {
    /// Structural errors abort the whole run; everything else is recovered
    /// per case.
    pub fn is_fatal(&self) -> bool {
        match self {
            ErrorKind::SuiteParse | ErrorKind::NoValidTests | ErrorKind::NoInvalidTests => true,
            ErrorKind::Codegen
            | ErrorKind::AstParse
            | ErrorKind::ResultMismatch
            | ErrorKind::WrapperMismatch
            | ErrorKind::Unhandled => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Codegen => "Codegen",
            ErrorKind::AstParse => "AstParse",
            ErrorKind::ResultMismatch => "ResultMismatch",
            ErrorKind::WrapperMismatch => "WrapperMismatch",
            ErrorKind::SuiteParse => "SuiteParse",
            ErrorKind::NoValidTests => "NoValidTests",
            ErrorKind::NoInvalidTests => "NoInvalidTests",
            ErrorKind::Unhandled => "Unhandled",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for all harness failure modes.
#[derive(Debug, Error, Diagnostic)]
pub enum GauntletError {
    #[error("assembly generation failed: {message}")]
    #[diagnostic(code(gauntlet::codegen))]
    Codegen { message: String },

    #[error("compiler rejected test case structure: {message}")]
    #[diagnostic(code(gauntlet::ast_parse))]
    AstParse { message: String },

    #[error("result mismatch: {message}")]
    #[diagnostic(code(gauntlet::result_mismatch))]
    ResultMismatch { message: String },

    #[error("wrapper mismatch: {message}")]
    #[diagnostic(code(gauntlet::wrapper_mismatch))]
    WrapperMismatch { message: String },

    #[error("malformed test-suite file: {message}")]
    #[diagnostic(
        code(gauntlet::suite_parse),
        help("check the suite description file against the expected format")
    )]
    SuiteParse { message: String },

    #[error("no valid test cases found")]
    #[diagnostic(
        code(gauntlet::no_valid_tests),
        help("the suite file must contain a non-empty group labeled \"valid\"")
    )]
    NoValidTests,

    #[error("no invalid test cases found")]
    #[diagnostic(
        code(gauntlet::no_invalid_tests),
        help("the suite file must contain a non-empty group labeled \"invalid\"")
    )]
    NoInvalidTests,

    #[error("unhandled compiler fault: {detail}")]
    #[diagnostic(code(gauntlet::unhandled))]
    Unhandled { detail: String },
}

impl GauntletError {
    pub fn codegen(message: impl Into<String>) -> Self {
        Self::Codegen {
            message: message.into(),
        }
    }

    pub fn ast_parse(message: impl Into<String>) -> Self {
        Self::AstParse {
            message: message.into(),
        }
    }

    pub fn result_mismatch(message: impl Into<String>) -> Self {
        Self::ResultMismatch {
            message: message.into(),
        }
    }

    pub fn wrapper_mismatch(message: impl Into<String>) -> Self {
        Self::WrapperMismatch {
            message: message.into(),
        }
    }

    pub fn suite_parse(message: impl Into<String>) -> Self {
        Self::SuiteParse {
            message: message.into(),
        }
    }

    /// Wraps the text of a fault that is not part of the closed error set.
    /// Only the runner's catch-all path should need this.
    pub fn unhandled(detail: impl Into<String>) -> Self {
        Self::Unhandled {
            detail: detail.into(),
        }
    }

    /// Returns the type-safe classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GauntletError::Codegen { .. } => ErrorKind::Codegen,
            GauntletError::AstParse { .. } => ErrorKind::AstParse,
            GauntletError::ResultMismatch { .. } => ErrorKind::ResultMismatch,
            GauntletError::WrapperMismatch { .. } => ErrorKind::WrapperMismatch,
            GauntletError::SuiteParse { .. } => ErrorKind::SuiteParse,
            GauntletError::NoValidTests => ErrorKind::NoValidTests,
            GauntletError::NoInvalidTests => ErrorKind::NoInvalidTests,
            GauntletError::Unhandled { .. } => ErrorKind::Unhandled,
        }
    }
}
