/// Lexical errors.
///
/// Defines the error kinds that can occur while turning source text into
/// tokens: malformed literals, stray characters, and indentation that does
/// not match any open block.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised by the recursive-descent parser, anchored to
/// the offending token (or to the end of input) for reporting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, zero divisors, arity mismatches, undefined names, integer
/// overflow, and assertion failures.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error produced by a full interpreter run.
///
/// Each stage of the pipeline aborts with its own error type; this sum wraps
/// them so [`crate::run_source`] can surface any of them through one result.
#[derive(Debug)]
pub enum InterpretError {
    /// Tokenization failed.
    Lex(LexError),
    /// Parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl InterpretError {
    /// Returns `true` when the run was aborted by a failed `assert`.
    ///
    /// The file-mode driver uses this to decide the process exit status:
    /// assertion failures exit with status 1, every other diagnostic is
    /// reported without changing the exit status.
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(self,
                 Self::Runtime(RuntimeError::AssertionFailed { .. }))
    }
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::Runtime(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<LexError> for InterpretError {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ParseError> for InterpretError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<RuntimeError> for InterpretError {
    fn from(err: RuntimeError) -> Self {
        Self::Runtime(err)
    }
}
