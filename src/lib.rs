//! # minipy
//!
//! minipy is a tree-walking interpreter for a small, indentation-sensitive
//! subset of Python, written in Rust. A source text is consumed end to end
//! in one pass: an off-side-rule lexer produces tokens with synthesized
//! block markers, a recursive-descent parser builds the syntax tree, and an
//! evaluator walks the tree with lexically nested environments, first-class
//! function values, and Python-style arithmetic promotion.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::Lexer, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the expression and statement enums that represent
/// source code as a tree, along with the operator enums and the shared
/// function-definition node. The tree is built by the parser and walked by
/// the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Shares function definitions between the tree and runtime values.
pub mod ast;
/// Provides unified error types for every stage of a run.
///
/// Lexical, parse, and runtime failures each have their own enum with the
/// diagnostic format the drivers print; `InterpretError` sums them for the
/// single-entry-point API.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages.
/// - Distinguishes assertion failures for the exit-code contract.
pub mod error;
/// Orchestrates the interpretation pipeline.
///
/// This module ties together tokenization, parsing, evaluation, values, and
/// environments to provide the complete runtime for executing source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Converts between `f64` and `i64` without silent data loss.
pub mod util;

pub use crate::{
    error::InterpretError,
    interpreter::{evaluator::core::Interpreter, value::Value},
};

/// Executes a source string against an existing interpreter.
///
/// The text is tokenized, parsed, and evaluated in order; the first failure
/// of any stage aborts the run and is returned. The interpreter keeps its
/// global environment (and every function defined so far) across calls,
/// which is what the interactive driver relies on. The last-expression slot
/// is cleared before execution so [`Interpreter::last_value`] reflects only
/// this run.
///
/// # Errors
/// Returns an [`InterpretError`] wrapping the failing stage's diagnostic.
///
/// # Examples
/// ```
/// use minipy::{Interpreter, run_source};
///
/// let mut interpreter = Interpreter::new();
/// assert!(run_source("x = 2 + 2\nassert x == 4\n", &mut interpreter).is_ok());
///
/// // Definitions persist across runs of the same interpreter.
/// assert!(run_source("def double(n):\n    return n * 2\n", &mut interpreter).is_ok());
/// assert!(run_source("assert double(21) == 42\n", &mut interpreter).is_ok());
///
/// // An undefined name surfaces as a runtime error.
/// assert!(run_source("missing\n", &mut interpreter).is_err());
/// ```
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<(), InterpretError> {
    let tokens = Lexer::new(source).tokenize()?;
    let statements = parse_program(&tokens)?;

    interpreter.clear_last_value();
    interpreter.interpret(statements)?;
    Ok(())
}
