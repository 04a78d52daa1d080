/// Token definitions and raw tokenization.
///
/// Declares the token kinds of the language and the positioned token
/// record. Flat tokens — literals, operators, keywords, line breaks — are
/// recognized by a derived tokenizer; the synthetic block markers are left
/// to the layout pass.
///
/// # Responsibilities
/// - Defines the closed token set, including the synthetic kinds.
/// - Parses literal payloads (checked integers, floats, unescaped strings).
/// - Carries the lexical error kinds raised by malformed literals.
pub mod token;
/// The indentation-sensitive lexer.
///
/// Implements the off-side rule on top of the raw token stream: leading
/// whitespace opens and closes blocks through an indentation stack, blank
/// and comment-only lines stay neutral, and newline tokens are collapsed.
///
/// # Responsibilities
/// - Produces the final token vector, terminated by exactly one `Eof`.
/// - Emits balanced `Indent`/`Dedent` pairs from indentation changes.
/// - Converts raw tokenizer failures into positioned lexical errors.
pub mod lexer;
/// The recursive-descent parser.
///
/// Builds the statement forest from the token stream with single-token
/// lookahead and no backtracking. Expression precedence is encoded as one
/// function per tier; statements consume their terminating newline.
///
/// # Responsibilities
/// - Parses every statement and expression form of the language.
/// - Enforces the bare-variable assignment-target rule.
/// - Reports the first syntax error, anchored to the offending token.
pub mod parser;
/// The tree-walking evaluator.
///
/// Walks statement forests in environment-threaded order: blocks and calls
/// create nested scopes, `return` unwinds to its call boundary, and `print`
/// writes through the interpreter's output sink.
///
/// # Responsibilities
/// - Owns the global environment and all retained statement forests.
/// - Implements operator semantics, promotion, and truthiness.
/// - Surfaces runtime failures with their source lines.
pub mod evaluator;
/// Runtime values.
///
/// The tagged value sum shared by the evaluator and the drivers, with
/// truthiness and the stringification used by `print` and the REPL echo.
pub mod value;
