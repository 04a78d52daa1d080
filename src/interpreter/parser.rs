/// Entry points and token-stream plumbing.
///
/// Declares the shared `ParseResult` alias, the `parse_program` entry point,
/// the expression/assignment root of the precedence chain, and the helper
/// functions every other parser module leans on (peeking, consuming,
/// expected-token errors, newline skipping, resynchronization).
pub mod core;
/// Statement parsing.
///
/// One function per statement form: function definitions, `print`,
/// `if`/`elif`/`else`, `while`, `return`, `assert`, and expression
/// statements with compound-assignment desugaring.
pub mod statement;
/// Binary expression tiers.
///
/// The left-associative precedence ladder from `or` down to `**`, one
/// function per tier, plus the token-to-operator mapping.
pub mod binary;
/// Prefix, call, and primary expression parsing.
///
/// Handles `not` and unary minus, postfix call chains, literals, variable
/// references, and parenthesized groupings.
pub mod unary;
/// Indented block parsing.
///
/// Collects the declarations between an `Indent` and its matching `Dedent`,
/// tolerating interior blank lines.
pub mod block;
