/// The interpreter state machine.
///
/// Declares the `Interpreter` itself: statement execution, expression
/// evaluation, call frames, the return-unwind signal, and the last-value
/// slot consumed by the interactive driver.
pub mod core;
/// The binary-operator kernel.
///
/// Pure functions from operand values to results: numeric promotion,
/// checked integer arithmetic, floor division and remainder, string
/// concatenation and repetition, equality and ordering.
pub mod binary;
/// The unary-operator kernel.
///
/// Numeric negation and truthiness-based `not`.
pub mod unary;
/// Lexically linked scopes.
///
/// The environment chain: name lookup walks outward, assignment updates
/// the nearest defining scope or defines in the current one.
pub mod environment;
