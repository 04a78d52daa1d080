/// Checked numeric conversions.
///
/// Helpers for moving between `f64` and `i64` without silent data loss,
/// used where the evaluator collapses float results back into integers.
pub mod num;
