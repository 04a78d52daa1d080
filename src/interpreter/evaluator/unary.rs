use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::value::Value,
};

/// Applies a unary operator to an already-evaluated operand.
///
/// Negation requires a numeric operand (checked on integers, so negating
/// `i64::MIN` is an overflow error rather than a wrap); `not` maps any
/// value through its truthiness.
///
/// # Errors
/// `OperandMustBeNumber` for non-numeric negation, `IntegerOverflow` at
/// the integer boundary.
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> Result<Value, RuntimeError> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Integer(n) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::IntegerOverflow { line })
            },
            Value::Float(x) => Ok(Value::Float(-x)),
            _ => Err(RuntimeError::OperandMustBeNumber { line }),
        },
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
