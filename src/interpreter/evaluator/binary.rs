use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::Value,
    util::num::f64_to_i64_exact,
};

/// Applies a binary operator to two already-evaluated values.
///
/// The short-circuiting operators (`and`, `or`) never reach this kernel;
/// the evaluator resolves them before evaluating the right operand.
///
/// Promotion rule: when both operands are integers the operation stays in
/// integer arithmetic (checked, overflow is an error); when either is a
/// float both are promoted to floats. `/` always produces a float. `//`
/// and `%` use floor semantics for both kinds, so the remainder takes the
/// divisor's sign and `(a // b) * b + (a % b) == a` holds.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`, `right`: The operand values.
/// - `line`: Source line of the operator, for diagnostics.
///
/// # Errors
/// Type mismatches, zero divisors, and integer overflow.
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> Result<Value, RuntimeError> {
    match op {
        BinaryOperator::Add => eval_add(left, right, line),
        BinaryOperator::Sub => eval_sub(left, right, line),
        BinaryOperator::Mul => eval_mul(left, right, line),
        BinaryOperator::Div => eval_div(left, right, line),
        BinaryOperator::FloorDiv => eval_floor_div(left, right, line),
        BinaryOperator::Mod => eval_mod(left, right, line),
        BinaryOperator::Pow => eval_pow(left, right, line),
        BinaryOperator::Equal => Ok(Value::Bool(values_equal(left, right))),
        BinaryOperator::NotEqual => Ok(Value::Bool(!values_equal(left, right))),
        BinaryOperator::Less
        | BinaryOperator::LessEqual
        | BinaryOperator::Greater
        | BinaryOperator::GreaterEqual => eval_ordering(op, left, right, line),
        BinaryOperator::And | BinaryOperator::Or => {
            unreachable!("logical operators short-circuit in the evaluator")
        },
    }
}

/// Language-level equality.
///
/// Numeric values compare by magnitude across integer and float; strings
/// compare by content; `None` equals only `None`; booleans compare as
/// booleans; functions compare by identity; everything cross-kind is
/// unequal.
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::None, Value::None) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        _ => match (as_f64(left), as_f64(right)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

fn eval_add(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_add(*b)
             .map(Value::Integer)
             .ok_or(RuntimeError::IntegerOverflow { line })
        },
        _ => match (as_f64(left), as_f64(right)) {
            (Some(l), Some(r)) => Ok(Value::Float(l + r)),
            _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { line }),
        },
    }
}

fn eval_sub(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_sub(*b)
             .map(Value::Integer)
             .ok_or(RuntimeError::IntegerOverflow { line })
        },
        _ => match (as_f64(left), as_f64(right)) {
            (Some(l), Some(r)) => Ok(Value::Float(l - r)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
        },
    }
}

fn eval_mul(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Str(s), Value::Integer(n)) => repeat_string(s, *n, line),
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_mul(*b)
             .map(Value::Integer)
             .ok_or(RuntimeError::IntegerOverflow { line })
        },
        _ => match (as_f64(left), as_f64(right)) {
            (Some(l), Some(r)) => Ok(Value::Float(l * r)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
        },
    }
}

fn eval_div(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (as_f64(left), as_f64(right)) {
        (Some(l), Some(r)) => {
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Float(l / r))
        },
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}

fn eval_floor_div(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            if *b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            floor_div(*a, *b).map(Value::Integer)
                             .ok_or(RuntimeError::IntegerOverflow { line })
        },
        _ => match (as_f64(left), as_f64(right)) {
            (Some(l), Some(r)) => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(Value::Float((l / r).floor()))
            },
            _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
        },
    }
}

fn eval_mod(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            if *b == 0 {
                return Err(RuntimeError::ModuloByZero { line });
            }
            Ok(Value::Integer(floor_mod(*a, *b)))
        },
        _ => match (as_f64(left), as_f64(right)) {
            (Some(l), Some(r)) => {
                if r == 0.0 {
                    return Err(RuntimeError::ModuloByZero { line });
                }
                Ok(Value::Float(l - r * (l / r).floor()))
            },
            _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
        },
    }
}

/// Exponentiation.
///
/// Computed in double precision; the result collapses back to an integer
/// exactly when both operands were integers, the exponent is non-negative,
/// and the double result is exactly representable as an `i64`.
fn eval_pow(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    let (Some(l), Some(r)) = (as_f64(left), as_f64(right)) else {
        return Err(RuntimeError::OperandsMustBeNumbers { line });
    };

    let result = l.powf(r);

    if let (Value::Integer(_), Value::Integer(exponent)) = (left, right)
       && *exponent >= 0
       && let Some(exact) = f64_to_i64_exact(result)
    {
        return Ok(Value::Integer(exact));
    }

    Ok(Value::Float(result))
}

fn eval_ordering(op: BinaryOperator,
                 left: &Value,
                 right: &Value,
                 line: usize)
                 -> Result<Value, RuntimeError> {
    let (Some(l), Some(r)) = (as_f64(left), as_f64(right)) else {
        return Err(RuntimeError::OperandsMustBeNumbers { line });
    };

    let outcome = match op {
        BinaryOperator::Less => l < r,
        BinaryOperator::LessEqual => l <= r,
        BinaryOperator::Greater => l > r,
        BinaryOperator::GreaterEqual => l >= r,
        _ => unreachable!("caller filters to ordering operators"),
    };
    Ok(Value::Bool(outcome))
}

/// Repeats a string; non-positive counts yield the empty string.
fn repeat_string(s: &str, count: i64, line: usize) -> Result<Value, RuntimeError> {
    if count <= 0 {
        return Ok(Value::Str(String::new()));
    }
    let count = usize::try_from(count).map_err(|_| RuntimeError::IntegerOverflow { line })?;
    s.len()
     .checked_mul(count)
     .ok_or(RuntimeError::IntegerOverflow { line })?;
    Ok(Value::Str(s.repeat(count)))
}

/// Floor division on integers; `None` on overflow (`i64::MIN // -1`).
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Floor-mode remainder on integers: the result takes the divisor's sign.
fn floor_mod(a: i64, b: i64) -> i64 {
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder + b
    } else {
        remainder
    }
}

/// Views a numeric value as a double, promoting integers.
#[allow(clippy::cast_precision_loss)]
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(n) => Some(*n as f64),
        Value::Float(x) => Some(*x),
        _ => None,
    }
}
