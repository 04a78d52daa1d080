/// Represents all errors that can abort evaluation.
///
/// Every variant carries the source line of the expression or statement that
/// raised it. Assertion failures are the one kind the driver treats
/// specially: they set the process exit status in file mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Read of a name with no binding anywhere in the environment chain.
    UndefinedVariable {
        /// The name that was looked up.
        name: String,
        /// The source line of the reference.
        line: usize,
    },
    /// A binary operation over operand kinds it does not support.
    OperandsMustBeNumbers {
        /// The source line of the operator.
        line: usize,
    },
    /// An addition over operand kinds that neither add nor concatenate.
    OperandsMustBeNumbersOrStrings {
        /// The source line of the operator.
        line: usize,
    },
    /// A unary operation over a non-numeric operand.
    OperandMustBeNumber {
        /// The source line of the operator.
        line: usize,
    },
    /// Division with a zero divisor.
    DivisionByZero {
        /// The source line of the operator.
        line: usize,
    },
    /// Remainder with a zero divisor.
    ModuloByZero {
        /// The source line of the operator.
        line: usize,
    },
    /// Integer arithmetic outside the signed 64-bit range.
    IntegerOverflow {
        /// The source line of the operator.
        line: usize,
    },
    /// A call whose callee is not a function value.
    NotCallable {
        /// The source line of the call parenthesis.
        line: usize,
    },
    /// A call with the wrong number of arguments.
    ArityMismatch {
        /// How many parameters the function declares.
        expected: usize,
        /// How many arguments the call supplied.
        found:    usize,
        /// The source line of the call parenthesis.
        line:     usize,
    },
    /// A `return` executed outside any function call.
    ReturnOutsideFunction {
        /// The source line of the `return` keyword.
        line: usize,
    },
    /// A failed `assert`, with the optional stringified message.
    AssertionFailed {
        /// The message expression's value, if one was given.
        message: Option<String>,
        /// The source line of the `assert` keyword.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Runtime Error [line {line}]: Undefined variable '{name}'")
            },
            Self::OperandsMustBeNumbers { line } => {
                write!(f, "Runtime Error [line {line}]: Operands must be numbers")
            },
            Self::OperandsMustBeNumbersOrStrings { line } => {
                write!(f,
                       "Runtime Error [line {line}]: Operands must be numbers or strings")
            },
            Self::OperandMustBeNumber { line } => {
                write!(f, "Runtime Error [line {line}]: Operand must be a number")
            },
            Self::DivisionByZero { line } => {
                write!(f, "Runtime Error [line {line}]: Division by zero")
            },
            Self::ModuloByZero { line } => {
                write!(f, "Runtime Error [line {line}]: Modulo by zero")
            },
            Self::IntegerOverflow { line } => {
                write!(f, "Runtime Error [line {line}]: Integer overflow")
            },
            Self::NotCallable { line } => {
                write!(f, "Runtime Error [line {line}]: Can only call functions")
            },
            Self::ArityMismatch { expected, found, line } => {
                write!(f,
                       "Runtime Error [line {line}]: Expected {expected} arguments but got {found}")
            },
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Runtime Error [line {line}]: 'return' outside function")
            },
            Self::AssertionFailed { message, line } => {
                match message {
                    Some(text) => write!(f, "AssertionError: {text} (line {line})"),
                    None => write!(f, "AssertionError (line {line})"),
                }
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
