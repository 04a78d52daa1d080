/// Represents all errors that can occur during parsing.
///
/// The parser aborts on the first error. An error is anchored either to the
/// offending token's lexeme or, when the token stream is exhausted, to the
/// end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position.
    UnexpectedToken {
        /// The offending token's source text.
        lexeme:  String,
        /// The source line of the offending token.
        line:    usize,
        /// What the parser expected instead.
        message: String,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// The source line where input ended.
        line:    usize,
        /// What the parser expected instead.
        message: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { lexeme, line, message } => {
                write!(f, "[line {line}] Error at '{lexeme}': {message}")
            },
            Self::UnexpectedEndOfInput { line, message } => {
                write!(f, "[line {line}] Error at end: {message}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
