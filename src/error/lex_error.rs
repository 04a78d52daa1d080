/// Classifies the ways tokenization can fail.
///
/// The raw tokenizer produces a kind without a position; the layout pass
/// attaches the line and column where the offending slice begins and wraps
/// it into a [`LexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that starts no token of the language.
    #[default]
    UnexpectedCharacter,
    /// A string literal that reaches a newline or the end of input before
    /// its closing quote.
    UnterminatedString,
    /// An exponent marker (`e`/`E`) with no digits after it.
    MissingExponentDigits,
    /// An integer literal outside the signed 64-bit range.
    IntegerTooLarge,
    /// A dedent that matches no enclosing indentation level.
    InconsistentIndentation,
}

impl std::fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::UnexpectedCharacter => "Unexpected character",
            Self::UnterminatedString => "Unterminated string",
            Self::MissingExponentDigits => "Invalid number: expected digit after exponent",
            Self::IntegerTooLarge => "Integer literal too large",
            Self::InconsistentIndentation => "Inconsistent indentation",
        };
        write!(f, "{message}")
    }
}

/// A positioned lexical error.
///
/// Tokenization aborts on the first such error; the line and column point at
/// the start of the offending source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// What went wrong.
    pub kind:   LexErrorKind,
    /// 1-based source line of the offending slice.
    pub line:   usize,
    /// 1-based source column of the offending slice.
    pub column: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Lexer Error [line {}, col {}]: {}",
               self.line, self.column, self.kind)
    }
}

impl std::error::Error for LexError {}
