use logos::Logos;

use crate::error::LexErrorKind;

/// The discriminant of a token.
///
/// Most kinds are recognized directly by the derived tokenizer. `Indent`,
/// `Dedent`, and `Eof` carry no pattern: only the layout pass in
/// [`crate::interpreter::lexer`] constructs them, from the off-side rule and
/// end-of-input handling. `Newline` is a real token so the layout pass can
/// observe line boundaries; inline whitespace and `#` comments are skipped
/// outright.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", lex_integer)]
    Integer(i64),
    /// Float literal tokens, such as `3.14` or `2.5e-3`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", lex_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", lex_float)]
    #[regex(r"[0-9]+(\.[0-9]+)?[eE][+-]?", missing_exponent_digits)]
    Float(f64),
    /// String literal tokens, single- or double-quoted, escapes resolved.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, lex_string)]
    #[regex(r"'([^'\\\n]|\\[^\n])*'", lex_string)]
    #[regex(r#""([^"\\\n]|\\[^\n])*"#, unterminated_string)]
    #[regex(r"'([^'\\\n]|\\[^\n])*", unterminated_string)]
    Str(String),
    /// Identifier tokens: names of variables and functions.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    DoubleStar,

    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `=`
    #[token("=")]
    Assign,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,

    /// `def`
    #[token("def")]
    Def,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for` (reserved; no statement form yet)
    #[token("for")]
    For,
    /// `in` (reserved; no statement form yet)
    #[token("in")]
    In,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,
    /// `None`
    #[token("None")]
    None,
    /// `print`
    #[token("print")]
    Print,
    /// `assert`
    #[token("assert")]
    Assert,

    /// A physical line break.
    #[token("\n")]
    Newline,
    /// Block open, synthesized when a line indents past the enclosing level.
    Indent,
    /// Block close, synthesized when a line returns to an enclosing level.
    Dedent,
    /// End of input, synthesized exactly once per token stream.
    Eof,
}

/// A positioned token.
///
/// `lexeme` is the exact source slice the token was scanned from; synthetic
/// tokens (`Newline`, `Indent`, `Dedent`, `Eof`) have an empty lexeme. Line
/// and column are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's discriminant, with any literal payload.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based source column.
    pub column: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: the parsed value.
/// - `Err(LexErrorKind::IntegerTooLarge)`: if the digits exceed the signed
///   64-bit range.
fn lex_integer(lex: &mut logos::Lexer<TokenKind>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerTooLarge)
}

/// Parses a float literal from the current token slice.
///
/// The pattern guarantees a well-formed mantissa and exponent, so the parse
/// itself cannot fail; out-of-range magnitudes round to infinity.
fn lex_float(lex: &mut logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Resolves the escape sequences of a string literal slice.
///
/// The surrounding quotes are stripped; `\n`, `\t`, and `\r` map to their
/// control bytes, and any other escaped character stands for itself (which
/// covers `\\`, `\'`, and `\"`).
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> String {
    let raw = lex.slice();
    let body = &raw[1..raw.len() - 1];

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some(other) => value.push(other),
            Option::None => {},
        }
    }
    value
}

/// Rejects a numeric literal whose exponent marker has no digits.
fn missing_exponent_digits(_: &mut logos::Lexer<TokenKind>) -> Result<f64, LexErrorKind> {
    Err(LexErrorKind::MissingExponentDigits)
}

/// Rejects a string literal with no closing quote on its line.
fn unterminated_string(_: &mut logos::Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}
