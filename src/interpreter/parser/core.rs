use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_or, statement::parse_declaration},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a statement forest.
///
/// This is the parser's entry point. Leading and trailing newlines are
/// skipped; declarations are collected until the end-of-file marker. The
/// first error aborts the whole parse.
///
/// # Parameters
/// - `tokens`: The token stream produced by the lexer, ending in `Eof`.
///
/// # Returns
/// The top-level statements in source order.
///
/// # Errors
/// Propagates the first [`ParseError`] encountered.
pub fn parse_program(tokens: &[Token]) -> ParseResult<Vec<Stmt>> {
    let mut tokens = tokens.iter().peekable();
    let mut statements = Vec::new();

    skip_newlines(&mut tokens);
    while !is_at_end(&mut tokens) {
        statements.push(parse_declaration(&mut tokens)?);
        skip_newlines(&mut tokens);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and descends through the precedence
/// ladder from there.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative: `a = b = 0` binds as `a = (b = 0)`.
/// Anything other than a bare variable on the left of `=` is rejected at
/// the operator token.
///
/// Grammar: `assignment := or ("=" assignment)?`
///
/// # Errors
/// - `Invalid assignment target` when the left-hand side is not a variable.
/// - Propagates errors from sub-expression parsing.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_or(tokens)?;

    if let Some(equals) = advance_if(tokens, &TokenKind::Assign) {
        let line = equals.line;
        let value = parse_assignment(tokens)?;

        return match expr {
            Expr::Variable { name, .. } => Ok(Expr::Assign { name,
                                                             value: Box::new(value),
                                                             line }),
            _ => Err(error_at(equals, "Invalid assignment target")),
        };
    }

    Ok(expr)
}

/// Returns `true` when the stream is exhausted or at the `Eof` marker.
pub fn is_at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(true, |token| token.kind == TokenKind::Eof)
}

/// Returns `true` when the next token has the given kind.
pub fn check<'a, I>(tokens: &mut Peekable<I>, kind: &TokenKind) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|token| token.kind == *kind)
}

/// Consumes and returns the next token when it has the given kind.
pub fn advance_if<'a, I>(tokens: &mut Peekable<I>, kind: &TokenKind) -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == *kind => tokens.next(),
        _ => None,
    }
}

/// Consumes the next token, requiring it to have the given kind.
///
/// # Errors
/// Returns a [`ParseError`] anchored to the offending token (or to the end
/// of input) carrying `message`.
pub fn expect<'a, I>(tokens: &mut Peekable<I>,
                     kind: &TokenKind,
                     message: &str)
                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == *kind => Ok(tokens.next().unwrap()),
        Some(token) => Err(error_at(token, message)),
        None => Err(ParseError::UnexpectedEndOfInput { line:    0,
                                                       message: message.to_string(), }),
    }
}

/// Consumes an identifier token and returns its name and line.
///
/// # Errors
/// Returns a [`ParseError`] carrying `message` when the next token is not
/// an identifier.
pub fn expect_identifier<'a, I>(tokens: &mut Peekable<I>,
                                message: &str)
                                -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) => {
            if let TokenKind::Identifier(name) = &token.kind {
                let found = (name.clone(), token.line);
                tokens.next();
                Ok(found)
            } else {
                Err(error_at(token, message))
            }
        },
        None => Err(ParseError::UnexpectedEndOfInput { line:    0,
                                                       message: message.to_string(), }),
    }
}

/// Builds a parse error anchored to `token`.
///
/// The `Eof` marker anchors to "end" instead of a lexeme.
#[must_use]
pub fn error_at(token: &Token, message: &str) -> ParseError {
    if token.kind == TokenKind::Eof {
        ParseError::UnexpectedEndOfInput { line:    token.line,
                                           message: message.to_string(), }
    } else {
        ParseError::UnexpectedToken { lexeme:  token.lexeme.clone(),
                                      line:    token.line,
                                      message: message.to_string(), }
    }
}

/// Skips any run of `Newline` tokens.
pub fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while advance_if(tokens, &TokenKind::Newline).is_some() {}
}

/// Advances to a likely statement boundary after a parse error.
///
/// The stream is consumed up to and including the next `Newline`, or up to
/// (but not including) the next statement keyword. The driver currently
/// aborts on the first error instead of recovering, so nothing calls this
/// yet; it is kept as the designated recovery point.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.next() {
        if token.kind == TokenKind::Newline {
            return;
        }
        let at_statement = tokens.peek().is_some_and(|next| {
                                             matches!(next.kind,
                                                      TokenKind::Def
                                                      | TokenKind::If
                                                      | TokenKind::While
                                                      | TokenKind::For
                                                      | TokenKind::Return
                                                      | TokenKind::Print)
                                         });
        if at_statement {
            return;
        }
    }
}
