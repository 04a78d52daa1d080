use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{
            core::ParseResult,
            unary::{parse_call, parse_not, parse_unary},
        },
        token::{Token, TokenKind},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`. This is the lowest tier below
/// assignment.
///
/// Grammar: `or := and ("or" and)*`
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_and(tokens)?;

    loop {
        let Some(token) = tokens.peek() else { break };
        if token.kind != TokenKind::Or {
            break;
        }
        let line = token.line;
        tokens.next();

        let right = parse_and(tokens)?;
        expr = Expr::Binary { left: Box::new(expr),
                              op: BinaryOperator::Or,
                              right: Box::new(right),
                              line };
    }

    Ok(expr)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and`; binds tighter than `or` and
/// looser than `not`.
///
/// Grammar: `and := not_expr ("and" not_expr)*`
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_not(tokens)?;

    loop {
        let Some(token) = tokens.peek() else { break };
        if token.kind != TokenKind::And {
            break;
        }
        let line = token.line;
        tokens.next();

        let right = parse_not(tokens)?;
        expr = Expr::Binary { left: Box::new(expr),
                              op: BinaryOperator::And,
                              right: Box::new(right),
                              line };
    }

    Ok(expr)
}

/// Parses comparison expressions.
///
/// All six comparison operators sit on one tier and chain left to right as
/// repeated binary nodes; there is no Python-style chained comparison, so
/// `a < b < c` means `(a < b) < c`.
///
/// Grammar:
/// `comparison := additive (("<" | "<=" | ">" | ">=" | "==" | "!=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_additive(tokens)?;

    loop {
        let Some(token) = tokens.peek() else { break };
        let Some(op) = token_to_binary_operator(&token.kind) else { break };
        if !matches!(op,
                     BinaryOperator::Less
                     | BinaryOperator::LessEqual
                     | BinaryOperator::Greater
                     | BinaryOperator::GreaterEqual
                     | BinaryOperator::Equal
                     | BinaryOperator::NotEqual)
        {
            break;
        }
        let line = token.line;
        tokens.next();

        let right = parse_additive(tokens)?;
        expr = Expr::Binary { left: Box::new(expr),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(expr)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_multiplicative(tokens)?;

    loop {
        let Some(token) = tokens.peek() else { break };
        let Some(op) = token_to_binary_operator(&token.kind) else { break };
        if !matches!(op, BinaryOperator::Add | BinaryOperator::Sub) {
            break;
        }
        let line = token.line;
        tokens.next();

        let right = parse_multiplicative(tokens)?;
        expr = Expr::Binary { left: Box::new(expr),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(expr)
}

/// Parses multiplication-tier expressions.
///
/// Grammar:
/// `multiplicative := unary_expr (("*" | "/" | "//" | "%") unary_expr)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_unary(tokens)?;

    loop {
        let Some(token) = tokens.peek() else { break };
        let Some(op) = token_to_binary_operator(&token.kind) else { break };
        if !matches!(op,
                     BinaryOperator::Mul
                     | BinaryOperator::Div
                     | BinaryOperator::FloorDiv
                     | BinaryOperator::Mod)
        {
            break;
        }
        let line = token.line;
        tokens.next();

        let right = parse_unary(tokens)?;
        expr = Expr::Binary { left: Box::new(expr),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(expr)
}

/// Parses an exponentiation expression.
///
/// `**` is right-associative: the right operand re-enters at the unary
/// tier, so `2 ** 3 ** 2` binds as `2 ** (3 ** 2)` and `2 ** -1` accepts
/// the negated exponent.
///
/// Grammar: `power := call ("**" unary_expr)?`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_call(tokens)?;

    let Some(token) = tokens.peek() else {
        return Ok(expr);
    };
    if token.kind != TokenKind::DoubleStar {
        return Ok(expr);
    }
    let line = token.line;
    tokens.next();

    let right = parse_unary(tokens)?;
    Ok(Expr::Binary { left: Box::new(expr),
                      op: BinaryOperator::Pow,
                      right: Box::new(right),
                      line })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators. The logical
/// operators are included even though their evaluation short-circuits; the
/// parser tiers filter for the operators they own.
///
/// # Example
/// ```
/// use minipy::{ast::BinaryOperator, interpreter::parser::binary::token_to_binary_operator};
/// use minipy::interpreter::token::TokenKind;
///
/// assert_eq!(token_to_binary_operator(&TokenKind::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&TokenKind::Colon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::DoubleSlash => Some(BinaryOperator::FloorDiv),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::DoubleStar => Some(BinaryOperator::Pow),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
