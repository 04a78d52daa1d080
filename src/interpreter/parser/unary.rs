use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{
            binary::{parse_comparison, parse_power},
            core::{ParseResult, advance_if, check, error_at, expect, parse_expression},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a `not` expression.
///
/// `not` is prefix-recursive (`not not x` is legal) and binds looser than
/// comparisons, so `not a == b` negates the comparison.
///
/// Grammar: `not_expr := "not" not_expr | comparison`
pub fn parse_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(keyword) = advance_if(tokens, &TokenKind::Not) {
        let line = keyword.line;
        let operand = parse_not(tokens)?;
        return Ok(Expr::Unary { op: UnaryOperator::Not,
                                operand: Box::new(operand),
                                line });
    }
    parse_comparison(tokens)
}

/// Parses a unary-minus expression.
///
/// The operator is prefix-recursive, so `--x` negates twice. Binds tighter
/// than the multiplicative tier and looser than `**`, which makes
/// `-2 ** 2` parse as `-(2 ** 2)`.
///
/// Grammar: `unary_expr := "-" unary_expr | power`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(minus) = advance_if(tokens, &TokenKind::Minus) {
        let line = minus.line;
        let operand = parse_unary(tokens)?;
        return Ok(Expr::Unary { op: UnaryOperator::Negate,
                                operand: Box::new(operand),
                                line });
    }
    parse_power(tokens)
}

/// Parses a postfix call chain.
///
/// A primary expression may be followed by any number of argument lists:
/// `f(1)(2)` calls the result of `f(1)`. The call node is anchored to its
/// closing parenthesis for error reporting.
///
/// Grammar: `call := primary ("(" (expression ("," expression)*)? ")")*`
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_primary(tokens)?;

    while advance_if(tokens, &TokenKind::LParen).is_some() {
        let mut arguments = Vec::new();
        if !check(tokens, &TokenKind::RParen) {
            loop {
                arguments.push(parse_expression(tokens)?);
                if advance_if(tokens, &TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        let paren = expect(tokens, &TokenKind::RParen, "Expected ')' after arguments")?;
        expr = Expr::Call { callee: Box::new(expr),
                            arguments,
                            line: paren.line, };
    }

    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primaries are literals (`None`, booleans, numbers, strings), variable
/// references, and parenthesized expressions. A parenthesized expression
/// keeps an explicit grouping node in the tree.
///
/// # Errors
/// `Expected expression` at the offending token when nothing matches.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line:    0,
                                                      message:
                                                          "Expected expression".to_string(), });
    };
    let line = token.line;

    match &token.kind {
        TokenKind::True => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(true),
                               line })
        },
        TokenKind::False => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(false),
                               line })
        },
        TokenKind::None => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::None,
                               line })
        },
        TokenKind::Integer(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Integer(value),
                               line })
        },
        TokenKind::Float(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Float(value),
                               line })
        },
        TokenKind::Str(value) => {
            let value = value.clone();
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Str(value),
                               line })
        },
        TokenKind::Identifier(name) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        TokenKind::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RParen, "Expected ')' after expression")?;
            Ok(Expr::Grouping { expr: Box::new(expr) })
        },
        _ => Err(error_at(token, "Expected expression")),
    }
}
