use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef, Stmt},
    error::ParseError,
    interpreter::{
        parser::{
            block::parse_block_statements,
            core::{
                ParseResult, advance_if, check, expect, expect_identifier, parse_expression,
            },
        },
        token::{Token, TokenKind},
    },
};

/// Parses one declaration: a function definition or any other statement.
///
/// Grammar: `declaration := "def" function | statement`
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if advance_if(tokens, &TokenKind::Def).is_some() {
        return parse_function(tokens);
    }
    parse_statement(tokens)
}

/// Parses a single statement.
///
/// Keyword-led forms are dispatched on the leading token; everything else
/// is an expression statement. Each statement consumes its terminating
/// `Newline`.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if advance_if(tokens, &TokenKind::Print).is_some() {
        return parse_print(tokens);
    }
    if advance_if(tokens, &TokenKind::If).is_some() {
        return parse_if(tokens);
    }
    if advance_if(tokens, &TokenKind::While).is_some() {
        return parse_while(tokens);
    }
    if let Some(keyword) = advance_if(tokens, &TokenKind::Return) {
        return parse_return(tokens, keyword.line);
    }
    if let Some(keyword) = advance_if(tokens, &TokenKind::Assert) {
        return parse_assert(tokens, keyword.line);
    }
    parse_expression_statement(tokens)
}

/// Parses a function definition after its `def` keyword.
///
/// Grammar:
/// `function := IDENT "(" (IDENT ("," IDENT)*)? ")" ":" NEWLINE INDENT block`
///
/// # Errors
/// Reports the first missing piece of the header (name, parentheses,
/// parameter names, colon, newline, indent) at the offending token.
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let (name, line) = expect_identifier(tokens, "Expected function name")?;
    expect(tokens, &TokenKind::LParen, "Expected '(' after function name")?;

    let mut params = Vec::new();
    if !check(tokens, &TokenKind::RParen) {
        loop {
            params.push(expect_identifier(tokens, "Expected parameter name")?.0);
            if advance_if(tokens, &TokenKind::Comma).is_none() {
                break;
            }
        }
    }

    expect(tokens, &TokenKind::RParen, "Expected ')' after parameters")?;
    expect(tokens, &TokenKind::Colon, "Expected ':' after parameters")?;
    expect(tokens, &TokenKind::Newline, "Expected newline after ':'")?;
    expect(tokens,
           &TokenKind::Indent,
           "Expected indented block for function body")?;

    let body = parse_block_statements(tokens)?;

    Ok(Stmt::Function(Rc::new(FunctionDef { name,
                                            params,
                                            body,
                                            line })))
}

/// Parses a `print` statement after its keyword.
///
/// Grammar: `print := "(" (expression ("," expression)*)? ")" NEWLINE`
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &TokenKind::LParen, "Expected '(' after 'print'")?;

    let mut expressions = Vec::new();
    if !check(tokens, &TokenKind::RParen) {
        loop {
            expressions.push(parse_expression(tokens)?);
            if advance_if(tokens, &TokenKind::Comma).is_none() {
                break;
            }
        }
    }

    expect(tokens, &TokenKind::RParen, "Expected ')' after print arguments")?;
    expect(tokens, &TokenKind::Newline, "Expected newline after print statement")?;

    Ok(Stmt::Print { expressions })
}

/// Parses an `if` statement after its keyword, including the `elif` chain
/// and the optional `else` branch.
///
/// Each branch is a header (`expression ":" NEWLINE INDENT`) followed by an
/// indented block.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Colon, "Expected ':' after if condition")?;
    expect(tokens, &TokenKind::Newline, "Expected newline after ':'")?;
    expect(tokens, &TokenKind::Indent, "Expected indented block after if")?;

    let then_branch = Box::new(Stmt::Block { statements: parse_block_statements(tokens)?, });

    let mut elif_branches = Vec::new();
    while advance_if(tokens, &TokenKind::Elif).is_some() {
        let elif_condition = parse_expression(tokens)?;
        expect(tokens, &TokenKind::Colon, "Expected ':' after elif condition")?;
        expect(tokens, &TokenKind::Newline, "Expected newline after ':'")?;
        expect(tokens, &TokenKind::Indent, "Expected indented block after elif")?;

        let branch = Stmt::Block { statements: parse_block_statements(tokens)?, };
        elif_branches.push((elif_condition, branch));
    }

    let else_branch = if advance_if(tokens, &TokenKind::Else).is_some() {
        expect(tokens, &TokenKind::Colon, "Expected ':' after else")?;
        expect(tokens, &TokenKind::Newline, "Expected newline after ':'")?;
        expect(tokens, &TokenKind::Indent, "Expected indented block after else")?;

        Some(Box::new(Stmt::Block { statements: parse_block_statements(tokens)?, }))
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  elif_branches,
                  else_branch })
}

/// Parses a `while` statement after its keyword.
///
/// Grammar: `while := expression ":" NEWLINE INDENT block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Colon, "Expected ':' after while condition")?;
    expect(tokens, &TokenKind::Newline, "Expected newline after ':'")?;
    expect(tokens, &TokenKind::Indent, "Expected indented block after while")?;

    let body = Box::new(Stmt::Block { statements: parse_block_statements(tokens)?, });

    Ok(Stmt::While { condition, body })
}

/// Parses a `return` statement after its keyword.
///
/// The value expression is optional; a bare `return` yields `None` at
/// runtime.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let value = if check(tokens, &TokenKind::Newline) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };

    expect(tokens, &TokenKind::Newline, "Expected newline after return")?;

    Ok(Stmt::Return { value, line })
}

/// Parses an `assert` statement after its keyword.
///
/// Grammar: `assert := expression ("," expression)? NEWLINE`
///
/// The second expression is the failure message; it is stored unevaluated
/// and only computed when the condition turns out falsey.
fn parse_assert<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let condition = parse_expression(tokens)?;

    let message = if advance_if(tokens, &TokenKind::Comma).is_some() {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect(tokens, &TokenKind::Newline, "Expected newline after assert")?;

    Ok(Stmt::Assert { condition,
                      message,
                      line })
}

/// Parses an expression statement, handling compound assignment.
///
/// `x op= e` desugars into `x = x op e` with the binary node anchored to
/// the compound operator's line, and the right-hand side parsed at full
/// expression precedence. Only a bare variable is a valid target.
///
/// # Errors
/// - `Invalid assignment target` at the compound operator when the parsed
///   left-hand side is not a variable.
/// - `Expected newline ...` when the statement terminator is missing.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;

    let compound = tokens.peek().and_then(|token| {
                                    compound_operator(&token.kind).map(|op| {
                                                                      (op,
                                                                       token.line,
                                                                       token.lexeme.clone())
                                                                  })
                                });

    if let Some((op, line, lexeme)) = compound {
        tokens.next();

        let Expr::Variable { name, line: name_line } = expr else {
            return Err(ParseError::UnexpectedToken { lexeme,
                                                     line,
                                                     message:
                                                         "Invalid assignment target".to_string() });
        };

        let value = parse_expression(tokens)?;
        let combined = Expr::Binary { left: Box::new(Expr::Variable { name: name.clone(),
                                                                      line: name_line, }),
                                      op,
                                      right: Box::new(value),
                                      line };
        let assignment = Expr::Assign { name,
                                        value: Box::new(combined),
                                        line };

        expect(tokens, &TokenKind::Newline, "Expected newline after statement")?;
        return Ok(Stmt::Expression { expr: assignment });
    }

    expect(tokens, &TokenKind::Newline, "Expected newline after expression")?;
    Ok(Stmt::Expression { expr })
}

/// Maps a compound-assignment token to the binary operator it applies.
#[must_use]
pub const fn compound_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::PlusAssign => Some(BinaryOperator::Add),
        TokenKind::MinusAssign => Some(BinaryOperator::Sub),
        TokenKind::StarAssign => Some(BinaryOperator::Mul),
        TokenKind::SlashAssign => Some(BinaryOperator::Div),
        _ => None,
    }
}
