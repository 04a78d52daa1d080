use std::iter::Peekable;

use crate::{
    ast::Stmt,
    interpreter::{
        parser::{
            core::{ParseResult, check, expect, is_at_end, skip_newlines},
            statement::parse_declaration,
        },
        token::{Token, TokenKind},
    },
};

/// Parses the statements of an indented block.
///
/// The caller has already consumed the `Indent`; this collects declarations
/// until the matching `Dedent`, skipping blank lines between statements.
/// When the end of input arrives first the collected statements are
/// returned without consuming a dedent (the lexer normally balances every
/// indent, so this is the degenerate-input path).
///
/// Grammar: `block := declaration* DEDENT`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the block's `Indent`.
///
/// # Returns
/// The block's statements in source order.
pub fn parse_block_statements<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    while !check(tokens, &TokenKind::Dedent) && !is_at_end(tokens) {
        skip_newlines(tokens);
        if check(tokens, &TokenKind::Dedent) {
            break;
        }
        statements.push(parse_declaration(tokens)?);
    }

    if !is_at_end(tokens) {
        expect(tokens, &TokenKind::Dedent, "Expected dedent at end of block")?;
    }

    Ok(statements)
}
