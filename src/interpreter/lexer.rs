use logos::Logos;

use crate::{
    error::{LexError, LexErrorKind},
    interpreter::token::{Token, TokenKind},
};

/// Width contributed by a tab when measuring indentation (a simplified
/// fixed width).
const TAB_WIDTH: usize = 8;

/// Turns source text into the final token stream.
///
/// The raw tokenizer recognizes flat tokens; this layout pass runs over its
/// spanned output and supplies everything the off-side rule needs:
///
/// - leading whitespace of each line is measured against an indentation
///   stack (seeded with 0), emitting `Indent` when a line pushes deeper and
///   one `Dedent` per level popped when it returns outward;
/// - blank and comment-only lines never touch the stack;
/// - `Newline` tokens are collapsed so one never follows another `Newline`
///   or an `Indent`;
/// - at end of input every open level is popped, a final `Newline` is
///   supplied when missing, and a single `Eof` terminates the stream.
///
/// Positions are 1-based; a raw tokenizer error is converted into a
/// positioned [`LexError`] and aborts the run.
pub struct Lexer<'a> {
    source:        &'a str,
    tokens:        Vec<Token>,
    indents:       Vec<usize>,
    line:          usize,
    line_start:    usize,
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source,
               tokens: Vec::new(),
               indents: vec![0],
               line: 1,
               line_start: 0,
               at_line_start: true }
    }

    /// Consumes the source and produces the token stream.
    ///
    /// # Errors
    /// Returns a [`LexError`] for malformed tokens (stray characters,
    /// unterminated strings, bad exponents, oversized integer literals) and
    /// for dedents that match no enclosing indentation level.
    ///
    /// # Examples
    /// ```
    /// use minipy::interpreter::{lexer::Lexer, token::TokenKind};
    ///
    /// let tokens = Lexer::new("x = 1\n").tokenize().unwrap();
    /// let kinds: Vec<_> = tokens.into_iter().map(|token| token.kind).collect();
    /// assert_eq!(kinds,
    ///            vec![TokenKind::Identifier("x".to_string()),
    ///                 TokenKind::Assign,
    ///                 TokenKind::Integer(1),
    ///                 TokenKind::Newline,
    ///                 TokenKind::Eof]);
    /// ```
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut raw = TokenKind::lexer(self.source);

        while let Some(result) = raw.next() {
            let span = raw.span();
            let kind = result.map_err(|kind| self.error(kind, span.start))?;

            if kind == TokenKind::Newline {
                self.end_line(span.start);
                self.line += 1;
                self.line_start = span.end;
                self.at_line_start = true;
                continue;
            }

            if self.at_line_start {
                self.open_line(span.start)?;
            }

            self.tokens.push(Token { kind,
                                     lexeme: self.source[span.start..span.end].to_string(),
                                     line: self.line,
                                     column: self.column_at(span.start), });
        }

        self.finish();
        Ok(self.tokens)
    }

    /// Handles a physical line break.
    ///
    /// The `Newline` token is suppressed when nothing has been emitted yet
    /// or when the previous token is itself a `Newline` or an `Indent`;
    /// this collapses runs of blank lines and keeps block openings tight.
    fn end_line(&mut self, newline_pos: usize) {
        let suppress = match self.tokens.last() {
            Some(token) => {
                matches!(token.kind, TokenKind::Newline | TokenKind::Indent)
            },
            None => true,
        };
        if !suppress {
            self.push_synthetic(TokenKind::Newline, self.column_at(newline_pos));
        }
    }

    /// Applies the off-side rule at the first real token of a line.
    ///
    /// Leading spaces count one unit and tabs [`TAB_WIDTH`] units. Blank and
    /// comment-only lines never reach this point: their first raw token is
    /// the line break itself.
    fn open_line(&mut self, token_start: usize) -> Result<(), LexError> {
        let mut indent = 0usize;
        for byte in self.source[self.line_start..token_start].bytes() {
            indent += match byte {
                b' ' => 1,
                b'\t' => TAB_WIDTH,
                _ => 0,
            };
        }

        let column = self.column_at(token_start);
        let current = self.indents.last().copied().unwrap_or(0);

        if indent > current {
            self.indents.push(indent);
            self.push_synthetic(TokenKind::Indent, column);
        } else if indent < current {
            while self.indents.last().is_some_and(|top| *top > indent) {
                self.indents.pop();
                self.push_synthetic(TokenKind::Dedent, column);
            }
            if self.indents.last() != Some(&indent) {
                return Err(self.positioned(LexErrorKind::InconsistentIndentation, column));
            }
        }

        self.at_line_start = false;
        Ok(())
    }

    /// Flushes the stream at end of input.
    ///
    /// Every open indentation level is closed, a trailing `Newline` is
    /// supplied unless the last token already is one, and the `Eof` marker
    /// is appended.
    fn finish(&mut self) {
        let column = self.column_at(self.source.len());

        while self.indents.len() > 1 {
            self.indents.pop();
            self.push_synthetic(TokenKind::Dedent, column);
        }

        let needs_newline = self.tokens
                                .last()
                                .is_some_and(|token| token.kind != TokenKind::Newline);
        if needs_newline {
            self.push_synthetic(TokenKind::Newline, column);
        }

        self.push_synthetic(TokenKind::Eof, column);
    }

    fn push_synthetic(&mut self, kind: TokenKind, column: usize) {
        self.tokens.push(Token { kind,
                                 lexeme: String::new(),
                                 line: self.line,
                                 column, });
    }

    fn error(&self, kind: LexErrorKind, position: usize) -> LexError {
        self.positioned(kind, self.column_at(position))
    }

    const fn positioned(&self, kind: LexErrorKind, column: usize) -> LexError {
        LexError { kind,
                   line: self.line,
                   column }
    }

    const fn column_at(&self, position: usize) -> usize {
        position - self.line_start + 1
    }
}
