use minipy::{
    error::LexErrorKind,
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
                      .unwrap_or_else(|e| panic!("tokenization of {source:?} failed: {e}"))
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).into_iter().map(|token| token.kind).collect()
}

fn lex_error(source: &str) -> minipy::error::LexError {
    Lexer::new(source).tokenize()
                      .expect_err("tokenization unexpectedly succeeded")
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

#[test]
fn integer_literal() {
    assert_eq!(kinds("42\n"),
               vec![TokenKind::Integer(42), TokenKind::Newline, TokenKind::Eof]);
}

#[test]
fn float_literals() {
    assert_eq!(kinds("3.14\n"),
               vec![TokenKind::Float(3.14), TokenKind::Newline, TokenKind::Eof]);
    assert_eq!(kinds("10e3\n"),
               vec![TokenKind::Float(10000.0), TokenKind::Newline, TokenKind::Eof]);
    assert_eq!(kinds("2.5e-2\n"),
               vec![TokenKind::Float(0.025), TokenKind::Newline, TokenKind::Eof]);
    assert_eq!(kinds("1E2\n"),
               vec![TokenKind::Float(100.0), TokenKind::Newline, TokenKind::Eof]);
}

#[test]
fn missing_exponent_digits_is_an_error() {
    let err = lex_error("1e\n");
    assert_eq!(err.kind, LexErrorKind::MissingExponentDigits);
    assert_eq!((err.line, err.column), (1, 1));

    let err = lex_error("x = 3.5e+\n");
    assert_eq!(err.kind, LexErrorKind::MissingExponentDigits);
    assert_eq!((err.line, err.column), (1, 5));
}

#[test]
fn integer_literal_overflow_is_an_error() {
    let err = lex_error("9223372036854775808\n");
    assert_eq!(err.kind, LexErrorKind::IntegerTooLarge);

    // The maximum value itself still fits.
    assert_eq!(kinds("9223372036854775807\n")[0],
               TokenKind::Integer(i64::MAX));
}

#[test]
fn string_literals() {
    assert_eq!(kinds("\"hi\"\n")[0], TokenKind::Str("hi".to_string()));
    assert_eq!(kinds("'single'\n")[0], TokenKind::Str("single".to_string()));
    assert_eq!(kinds("\"\"\n")[0], TokenKind::Str(String::new()));
}

#[test]
fn string_escapes() {
    assert_eq!(kinds("\"a\\nb\"\n")[0], TokenKind::Str("a\nb".to_string()));
    assert_eq!(kinds("\"tab\\there\"\n")[0],
               TokenKind::Str("tab\there".to_string()));
    assert_eq!(kinds("\"q\\\"q\"\n")[0], TokenKind::Str("q\"q".to_string()));
    assert_eq!(kinds("'it\\'s'\n")[0], TokenKind::Str("it's".to_string()));
    assert_eq!(kinds("\"back\\\\slash\"\n")[0],
               TokenKind::Str("back\\slash".to_string()));
    // An unknown escape passes the character through.
    assert_eq!(kinds("\"\\q\"\n")[0], TokenKind::Str("q".to_string()));
}

#[test]
fn unterminated_string_is_an_error() {
    let err = lex_error("\"abc\n");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (1, 1));

    let err = lex_error("x = 'oops");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (1, 5));
}

#[test]
fn unexpected_character_is_an_error() {
    let err = lex_error("@\n");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter);

    let err = lex_error("x = 1 ! 2\n");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter);
    assert_eq!((err.line, err.column), (1, 7));
}

#[test]
fn arithmetic_operators() {
    assert_eq!(kinds("+ - * / // % **\n"),
               vec![TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Star,
                    TokenKind::Slash,
                    TokenKind::DoubleSlash,
                    TokenKind::Percent,
                    TokenKind::DoubleStar,
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn comparison_operators() {
    assert_eq!(kinds("== != < <= > >=\n"),
               vec![TokenKind::EqualEqual,
                    TokenKind::BangEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn assignment_operators() {
    assert_eq!(kinds("= += -= *= /=\n"),
               vec![TokenKind::Assign,
                    TokenKind::PlusAssign,
                    TokenKind::MinusAssign,
                    TokenKind::StarAssign,
                    TokenKind::SlashAssign,
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn every_keyword_lexes_as_its_keyword_token() {
    let source = "def return if elif else while for in and or not True False None print assert\n";
    assert_eq!(kinds(source),
               vec![TokenKind::Def,
                    TokenKind::Return,
                    TokenKind::If,
                    TokenKind::Elif,
                    TokenKind::Else,
                    TokenKind::While,
                    TokenKind::For,
                    TokenKind::In,
                    TokenKind::And,
                    TokenKind::Or,
                    TokenKind::Not,
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::None,
                    TokenKind::Print,
                    TokenKind::Assert,
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn identifiers_that_merely_start_with_keywords_stay_identifiers() {
    assert_eq!(kinds("deffy iffy printer\n"),
               vec![ident("deffy"),
                    ident("iffy"),
                    ident("printer"),
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn identifier_shapes() {
    assert_eq!(kinds("_foo bar9 _\n"),
               vec![ident("_foo"), ident("bar9"), ident("_"), TokenKind::Newline, TokenKind::Eof]);
}

#[test]
fn indent_and_dedent_around_a_block() {
    assert_eq!(kinds("if x:\n    y\nz\n"),
               vec![TokenKind::If,
                    ident("x"),
                    TokenKind::Colon,
                    TokenKind::Newline,
                    TokenKind::Indent,
                    ident("y"),
                    TokenKind::Newline,
                    TokenKind::Dedent,
                    ident("z"),
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn nested_blocks_open_and_close_one_level_at_a_time() {
    let stream = kinds("if a:\n    if b:\n        x\n");
    let indents = stream.iter().filter(|kind| **kind == TokenKind::Indent).count();
    let dedents = stream.iter().filter(|kind| **kind == TokenKind::Dedent).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
}

#[test]
fn indent_and_dedent_counts_balance() {
    let samples = ["x = 1\n",
                   "if a:\n    b\n",
                   "if a:\n    if b:\n        c\nelse:\n    d\n",
                   "def f(n):\n    while n > 0:\n        n -= 1\n    return n\n",
                   "if a:\n    b\n\n\nc\n",
                   "if a:\n    b"];
    for source in samples {
        let stream = kinds(source);
        let indents = stream.iter().filter(|kind| **kind == TokenKind::Indent).count();
        let dedents = stream.iter().filter(|kind| **kind == TokenKind::Dedent).count();
        assert_eq!(indents, dedents, "unbalanced for {source:?}");
    }
}

#[test]
fn blank_and_comment_lines_produce_no_tokens() {
    assert_eq!(kinds("x = 1\n\n# note\n   \ny = 2\n"),
               vec![ident("x"),
                    TokenKind::Assign,
                    TokenKind::Integer(1),
                    TokenKind::Newline,
                    ident("y"),
                    TokenKind::Assign,
                    TokenKind::Integer(2),
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn blank_lines_inside_a_block_leave_the_indent_stack_alone() {
    assert_eq!(kinds("if a:\n    b\n\n    c\n"),
               vec![TokenKind::If,
                    ident("a"),
                    TokenKind::Colon,
                    TokenKind::Newline,
                    TokenKind::Indent,
                    ident("b"),
                    TokenKind::Newline,
                    ident("c"),
                    TokenKind::Newline,
                    TokenKind::Dedent,
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn trailing_comment_does_not_disturb_the_newline() {
    assert_eq!(kinds("x = 1  # note\ny\n"),
               vec![ident("x"),
                    TokenKind::Assign,
                    TokenKind::Integer(1),
                    TokenKind::Newline,
                    ident("y"),
                    TokenKind::Newline,
                    TokenKind::Eof]);
}

#[test]
fn consecutive_newlines_never_appear() {
    let samples = ["x\n\n\ny\n", "\n\n\n", "if a:\n    b\n\n\nc\n", "# only\n\n# comments\n"];
    for source in samples {
        let stream = kinds(source);
        for pair in stream.windows(2) {
            assert!(!(pair[0] == TokenKind::Newline && pair[1] == TokenKind::Newline),
                    "consecutive newlines in {source:?}");
        }
    }
}

#[test]
fn inconsistent_dedent_is_an_error() {
    let err = lex_error("if a:\n        x\n    y\n");
    assert_eq!(err.kind, LexErrorKind::InconsistentIndentation);
    assert_eq!((err.line, err.column), (3, 5));
}

#[test]
fn a_tab_counts_as_eight_columns_of_indentation() {
    // One tab and eight spaces sit on the same level.
    assert_eq!(kinds("if a:\n\tx\n        y\n"),
               kinds("if a:\n        x\n        y\n"));

    // Two spaces do not match a tab's level.
    let err = lex_error("if a:\n\tx\n  y\n");
    assert_eq!(err.kind, LexErrorKind::InconsistentIndentation);
}

#[test]
fn missing_final_newline_is_synthesized() {
    assert_eq!(kinds("x"), vec![ident("x"), TokenKind::Newline, TokenKind::Eof]);
}

#[test]
fn empty_source_yields_only_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn synthetic_tokens_have_empty_lexemes() {
    for token in tokens("if a:\n    b\n") {
        match token.kind {
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof => {
                assert!(token.lexeme.is_empty());
            },
            _ => assert!(!token.lexeme.is_empty()),
        }
    }
}

#[test]
fn lines_and_columns_are_one_based() {
    let tokens = tokens("x = 5\ny = 6\n");
    let positions: Vec<(usize, usize)> =
        tokens.iter().map(|token| (token.line, token.column)).collect();
    assert_eq!(positions,
               vec![(1, 1), (1, 3), (1, 5), (1, 6), (2, 1), (2, 3), (2, 5), (2, 6), (3, 1)]);
}

#[test]
fn lexemes_are_exact_source_slices() {
    let tokens = tokens("count += 12\n");
    assert_eq!(tokens[0].lexeme, "count");
    assert_eq!(tokens[1].lexeme, "+=");
    assert_eq!(tokens[2].lexeme, "12");
}

#[test]
fn lexer_error_display_format() {
    let err = lex_error("\"abc\n");
    assert_eq!(err.to_string(), "Lexer Error [line 1, col 1]: Unterminated string");
}
