use minipy::{
    ast::{BinaryOperator, Expr, LiteralValue, Stmt, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::Lexer, parser::core::parse_program},
};

fn parse(source: &str) -> Vec<Stmt> {
    let tokens = Lexer::new(source).tokenize()
                                   .unwrap_or_else(|e| panic!("lexing {source:?} failed: {e}"));
    parse_program(&tokens).unwrap_or_else(|e| panic!("parsing {source:?} failed: {e}"))
}

fn parse_error(source: &str) -> ParseError {
    let tokens = Lexer::new(source).tokenize()
                                   .unwrap_or_else(|e| panic!("lexing {source:?} failed: {e}"));
    parse_program(&tokens).expect_err("parse unexpectedly succeeded")
}

fn first_expr(source: &str) -> Expr {
    let mut statements = parse(source);
    match statements.remove(0) {
        Stmt::Expression { expr } => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn integer(value: i64) -> Box<Expr> {
    Box::new(Expr::Literal { value: LiteralValue::Integer(value),
                             line:  1, })
}

#[test]
fn literal_expressions() {
    assert_eq!(first_expr("42\n"),
               Expr::Literal { value: LiteralValue::Integer(42),
                               line:  1, });
    assert_eq!(first_expr("2.5\n"),
               Expr::Literal { value: LiteralValue::Float(2.5),
                               line:  1, });
    assert_eq!(first_expr("\"hi\"\n"),
               Expr::Literal { value: LiteralValue::Str("hi".to_string()),
                               line:  1, });
    assert_eq!(first_expr("True\n"),
               Expr::Literal { value: LiteralValue::Bool(true),
                               line:  1, });
    assert_eq!(first_expr("None\n"),
               Expr::Literal { value: LiteralValue::None,
                               line:  1, });
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expected = Expr::Binary { left:  integer(1),
                                  op:    BinaryOperator::Add,
                                  right: Box::new(Expr::Binary { left:  integer(2),
                                                                 op:    BinaryOperator::Mul,
                                                                 right: integer(3),
                                                                 line:  1, }),
                                  line:  1, };
    assert_eq!(first_expr("1 + 2 * 3\n"), expected);
}

#[test]
fn parentheses_override_precedence_and_keep_a_grouping_node() {
    let grouped = Expr::Grouping { expr: Box::new(Expr::Binary { left:  integer(1),
                                                                 op:    BinaryOperator::Add,
                                                                 right: integer(2),
                                                                 line:  1, }), };
    let expected = Expr::Binary { left:  Box::new(grouped),
                                  op:    BinaryOperator::Mul,
                                  right: integer(3),
                                  line:  1, };
    assert_eq!(first_expr("(1 + 2) * 3\n"), expected);
}

#[test]
fn power_is_right_associative() {
    let Expr::Binary { op: BinaryOperator::Pow, left, right, .. } =
        first_expr("2 ** 3 ** 2\n")
    else {
        panic!("expected a power expression at the root")
    };
    assert_eq!(*left,
               Expr::Literal { value: LiteralValue::Integer(2),
                               line:  1, });
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Pow, .. }));
}

#[test]
fn subtraction_is_left_associative() {
    let Expr::Binary { op: BinaryOperator::Sub, left, .. } = first_expr("10 - 5 - 2\n") else {
        panic!("expected subtraction at the root")
    };
    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Sub, .. }));
}

#[test]
fn comparisons_chain_as_repeated_binary_nodes() {
    let Expr::Binary { op: BinaryOperator::Less, left, .. } = first_expr("1 < 2 < 3\n") else {
        panic!("expected a comparison at the root")
    };
    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Less, .. }));
}

#[test]
fn unary_operators_nest() {
    let Expr::Unary { op: UnaryOperator::Negate, operand, .. } = first_expr("--5\n") else {
        panic!("expected a negation at the root")
    };
    assert!(matches!(*operand, Expr::Unary { op: UnaryOperator::Negate, .. }));

    let Expr::Unary { op: UnaryOperator::Not, operand, .. } = first_expr("not not True\n")
    else {
        panic!("expected a not at the root")
    };
    assert!(matches!(*operand, Expr::Unary { op: UnaryOperator::Not, .. }));
}

#[test]
fn unary_minus_binds_looser_than_power() {
    let Expr::Unary { op: UnaryOperator::Negate, operand, .. } = first_expr("-2 ** 2\n") else {
        panic!("expected a negation at the root")
    };
    assert!(matches!(*operand, Expr::Binary { op: BinaryOperator::Pow, .. }));
}

#[test]
fn not_binds_looser_than_comparison() {
    let Expr::Unary { op: UnaryOperator::Not, operand, .. } = first_expr("not 1 == 2\n") else {
        panic!("expected a not at the root")
    };
    assert!(matches!(*operand, Expr::Binary { op: BinaryOperator::Equal, .. }));
}

#[test]
fn assignment_parses_and_chains_right_associatively() {
    let Expr::Assign { name, value, .. } = first_expr("a = b = 0\n") else {
        panic!("expected an assignment at the root")
    };
    assert_eq!(name, "a");
    assert!(matches!(*value, Expr::Assign { .. }));
}

#[test]
fn only_a_bare_variable_is_an_assignment_target() {
    for source in ["1 = 2\n", "a + b = 1\n", "(a) = 1\n", "f() = 1\n"] {
        let err = parse_error(source);
        let ParseError::UnexpectedToken { lexeme, message, .. } = err else {
            panic!("expected an at-token error for {source:?}")
        };
        assert_eq!(lexeme, "=");
        assert_eq!(message, "Invalid assignment target");
    }
}

#[test]
fn compound_assignment_targets_follow_the_same_rule() {
    for (source, op) in [("1 += 2\n", "+="),
                         ("a + b -= 1\n", "-="),
                         ("f() *= 2\n", "*="),
                         ("(x) /= 2\n", "/=")]
    {
        let err = parse_error(source);
        let ParseError::UnexpectedToken { lexeme, message, .. } = err else {
            panic!("expected an at-token error for {source:?}")
        };
        assert_eq!(lexeme, op);
        assert_eq!(message, "Invalid assignment target");
    }
}

#[test]
fn compound_assignment_desugars_to_a_binary_assignment() {
    let Expr::Assign { name, value, .. } = first_expr("x += 2\n") else {
        panic!("expected an assignment at the root")
    };
    assert_eq!(name, "x");

    let Expr::Binary { op: BinaryOperator::Add, left, right, .. } = *value else {
        panic!("expected the desugared binary node")
    };
    assert_eq!(*left,
               Expr::Variable { name: "x".to_string(),
                                line: 1, });
    assert_eq!(*right,
               Expr::Literal { value: LiteralValue::Integer(2),
                               line:  1, });
}

#[test]
fn compound_assignment_rhs_parses_at_full_precedence() {
    let Expr::Assign { value, .. } = first_expr("x *= 1 + 2\n") else {
        panic!("expected an assignment at the root")
    };
    let Expr::Binary { op: BinaryOperator::Mul, right, .. } = *value else {
        panic!("expected the desugared multiplication")
    };
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Add, .. }));
}

#[test]
fn print_statements_collect_their_arguments() {
    let statements = parse("print()\nprint(1)\nprint(1, 2, 3)\n");
    let lengths: Vec<usize> = statements.iter()
                                        .map(|stmt| match stmt {
                                            Stmt::Print { expressions } => expressions.len(),
                                            other => panic!("expected print, got {other:?}"),
                                        })
                                        .collect();
    assert_eq!(lengths, vec![0, 1, 3]);
}

#[test]
fn if_statements_preserve_elif_and_else_structure() {
    let source = "if a:\n    x = 1\nelif b:\n    x = 2\nelif c:\n    x = 3\nelse:\n    x = 4\n";
    let statements = parse(source);
    let Stmt::If { elif_branches, else_branch, .. } = &statements[0] else {
        panic!("expected an if statement")
    };
    assert_eq!(elif_branches.len(), 2);
    assert!(else_branch.is_some());

    let statements = parse("if a:\n    x = 1\nelif b:\n    x = 2\n");
    let Stmt::If { elif_branches, else_branch, .. } = &statements[0] else {
        panic!("expected an if statement")
    };
    assert_eq!(elif_branches.len(), 1);
    assert!(else_branch.is_none());
}

#[test]
fn while_statements_carry_their_block() {
    let statements = parse("while n > 0:\n    n -= 1\n    m = n\n");
    let Stmt::While { body, .. } = &statements[0] else {
        panic!("expected a while statement")
    };
    let Stmt::Block { statements: inner } = body.as_ref() else {
        panic!("expected the loop body block")
    };
    assert_eq!(inner.len(), 2);
}

#[test]
fn function_definitions_record_name_params_and_body() {
    let statements = parse("def add(a, b):\n    return a + b\n");
    let Stmt::Function(def) = &statements[0] else {
        panic!("expected a function definition")
    };
    assert_eq!(def.name, "add");
    assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(def.body.len(), 1);
    assert!(matches!(def.body[0], Stmt::Return { value: Some(_), .. }));
}

#[test]
fn functions_may_have_no_parameters_and_bare_returns() {
    let statements = parse("def pause():\n    return\n");
    let Stmt::Function(def) = &statements[0] else {
        panic!("expected a function definition")
    };
    assert!(def.params.is_empty());
    assert!(matches!(def.body[0], Stmt::Return { value: None, .. }));
}

#[test]
fn assert_statements_take_an_optional_message() {
    let statements = parse("assert x\nassert x, \"boom\"\n");
    assert!(matches!(&statements[0], Stmt::Assert { message: None, .. }));
    assert!(matches!(&statements[1], Stmt::Assert { message: Some(_), .. }));
}

#[test]
fn calls_collect_arguments_and_chain() {
    let Expr::Call { arguments, callee, .. } = first_expr("f(1, 2)\n") else {
        panic!("expected a call")
    };
    assert_eq!(arguments.len(), 2);
    assert_eq!(*callee,
               Expr::Variable { name: "f".to_string(),
                                line: 1, });

    let Expr::Call { callee, .. } = first_expr("f(1)(2)\n") else {
        panic!("expected a call")
    };
    assert!(matches!(*callee, Expr::Call { .. }));
}

#[test]
fn blocks_tolerate_interior_blank_lines() {
    let statements = parse("if a:\n    x = 1\n\n    y = 2\n");
    let Stmt::If { then_branch, .. } = &statements[0] else {
        panic!("expected an if statement")
    };
    let Stmt::Block { statements: inner } = then_branch.as_ref() else {
        panic!("expected the then block")
    };
    assert_eq!(inner.len(), 2);
}

#[test]
fn top_level_blank_lines_are_skipped() {
    assert_eq!(parse("\n\nx = 1\n\n\n").len(), 1);
}

#[test]
fn statements_require_their_newline() {
    let err = parse_error("x = 1 y = 2\n");
    assert_eq!(err.to_string(),
               "[line 1] Error at 'y': Expected newline after expression");
}

#[test]
fn a_missing_block_reports_at_end() {
    let err = parse_error("if x:\n");
    assert_eq!(err.to_string(),
               "[line 2] Error at end: Expected indented block after if");
}

#[test]
fn an_unclosed_parenthesis_reports_the_interrupting_token() {
    let err = parse_error("(1 + 2\n");
    let ParseError::UnexpectedToken { message, .. } = err else {
        panic!("expected an at-token error")
    };
    assert_eq!(message, "Expected ')' after expression");
}

#[test]
fn keywords_do_not_parse_as_expressions() {
    let err = parse_error("x = elif\n");
    let ParseError::UnexpectedToken { lexeme, message, .. } = err else {
        panic!("expected an at-token error")
    };
    assert_eq!(lexeme, "elif");
    assert_eq!(message, "Expected expression");
}
