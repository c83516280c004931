//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Let and return statements
//! - Prefix and infix expressions, operator precedence
//! - If expressions, function literals and calls
//! - Diagnostics and recovery on malformed input

use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper, Node, Program, Stmt, StmtType},
        expressions::{
            BooleanExpr, CallExpr, FnExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    lookups::{Precedence, TOKEN_LOOKUPS},
    parser::{parse, Parser, MAX_EXPRESSION_DEPTH},
};

fn parse_checked(source: &str) -> Program {
    let (parser, program) = parse(source.to_string(), Some("test.monkey".to_string()));
    assert!(
        parser.errors().is_empty(),
        "unexpected parser errors for {:?}: {:?}",
        source,
        parser.errors()
    );
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let (parser, _) = parse(source.to_string(), None);
    parser.errors()
}

fn single_expression(source: &str) -> ExprWrapper {
    let program = parse_checked(source);
    assert_eq!(program.len(), 1, "expected one statement in {:?}", source);

    let stmt = program.statements[0]
        .downcast_ref::<ExpressionStmt>()
        .expect("not an expression statement");
    stmt.expression.clone()
}

fn assert_integer(expr: &ExprWrapper, expected: i64) {
    let integer = expr.downcast_ref::<IntegerExpr>().expect("not an integer");
    assert_eq!(integer.value, expected);
}

fn assert_identifier(expr: &ExprWrapper, expected: &str) {
    let ident = expr
        .downcast_ref::<IdentifierExpr>()
        .expect("not an identifier");
    assert_eq!(ident.value, expected);
    assert_eq!(ident.token_literal(), expected);
}

#[test]
fn test_parser_is_primed() {
    let parser = Parser::new(Lexer::new("let x".to_string(), None));

    assert_eq!(parser.current_token_kind(), TokenKind::Let);
    assert_eq!(parser.peek_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.peek_token().literal, "x");
}

#[test]
fn test_parse_let_statements() {
    let program = parse_checked("let x = 5;\nlet y = true;\nlet foobar = y;");
    let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];

    assert_eq!(program.len(), 3);
    for (stmt, (name, value)) in program.iter().zip(expected) {
        assert_eq!(stmt.get_stmt_type(), StmtType::LetStmt);
        assert_eq!(stmt.token_literal(), "let");

        let let_stmt = stmt.downcast_ref::<LetStmt>().unwrap();
        assert_eq!(let_stmt.name.value, name);
        assert_eq!(let_stmt.name.token_literal(), name);
        assert_eq!(let_stmt.value.to_string(), value);
    }
}

#[test]
fn test_parse_single_let() {
    let program = parse_checked("let x = 5;");

    let let_stmt = program.statements[0].downcast_ref::<LetStmt>().unwrap();
    assert_eq!(let_stmt.name.value, "x");
    assert_integer(&let_stmt.value, 5);
}

#[test]
fn test_let_with_expression_value() {
    let program = parse_checked("let total = a + b * 2");

    assert_eq!(program.to_string(), "let total = (a + (b * 2));");
}

#[test]
fn test_parse_return_statements() {
    let program = parse_checked("return 5;\nreturn 10;\nreturn add(15);");

    assert_eq!(program.len(), 3);
    for stmt in program.iter() {
        assert_eq!(stmt.get_stmt_type(), StmtType::ReturnStmt);
        assert_eq!(stmt.token_literal(), "return");
    }

    let last = program.statements[2].downcast_ref::<ReturnStmt>().unwrap();
    assert_eq!(last.value.get_expr_type(), ExprType::Call);
    assert_eq!(program.statements[2].to_string(), "return add(15);");
}

#[test]
fn test_identifier_expression() {
    let expr = single_expression("foobar;");
    assert_identifier(&expr, "foobar");
}

#[test]
fn test_integer_expression() {
    let expr = single_expression("5;");
    assert_integer(&expr, 5);
    assert_eq!(expr.token_literal(), "5");
}

#[test]
fn test_integer_limits() {
    assert_integer(&single_expression("9223372036854775807"), i64::MAX);

    let (parser, program) = parse("9223372036854775808".to_string(), None);
    assert_eq!(
        parser.errors(),
        vec!["could not parse \"9223372036854775808\" as integer"]
    );
    assert!(program.is_empty());
}

#[test]
fn test_leading_zeros_are_decimal() {
    assert_integer(&single_expression("010"), 10);
    assert_integer(&single_expression("09"), 9);
}

#[test]
fn test_boolean_expression() {
    for (source, expected) in [("true;", true), ("false;", false)] {
        let expr = single_expression(source);
        let boolean = expr.downcast_ref::<BooleanExpr>().unwrap();
        assert_eq!(boolean.value, expected);
    }
}

#[test]
fn test_prefix_expressions() {
    let cases = [
        ("!5;", "!", "5"),
        ("-15;", "-", "15"),
        ("!foobar;", "!", "foobar"),
        ("-foobar;", "-", "foobar"),
        ("!true;", "!", "true"),
        ("!false;", "!", "false"),
    ];

    for (source, operator, right) in cases {
        let expr = single_expression(source);
        assert_eq!(expr.get_expr_type(), ExprType::Prefix);

        let prefix = expr.downcast_ref::<PrefixExpr>().unwrap();
        assert_eq!(prefix.operator, operator);
        assert_eq!(prefix.right.to_string(), right);
    }
}

#[test]
fn test_prefix_operand_kinds() {
    let minus_five = single_expression("-5");
    let prefix = minus_five.downcast_ref::<PrefixExpr>().unwrap();
    assert_integer(&prefix.right, 5);

    let not_true = single_expression("!true");
    let prefix = not_true.downcast_ref::<PrefixExpr>().unwrap();
    assert!(prefix.right.downcast_ref::<BooleanExpr>().unwrap().value);
}

#[test]
fn test_double_negation() {
    let expr = single_expression("--5");

    let outer = expr.downcast_ref::<PrefixExpr>().unwrap();
    assert_eq!(outer.operator, "-");

    let inner = outer.right.downcast_ref::<PrefixExpr>().unwrap();
    assert_eq!(inner.operator, "-");
    assert_integer(&inner.right, 5);

    assert_eq!(expr.to_string(), "(-(-5))");
}

#[test]
fn test_infix_expressions() {
    let cases = [
        ("5 + 5;", "5", "+", "5"),
        ("5 - 5;", "5", "-", "5"),
        ("5 * 5;", "5", "*", "5"),
        ("5 / 5;", "5", "/", "5"),
        ("5 > 5;", "5", ">", "5"),
        ("5 < 5;", "5", "<", "5"),
        ("5 == 5;", "5", "==", "5"),
        ("5 != 5;", "5", "!=", "5"),
        ("alice * bob;", "alice", "*", "bob"),
        ("true == true", "true", "==", "true"),
        ("true != false", "true", "!=", "false"),
    ];

    for (source, left, operator, right) in cases {
        let expr = single_expression(source);
        let infix = expr.downcast_ref::<InfixExpr>().unwrap();

        assert_eq!(infix.left.to_string(), left);
        assert_eq!(infix.operator, operator);
        assert_eq!(infix.right.to_string(), right);
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_checked(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_if_expression() {
    let expr = single_expression("if (x < y) { x }");
    let if_expr = expr.downcast_ref::<IfExpr>().unwrap();

    assert_eq!(if_expr.condition.to_string(), "(x < y)");
    assert_eq!(if_expr.consequence.statements.len(), 1);

    let consequence = if_expr.consequence.statements[0]
        .downcast_ref::<ExpressionStmt>()
        .unwrap();
    assert_identifier(&consequence.expression, "x");
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_if_else_expression() {
    let expr = single_expression("if (x < y) { x } else { y; z }");
    let if_expr = expr.downcast_ref::<IfExpr>().unwrap();

    let alternative = if_expr.alternative.as_ref().unwrap();
    assert_eq!(alternative.statements.len(), 2);
    assert_eq!(alternative.token_literal(), "{");
    assert_eq!(expr.to_string(), "if(x < y) xelse yz");
}

#[test]
fn test_function_literal() {
    let expr = single_expression("fn(x, y) { x + y; }");
    let function = expr.downcast_ref::<FnExpr>().unwrap();

    let names: Vec<&str> = function
        .parameters
        .iter()
        .map(|param| param.value.as_str())
        .collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(function.body.statements.len(), 1);
    assert_eq!(function.body.statements[0].to_string(), "(x + y)");
    assert_eq!(expr.to_string(), "fn(x, y) (x + y)");
}

#[test]
fn test_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        let expr = single_expression(source);
        let function = expr.downcast_ref::<FnExpr>().unwrap();
        let names: Vec<&str> = function
            .parameters
            .iter()
            .map(|param| param.value.as_str())
            .collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_call_expression() {
    let expr = single_expression("add(1, 2 * 3, 4 + 5);");
    let call = expr.downcast_ref::<CallExpr>().unwrap();

    assert_identifier(&call.function, "add");
    assert_eq!(call.arguments.len(), 3);
    assert_integer(&call.arguments[0], 1);
    assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
    assert_eq!(call.arguments[2].to_string(), "(4 + 5)");
}

#[test]
fn test_call_on_function_literal() {
    let expr = single_expression("fn(x) { x }(5)");
    let call = expr.downcast_ref::<CallExpr>().unwrap();

    assert_eq!(call.function.get_expr_type(), ExprType::Fn);
    assert!(call.arguments.len() == 1);
}

#[test]
fn test_semicolons_are_optional() {
    let program = parse_checked("let a = 1\nlet b = 2\na + b");

    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "let a = 1;let b = 2;(a + b)");
}

#[test]
fn test_let_errors_are_accumulated() {
    let errors = parse_errors("let x 5;\nlet = 10;\nlet 838383;");

    assert_eq!(
        errors,
        vec![
            "expected next token to be ASSIGN, got INT instead",
            "expected next token to be IDENT, got ASSIGN instead",
            "no prefix parse function for ASSIGN found",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

#[test]
fn test_broken_statement_is_dropped() {
    let (parser, program) = parse("let x 5; let y = 7;".to_string(), None);

    assert_eq!(parser.errors().len(), 1);
    // `5;` survives as an expression statement, then the second let parses.
    assert_eq!(program.to_string(), "5let y = 7;");
}

#[test]
fn test_no_prefix_parse_fn() {
    let (parser, program) = parse("return ;".to_string(), None);

    assert_eq!(
        parser.errors(),
        vec!["no prefix parse function for SEMICOLON found"]
    );
    assert!(program.is_empty());
}

#[test]
fn test_illegal_token_reported_by_parser() {
    let errors = parse_errors("let a = @;");

    // The parser resumes on the `;` left behind by the failed let.
    assert_eq!(
        errors,
        vec![
            "no prefix parse function for ILLEGAL found",
            "no prefix parse function for SEMICOLON found",
        ]
    );
}

#[test]
fn test_missing_closing_paren() {
    assert_eq!(
        parse_errors("(1 + 2"),
        vec!["expected next token to be RPAREN, got EOF instead"]
    );
}

#[test]
fn test_unterminated_block() {
    assert_eq!(
        parse_errors("if (x) { x"),
        vec!["expected next token to be RBRACE, got EOF instead"]
    );
}

#[test]
fn test_bad_parameter_list() {
    assert_eq!(
        parse_errors("fn(x, 1) { x }"),
        vec![
            "expected next token to be IDENT, got INT instead",
            "no prefix parse function for RPAREN found",
            "no prefix parse function for LBRACE found",
            "no prefix parse function for RBRACE found",
        ]
    );
}

#[test]
fn test_error_positions() {
    let (parser, _) = parse("let x 5;".to_string(), Some("test.monkey".to_string()));
    let diagnostics = parser.diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_position().0, 6);
    assert_eq!(*diagnostics[0].get_position().1, "test.monkey");
    assert_eq!(
        diagnostics[0].get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            got: TokenKind::Int,
        }
    );
}

#[test]
fn test_nesting_limit() {
    let source = format!("{}5", "-".repeat(MAX_EXPRESSION_DEPTH + 10));
    let (parser, _) = parse(source, None);

    assert_eq!(
        parser.errors()[0],
        format!("expression nested deeper than {} levels", MAX_EXPRESSION_DEPTH)
    );

    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    let (parser, program) = parse(source, None);
    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "1");
}

#[test]
fn test_garbage_does_not_panic() {
    let (parser, _) = parse("@#$ let ) } fn ( if else , ;; = ==".to_string(), None);

    assert!(!parser.errors().is_empty());
}

#[test]
fn test_empty_program() {
    let (parser, program) = parse(String::new(), None);

    assert!(parser.errors().is_empty());
    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_lookups() {
    assert!(TOKEN_LOOKUPS.get_prefix(TokenKind::Identifier).is_some());
    assert!(TOKEN_LOOKUPS.get_prefix(TokenKind::Semicolon).is_none());
    assert!(TOKEN_LOOKUPS.get_infix(TokenKind::Plus).is_some());
    assert!(TOKEN_LOOKUPS.get_stmt(TokenKind::Let).is_some());
    assert_eq!(TOKEN_LOOKUPS.precedence(TokenKind::Star), Precedence::Product);
    assert_eq!(TOKEN_LOOKUPS.precedence(TokenKind::OpenParen), Precedence::Call);
    assert_eq!(TOKEN_LOOKUPS.precedence(TokenKind::Semicolon), Precedence::Lowest);
    assert!(Precedence::Prefix > Precedence::Product);
}
