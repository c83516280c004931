//! Unit tests for the AST module.
//!
//! Covers source reconstruction through `Display`, token literals, and
//! cloning through the statement / expression wrappers.

use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    ast::{Expr, ExprType, ExprWrapper, Node, Program, Stmt, StmtType, StmtWrapper},
    expressions::{IdentifierExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn token(kind: TokenKind, literal: &str) -> Token {
    let file = Rc::new("test.monkey".to_string());
    Token {
        kind,
        literal: literal.to_string(),
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: Position(literal.len() as u32, file),
        },
    }
}

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

#[test]
fn test_program_display() {
    let program = Program {
        statements: vec![StmtWrapper::new(LetStmt {
            token: token(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: ExprWrapper::new(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_program_token_literal() {
    assert_eq!(Program::default().token_literal(), "");
    assert!(Program::default().is_empty());

    let program = Program {
        statements: vec![StmtWrapper::new(ReturnStmt {
            token: token(TokenKind::Return, "return"),
            value: ExprWrapper::new(ident("x")),
        })],
    };

    assert_eq!(program.token_literal(), "return");
    assert_eq!(program.to_string(), "return x;");
    assert_eq!(program.len(), 1);
}

#[test]
fn test_prefix_display() {
    let five = IntegerExpr {
        token: token(TokenKind::Int, "5"),
        value: 5,
    };
    let negated = PrefixExpr {
        token: token(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: ExprWrapper::new(PrefixExpr {
            token: token(TokenKind::Dash, "-"),
            operator: "-".to_string(),
            right: ExprWrapper::new(five),
        }),
    };

    assert_eq!(negated.to_string(), "(-(-5))");
    assert_eq!(negated.token_literal(), "-");
}

#[test]
fn test_wrapper_clone_and_downcast() {
    let stmt = StmtWrapper::new(ExpressionStmt {
        token: token(TokenKind::Identifier, "foo"),
        expression: ExprWrapper::new(ident("foo")),
    });
    let cloned = stmt.clone();

    assert_eq!(cloned.get_stmt_type(), StmtType::ExpressionStmt);
    assert_eq!(cloned.to_string(), "foo");

    let inner = cloned.downcast_ref::<ExpressionStmt>().unwrap();
    assert_eq!(inner.expression.get_expr_type(), ExprType::Identifier);
    assert_eq!(
        inner.expression.downcast_ref::<IdentifierExpr>().unwrap().value,
        "foo"
    );
    assert!(cloned.downcast_ref::<LetStmt>().is_none());
}
