use crate::{
    ast::{
        ast::StmtWrapper,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_identifier},
    lookups::Precedence,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    if let Some(stmt_fn) = parser.get_lookups().get_stmt(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = parse_identifier(parser);

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    parser.next_token();
    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(StmtWrapper::new(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();

    parser.next_token();
    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(StmtWrapper::new(ReturnStmt { token, value }))
}

/// Semicolons are optional after an expression statement.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// Parses statements up to the matching `}`.
///
/// Expects the current token to be the opening `{` and leaves the parser
/// on the closing `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<BlockStmt> {
    let token = parser.current_token().clone();
    let mut statements = vec![];

    parser.next_token();

    while !parser.cur_token_is(TokenKind::CloseCurly) {
        if parser.cur_token_is(TokenKind::EOF) {
            let position = parser.get_position();
            parser.record(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly,
                    got: TokenKind::EOF,
                },
                position,
            );
            return None;
        }

        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.next_token();
    }

    Some(BlockStmt { token, statements })
}
