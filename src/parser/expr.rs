use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            BooleanExpr, CallExpr, FnExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::Precedence,
    parser::{Parser, MAX_EXPRESSION_DEPTH},
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<ExprWrapper> {
    if parser.depth() >= MAX_EXPRESSION_DEPTH {
        let position = parser.get_position();
        parser.record(
            ErrorImpl::NestingTooDeep {
                limit: MAX_EXPRESSION_DEPTH,
            },
            position,
        );
        return None;
    }

    parser.descend();
    let expr = parse_expr_at_depth(parser, precedence);
    parser.ascend();

    expr
}

fn parse_expr_at_depth(parser: &mut Parser, precedence: Precedence) -> Option<ExprWrapper> {
    // First parse the prefix side
    let token_kind = parser.current_token_kind();
    let Some(prefix) = parser.get_lookups().get_prefix(token_kind) else {
        let position = parser.get_position();
        parser.record(ErrorImpl::NoPrefixParseFn { kind: token_kind }, position);
        return None;
    };

    let mut left = prefix(parser)?;

    // While the next operator binds tighter than the caller's, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = parser.get_lookups().get_infix(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.next_token();
        left = infix(parser, left)?;
    }

    Some(left)
}

/// Does not advance past the identifier.
pub fn parse_identifier_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    Some(ExprWrapper::new(parse_identifier(parser)))
}

pub(crate) fn parse_identifier(parser: &Parser) -> IdentifierExpr {
    let token = parser.current_token().clone();
    IdentifierExpr {
        value: token.literal.clone(),
        token,
    }
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(ExprWrapper::new(IntegerExpr { token, value })),
        Err(_) => {
            parser.record(
                ErrorImpl::IntegerParseError {
                    literal: token.literal.clone(),
                },
                token.span.start.clone(),
            );
            None
        }
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    Some(ExprWrapper::new(BooleanExpr {
        token: parser.current_token().clone(),
        value: parser.cur_token_is(TokenKind::True),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    parser.next_token();
    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(ExprWrapper::new(PrefixExpr {
        operator: token.literal.clone(),
        token,
        right,
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: ExprWrapper) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    let precedence = parser.cur_precedence();

    parser.next_token();
    let right = parse_expr(parser, precedence)?;

    Some(ExprWrapper::new(InfixExpr {
        operator: token.literal.clone(),
        token,
        left,
        right,
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    parser.next_token();

    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    // if (<condition>) { <consequence> } else { <alternative> }
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    parser.next_token();
    let condition = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) || !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();

        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }

        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(ExprWrapper::new(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    // fn(a, b) { a + b }
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    let parameters = parse_fn_parameters(parser)?;

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let body = parse_block_stmt(parser)?;

    Some(ExprWrapper::new(FnExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_fn_parameters(parser: &mut Parser) -> Option<Vec<IdentifierExpr>> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Some(parameters);
    }

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    parameters.push(parse_identifier(parser));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();

        if !parser.expect_peek(TokenKind::Identifier) {
            return None;
        }
        parameters.push(parse_identifier(parser));
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, function: ExprWrapper) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(ExprWrapper::new(CallExpr {
        token,
        function,
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<ExprWrapper>> {
    let mut args = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Some(args);
    }

    parser.next_token();
    args.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        args.push(parse_expr(parser, Precedence::Lowest)?);
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(args)
}
