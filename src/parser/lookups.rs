use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{ExprWrapper, StmtWrapper},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator; later variants bind tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

pub type StmtHandler = fn(&mut Parser) -> Option<StmtWrapper>;
pub type PrefixHandler = fn(&mut Parser) -> Option<ExprWrapper>;
pub type InfixHandler = fn(&mut Parser, ExprWrapper) -> Option<ExprWrapper>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;

/// Handler registries keyed by token kind.
///
/// Built once per process and shared read-only by every parser.
#[derive(Default)]
pub struct Lookups {
    stmt_lookup: StmtLookup,
    prefix_lookup: PrefixLookup,
    infix_lookup: InfixLookup,
    precedence_lookup: PrecedenceLookup,
}

impl Lookups {
    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler for a token along with its precedence.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_prefix(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub fn get_infix(&self, kind: TokenKind) -> Option<InfixHandler> {
        self.infix_lookup.get(&kind).copied()
    }

    /// Tokens that cannot continue an expression rank as `Lowest`.
    pub fn precedence(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    // Equality and relational
    lookups.infix(TokenKind::Equals, Precedence::Equals, parse_infix_expr);
    lookups.infix(TokenKind::NotEquals, Precedence::Equals, parse_infix_expr);
    lookups.infix(TokenKind::Less, Precedence::LessGreater, parse_infix_expr);
    lookups.infix(TokenKind::Greater, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    lookups.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    lookups.infix(TokenKind::Dash, Precedence::Sum, parse_infix_expr);
    lookups.infix(TokenKind::Star, Precedence::Product, parse_infix_expr);
    lookups.infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    lookups.infix(TokenKind::OpenParen, Precedence::Call, parse_call_expr);

    // Literals and symbols
    lookups.prefix(TokenKind::Identifier, parse_identifier_expr);
    lookups.prefix(TokenKind::Int, parse_integer_expr);
    lookups.prefix(TokenKind::True, parse_boolean_expr);
    lookups.prefix(TokenKind::False, parse_boolean_expr);
    lookups.prefix(TokenKind::Not, parse_prefix_expr);
    lookups.prefix(TokenKind::Dash, parse_prefix_expr);
    lookups.prefix(TokenKind::OpenParen, parse_grouped_expr);
    lookups.prefix(TokenKind::If, parse_if_expr);
    lookups.prefix(TokenKind::Fn, parse_fn_expr);

    // Statements
    lookups.stmt(TokenKind::Let, parse_let_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);

    lookups
}

lazy_static! {
    pub static ref TOKEN_LOOKUPS: Lookups = create_token_lookups();
}
