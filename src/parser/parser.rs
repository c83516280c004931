//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from a [`Lexer`] one at a time, keeping the current token and one token
//! of lookahead. Statement parsing is recursive descent; expressions use a
//! Pratt parser driven by the shared [`Lookups`] tables.
//!
//! Syntax problems never abort the parse: each one is recorded as an
//! [`Error`] and the parser carries on with the next statement.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{Lookups, Precedence, TOKEN_LOOKUPS},
    stmt::parse_stmt,
};

/// Deepest expression nesting the parser will descend into.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    lexer: Lexer,
    /// The token under examination
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Handler registries, shared by every parser
    lookups: &'static Lookups,
    /// Current expression nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`.
    ///
    /// Two tokens are read up front so both the current and the peek
    /// token are populated before parsing starts.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            lookups: &TOKEN_LOOKUPS,
            depth: 0,
        }
    }

    /// Parses statements until EOF.
    ///
    /// Statements that fail to parse are left out of the returned
    /// [`Program`]; their diagnostics are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    /// Diagnostic messages recorded so far, in order.
    ///
    /// A non-empty result means the parsed program is incomplete.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Structured diagnostics recorded so far, in order.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Shifts the peek token into the current slot and pulls a new one.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is_kind(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is_kind(kind)
    }

    /// Advances only if the peek token is of `kind`.
    ///
    /// On a mismatch an unexpected-token diagnostic is recorded and the
    /// parser stays where it is.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let position = self.peek_token.span.start.clone();
        self.record(
            ErrorImpl::UnexpectedToken {
                expected,
                got: self.peek_token.kind,
            },
            position,
        );
    }

    /// Appends a diagnostic.
    pub fn record(&mut self, error_impl: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error_impl, position));
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.lookups.precedence(self.peek_token.kind)
    }

    pub fn cur_precedence(&self) -> Precedence {
        self.lookups.precedence(self.current_token.kind)
    }

    pub fn get_lookups(&self) -> &'static Lookups {
        self.lookups
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn descend(&mut self) {
        self.depth += 1;
    }

    pub fn ascend(&mut self) {
        self.depth -= 1;
    }
}

/// Parses `source` into a [`Program`].
///
/// This is the main entry point for parsing. The returned parser carries
/// the diagnostics of the run.
///
/// # Arguments
///
/// * `source` - The text to parse
/// * `file` - Name used in diagnostics positions, `"shell"` when `None`
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
