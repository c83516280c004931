use std::rc::Rc;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// A pull-based scanner over a single source string.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Once the
/// input is exhausted every further call yields an EOF token.
#[derive(Clone, Debug)]
pub struct Lexer {
    input: String,
    /// Offset of `ch` in `input`
    position: usize,
    /// Offset of the byte after `ch`
    read_position: usize,
    /// Byte under examination, NUL once the input is exhausted
    ch: u8,
    file: Rc<String>,
    /// Set once the EOF token has been handed out through `Iterator`
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            input: source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn read_char(&mut self) {
        self.ch = self
            .input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);
        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
    }

    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(start, start, self.file));
        }

        if is_letter(self.ch) {
            // Returns straight away: the cursor already sits past the run.
            let literal = self.read_while(is_letter);
            let kind = lookup_ident(&literal);
            return MK_TOKEN!(kind, literal, MK_SPAN!(start, self.position, self.file));
        }

        if is_digit(self.ch) {
            let literal = self.read_while(is_digit);
            return MK_TOKEN!(TokenKind::Int, literal, MK_SPAN!(start, self.position, self.file));
        }

        let kind = match (TokenKind::from_byte(self.ch), self.peek_char()) {
            (Some(TokenKind::Assignment), b'=') => {
                self.read_char();
                TokenKind::Equals
            }
            (Some(TokenKind::Not), b'=') => {
                self.read_char();
                TokenKind::NotEquals
            }
            (Some(kind), _) => kind,
            (None, _) => {
                // Consume the whole character so the literal stays valid UTF-8.
                let width = self.input[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                for _ in 1..width {
                    self.read_char();
                }
                TokenKind::Illegal
            }
        };

        self.read_char();

        let literal = self.input[start..self.position].to_string();
        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.position, self.file))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.at_eof() && predicate(self.ch) {
            self.read_char();
        }

        self.input[start..self.position].to_string()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to and including the first EOF, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

// Only plain decimal integers.
fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Scans `source` to completion, including the trailing EOF token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
