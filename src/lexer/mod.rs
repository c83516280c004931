//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - Pull-based tokenization, one token per `next_token` call
//! - Recognition of keywords, identifiers, integers, and operators
//! - Token position tracking for error reporting
//! - ILLEGAL tokens for unrecognised input (the lexer never fails)

pub mod lexer;
pub mod tokens;
