//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (let, return, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, if, fn literals, calls)
//! - Accumulating diagnostics instead of stopping at the first error
//!
//! Expression parsing is driven by prefix and infix handler tables keyed by
//! token kind, with a precedence table deciding how far an infix chain extends.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
