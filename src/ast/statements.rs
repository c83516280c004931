use std::{any::Any, fmt::Display};

use crate::lexer::tokens::Token;

use super::{
    ast::{ExprWrapper, Node, Stmt, StmtType, StmtWrapper},
    expressions::IdentifierExpr,
};

/// Let Statement
/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    /// The LET token
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: ExprWrapper,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// Return Statement
/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// The RETURN token
    pub token: Token,
    pub value: ExprWrapper,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token_literal(), self.value)
    }
}

/// Expression Statement
/// A bare expression used in statement position, e.g. `x + 10;`
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    /// The first token of the expression
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Block Statement
/// The `{ ... }` body of an if branch or function literal.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl BlockStmt {
    pub fn iter(&self) -> std::slice::Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
