use std::{any::Any, fmt::Display};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprType, ExprWrapper, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier Expression
/// A name, either bound by `let` / a parameter list or referenced in an expression.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

impl Node for IdentifierExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for IdentifierExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// A decimal integer literal within the `i64` range.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for IntegerExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token_literal())
    }
}

#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for BooleanExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token_literal())
    }
}

// COMPLEX

/// Prefix Expression
/// A prefix operator applied to one operand, e.g. `-5` or `!ok`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    /// The operator token
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// A binary operation between two expressions, e.g. `a + b` or `x != y`.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    /// The operator token
    pub token: Token,
    pub left: ExprWrapper,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for InfixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
/// `if (<condition>) { ... } else { ... }`, the else branch being optional.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for IfExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function Expression
/// `fn(<parameters>) { <body> }`
#[derive(Debug, Clone)]
pub struct FnExpr {
    pub token: Token,
    pub parameters: Vec<IdentifierExpr>,
    pub body: BlockStmt,
}

impl Node for FnExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for FnExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Fn
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for FnExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>();

        write!(
            f,
            "{}({}) {}",
            self.token_literal(),
            parameters.join(", "),
            self.body
        )
    }
}

/// Call Expression
/// `<function>(<arguments>)`, where the callee is any expression.
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// The `(` token
    pub token: Token,
    pub function: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
