use std::rc::Rc;

use crate::expr::Expr;
use crate::token::Token;

/// A function declaration's shared body: named functions and methods both
/// reference one of these via `Rc` so binding a method to an instance
/// doesn't need to clone its statement list.
#[derive(Debug)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

#[derive(Debug)]
pub struct ExpressionData {
    pub expr: Expr,
}

#[derive(Debug)]
pub struct PrintData {
    pub expr: Expr,
}

#[derive(Debug)]
pub struct VarData {
    pub name: Token,
    pub initializer: Option<Expr>,
}

#[derive(Debug)]
pub struct BlockData {
    pub statements: Vec<Stmt>,
}

#[derive(Debug)]
pub struct IfData {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug)]
pub struct WhileData {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug)]
pub struct ReturnData {
    pub keyword: Token,
    pub value: Option<Expr>,
}

#[derive(Debug)]
pub struct ClassData {
    pub name: Token,
    pub superclass: Option<Expr>,
    pub methods: Vec<Rc<FunctionDecl>>,
}

/// Statement AST. See `expr.rs` for why this is a plain enum rather than
/// a visitor-pattern class hierarchy.
#[derive(Debug)]
pub enum Stmt {
    Expression(ExpressionData),
    Print(PrintData),
    Var(VarData),
    Block(BlockData),
    If(IfData),
    While(WhileData),
    Function(Rc<FunctionDecl>),
    Return(ReturnData),
    Class(ClassData),
}
