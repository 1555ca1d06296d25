use std::cell::Cell;

use crate::token::Token;

/// Stable identity for resolvable expression nodes (`Variable`, `Assign`,
/// `This`, `Super`). Rust's enum values carry no address identity the way
/// a class instance would, so the resolver side-table keys on this instead.
pub type NodeId = u32;

thread_local! {
    static NEXT_ID: Cell<NodeId> = Cell::new(0);
}

pub fn next_id() -> NodeId {
    NEXT_ID.with(|c| {
        let id = c.get();
        c.set(id + 1);
        id
    })
}

/// A literal as it appears in source, before it becomes a runtime `Object`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Clone)]
pub struct UnaryData {
    pub operator: Token,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct LogicalData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct GroupingData {
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct VariableData {
    pub id: NodeId,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct AssignData {
    pub id: NodeId,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct CallData {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct GetData {
    pub object: Box<Expr>,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct SetData {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct ThisData {
    pub id: NodeId,
    pub keyword: Token,
}

#[derive(Debug, Clone)]
pub struct SuperData {
    pub id: NodeId,
    pub keyword: Token,
    pub method: Token,
}

#[derive(Debug, Clone)]
pub struct ListData {
    pub bracket: Token,
    pub elements: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct AccessData {
    pub list: Box<Expr>,
    pub bracket: Token,
    pub index: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct AccessSetData {
    pub list: Box<Expr>,
    pub bracket: Token,
    pub index: Box<Expr>,
    pub value: Box<Expr>,
}

/// Expression AST. The source models this as a visitor-pattern class
/// hierarchy because its host language has no sum types; here it is a
/// plain enum and the resolver/interpreter dispatch on it with `match`.
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(LiteralValue),
    Unary(UnaryData),
    Binary(BinaryData),
    Logical(LogicalData),
    Grouping(GroupingData),
    Variable(VariableData),
    Assign(AssignData),
    Call(CallData),
    Get(GetData),
    Set(SetData),
    This(ThisData),
    Super(SuperData),
    List(ListData),
    Access(AccessData),
    AccessSet(AccessSetData),
}
