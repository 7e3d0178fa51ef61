use crate::{lexer::tokens::Token, parser::lookups::Precedence};

/// A node of the syntax tree. Nodes are never modified once built; the
/// parser only wraps them in new nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Vec<Node>),
    Statement(Box<Node>),
    /// A token no statement could start with, skipped during recovery.
    Skipped(Token),
    Identifier(Token),
    Literal(Token),
    BracketedExpr(Box<Node>),
    Value(ValueNode),
    Chain(ChainNode),
    BracketCall(BracketCallNode),
    IndexSlice(IndexSliceNode),
    LogicalNot(LogicalNotNode),
}

impl Node {
    /// Name of the node as shown in diagnostics and the rendered tree.
    pub fn tag(&self) -> String {
        match self {
            Node::Program(_) => String::from("Program"),
            Node::Statement(_) => String::from("Statement"),
            Node::Skipped(_) => String::from("Skipped"),
            Node::Identifier(_) => String::from("Identifier"),
            Node::Literal(_) => String::from("Literal"),
            Node::BracketedExpr(_) => String::from("BracketedExpr"),
            Node::Value(_) => String::from("Value"),
            Node::Chain(chain) => chain.precedence.to_string(),
            Node::BracketCall(_) => String::from("BracketCall"),
            Node::IndexSlice(_) => String::from("IndexSlice"),
            Node::LogicalNot(_) => String::from("LogicalNot"),
        }
    }
}

/// An operand wrapped with its prefix and postfix operator runs. The runs
/// are kept verbatim and carry no meaning yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueNode {
    pub front: Vec<Token>,
    pub inner: Box<Node>,
    pub back: Vec<Token>,
}

/// Same-level binary operators applied left to right.
///
/// Always holds one more value than operators.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainNode {
    pub precedence: Precedence,
    pub values: Vec<Node>,
    pub operators: Vec<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallType {
    Func,
    Index,
}

impl CallType {
    pub fn name(&self) -> &'static str {
        match self {
            CallType::Func => "func",
            CallType::Index => "index",
        }
    }
}

/// One `(...)` or `[...]` suffix. An empty `arguments` is an explicit empty
/// argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSuffix {
    pub call_type: CallType,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketCallNode {
    pub base: Box<Node>,
    pub suffixes: Vec<CallSuffix>,
}

/// `[start:stop]` or `[start:stop:step]`; `None` marks an omitted part.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSliceNode {
    pub start: Option<Box<Node>>,
    pub stop: Option<Box<Node>>,
    pub step: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalNotNode {
    pub nots: usize,
    pub base: Box<Node>,
}
