use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

/// Grammar levels from the loosest to the tightest binding.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Precedence {
    LogicalOr,
    LogicalAnd,
    LogicalNot,
    Comparison,
    EnglishLike,
    BitOr,
    BitXor,
    BitAnd,
    BitShift,
    Sum,
    Product,
    Exponent,
    InfixCall,
    BracketCall,
    SubValue,
    Value,
}

impl Precedence {
    /// The level whose results this level combines.
    pub fn next(self) -> Precedence {
        match self {
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::LogicalNot,
            Precedence::LogicalNot => Precedence::Comparison,
            Precedence::Comparison => Precedence::EnglishLike,
            Precedence::EnglishLike => Precedence::BitOr,
            Precedence::BitOr => Precedence::BitXor,
            Precedence::BitXor => Precedence::BitAnd,
            Precedence::BitAnd => Precedence::BitShift,
            Precedence::BitShift => Precedence::Sum,
            Precedence::Sum => Precedence::Product,
            Precedence::Product => Precedence::Exponent,
            Precedence::Exponent => Precedence::InfixCall,
            Precedence::InfixCall => Precedence::BracketCall,
            Precedence::BracketCall => Precedence::SubValue,
            Precedence::SubValue => Precedence::Value,
            Precedence::Value => Precedence::Value,
        }
    }
}

impl Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

lazy_static! {
    /// Operators of every level parsed by the chain rule. Two-word operators
    /// span two consecutive tokens.
    pub static ref CHAIN_LOOKUP: HashMap<Precedence, Vec<&'static str>> = {
        let mut map = HashMap::new();
        map.insert(Precedence::LogicalOr, vec!["||"]);
        map.insert(Precedence::LogicalAnd, vec!["&&"]);
        map.insert(
            Precedence::Comparison,
            vec![">", "<", ">=", "<=", "==", "!=", "in", "not in", "is", "is not"],
        );
        map.insert(Precedence::EnglishLike, vec!["and", "or"]);
        map.insert(Precedence::BitOr, vec!["|"]);
        map.insert(Precedence::BitXor, vec!["^"]);
        map.insert(Precedence::BitAnd, vec!["&"]);
        map.insert(Precedence::BitShift, vec![">>", "<<"]);
        map.insert(Precedence::Sum, vec!["+", "-"]);
        map.insert(Precedence::Product, vec!["*", "%", "/", "//", "/^"]);
        map.insert(Precedence::Exponent, vec!["**", "`/"]);
        map.insert(Precedence::InfixCall, vec!["@", "#"]);
        map.insert(Precedence::SubValue, vec!["."]);
        map
    };
}

/// Prefix tokens a `Value` may start with.
pub const VALUE_PREFIXES: [&str; 6] = ["++", "--", "+", "-", "**", "*"];
/// Postfix tokens a `Value` may end with.
pub const VALUE_POSTFIXES: [&str; 2] = ["++", "--"];

pub fn chain_operators(level: Precedence) -> &'static [&'static str] {
    CHAIN_LOOKUP
        .get(&level)
        .map(|operators| operators.as_slice())
        .unwrap_or(&[])
}
