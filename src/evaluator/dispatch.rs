use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::value::Value;

/// Arithmetic operators the evaluator knows how to reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    TrueDiv,
    FloorDiv,
    Mod,
    CeilDiv,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::TrueDiv),
            "//" => Some(Operator::FloorDiv),
            "%" => Some(Operator::Mod),
            "/^" => Some(Operator::CeilDiv),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::TrueDiv => "/",
            Operator::FloorDiv => "//",
            Operator::Mod => "%",
            Operator::CeilDiv => "/^",
        }
    }

    /// Method looked up on the left operand.
    pub fn method_name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::TrueDiv => "truediv",
            Operator::FloorDiv => "floordiv",
            Operator::Mod => "mod",
            Operator::CeilDiv => "ceildiv",
        }
    }

    /// Method looked up on the right operand when the left one fails.
    pub fn reflected_method_name(&self) -> &'static str {
        match self {
            Operator::Add => "radd",
            Operator::Sub => "rsub",
            Operator::Mul => "rmul",
            Operator::TrueDiv => "rtruediv",
            Operator::FloorDiv => "rfloordiv",
            Operator::Mod => "rmod",
            Operator::CeilDiv => "rceildiv",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies `operator`, or returns `None` when neither operand supports it.
pub fn binary_operation(operator: Operator, left: &Value, right: &Value) -> Option<Value> {
    if operator == Operator::CeilDiv {
        return ceil_divide(left, right);
    }

    forward_or_reflected(operator, left, right)
}

fn forward_or_reflected(operator: Operator, left: &Value, right: &Value) -> Option<Value> {
    if let Some(result) = left.call_method(operator.method_name(), right) {
        return Some(result);
    }

    log::trace!(
        "{} has no {} for {}, trying {}",
        left.type_name(),
        operator.method_name(),
        right.type_name(),
        operator.reflected_method_name()
    );
    right.call_method(operator.reflected_method_name(), left)
}

/// Ceiling division: `-(-l // r)`, then `-(l // -r)`, then the operands'
/// own `ceildiv`/`rceildiv` methods.
pub fn ceil_divide(left: &Value, right: &Value) -> Option<Value> {
    if let (Some(l), Some(r)) = (left.as_primitive(), right.as_primitive()) {
        let negated_left = l.negate().and_then(|l| l.floor_div(r)).and_then(|q| q.negate());
        let negated_right = || r.negate().and_then(|r| l.floor_div(&r)).and_then(|q| q.negate());

        if let Some(result) = negated_left.or_else(negated_right) {
            return Some(Value::Primitive(result));
        }
    }

    forward_or_reflected(Operator::CeilDiv, left, right)
}

/// Like `binary_operation`, failing with `UnsupportedOperation` at
/// `position`.
pub fn dispatch(
    operator: Operator,
    left: &Value,
    right: &Value,
    position: Position,
) -> Result<Value, Error> {
    binary_operation(operator, left, right).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnsupportedOperation {
                operator: operator.symbol().to_string(),
                left: left.type_name(),
                right: right.type_name(),
            },
            position,
        )
    })
}
