//! Tree-walking evaluator for arithmetic expressions.
//!
//! Only `Program`, `Statement`, `Sum`, `Product`, `Value`, `Literal` and
//! `BracketedExpr` nodes are reduced. Everything else is reported as a
//! diagnostic and yields no value, without stopping the evaluation.

use crate::{
    ast::ast::{ChainNode, Node},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::lookups::Precedence,
};

use super::{
    dispatch::{dispatch, Operator},
    value::Value,
};

#[derive(Debug, Default)]
pub struct Evaluator {
    diagnostics: Vec<String>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator::default()
    }

    /// Reduces `node` to a value. `Ok(None)` means the node (or one of the
    /// operands it needs) is not evaluated.
    pub fn evaluate(&mut self, node: &Node) -> Result<Option<Value>, Error> {
        match node {
            Node::Program(statements) => {
                let mut value = None;
                for statement in statements {
                    let result = self.evaluate(statement)?;
                    // Recovery markers leave the program's value alone.
                    if !matches!(statement, Node::Skipped(_)) {
                        value = result;
                    }
                }
                Ok(value)
            }
            Node::Statement(expression) => self.evaluate(expression),
            Node::Chain(chain)
                if matches!(chain.precedence, Precedence::Sum | Precedence::Product) =>
            {
                self.evaluate_chain(chain)
            }
            Node::Value(value) => {
                if !value.front.is_empty() || !value.back.is_empty() {
                    log::debug!("ignoring prefix/postfix operators around {}", value.inner.tag());
                }
                self.evaluate(&value.inner)
            }
            Node::Literal(token) => evaluate_literal(token).map(Some),
            Node::BracketedExpr(inner) => self.evaluate(inner),
            other => {
                self.not_evaluated(other.tag());
                Ok(None)
            }
        }
    }

    /// Folds a chain left to right. Every operand is evaluated, so each one
    /// that has no value leaves its diagnostic.
    fn evaluate_chain(&mut self, chain: &ChainNode) -> Result<Option<Value>, Error> {
        let mut operands = Vec::with_capacity(chain.values.len());
        for operand in &chain.values {
            operands.push(self.evaluate(operand)?);
        }

        let mut operands = match operands.into_iter().collect::<Option<Vec<Value>>>() {
            Some(operands) => operands.into_iter(),
            None => return Ok(None),
        };

        let mut accumulated = match operands.next() {
            Some(first) => first,
            None => return Ok(None),
        };

        for (token, right) in chain.operators.iter().zip(operands) {
            let operator = match Operator::from_symbol(&token.value) {
                Some(operator) => operator,
                None => {
                    self.not_evaluated(format!("operator {}", token.value));
                    return Ok(None);
                }
            };

            accumulated = dispatch(operator, &accumulated, &right, token.span.start.clone())?;
        }

        Ok(Some(accumulated))
    }

    /// Binds `value` to `target`. Assignment has no semantics yet, so this
    /// does nothing.
    pub fn assign(&mut self, target: &Node, value: Value) {
        log::debug!("assignment of {} to {} ignored", value, target.tag());
    }

    fn not_evaluated(&mut self, what: String) {
        let message = format!("{} not evaluated", what);
        log::warn!("{}", message);
        self.diagnostics.push(message);
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Returns the collected diagnostics and clears them.
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }
}

/// Numbers with a `.` become floats, all others ints.
fn evaluate_literal(token: &Token) -> Result<Value, Error> {
    match token.kind {
        TokenKind::String => Ok(Value::str(&token.value)),
        _ if token.value.contains('.') => match token.value.parse::<f64>() {
            Ok(value) => Ok(Value::float(value)),
            Err(_) => Err(number_error(token)),
        },
        _ => match token.value.parse::<i64>() {
            Ok(value) => Ok(Value::int(value)),
            Err(_) => Err(number_error(token)),
        },
    }
}

fn number_error(token: &Token) -> Error {
    Error::new(
        ErrorImpl::NumberParseError {
            token: token.value.clone(),
        },
        token.span.start.clone(),
    )
}
