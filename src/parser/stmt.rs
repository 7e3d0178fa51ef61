use crate::{ast::ast::Node, errors::errors::Error};

use super::{
    expr::parse_expr,
    parser::{ParseResult, Parser},
};

/// An expression optionally terminated by `;`.
pub fn parse_stmt(parser: &mut Parser) -> ParseResult {
    let expression = match parse_expr(parser)? {
        Some(expression) => expression,
        None => return Ok(None),
    };

    parser.eat_symbol(";");

    Ok(Some(Node::Statement(Box::new(expression))))
}

/// Parses statements until the tokens run out. A token that cannot start a
/// statement is kept as a `Skipped` node and parsing resumes after it.
pub fn parse_program(parser: &mut Parser) -> Result<Node, Error> {
    let mut statements = vec![];

    while parser.has_tokens() {
        if let Some(statement) = parse_stmt(parser)? {
            statements.push(statement);
            continue;
        }

        if let Some(token) = parser.advance() {
            log::debug!(
                "skipping {} {:?} at {}",
                token.kind,
                token.value,
                token.span.start.0
            );
            statements.push(Node::Skipped(token));
        }
    }

    Ok(Node::Program(statements))
}
