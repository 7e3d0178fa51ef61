use crate::{
    ast::ast::{
        BracketCallNode, CallSuffix, CallType, ChainNode, IndexSliceNode, LogicalNotNode, Node,
        ValueNode,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    lookups::{chain_operators, Precedence, VALUE_POSTFIXES, VALUE_PREFIXES},
    parser::{ParseResult, Parser},
};

/// Parses any sub-expression, starting from the loosest level.
pub fn parse_expr(parser: &mut Parser) -> ParseResult {
    parse_level(parser, Precedence::LogicalOr)
}

pub fn parse_level(parser: &mut Parser, level: Precedence) -> ParseResult {
    match level {
        Precedence::LogicalNot => parse_logical_not(parser),
        Precedence::BracketCall => parse_bracket_call(parser),
        Precedence::SubValue => parse_member_expr(parser),
        Precedence::Value => parse_value(parser),
        _ => {
            let operand = |parser: &mut Parser| parse_level(parser, level.next());
            parse_chain(parser, level, operand, operand)
        }
    }
}

/// Parses `operand (op operand)*` for the operators of `level`.
///
/// A lone operand is returned as is. When no operand follows an operator,
/// the operator is left unconsumed and the chain ends before it.
fn parse_chain<F, G>(parser: &mut Parser, level: Precedence, first: F, rest: G) -> ParseResult
where
    F: Fn(&mut Parser) -> ParseResult,
    G: Fn(&mut Parser) -> ParseResult,
{
    let first = match first(parser)? {
        Some(first) => first,
        None => return Ok(None),
    };

    let mut values = vec![first];
    let mut operators = vec![];

    loop {
        let checkpoint = parser.checkpoint();
        let operator = match match_operator(parser, chain_operators(level)) {
            Some(operator) => operator,
            None => break,
        };

        match rest(parser)? {
            Some(value) => {
                operators.push(operator);
                values.push(value);
            }
            None => {
                parser.rewind(checkpoint);
                break;
            }
        }
    }

    if operators.is_empty() {
        return Ok(values.pop());
    }

    Ok(Some(Node::Chain(ChainNode {
        precedence: level,
        values,
        operators,
    })))
}

/// Consumes the longest operator of `operators` spelled by the upcoming
/// symbol and keyword tokens. Two-word operators come back as one token.
fn match_operator(parser: &mut Parser, operators: &[&str]) -> Option<Token> {
    let mut best: Option<(usize, &str)> = None;

    for operator in operators {
        let words: Vec<&str> = operator.split_whitespace().collect();
        let spelled = words.iter().enumerate().all(|(offset, word)| {
            parser
                .peek(offset)
                .map_or(false, |token| token.is_operator_like() && token.value == *word)
        });

        if spelled && best.map_or(true, |(length, _)| words.len() > length) {
            best = Some((words.len(), *operator));
        }
    }

    let (length, operator) = best?;
    let first = parser.current_token()?.clone();
    parser.advance_n(length);

    Some(MK_TOKEN!(
        first.kind,
        operator.to_string(),
        parser.span_from(first.span.start.clone())
    ))
}

fn eat_one_of(parser: &mut Parser, symbols: &[&str]) -> Option<Token> {
    let matched = parser
        .current_token()
        .map_or(false, |token| symbols.iter().any(|symbol| token.is_symbol(symbol)));

    if matched {
        parser.advance()
    } else {
        None
    }
}

/// Any number of prefix `not`s in front of a comparison.
pub fn parse_logical_not(parser: &mut Parser) -> ParseResult {
    parser.attempt(|parser| {
        let mut nots = 0;
        while parser.at_keyword("not") {
            parser.advance();
            nots += 1;
        }

        let base = match parse_level(parser, Precedence::Comparison)? {
            Some(base) => base,
            None => return Ok(None),
        };

        if nots == 0 {
            return Ok(Some(base));
        }

        Ok(Some(Node::LogicalNot(LogicalNotNode {
            nots,
            base: Box::new(base),
        })))
    })
}

/// `value.name.name`, where every right-hand side is a bare identifier.
pub fn parse_member_expr(parser: &mut Parser) -> ParseResult {
    parse_chain(parser, Precedence::SubValue, parse_value, parse_identifier)
}

/// A base followed by any number of `(...)` and `[...]` suffixes.
pub fn parse_bracket_call(parser: &mut Parser) -> ParseResult {
    let base = match parse_level(parser, Precedence::SubValue)? {
        Some(base) => base,
        None => return Ok(None),
    };

    let mut suffixes = vec![];

    loop {
        let call_type = if parser.at_symbol("(") {
            CallType::Func
        } else if parser.at_symbol("[") {
            CallType::Index
        } else {
            break;
        };
        parser.advance();

        let (arguments, closer, context) = match call_type {
            CallType::Func => (
                parse_argument_list(parser, parse_bracket_call)?,
                ")",
                "at end of argument list for function",
            ),
            CallType::Index => (
                parse_argument_list(parser, parse_index_slice)?,
                "]",
                "at end of argument list for index access",
            ),
        };

        if parser.eat_symbol(closer).is_none() {
            return Err(Error::new(
                ErrorImpl::UnclosedBracket {
                    context: String::from(context),
                },
                parser.get_position(),
            ));
        }

        suffixes.push(CallSuffix {
            call_type,
            arguments,
        });
    }

    if suffixes.is_empty() {
        return Ok(Some(base));
    }

    Ok(Some(Node::BracketCall(BracketCallNode {
        base: Box::new(base),
        suffixes,
    })))
}

/// Comma separated arguments. Nothing parseable gives an empty list, and a
/// trailing comma is accepted.
fn parse_argument_list(
    parser: &mut Parser,
    argument: fn(&mut Parser) -> ParseResult,
) -> Result<Vec<Node>, Error> {
    let mut arguments = vec![];

    match argument(parser)? {
        Some(first) => arguments.push(first),
        None => return Ok(arguments),
    }

    while parser.eat_symbol(",").is_some() {
        match argument(parser)? {
            Some(next) => arguments.push(next),
            None => break,
        }
    }

    Ok(arguments)
}

/// `expr`, `start:stop` or `start:stop:step`, any part of a slice may be
/// left out.
pub fn parse_index_slice(parser: &mut Parser) -> ParseResult {
    let start = parse_bracket_call(parser)?;

    if parser.eat_symbol(":").is_none() {
        return Ok(start);
    }

    let stop = parse_bracket_call(parser)?;
    let step = if parser.eat_symbol(":").is_some() {
        parse_bracket_call(parser)?
    } else {
        None
    };

    Ok(Some(Node::IndexSlice(IndexSliceNode {
        start: start.map(Box::new),
        stop: stop.map(Box::new),
        step: step.map(Box::new),
    })))
}

/// A singular value between optional prefix and postfix operator runs.
pub fn parse_value(parser: &mut Parser) -> ParseResult {
    parser.attempt(|parser| {
        let mut front = vec![];
        while let Some(token) = eat_one_of(parser, &VALUE_PREFIXES) {
            front.push(token);
        }

        let inner = match parse_singular_value(parser)? {
            Some(inner) => inner,
            None => return Ok(None),
        };

        let mut back = vec![];
        while let Some(token) = eat_one_of(parser, &VALUE_POSTFIXES) {
            back.push(token);
        }

        Ok(Some(Node::Value(ValueNode {
            front,
            inner: Box::new(inner),
            back,
        })))
    })
}

pub fn parse_singular_value(parser: &mut Parser) -> ParseResult {
    if let Some(identifier) = parse_identifier(parser)? {
        return Ok(Some(identifier));
    }

    if let Some(literal) = parse_literal(parser)? {
        return Ok(Some(literal));
    }

    parse_bracketed_expr(parser)
}

fn at_kind(parser: &Parser, kinds: &[TokenKind]) -> bool {
    parser
        .current_token()
        .map_or(false, |token| kinds.contains(&token.kind))
}

pub fn parse_identifier(parser: &mut Parser) -> ParseResult {
    if !at_kind(parser, &[TokenKind::Identifier]) {
        return Ok(None);
    }

    Ok(parser.advance().map(Node::Identifier))
}

pub fn parse_literal(parser: &mut Parser) -> ParseResult {
    if !at_kind(parser, &[TokenKind::Number, TokenKind::String]) {
        return Ok(None);
    }

    Ok(parser.advance().map(Node::Literal))
}

pub fn parse_bracketed_expr(parser: &mut Parser) -> ParseResult {
    parser.attempt(|parser| {
        if parser.eat_symbol("(").is_none() {
            return Ok(None);
        }

        let inner = match parse_expr(parser)? {
            Some(inner) => inner,
            None => return Ok(None),
        };

        if parser.eat_symbol(")").is_none() {
            return Err(Error::new(
                ErrorImpl::UnclosedBracket {
                    context: String::from("in bracketed expression"),
                },
                parser.get_position(),
            ));
        }

        Ok(Some(Node::BracketedExpr(Box::new(inner))))
    })
}
