//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Precedence chains and their nesting
//! - Prefix/postfix runs on values
//! - Call and index suffixes, slices, empty argument lists
//! - Comparison and logical levels
//! - Recovery from unparseable tokens and fatal bracket errors

use std::rc::Rc;

use crate::{
    ast::ast::{
        BracketCallNode, CallSuffix, CallType, ChainNode, IndexSliceNode, LogicalNotNode, Node,
        ValueNode,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Span,
};

use super::{lookups::Precedence, parser::parse};

fn try_parse(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source.to_string(), Some("test.pr".to_string())).unwrap();
    parse(tokens, Rc::new("test.pr".to_string()))
}

/// Parses a single statement and returns its expression.
fn parse_one(source: &str) -> Node {
    match try_parse(source).unwrap() {
        Node::Program(mut statements) => {
            assert_eq!(statements.len(), 1, "expected one statement in {:?}", source);
            match statements.remove(0) {
                Node::Statement(expression) => *expression,
                other => panic!("expected a statement, got {:?}", other),
            }
        }
        other => panic!("expected a program, got {:?}", other),
    }
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: Span::null(),
    }
}

fn symbol(value: &str) -> Token {
    token(TokenKind::Symbol, value)
}

fn number(value: &str) -> Node {
    Node::Value(ValueNode {
        front: vec![],
        inner: Box::new(Node::Literal(token(TokenKind::Number, value))),
        back: vec![],
    })
}

fn name(value: &str) -> Node {
    Node::Value(ValueNode {
        front: vec![],
        inner: Box::new(Node::Identifier(token(TokenKind::Identifier, value))),
        back: vec![],
    })
}

fn chain(precedence: Precedence, values: Vec<Node>, operators: &[&str]) -> Node {
    Node::Chain(ChainNode {
        precedence,
        values,
        operators: operators.iter().map(|operator| symbol(operator)).collect(),
    })
}

fn operator_values(node: &Node) -> Vec<String> {
    match node {
        Node::Chain(chain) => chain.operators.iter().map(|op| op.value.clone()).collect(),
        other => panic!("expected a chain, got {:?}", other),
    }
}

#[test]
fn test_product_binds_tighter_than_sum() {
    let expected = chain(
        Precedence::Sum,
        vec![
            number("5"),
            chain(Precedence::Product, vec![number("3"), number("2")], &["*"]),
        ],
        &["+"],
    );

    assert_eq!(parse_one("5+3*2"), expected);
}

#[test]
fn test_chain_keeps_source_order() {
    let expected = chain(
        Precedence::Sum,
        vec![number("1"), number("2"), number("3")],
        &["-", "+"],
    );

    assert_eq!(parse_one("1 - 2 + 3"), expected);
}

#[test]
fn test_single_operand_is_not_wrapped() {
    assert_eq!(parse_one("42"), number("42"));
}

#[test]
fn test_bracketed_expression() {
    let expected = chain(
        Precedence::Product,
        vec![
            Node::Value(ValueNode {
                front: vec![],
                inner: Box::new(Node::BracketedExpr(Box::new(chain(
                    Precedence::Sum,
                    vec![number("1"), number("2")],
                    &["+"],
                )))),
                back: vec![],
            }),
            number("3"),
        ],
        &["*"],
    );

    assert_eq!(parse_one("(1 + 2) * 3"), expected);
}

#[test]
fn test_unclosed_bracket_is_fatal() {
    let error = try_parse("(1+2").unwrap_err();

    assert_eq!(error.get_error_name(), "UnclosedBracket");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnclosedBracket {
            context: String::from("in bracketed expression")
        }
    );
}

#[test]
fn test_lone_closing_paren_is_skipped() {
    let program = try_parse(")").unwrap();

    assert_eq!(program, Node::Program(vec![Node::Skipped(symbol(")"))]));
}

#[test]
fn test_recovery_skips_one_token_at_a_time() {
    let program = try_parse("() if 1").unwrap();

    assert_eq!(
        program,
        Node::Program(vec![
            Node::Skipped(symbol("(")),
            Node::Skipped(symbol(")")),
            Node::Skipped(token(TokenKind::Keyword, "if")),
            Node::Statement(Box::new(number("1"))),
        ])
    );
}

#[test]
fn test_dangling_operator_is_given_back() {
    let program = try_parse("1 +").unwrap();

    assert_eq!(
        program,
        Node::Program(vec![
            Node::Statement(Box::new(number("1"))),
            Node::Skipped(symbol("+")),
        ])
    );
}

#[test]
fn test_statements_with_semicolons() {
    let program = try_parse("1; 2;; 3").unwrap();

    assert_eq!(
        program,
        Node::Program(vec![
            Node::Statement(Box::new(number("1"))),
            Node::Statement(Box::new(number("2"))),
            Node::Skipped(symbol(";")),
            Node::Statement(Box::new(number("3"))),
        ])
    );
}

#[test]
fn test_empty_program() {
    assert_eq!(try_parse("").unwrap(), Node::Program(vec![]));
}

#[test]
fn test_value_prefix_and_postfix_runs() {
    let expected = Node::Value(ValueNode {
        front: vec![symbol("--"), symbol("*")],
        inner: Box::new(Node::Identifier(token(TokenKind::Identifier, "x"))),
        back: vec![symbol("++")],
    });

    assert_eq!(parse_one("--*x++"), expected);
}

#[test]
fn test_unary_minus_inside_product() {
    let expected = chain(
        Precedence::Product,
        vec![
            number("2"),
            Node::Value(ValueNode {
                front: vec![symbol("-")],
                inner: Box::new(Node::Literal(token(TokenKind::Number, "3"))),
                back: vec![],
            }),
        ],
        &["*"],
    );

    assert_eq!(parse_one("2 * -3"), expected);
}

#[test]
fn test_member_access_takes_bare_identifiers() {
    let expected = chain(
        Precedence::SubValue,
        vec![
            name("a"),
            Node::Identifier(token(TokenKind::Identifier, "b")),
            Node::Identifier(token(TokenKind::Identifier, "c")),
        ],
        &[".", "."],
    );

    assert_eq!(parse_one("a.b.c"), expected);
}

#[test]
fn test_call_and_index_suffixes() {
    let expected = Node::BracketCall(BracketCallNode {
        base: Box::new(name("f")),
        suffixes: vec![
            CallSuffix {
                call_type: CallType::Func,
                arguments: vec![number("1"), name("x")],
            },
            CallSuffix {
                call_type: CallType::Index,
                arguments: vec![number("0")],
            },
        ],
    });

    assert_eq!(parse_one("f(1, x)[0]"), expected);
}

#[test]
fn test_empty_argument_list() {
    let expected = Node::BracketCall(BracketCallNode {
        base: Box::new(name("f")),
        suffixes: vec![CallSuffix {
            call_type: CallType::Func,
            arguments: vec![],
        }],
    });

    assert_eq!(parse_one("f()"), expected);
}

#[test]
fn test_trailing_comma_in_arguments() {
    match parse_one("f(1, 2,)") {
        Node::BracketCall(call) => assert_eq!(call.suffixes[0].arguments.len(), 2),
        other => panic!("expected a call, got {:?}", other),
    }
}

#[test]
fn test_call_arguments_stop_at_call_level() {
    assert!(try_parse("f((1 + 2))").is_ok());

    let error = try_parse("f(1 + 2)").unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnclosedBracket {
            context: String::from("at end of argument list for function")
        }
    );
}

#[test]
fn test_unclosed_index_is_fatal() {
    let error = try_parse("x[1").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnclosedBracket {
            context: String::from("at end of argument list for index access")
        }
    );
}

fn slice_of(source: &str) -> IndexSliceNode {
    match parse_one(source) {
        Node::BracketCall(mut call) => match call.suffixes.remove(0).arguments.remove(0) {
            Node::IndexSlice(slice) => slice,
            other => panic!("expected a slice, got {:?}", other),
        },
        other => panic!("expected an index, got {:?}", other),
    }
}

#[test]
fn test_slices_mark_omitted_parts() {
    let slice = slice_of("a[1:2]");
    assert_eq!(slice.start.as_deref(), Some(&number("1")));
    assert_eq!(slice.stop.as_deref(), Some(&number("2")));
    assert!(slice.step.is_none());

    let slice = slice_of("a[1:]");
    assert_eq!(slice.start.as_deref(), Some(&number("1")));
    assert!(slice.stop.is_none());

    let slice = slice_of("a[::2]");
    assert!(slice.start.is_none());
    assert!(slice.stop.is_none());
    assert_eq!(slice.step.as_deref(), Some(&number("2")));

    let slice = slice_of("a[1:2:3]");
    assert_eq!(slice.step.as_deref(), Some(&number("3")));
}

#[test]
fn test_plain_index_is_not_a_slice() {
    match parse_one("a[i]") {
        Node::BracketCall(call) => assert_eq!(call.suffixes[0].arguments, vec![name("i")]),
        other => panic!("expected an index, got {:?}", other),
    }
}

#[test]
fn test_two_word_comparisons() {
    let node = parse_one("a not in b");
    assert_eq!(operator_values(&node), vec!["not in"]);

    let node = parse_one("a is not b");
    assert_eq!(operator_values(&node), vec!["is not"]);

    let node = parse_one("a in b is c");
    assert_eq!(operator_values(&node), vec!["in", "is"]);

    let node = parse_one("a >= b == c");
    assert_eq!(operator_values(&node), vec![">=", "=="]);
}

#[test]
fn test_logical_not_counts_repetitions() {
    let expected = Node::LogicalNot(LogicalNotNode {
        nots: 2,
        base: Box::new(name("a")),
    });

    assert_eq!(parse_one("not not a"), expected);
}

#[test]
fn test_logical_levels() {
    let node = parse_one("a || b && not c");

    let expected = chain(
        Precedence::LogicalOr,
        vec![
            name("a"),
            chain(
                Precedence::LogicalAnd,
                vec![
                    name("b"),
                    Node::LogicalNot(LogicalNotNode {
                        nots: 1,
                        base: Box::new(name("c")),
                    }),
                ],
                &["&&"],
            ),
        ],
        &["||"],
    );

    assert_eq!(node, expected);
}

#[test]
fn test_level_order() {
    let node = parse_one("a and b | c ^ d & e >> f");
    assert!(matches!(&node, Node::Chain(chain) if chain.precedence == Precedence::EnglishLike));

    let node = parse_one("2 ** 3 `/ 4");
    assert!(matches!(&node, Node::Chain(chain) if chain.precedence == Precedence::Exponent));

    let node = parse_one("m @ n # o");
    assert!(matches!(&node, Node::Chain(chain) if chain.precedence == Precedence::InfixCall));

    let node = parse_one("10 // 3 /^ 2 % 5");
    assert_eq!(operator_values(&node), vec!["//", "/^", "%"]);
}

#[test]
fn test_precedence_levels_chain_downwards() {
    let mut level = Precedence::LogicalOr;
    let mut steps = 0;

    while level != Precedence::Value {
        let next = level.next();
        assert!(next > level);
        level = next;
        steps += 1;
    }

    assert_eq!(steps, 15);
}
