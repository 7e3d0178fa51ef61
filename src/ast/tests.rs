//! Unit tests for the syntax tree and its renderer.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{ChainNode, Node},
        pretty::render,
    },
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::{lookups::Precedence, parser::parse},
    Span,
};

fn tree(source: &str) -> String {
    let tokens = tokenize(source.to_string(), None).unwrap();
    render(&parse(tokens, Rc::new(String::from("shell"))).unwrap())
}

fn lines(expected: &[&str]) -> String {
    let mut output = expected.join("\n");
    output.push('\n');
    output
}

#[test]
fn test_chain_tag_is_precedence_name() {
    let chain = Node::Chain(ChainNode {
        precedence: Precedence::BitShift,
        values: vec![],
        operators: vec![],
    });

    assert_eq!(chain.tag(), "BitShift");
    assert_eq!(Node::Program(vec![]).tag(), "Program");
}

#[test]
fn test_render_sum() {
    let expected = lines(&[
        "Program",
        "   Statement",
        "      Sum",
        "         values: [",
        "            Value",
        "               front: []",
        "               inner: Literal",
        "                  5",
        "               back: []",
        "            Value",
        "               front: []",
        "               inner: Literal",
        "                  3",
        "               back: []",
        "         ]",
        "         operators: [+]",
    ]);

    assert_eq!(tree("5+3"), expected);
}

#[test]
fn test_render_value_runs_and_strings() {
    let expected = lines(&[
        "Program",
        "   Statement",
        "      Value",
        "         front: [-, *]",
        "         inner: Literal",
        "            \"a\\tb\"",
        "         back: [++]",
    ]);

    assert_eq!(tree("-*'a\\tb'++"), expected);
}

#[test]
fn test_render_slice_with_absent_parts() {
    let expected = lines(&[
        "Program",
        "   Statement",
        "      BracketCall",
        "         base: Value",
        "            front: []",
        "            inner: Identifier",
        "               a",
        "            back: []",
        "         index: [",
        "            IndexSlice",
        "               start: <absent>",
        "               stop: Value",
        "                  front: []",
        "                  inner: Literal",
        "                     2",
        "                  back: []",
        "               step: <absent>",
        "         ]",
        "         func: []",
    ]);

    assert_eq!(tree("a[:2]()"), expected);
}

#[test]
fn test_render_logical_not_and_skips() {
    let expected = lines(&[
        "Program",
        "   Skipped",
        "      )",
        "   Statement",
        "      LogicalNot",
        "         nots: 2",
        "         base: Value",
        "            front: []",
        "            inner: Identifier",
        "               x",
        "            back: []",
    ]);

    assert_eq!(tree(") not not x"), expected);
}

#[test]
fn test_render_bracketed_expr() {
    let expected = lines(&[
        "Program",
        "   Statement",
        "      Value",
        "         front: []",
        "         inner: BracketedExpr",
        "            Value",
        "               front: []",
        "               inner: Identifier",
        "                  y",
        "               back: []",
        "         back: []",
    ]);

    assert_eq!(tree("(y)"), expected);
}

#[test]
fn test_skipped_keeps_its_token() {
    let token = Token {
        kind: TokenKind::Keyword,
        value: String::from("while"),
        span: Span::null(),
    };

    assert_eq!(render(&Node::Skipped(token)), "Skipped\n   while\n");
}
