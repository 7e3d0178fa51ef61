//! Tree renderer for diagnostic output.
//!
//! A node prints its tag, then its payload one level deeper. Fields print
//! their name followed by the value inline:
//! ```text
//! Program
//!    Statement
//!       Sum
//!          values: [
//!             Value
//!                front: []
//!                inner: Literal
//!                   5
//!                back: []
//!             ...
//!          ]
//!          operators: [+]
//! ```

use crate::lexer::tokens::Token;

use super::ast::Node;

const INDENT: usize = 3;

enum Payload<'a> {
    Children(Vec<&'a Node>),
    Leaf(String),
    Fields(Vec<(&'static str, Field<'a>)>),
}

enum Field<'a> {
    Node(&'a Node),
    Nodes(&'a [Node]),
    Tokens(&'a [Token]),
    Scalar(String),
    Absent,
}

impl<'a> Field<'a> {
    fn optional(node: &'a Option<Box<Node>>) -> Field<'a> {
        match node {
            Some(node) => Field::Node(node),
            None => Field::Absent,
        }
    }
}

fn payload(node: &Node) -> Payload<'_> {
    match node {
        Node::Program(statements) => Payload::Children(statements.iter().collect()),
        Node::Statement(inner) | Node::BracketedExpr(inner) => Payload::Children(vec![inner.as_ref()]),
        Node::Skipped(token) | Node::Identifier(token) | Node::Literal(token) => {
            Payload::Leaf(token.to_string())
        }
        Node::Value(value) => Payload::Fields(vec![
            ("front", Field::Tokens(&value.front)),
            ("inner", Field::Node(&value.inner)),
            ("back", Field::Tokens(&value.back)),
        ]),
        Node::Chain(chain) => Payload::Fields(vec![
            ("values", Field::Nodes(&chain.values)),
            ("operators", Field::Tokens(&chain.operators)),
        ]),
        Node::BracketCall(call) => {
            let mut fields = vec![("base", Field::Node(&call.base))];
            for suffix in &call.suffixes {
                fields.push((suffix.call_type.name(), Field::Nodes(&suffix.arguments)));
            }
            Payload::Fields(fields)
        }
        Node::IndexSlice(slice) => Payload::Fields(vec![
            ("start", Field::optional(&slice.start)),
            ("stop", Field::optional(&slice.stop)),
            ("step", Field::optional(&slice.step)),
        ]),
        Node::LogicalNot(not) => Payload::Fields(vec![
            ("nots", Field::Scalar(not.nots.to_string())),
            ("base", Field::Node(&not.base)),
        ]),
    }
}

/// Renders a syntax tree into an indented string.
#[derive(Default)]
pub struct PrettyPrinter {
    output: String,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        PrettyPrinter {
            output: String::new(),
        }
    }

    pub fn print(mut self, node: &Node) -> String {
        self.print_node(node, 0);
        self.output
    }

    fn line(&mut self, indent: usize, text: &str) {
        self.output.push_str(&" ".repeat(indent));
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn print_node(&mut self, node: &Node, indent: usize) {
        self.line(indent, &node.tag());
        self.print_payload(node, indent + INDENT);
    }

    fn print_payload(&mut self, node: &Node, indent: usize) {
        match payload(node) {
            Payload::Children(children) => {
                for child in children {
                    self.print_node(child, indent);
                }
            }
            Payload::Leaf(text) => self.line(indent, &text),
            Payload::Fields(fields) => {
                for (name, field) in fields {
                    self.print_field(name, field, indent);
                }
            }
        }
    }

    fn print_field(&mut self, name: &str, field: Field<'_>, indent: usize) {
        match field {
            Field::Node(node) => {
                self.line(indent, &format!("{}: {}", name, node.tag()));
                self.print_payload(node, indent + INDENT);
            }
            Field::Nodes(nodes) if nodes.is_empty() => self.line(indent, &format!("{}: []", name)),
            Field::Nodes(nodes) => {
                self.line(indent, &format!("{}: [", name));
                for node in nodes {
                    self.print_node(node, indent + INDENT);
                }
                self.line(indent, "]");
            }
            Field::Tokens(tokens) => {
                let joined = tokens
                    .iter()
                    .map(|token| token.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                self.line(indent, &format!("{}: [{}]", name, joined));
            }
            Field::Scalar(text) => self.line(indent, &format!("{}: {}", name, text)),
            Field::Absent => self.line(indent, &format!("{}: <absent>", name)),
        }
    }
}

pub fn render(node: &Node) -> String {
    PrettyPrinter::new().print(node)
}
