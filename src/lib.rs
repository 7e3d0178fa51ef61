#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::{ast::Node, pretty::render},
    errors::errors::{Error, ErrorTip},
    evaluator::{evaluator::Evaluator, value::Value},
    lexer::{lexer::tokenize, tokens::{render_tokens, Token}},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Everything one pass over a source text produces.
#[derive(Debug)]
pub struct Run {
    pub tokens: Vec<Token>,
    pub program: Node,
    pub value: Option<Value>,
    pub diagnostics: Vec<String>,
}

impl Run {
    pub fn token_dump(&self) -> String {
        render_tokens(&self.tokens)
    }

    pub fn tree_dump(&self) -> String {
        render(&self.program)
    }
}

/// Lexes, parses and evaluates `source`. Any fatal error aborts the pass.
pub fn run(source: &str, file: Option<String>) -> Result<Run, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));

    let tokens = tokenize(source.to_string(), file)?;
    let program = parse(tokens.clone(), file_name)?;

    let mut evaluator = Evaluator::new();
    let value = evaluator.evaluate(&program)?;

    Ok(Run {
        tokens,
        program,
        value,
        diagnostics: evaluator.take_diagnostics(),
    })
}

/// Finds the line holding the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within
/// the line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End of input points just past the last character.
    if pos == content.len() {
        let line = content.split_inclusive('\n').last().unwrap_or("");
        let line_number = content.split_inclusive('\n').count().max(1);
        return Some((line_number, line.to_string(), line.len()));
    }

    None
}


/// Formats a fatal error with the offending source line and a caret.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnclosedBracket (Unclosed bracket in bracketed expression)
        -> main.pr
           |
        20 | (1 + 2
           | ------^

        Errors without a tip show their message instead:
        Error: UnsupportedOperation (operation - not supported between ...)
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", position.1));

    let (line, line_text, line_pos) = match get_line_at_position(source, position.0) {
        Some(found) => found,
        None => {
            output.push_str(&format!("{}\n", error));
            return output;
        }
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
