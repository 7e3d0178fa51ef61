use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Words that never lex as identifiers. `and` and `or` are English-like
    /// operators and lex as symbols.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::Keyword);
        map.insert("else", TokenKind::Keyword);
        map.insert("for", TokenKind::Keyword);
        map.insert("while", TokenKind::Keyword);
        map.insert("try", TokenKind::Keyword);
        map.insert("catch", TokenKind::Keyword);
        map.insert("finally", TokenKind::Keyword);
        map.insert("const", TokenKind::Keyword);
        map.insert("immutable", TokenKind::Keyword);
        map.insert("not", TokenKind::Keyword);
        map.insert("in", TokenKind::Keyword);
        map.insert("is", TokenKind::Keyword);
        map.insert("and", TokenKind::Symbol);
        map.insert("or", TokenKind::Symbol);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Symbol,
    Keyword,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Keyword => "keyword",
        };
        write!(f, "{}", name)
    }
}

/// A `(kind, value)` pair. String tokens hold the decoded literal.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

// Spans only matter for error reporting.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    /// Writes the token back in source form, so a dump can be lexed again.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", escape_string(&self.value)),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn is_symbol(&self, value: &str) -> bool {
        self.is(TokenKind::Symbol, value)
    }

    /// Operators are spelled by symbols and keywords (`in`, `is`, `not`).
    pub fn is_operator_like(&self) -> bool {
        matches!(self.kind, TokenKind::Symbol | TokenKind::Keyword)
    }
}

fn escape_string(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\0' => result.push_str("\\0"),
            _ => result.push(ch),
        }
    }

    result
}

/// Renders tokens as their space-joined textual forms.
///
/// A `/` followed by a `\` gets two spaces, since `/ \` would open a block
/// comment.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();
    let mut previous: Option<String> = None;

    for token in tokens {
        let text = token.to_string();

        if let Some(previous) = &previous {
            if previous.ends_with('/') && text.starts_with('\\') {
                output.push_str("  ");
            } else {
                output.push(' ');
            }
        }

        output.push_str(&text);
        previous = Some(text);
    }

    output
}
