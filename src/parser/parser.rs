//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the `Parser` cursor and the `parse` entry point.
//! Grammar rules live in `expr` and `stmt`; each rule either consumes its
//! whole production or leaves the cursor where it found it.

use std::rc::Rc;

use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_program;

/// Result of a grammar rule: `Ok(None)` means the rule does not match here
/// and consumed nothing, `Err` aborts the whole parse.
pub type ParseResult<T = Node> = Result<Option<T>, Error>;

/// The parser state: an immutable token list and a cursor into it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token `offset` places after the current one.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Advances past `n` tokens.
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Whether the current token is the symbol `value`.
    pub fn at_symbol(&self, value: &str) -> bool {
        self.current_token()
            .map_or(false, |token| token.is_symbol(value))
    }

    /// Whether the current token is the keyword `value`.
    pub fn at_keyword(&self, value: &str) -> bool {
        self.current_token()
            .map_or(false, |token| token.is(TokenKind::Keyword, value))
    }

    /// Consumes the current token if it is the symbol `value`.
    pub fn eat_symbol(&mut self, value: &str) -> Option<Token> {
        if self.at_symbol(value) {
            self.advance()
        } else {
            None
        }
    }

    /// Saves the cursor for a later `rewind`.
    pub fn checkpoint(&self) -> usize {
        self.pos
    }

    /// Puts the cursor back to a saved checkpoint.
    pub fn rewind(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    /// Runs `rule` speculatively: if it does not match, the cursor goes back
    /// to where it was before the attempt.
    pub fn attempt<T>(&mut self, rule: impl FnOnce(&mut Parser) -> ParseResult<T>) -> ParseResult<T> {
        let checkpoint = self.checkpoint();
        let result = rule(self)?;
        if result.is_none() {
            self.rewind(checkpoint);
        }
        Ok(result)
    }

    /// Returns the current position in the source file, or the end of the
    /// last token once all tokens are consumed.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&self.file)),
            },
        }
    }

    /// Span from `start` up to the end of the previously consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        let end = match self.pos.checked_sub(1).and_then(|last| self.tokens.get(last)) {
            Some(token) => token.span.end.clone(),
            None => start.clone(),
        };
        Span { start, end }
    }
}

/// Parses a stream of tokens into a `Program` node.
///
/// Tokens that cannot start a statement are recorded as `Skipped` nodes and
/// parsing carries on; only unclosed brackets abort.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens, file);
    parse_program(&mut parser)
}
