use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^##.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^/.\\(?s:.*?)/.\\").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\.[0-9]+").unwrap(), handler: number_handler },
        RegexPattern {
            regex: Regex::new(r"^(?:\(|\)|\[|\]|\{|\}|//|/\^|/|%|\*\*|`/|\*|\.|;|:|&&|\|\||&|\||\++|-+)").unwrap(),
            handler: symbol_handler,
        },
        RegexPattern { regex: Regex::new(r"^(?:[1-9][0-9]*|0)(?:\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"^"(?:[^\\"]|\\(?s:.))*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^'(?:[^\\']|\\(?s:.))*'"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^["']"#).unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new(r"^\w+").unwrap(), handler: word_handler },
    ];
}

/// Lazily turns source text into tokens.
///
/// Characters that no pattern recognises are buffered and flushed as a
/// single symbol as soon as any pattern matches again, or at end of input.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    pending: VecDeque<Token>,
    unmatched: String,
    unmatched_start: usize,
    failed: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            pending: VecDeque::new(),
            unmatched: String::new(),
            unmatched_start: 0,
            failed: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        log::trace!("lexed {} {:?} at {}", token.kind, token.value, token.span.start.0);
        self.pending.push_back(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }

    fn push_operator_run(&mut self, run: &str, start: usize) {
        let mut offset = start;
        for piece in group_operator_run(run) {
            let span = self.span(offset, offset + piece.len());
            offset += piece.len();
            self.push(MK_TOKEN!(TokenKind::Symbol, piece, span));
        }
    }

    fn flush_unmatched(&mut self) {
        if self.unmatched.is_empty() {
            return;
        }

        let run = std::mem::take(&mut self.unmatched);
        let start = self.unmatched_start;
        self.push_operator_run(&run, start);
    }

    fn step(&mut self) -> Result<(), Error> {
        for pattern in PATTERNS.iter() {
            let matched = match pattern.regex.find(self.remainder()) {
                Some(found) => found.as_str().to_string(),
                None => continue,
            };

            self.flush_unmatched();
            return (pattern.handler)(self, &matched);
        }

        if let Some(ch) = self.remainder().chars().next() {
            if self.unmatched.is_empty() {
                self.unmatched_start = self.pos;
            }
            self.unmatched.push(ch);
            self.advance_n(ch.len_utf8());
        }

        Ok(())
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            if self.failed {
                return None;
            }

            if self.at_eof() {
                if self.unmatched.is_empty() {
                    return None;
                }
                self.flush_unmatched();
                continue;
            }

            if let Err(error) = self.step() {
                self.failed = true;
                self.pending.clear();
                return Some(Err(error));
            }
        }
    }
}

/// Splits a run of operator characters into symbols.
///
/// Pure runs of `+` or `-` are grouped so that increment/decrement tokens
/// sit at both ends of the run, e.g. `+++++` becomes `++ + ++`. Anything
/// else stays one symbol.
pub fn group_operator_run(run: &str) -> Vec<String> {
    let first = match run.chars().next() {
        Some(ch @ ('+' | '-')) => ch,
        _ => return vec![run.to_string()],
    };

    if !run.chars().all(|ch| ch == first) {
        return vec![run.to_string()];
    }

    let single = first.to_string();
    let double = single.repeat(2);

    match run.len() {
        1 => vec![single],
        2 => vec![double],
        3 => vec![double, single],
        4 => vec![double, single.clone(), single],
        n => {
            let mut pieces = vec![double.clone()];
            pieces.extend(std::iter::repeat(single).take(n - 4));
            pieces.push(double);
            pieces
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.pos;
    lexer.push_operator_run(matched, start);
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let span = lexer.span(lexer.pos, lexer.pos + matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let span = lexer.span(lexer.pos, lexer.pos + matched.len());
    // Both delimiters are single byte.
    let value = decode_escapes(&matched[1..matched.len() - 1]);
    lexer.push(MK_TOKEN!(TokenKind::String, value, span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let delimiter = matched.chars().next().unwrap_or('"');
    Err(Error::new(
        ErrorImpl::UnterminatedString { delimiter },
        lexer.get_position(),
    ))
}

fn word_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);
    let span = lexer.span(lexer.pos, lexer.pos + matched.len());
    lexer.push(MK_TOKEN!(kind, matched.to_string(), span));
    lexer.advance_n(matched.len());
    Ok(())
}

pub fn decode_escapes(literal: &str) -> String {
    let mut result = String::new();
    let mut chars = literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some(quote @ ('\\' | '"' | '\'')) => {
                result.push(quote);
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            // Unknown escapes and a trailing backslash keep the backslash.
            _ => result.push(ch),
        }
    }

    result
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).collect()
}
