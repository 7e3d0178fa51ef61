//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive-descent parser over a
//! chain of precedence levels and handles:
//!
//! - Statement parsing with recovery from unparseable tokens
//! - Expression parsing (operator chains, call and index suffixes, slices)
//! - Speculative rules that restore the cursor when they do not match
//!
//! The levels and their operators are listed in `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
