//! Error types and error handling for the proton front end.
//!
//! This module defines the fatal errors raised while lexing, parsing and
//! evaluating. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each phase
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
