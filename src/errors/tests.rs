//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnterminatedString { delimiter: '"' },
        Position(10, Rc::new("test.pr".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.pr".to_string()));
    let error = Error::new(
        ErrorImpl::UnclosedBracket {
            context: "in bracketed expression".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.pr");
}

#[test]
fn test_unclosed_bracket_error() {
    let error = Error::new(
        ErrorImpl::UnclosedBracket {
            context: "at end of argument list for function".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnclosedBracket");
    assert_eq!(
        error.to_string(),
        "unclosed bracket at end of argument list for function"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_unsupported_operation_message() {
    let error = Error::new(
        ErrorImpl::UnsupportedOperation {
            operator: "-".to_string(),
            left: "str".to_string(),
            right: "int".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnsupportedOperation");
    assert_eq!(
        error.to_string(),
        "operation - not supported between objects of type str and int"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnsupportedOperation {
            operator: "+".to_string(),
            left: "int".to_string(),
            right: "str".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnterminatedString { delimiter: '\'' },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains('\'')),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
