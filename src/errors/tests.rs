//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.pl0".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidLexeme {
            lexeme: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "InvalidLexeme");
    assert_eq!(error.get_kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            token: "end".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.pl0");
}

#[test]
fn test_expected_token_message() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Period,
            token: "EOF".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.get_kind(), ErrorKind::Syntactic);
    assert_eq!(error.to_string(), "period expected, found \"EOF\"");
}

#[test]
fn test_lexical_error_kinds() {
    let too_long = Error::new(
        ErrorImpl::NumberTooLong {
            number: "123456".to_string(),
        },
        at(0),
    );
    let identifier = Error::new(
        ErrorImpl::IdentifierTooLong {
            identifier: "abcdefghijkl".to_string(),
        },
        at(0),
    );

    assert_eq!(too_long.get_kind(), ErrorKind::Lexical);
    assert_eq!(identifier.get_kind(), ErrorKind::Lexical);
    assert_eq!(too_long.get_error_name(), "NumberTooLong");
    assert_eq!(identifier.get_error_name(), "IdentifierTooLong");
}

#[test]
fn test_syntactic_error_kinds() {
    let relop = Error::new(
        ErrorImpl::RelationalOperatorExpected {
            token: "then".to_string(),
        },
        at(0),
    );
    let factor = Error::new(
        ErrorImpl::UnexpectedFactor {
            token: ";".to_string(),
        },
        at(0),
    );

    assert_eq!(relop.get_kind(), ErrorKind::Syntactic);
    assert_eq!(factor.get_kind(), ErrorKind::Syntactic);
    assert_eq!(relop.get_error_name(), "RelationalOperatorExpected");
    assert_eq!(factor.get_error_name(), "UnexpectedFactor");
}

#[test]
fn test_nesting_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, at(7));

    assert_eq!(error.get_kind(), ErrorKind::Syntactic);
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "nesting deeper than 256 levels");
    assert_eq!(
        error.get_tip().to_string(),
        "Statements and expressions may nest at most 256 levels deep"
    );
}

#[test]
fn test_semantic_error_kinds() {
    for error_impl in [
        ErrorImpl::AlreadyDeclared {
            identifier: "x".to_string(),
        },
        ErrorImpl::NotDeclared {
            identifier: "x".to_string(),
        },
        ErrorImpl::NotAVariable {
            identifier: "x".to_string(),
        },
    ] {
        let error = Error::new(error_impl, at(0));
        assert_eq!(error.get_kind(), ErrorKind::Semantic);
    }
}

#[test]
fn test_already_declared_message() {
    let error = Error::new(
        ErrorImpl::AlreadyDeclared {
            identifier: "x".to_string(),
        },
        at(0),
    );

    assert_eq!(error.to_string(), "identifier \"x\" already declared");
    assert_eq!(error.get_tip().to_string(), "Identifier `x` already declared");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidLexeme {
            lexeme: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedFactor {
            token: ")".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
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
