use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::NumberTooLong { .. }
            | ErrorImpl::IdentifierTooLong { .. }
            | ErrorImpl::InvalidLexeme { .. } => ErrorKind::Lexical,
            ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::RelationalOperatorExpected { .. }
            | ErrorImpl::UnexpectedFactor { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntactic,
            ErrorImpl::AlreadyDeclared { .. }
            | ErrorImpl::NotDeclared { .. }
            | ErrorImpl::NotAVariable { .. } => ErrorKind::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NumberTooLong { .. } => "NumberTooLong",
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::InvalidLexeme { .. } => "InvalidLexeme",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::RelationalOperatorExpected { .. } => "RelationalOperatorExpected",
            ErrorImpl::UnexpectedFactor { .. } => "UnexpectedFactor",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::AlreadyDeclared { .. } => "AlreadyDeclared",
            ErrorImpl::NotDeclared { .. } => "NotDeclared",
            ErrorImpl::NotAVariable { .. } => "NotAVariable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NumberTooLong { .. } => ErrorTip::Suggestion(String::from(
                "Numbers may have at most 5 digits",
            )),
            ErrorImpl::IdentifierTooLong { .. } => ErrorTip::Suggestion(String::from(
                "Identifiers may have at most 11 letters",
            )),
            ErrorImpl::InvalidLexeme { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected, token } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, token
            )),
            ErrorImpl::RelationalOperatorExpected { token } => ErrorTip::Suggestion(format!(
                "Conditions compare with one of = <> < <= > >=, found `{}`",
                token
            )),
            ErrorImpl::UnexpectedFactor { token } => ErrorTip::Suggestion(format!(
                "Expected an identifier, a number or `(`, found `{}`",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Statements and expressions may nest at most {} levels deep",
                limit
            )),
            ErrorImpl::AlreadyDeclared { identifier } => {
                ErrorTip::Suggestion(format!("Identifier `{}` already declared", identifier))
            }
            ErrorImpl::NotDeclared { identifier } => ErrorTip::Suggestion(format!(
                "Identifier `{}` has not been declared",
                identifier
            )),
            ErrorImpl::NotAVariable { identifier } => ErrorTip::Suggestion(format!(
                "Only variables may be assigned or read into, `{}` is not a variable",
                identifier
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

/// The compilation stage that rejected the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntactic,
    Semantic,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("number {number:?} is longer than 5 digits")]
    NumberTooLong { number: String },
    #[error("identifier {identifier:?} is longer than 11 characters")]
    IdentifierTooLong { identifier: String },
    #[error("invalid lexeme: {lexeme:?}")]
    InvalidLexeme { lexeme: String },
    #[error("{expected} expected, found {token:?}")]
    ExpectedToken { expected: TokenKind, token: String },
    #[error("relational operator expected, found {token:?}")]
    RelationalOperatorExpected { token: String },
    #[error("identifier, number, or left parenthesis expected, found {token:?}")]
    UnexpectedFactor { token: String },
    /// Only reachable from token streams built outside the tokenizer, which
    /// never emits a number longer than five digits.
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("identifier {identifier:?} already declared")]
    AlreadyDeclared { identifier: String },
    #[error("identifier {identifier:?} not declared")]
    NotDeclared { identifier: String },
    #[error("identifier {identifier:?} must be a variable")]
    NotAVariable { identifier: String },
}
