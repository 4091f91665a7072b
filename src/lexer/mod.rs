//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts PL/0 source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of reserved words, identifiers, numbers and operators
//! - Token position tracking for error reporting
//! - `/* ... */` comments and whitespace handling
//! - The numeric lexeme list used for diagnostic dumps

pub mod lexer;
pub mod tokens;
