//! Parser and code generator.
//!
//! This module contains the one-pass recursive descent parser that turns a
//! token stream into P-code. There is no syntax tree: each grammar rule
//! emits its instructions as soon as it has recognised them, and handles:
//!
//! - Constant and variable declarations, recorded in the symbol table
//! - Statements, dispatched through a token lookup table
//! - Conditions and arithmetic expressions with the usual precedence
//! - Backpatching of the forward jumps of `if` and `while`
//!
//! Every rule returns `Result`; the first error aborts the whole parse.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
