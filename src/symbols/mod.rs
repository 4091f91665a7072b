//! Symbol table for name resolution.
//!
//! Constants, variables and the synthetic `main` procedure are recorded
//! here as the parser meets their declarations.

pub mod symbol_table;

#[cfg(test)]
mod tests;
