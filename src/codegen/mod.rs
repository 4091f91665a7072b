//! P-code generation primitives.
//!
//! This module contains the stack-machine instruction set and the
//! append-only instruction buffer the parser emits into:
//!
//! - Opcodes and their `OPR`/`SYS` sub-operations
//! - Emission with stable indices
//! - Operand backpatching for forward jumps

pub mod assembly;
pub mod instruction;
