use log::trace;

use super::instruction::{Instruction, OpCode};

/// The instruction sequence under construction.
///
/// Indices never change once an instruction is emitted, so they double as
/// jump targets. Forward jumps are emitted with a placeholder operand and
/// fixed up with [`Assembly::patch`] once the target is known.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    instructions: Vec<Instruction>,
}

impl Assembly {
    pub fn new() -> Self {
        Assembly {
            instructions: vec![],
        }
    }

    /// Appends an instruction and returns its index.
    pub fn emit(&mut self, op: OpCode, level: i32, operand: i32) -> usize {
        let index = self.instructions.len();
        trace!("emit {:>4}: {} {} {}", index, op.mnemonic(), level, operand);

        self.instructions.push(Instruction::new(op, level, operand));
        index
    }

    /// Index the next emitted instruction will get.
    pub fn next_index(&self) -> usize {
        self.instructions.len()
    }

    /// Overwrites the operand of the instruction at `index`.
    ///
    /// Returns `false` when nothing has been emitted at `index`.
    pub fn patch(&mut self, index: usize, operand: i32) -> bool {
        match self.instructions.get_mut(index) {
            Some(instruction) => {
                trace!("patch {:>4}: operand {} -> {}", index, instruction.operand, operand);
                instruction.operand = operand;
                true
            }
            None => false,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
