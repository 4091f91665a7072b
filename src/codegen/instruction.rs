use std::fmt::Display;

/// Stack-machine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// Push a literal
    Lit,
    /// Arithmetic or relational operation, selected by an `OprCode`
    Opr,
    /// Push a frame slot
    Lod,
    /// Pop into a frame slot
    Sto,
    Cal,
    /// Grow the stack by the frame size
    Inc,
    Jmp,
    /// Jump when the popped value is zero
    Jpc,
    /// Input, output or halt, selected by a `SysCode`
    Sys,
}

impl OpCode {
    pub fn code(&self) -> i32 {
        match self {
            OpCode::Lit => 1,
            OpCode::Opr => 2,
            OpCode::Lod => 3,
            OpCode::Sto => 4,
            OpCode::Cal => 5,
            OpCode::Inc => 6,
            OpCode::Jmp => 7,
            OpCode::Jpc => 8,
            OpCode::Sys => 9,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            OpCode::Lit => "LIT",
            OpCode::Opr => "OPR",
            OpCode::Lod => "LOD",
            OpCode::Sto => "STO",
            OpCode::Cal => "CAL",
            OpCode::Inc => "INC",
            OpCode::Jmp => "JMP",
            OpCode::Jpc => "JPC",
            OpCode::Sys => "SYS",
        }
    }
}

/// Operand of an `OPR` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OprCode {
    Add = 1,
    Sub = 2,
    Mul = 3,
    Div = 4,
    Eql = 5,
    Neq = 6,
    Lss = 7,
    Leq = 8,
    Gtr = 9,
    Geq = 10,
    Odd = 11,
    Neg = 12,
}

/// Operand of a `SYS` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SysCode {
    Write = 1,
    Read = 2,
    Halt = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub op: OpCode,
    pub level: i32,
    pub operand: i32,
}

impl Instruction {
    pub fn new(op: OpCode, level: i32, operand: i32) -> Self {
        Instruction { op, level, operand }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.op.mnemonic(), self.level, self.operand)
    }
}
