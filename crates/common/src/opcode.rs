//! Opcode definitions for the MiniMIPS ALU subset.
//!
//! R-type instructions share primary opcode `SPECIAL` (0x00) and are told
//! apart by their function field. I-type instructions have their own primary
//! opcode.

use std::fmt;

use crate::error::DecodeError;

/// Primary opcode shared by all R-type instructions.
pub const SPECIAL: u8 = 0x00;

/// Operand layout of an instruction, both in assembly and in the encoded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `op rd, rs, rt`
    Register,
    /// `op rd, rt, shamt`
    Shift,
    /// `op rd, rt, rs`
    ShiftVariable,
    /// `op rt, rs, imm`
    Immediate,
    /// `op rt, imm`
    Upper,
}

/// Identifies the operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Three-register arithmetic and logic
    /// Signed add; traps on overflow.
    Add,
    /// Add without overflow trap.
    Addu,
    /// Signed subtract; traps on overflow.
    Sub,
    /// Subtract without overflow trap.
    Subu,
    And,
    Or,
    Xor,
    Nor,
    /// Set on signed less-than.
    Slt,
    /// Set on unsigned less-than.
    Sltu,

    // Shifts
    Sll,
    Srl,
    Sra,
    Sllv,
    Srlv,
    Srav,

    // Immediate forms
    /// Add sign-extended immediate; traps on overflow.
    Addi,
    /// Add sign-extended immediate without overflow trap.
    Addiu,
    Slti,
    /// Unsigned compare against the sign-extended immediate.
    Sltiu,
    /// AND with zero-extended immediate.
    Andi,
    Ori,
    Xori,
    /// Load immediate into the upper half-word.
    Lui,
}

/// All opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 24] = [
    Opcode::Add,
    Opcode::Addu,
    Opcode::Sub,
    Opcode::Subu,
    Opcode::And,
    Opcode::Or,
    Opcode::Xor,
    Opcode::Nor,
    Opcode::Slt,
    Opcode::Sltu,
    Opcode::Sll,
    Opcode::Srl,
    Opcode::Sra,
    Opcode::Sllv,
    Opcode::Srlv,
    Opcode::Srav,
    Opcode::Addi,
    Opcode::Addiu,
    Opcode::Slti,
    Opcode::Sltiu,
    Opcode::Andi,
    Opcode::Ori,
    Opcode::Xori,
    Opcode::Lui,
];

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Addu => "addu",
            Opcode::Sub => "sub",
            Opcode::Subu => "subu",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Nor => "nor",
            Opcode::Slt => "slt",
            Opcode::Sltu => "sltu",
            Opcode::Sll => "sll",
            Opcode::Srl => "srl",
            Opcode::Sra => "sra",
            Opcode::Sllv => "sllv",
            Opcode::Srlv => "srlv",
            Opcode::Srav => "srav",
            Opcode::Addi => "addi",
            Opcode::Addiu => "addiu",
            Opcode::Slti => "slti",
            Opcode::Sltiu => "sltiu",
            Opcode::Andi => "andi",
            Opcode::Ori => "ori",
            Opcode::Xori => "xori",
            Opcode::Lui => "lui",
        }
    }

    /// Look up an opcode by its (case-insensitive) mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        let lower = mnemonic.to_ascii_lowercase();
        ALL_OPCODES.iter().find(|op| op.mnemonic() == lower).copied()
    }

    /// Operand layout of this opcode.
    pub fn format(&self) -> Format {
        match self {
            Opcode::Add
            | Opcode::Addu
            | Opcode::Sub
            | Opcode::Subu
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Nor
            | Opcode::Slt
            | Opcode::Sltu => Format::Register,
            Opcode::Sll | Opcode::Srl | Opcode::Sra => Format::Shift,
            Opcode::Sllv | Opcode::Srlv | Opcode::Srav => Format::ShiftVariable,
            Opcode::Addi
            | Opcode::Addiu
            | Opcode::Slti
            | Opcode::Sltiu
            | Opcode::Andi
            | Opcode::Ori
            | Opcode::Xori => Format::Immediate,
            Opcode::Lui => Format::Upper,
        }
    }

    /// True if the 16-bit immediate is sign-extended before use.
    pub fn has_signed_immediate(&self) -> bool {
        matches!(
            self,
            Opcode::Addi | Opcode::Addiu | Opcode::Slti | Opcode::Sltiu
        )
    }

    /// Primary opcode field (bits 31..26).
    pub fn primary(&self) -> u8 {
        match self {
            Opcode::Addi => 0x08,
            Opcode::Addiu => 0x09,
            Opcode::Slti => 0x0A,
            Opcode::Sltiu => 0x0B,
            Opcode::Andi => 0x0C,
            Opcode::Ori => 0x0D,
            Opcode::Xori => 0x0E,
            Opcode::Lui => 0x0F,
            _ => SPECIAL,
        }
    }

    /// Function field (bits 5..0) for R-type opcodes, `None` for I-type.
    pub fn funct(&self) -> Option<u8> {
        let funct = match self {
            Opcode::Sll => 0x00,
            Opcode::Srl => 0x02,
            Opcode::Sra => 0x03,
            Opcode::Sllv => 0x04,
            Opcode::Srlv => 0x06,
            Opcode::Srav => 0x07,
            Opcode::Add => 0x20,
            Opcode::Addu => 0x21,
            Opcode::Sub => 0x22,
            Opcode::Subu => 0x23,
            Opcode::And => 0x24,
            Opcode::Or => 0x25,
            Opcode::Xor => 0x26,
            Opcode::Nor => 0x27,
            Opcode::Slt => 0x2A,
            Opcode::Sltu => 0x2B,
            _ => return None,
        };
        Some(funct)
    }

    /// Resolve an R-type opcode from its function field.
    pub fn from_funct(funct: u8) -> Result<Opcode, DecodeError> {
        ALL_OPCODES
            .iter()
            .find(|op| op.funct() == Some(funct))
            .copied()
            .ok_or(DecodeError::UnknownFunct(funct))
    }

    /// Resolve an I-type opcode from its primary opcode field.
    ///
    /// `SPECIAL` is rejected here; use [`Opcode::from_funct`] for R-type words.
    pub fn from_primary(primary: u8) -> Result<Opcode, DecodeError> {
        if primary == SPECIAL {
            return Err(DecodeError::UnknownOpcode(primary));
        }
        ALL_OPCODES
            .iter()
            .find(|op| op.primary() == primary)
            .copied()
            .ok_or(DecodeError::UnknownOpcode(primary))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
