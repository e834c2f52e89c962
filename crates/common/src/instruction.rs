//! Instruction encoding and decoding for the MiniMIPS instruction set.
//!
//! Every instruction is one 32-bit word in the standard MIPS32 layout:
//! ```text
//! R-type: op(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)
//! I-type: op(6) | rs(5) | rt(5) | imm(16)
//! ```
//! Fields an instruction does not use are zero, both in the word and in the
//! decoded [`Instruction`].

use std::fmt;

use crate::error::DecodeError;
use crate::opcode::{Format, Opcode, SPECIAL};
use crate::register::Register;

/// A single MiniMIPS instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Destination of R-type instructions.
    pub rd: Register,
    /// First source.
    pub rs: Register,
    /// Second source of R-type, destination of I-type instructions.
    pub rt: Register,
    /// Constant shift amount (0..=31).
    pub shamt: u8,
    /// Raw 16-bit immediate. See [`Instruction::immediate_value`].
    pub imm: u16,
}

impl Instruction {
    fn blank(opcode: Opcode) -> Self {
        Self {
            opcode,
            rd: Register::Zero,
            rs: Register::Zero,
            rt: Register::Zero,
            shamt: 0,
            imm: 0,
        }
    }

    /// `op rd, rs, rt` for [`Format::Register`] opcodes.
    pub fn register(opcode: Opcode, rd: Register, rs: Register, rt: Register) -> Self {
        Self {
            rd,
            rs,
            rt,
            ..Self::blank(opcode)
        }
    }

    /// `op rd, rt, shamt` for [`Format::Shift`] opcodes. Only the low 5 bits
    /// of `shamt` are kept.
    pub fn shift(opcode: Opcode, rd: Register, rt: Register, shamt: u8) -> Self {
        Self {
            rd,
            rt,
            shamt: shamt & 0x1F,
            ..Self::blank(opcode)
        }
    }

    /// `op rd, rt, rs` for [`Format::ShiftVariable`] opcodes.
    pub fn shift_variable(opcode: Opcode, rd: Register, rt: Register, rs: Register) -> Self {
        Self {
            rd,
            rs,
            rt,
            ..Self::blank(opcode)
        }
    }

    /// `op rt, rs, imm` for [`Format::Immediate`] opcodes.
    pub fn immediate(opcode: Opcode, rt: Register, rs: Register, imm: u16) -> Self {
        Self {
            rs,
            rt,
            imm,
            ..Self::blank(opcode)
        }
    }

    /// `lui rt, imm`.
    pub fn upper(rt: Register, imm: u16) -> Self {
        Self {
            rt,
            imm,
            ..Self::blank(Opcode::Lui)
        }
    }

    /// The canonical no-op, `sll $zero, $zero, 0` (encodes as `0x00000000`).
    pub fn nop() -> Self {
        Self::shift(Opcode::Sll, Register::Zero, Register::Zero, 0)
    }

    /// True if this is the canonical no-op.
    pub fn is_nop(&self) -> bool {
        *self == Self::nop()
    }

    /// The register written by this instruction.
    pub fn destination(&self) -> Register {
        match self.opcode.format() {
            Format::Register | Format::Shift | Format::ShiftVariable => self.rd,
            Format::Immediate | Format::Upper => self.rt,
        }
    }

    /// Immediate operand as the ALU sees it: sign-extended for
    /// `addi`/`addiu`/`slti`/`sltiu`, zero-extended otherwise.
    pub fn immediate_value(&self) -> i32 {
        if self.opcode.has_signed_immediate() {
            self.imm as i16 as i32
        } else {
            self.imm as i32
        }
    }

    /// Encode this instruction to a 32-bit word.
    pub fn encode(&self) -> u32 {
        let primary = self.opcode.primary() as u32;
        let rs = self.rs.number() as u32;
        let rt = self.rt.number() as u32;
        let rd = self.rd.number() as u32;

        match self.opcode.funct() {
            Some(funct) => {
                (primary << 26)
                    | (rs << 21)
                    | (rt << 16)
                    | (rd << 11)
                    | ((self.shamt as u32 & 0x1F) << 6)
                    | funct as u32
            }
            None => (primary << 26) | (rs << 21) | (rt << 16) | self.imm as u32,
        }
    }

    /// Decode a 32-bit word into an instruction.
    pub fn decode(word: u32) -> Result<Self, DecodeError> {
        let primary = (word >> 26) as u8;
        let rs = Register::try_from(((word >> 21) & 0x1F) as u8)?;
        let rt = Register::try_from(((word >> 16) & 0x1F) as u8)?;
        let rd = Register::try_from(((word >> 11) & 0x1F) as u8)?;
        let shamt = ((word >> 6) & 0x1F) as u8;
        let funct = (word & 0x3F) as u8;
        let imm = (word & 0xFFFF) as u16;

        let malformed = DecodeError::MalformedInstruction(word);

        if primary == SPECIAL {
            let opcode = Opcode::from_funct(funct)?;
            return match opcode.format() {
                Format::Register if shamt == 0 => Ok(Self::register(opcode, rd, rs, rt)),
                Format::Shift if rs == Register::Zero => Ok(Self::shift(opcode, rd, rt, shamt)),
                Format::ShiftVariable if shamt == 0 => {
                    Ok(Self::shift_variable(opcode, rd, rt, rs))
                }
                _ => Err(malformed),
            };
        }

        let opcode = Opcode::from_primary(primary)?;
        match opcode.format() {
            Format::Upper if rs == Register::Zero => Ok(Self::upper(rt, imm)),
            Format::Upper => Err(malformed),
            _ => Ok(Self::immediate(opcode, rt, rs, imm)),
        }
    }
}

impl fmt::Display for Instruction {
    /// Canonical assembly text, e.g. `addi $t1, $zero, 99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.opcode.mnemonic();
        match self.opcode.format() {
            Format::Register => write!(f, "{m} {}, {}, {}", self.rd, self.rs, self.rt),
            Format::Shift => write!(f, "{m} {}, {}, {}", self.rd, self.rt, self.shamt),
            Format::ShiftVariable => write!(f, "{m} {}, {}, {}", self.rd, self.rt, self.rs),
            Format::Immediate if self.opcode.has_signed_immediate() => {
                write!(f, "{m} {}, {}, {}", self.rt, self.rs, self.imm as i16)
            }
            Format::Immediate => write!(f, "{m} {}, {}, {:#x}", self.rt, self.rs, self.imm),
            Format::Upper => write!(f, "{m} {}, {:#x}", self.rt, self.imm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Encoding against known MIPS words ---

    #[test]
    fn encode_add_zeroing_idiom() {
        // add $t0, $zero, $zero
        let instr = Instruction::register(Opcode::Add, Register::T0, Register::Zero, Register::Zero);
        assert_eq!(instr.encode(), 0x0000_4020);
    }

    #[test]
    fn encode_addi() {
        // addi $t1, $zero, 99
        let instr = Instruction::immediate(Opcode::Addi, Register::T1, Register::Zero, 99);
        assert_eq!(instr.encode(), 0x2009_0063);
    }

    #[test]
    fn encode_addi_negative() {
        // addiu $sp, $sp, -8
        let instr = Instruction::immediate(Opcode::Addiu, Register::Sp, Register::Sp, -8i16 as u16);
        assert_eq!(instr.encode(), 0x27BD_FFF8);
    }

    #[test]
    fn encode_sll() {
        // sll $t0, $t1, 2
        let instr = Instruction::shift(Opcode::Sll, Register::T0, Register::T1, 2);
        assert_eq!(instr.encode(), 0x0009_4080);
    }

    #[test]
    fn encode_lui() {
        // lui $at, 0x1001
        let instr = Instruction::upper(Register::At, 0x1001);
        assert_eq!(instr.encode(), 0x3C01_1001);
    }

    #[test]
    fn nop_is_zero_word() {
        assert_eq!(Instruction::nop().encode(), 0);
        assert!(Instruction::decode(0).unwrap().is_nop());
    }

    #[test]
    fn shift_amount_is_masked() {
        let instr = Instruction::shift(Opcode::Sra, Register::T0, Register::T0, 33);
        assert_eq!(instr.shamt, 1);
    }

    // --- Decode ---

    #[test]
    fn decode_known_words() {
        assert_eq!(
            Instruction::decode(0x0000_4020).unwrap(),
            Instruction::register(Opcode::Add, Register::T0, Register::Zero, Register::Zero)
        );
        assert_eq!(
            Instruction::decode(0x2009_0063).unwrap(),
            Instruction::immediate(Opcode::Addi, Register::T1, Register::Zero, 99)
        );
    }

    #[test]
    fn decode_rejects_unsupported_opcode() {
        // lw $t0, 0($sp)
        assert_eq!(
            Instruction::decode(0x8FA8_0000),
            Err(DecodeError::UnknownOpcode(0x23))
        );
    }

    #[test]
    fn decode_rejects_unsupported_funct() {
        // mult $t0, $t1
        assert_eq!(
            Instruction::decode(0x0109_0018),
            Err(DecodeError::UnknownFunct(0x18))
        );
    }

    #[test]
    fn decode_rejects_shamt_on_register_format() {
        let word = 0x0000_4020 | (3 << 6);
        assert_eq!(
            Instruction::decode(word),
            Err(DecodeError::MalformedInstruction(word))
        );
    }

    #[test]
    fn decode_rejects_rs_on_lui() {
        let word = 0x3C01_1001 | (5 << 21);
        assert_eq!(
            Instruction::decode(word),
            Err(DecodeError::MalformedInstruction(word))
        );
    }

    // --- Immediate interpretation ---

    #[test]
    fn immediate_sign_extension() {
        let signed = Instruction::immediate(Opcode::Addi, Register::T0, Register::Zero, 0xFFFF);
        assert_eq!(signed.immediate_value(), -1);
        let unsigned = Instruction::immediate(Opcode::Ori, Register::T0, Register::Zero, 0xFFFF);
        assert_eq!(unsigned.immediate_value(), 0xFFFF);
    }

    #[test]
    fn destination_by_format() {
        let r = Instruction::register(Opcode::Or, Register::S0, Register::S1, Register::S2);
        assert_eq!(r.destination(), Register::S0);
        let i = Instruction::immediate(Opcode::Andi, Register::A0, Register::A1, 1);
        assert_eq!(i.destination(), Register::A0);
    }

    // --- Text ---

    #[test]
    fn display_canonical_text() {
        let cases = [
            (
                Instruction::register(Opcode::Add, Register::T0, Register::Zero, Register::Zero),
                "add $t0, $zero, $zero",
            ),
            (
                Instruction::immediate(Opcode::Addi, Register::T1, Register::Zero, 99),
                "addi $t1, $zero, 99",
            ),
            (
                Instruction::immediate(Opcode::Addiu, Register::Sp, Register::Sp, -8i16 as u16),
                "addiu $sp, $sp, -8",
            ),
            (
                Instruction::immediate(Opcode::Ori, Register::T0, Register::T0, 0xff),
                "ori $t0, $t0, 0xff",
            ),
            (
                Instruction::shift(Opcode::Sll, Register::T0, Register::T1, 2),
                "sll $t0, $t1, 2",
            ),
            (
                Instruction::shift_variable(Opcode::Srav, Register::T0, Register::T1, Register::T2),
                "srav $t0, $t1, $t2",
            ),
            (Instruction::upper(Register::T0, 0x1234), "lui $t0, 0x1234"),
        ];
        for (instr, text) in cases {
            assert_eq!(instr.to_string(), text);
        }
    }
}
