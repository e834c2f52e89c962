//! MiniMIPS common types and instruction encoding.
//!
//! This crate provides the foundational data structures shared by the
//! simulator, the assembler and the template engine:
//!
//! - [`Register`]: the 32 general-purpose registers and their ABI names
//! - [`Opcode`]: the supported ALU subset with its encoding fields
//! - [`Instruction`]: a 32-bit instruction word with encode/decode and text form
//! - [`Program`]: a sequence of instructions, encodable in either byte order
//! - [`DecodeError`]: errors from decoding words and byte streams
//!
//! # Features
//!
//! `serde` derives `Serialize`/`Deserialize` for [`Endian`] so it can be read
//! from configuration files.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::{Format, Opcode};
pub use program::{Endian, Program};
pub use register::Register;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_register() -> impl Strategy<Value = Register> {
        prop::sample::select(register::ALL_REGISTERS.to_vec())
    }

    fn arb_opcode() -> impl Strategy<Value = Opcode> {
        prop::sample::select(opcode::ALL_OPCODES.to_vec())
    }

    /// Strategy that generates a random well-formed Instruction.
    fn arb_instruction() -> impl Strategy<Value = Instruction> {
        (
            arb_opcode(),
            arb_register(),
            arb_register(),
            arb_register(),
            0u8..32,
            any::<u16>(),
        )
            .prop_map(|(op, a, b, c, shamt, imm)| match op.format() {
                Format::Register => Instruction::register(op, a, b, c),
                Format::Shift => Instruction::shift(op, a, b, shamt),
                Format::ShiftVariable => Instruction::shift_variable(op, a, b, c),
                Format::Immediate => Instruction::immediate(op, a, b, imm),
                Format::Upper => Instruction::upper(a, imm),
            })
    }

    proptest! {
        /// For all well-formed instructions, decode inverts encode.
        #[test]
        fn encode_decode_roundtrip(instr in arb_instruction()) {
            prop_assert_eq!(Instruction::decode(instr.encode()), Ok(instr));
        }

        /// Any 32-bit word either decodes to an instruction that re-encodes
        /// to the same word, or is rejected.
        #[test]
        fn random_words_decode(word in any::<u32>()) {
            if let Ok(instr) = Instruction::decode(word) {
                prop_assert_eq!(instr.encode(), word);
            }
        }
    }
}
