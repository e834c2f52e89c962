//! Decode errors for MiniMIPS instruction words.

use thiserror::Error;

/// Errors that occur during instruction decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Primary opcode field (bits 31..26) is not part of the MiniMIPS subset.
    #[error("unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),

    /// SPECIAL instruction with a function field outside the subset.
    #[error("unknown function code: {0:#04x}")]
    UnknownFunct(u8),

    /// Register number outside 0..=31.
    #[error("invalid register number: {0}")]
    InvalidRegister(u8),

    /// A field that must be zero for this instruction is not.
    #[error("malformed instruction word: {0:#010x}")]
    MalformedInstruction(u32),

    /// Byte stream length is not a multiple of 4.
    #[error("invalid byte stream length: {0} (must be multiple of 4)")]
    InvalidLength(usize),
}
