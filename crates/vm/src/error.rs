//! Runtime errors for the MiniMIPS simulator.
//!
//! Every error includes the instruction index (`at`) for debugging.

use minitesk_common::Opcode;
use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `add`, `addi` or `sub` overflowed the signed 32-bit range. The
    /// destination register keeps its previous value.
    #[error("integer overflow in {opcode} at instruction {at}")]
    IntegerOverflow { at: usize, opcode: Opcode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::IntegerOverflow {
                at: 5,
                opcode: Opcode::Addi
            }
            .to_string(),
            "integer overflow in addi at instruction 5"
        );
    }
}
