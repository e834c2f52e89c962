//! Error types for the MiniMIPS assembler.

use thiserror::Error;

/// Errors produced while assembling text into a program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized instruction mnemonic was encountered.
    #[error("line {line}: unknown instruction '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// A register operand did not name one of the 32 registers.
    #[error("line {line}: unknown register '{token}'")]
    UnknownRegister { line: usize, token: String },

    /// An instruction did not have enough operands.
    #[error("line {line}: {opcode} expects {expected} operand(s)")]
    MissingOperand {
        line: usize,
        opcode: &'static str,
        expected: usize,
    },

    /// A numeric literal could not be parsed.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// An immediate or shift amount does not fit its field.
    #[error("line {line}: value {value} out of range {min}..={max}")]
    ImmediateOutOfRange {
        line: usize,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unknown_opcode() {
        let e = AsmError::UnknownOpcode {
            line: 3,
            token: "mul".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: unknown instruction 'mul'");
    }

    #[test]
    fn error_display_unknown_register() {
        let e = AsmError::UnknownRegister {
            line: 5,
            token: "$t10".to_string(),
        };
        assert_eq!(e.to_string(), "line 5: unknown register '$t10'");
    }

    #[test]
    fn error_display_missing_operand() {
        let e = AsmError::MissingOperand {
            line: 7,
            opcode: "addi",
            expected: 3,
        };
        assert_eq!(e.to_string(), "line 7: addi expects 3 operand(s)");
    }

    #[test]
    fn error_display_out_of_range() {
        let e = AsmError::ImmediateOutOfRange {
            line: 2,
            value: 40000,
            min: -32768,
            max: 32767,
        };
        assert_eq!(e.to_string(), "line 2: value 40000 out of range -32768..=32767");
    }

    #[test]
    fn error_display_unexpected_token() {
        let e = AsmError::UnexpectedToken {
            line: 4,
            token: "$t3".to_string(),
        };
        assert_eq!(e.to_string(), "line 4: unexpected token '$t3'");
    }
}
