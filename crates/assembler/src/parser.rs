//! Parser for MiniMIPS assembly tokens → instructions.
//!
//! Dispatches on the opcode's [`Format`] to the matching operand pattern.

use crate::error::AsmError;
use crate::lexer::Token;
use minitesk_common::opcode::Format;
use minitesk_common::{Instruction, Opcode, Register};

/// Parse the tokens of a single line into an instruction.
///
/// Returns `Ok(None)` for lines that carry no instruction: blank lines,
/// label-only lines and directive lines.
pub(crate) fn parse_line(tokens: &[Token], line_num: usize) -> Result<Option<Instruction>, AsmError> {
    // Labels carry no encoding; an instruction may follow on the same line.
    let start = tokens
        .iter()
        .position(|t| !matches!(t, Token::Label(_)))
        .unwrap_or(tokens.len());
    let tokens = &tokens[start..];

    let mnemonic = match tokens.first() {
        None | Some(Token::Directive(_)) => return Ok(None),
        Some(Token::Ident(s)) => s.as_str(),
        Some(other) => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: other.text(),
            })
        }
    };
    let args = &tokens[1..];

    if mnemonic == "nop" {
        expect_end(args, line_num)?;
        return Ok(Some(Instruction::nop()));
    }

    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| AsmError::UnknownOpcode {
        line: line_num,
        token: mnemonic.to_string(),
    })?;
    let m = opcode.mnemonic();

    let instr = match opcode.format() {
        // rd, rs, rt
        Format::Register => {
            let rd = expect_register(args, 0, line_num, m, 3)?;
            let rs = expect_register(args, 1, line_num, m, 3)?;
            let rt = expect_register(args, 2, line_num, m, 3)?;
            expect_end(&args[3..], line_num)?;
            Instruction::register(opcode, rd, rs, rt)
        }

        // rd, rt, shamt
        Format::Shift => {
            let rd = expect_register(args, 0, line_num, m, 3)?;
            let rt = expect_register(args, 1, line_num, m, 3)?;
            let shamt = expect_in_range(args, 2, line_num, m, 3, 0, 31)?;
            expect_end(&args[3..], line_num)?;
            Instruction::shift(opcode, rd, rt, shamt as u8)
        }

        // rd, rt, rs
        Format::ShiftVariable => {
            let rd = expect_register(args, 0, line_num, m, 3)?;
            let rt = expect_register(args, 1, line_num, m, 3)?;
            let rs = expect_register(args, 2, line_num, m, 3)?;
            expect_end(&args[3..], line_num)?;
            Instruction::shift_variable(opcode, rd, rt, rs)
        }

        // rt, rs, imm
        Format::Immediate => {
            let rt = expect_register(args, 0, line_num, m, 3)?;
            let rs = expect_register(args, 1, line_num, m, 3)?;
            let imm = if opcode.has_signed_immediate() {
                expect_in_range(args, 2, line_num, m, 3, i16::MIN as i64, i16::MAX as i64)?
            } else {
                expect_in_range(args, 2, line_num, m, 3, 0, u16::MAX as i64)?
            };
            expect_end(&args[3..], line_num)?;
            Instruction::immediate(opcode, rt, rs, imm as u16)
        }

        // rt, imm
        Format::Upper => {
            let rt = expect_register(args, 0, line_num, m, 2)?;
            let imm = expect_in_range(args, 1, line_num, m, 2, 0, u16::MAX as i64)?;
            expect_end(&args[2..], line_num)?;
            Instruction::upper(rt, imm as u16)
        }
    };

    Ok(Some(instr))
}

/// Resolve the register operand at position `idx`.
fn expect_register(
    args: &[Token],
    idx: usize,
    line: usize,
    opcode: &'static str,
    expected: usize,
) -> Result<Register, AsmError> {
    match args.get(idx) {
        Some(Token::Register(s)) | Some(Token::Ident(s)) => {
            Register::from_name(s).ok_or_else(|| AsmError::UnknownRegister {
                line,
                token: s.clone(),
            })
        }
        Some(other) => Err(AsmError::UnexpectedToken {
            line,
            token: other.text(),
        }),
        None => Err(AsmError::MissingOperand {
            line,
            opcode,
            expected,
        }),
    }
}

/// Extract a number at position `idx` and check it lies in `min..=max`.
fn expect_in_range(
    args: &[Token],
    idx: usize,
    line: usize,
    opcode: &'static str,
    expected: usize,
    min: i64,
    max: i64,
) -> Result<i64, AsmError> {
    let value = match args.get(idx) {
        Some(Token::Number(n)) => *n,
        Some(other) => {
            return Err(AsmError::UnexpectedToken {
                line,
                token: other.text(),
            })
        }
        None => {
            return Err(AsmError::MissingOperand {
                line,
                opcode,
                expected,
            })
        }
    };
    if !(min..=max).contains(&value) {
        return Err(AsmError::ImmediateOutOfRange {
            line,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Check that there are no extra tokens.
fn expect_end(remaining: &[Token], line: usize) -> Result<(), AsmError> {
    match remaining.first() {
        Some(tok) => Err(AsmError::UnexpectedToken {
            line,
            token: tok.text(),
        }),
        None => Ok(()),
    }
}
