//! MiniMIPS assembler: text ↔ binary translation.
//!
//! The assembler is a mechanical 1:1 translation of the instruction subset
//! the simulator understands. Labels and directives are accepted so that
//! generated test programs assemble as written, but they carry no encoding.
//!
//! # Usage
//!
//! ```
//! use minitesk_assembler::{assemble, disassemble};
//!
//! let text = "add $t0, $zero, $zero\naddi $t1, $zero, 99\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(disassemble(&program), text);
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for all programs.
//! The disassembler outputs canonical text; the assembler also accepts
//! non-canonical input (hex where decimal is canonical, bare register
//! names, `nop`).

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use disassembler::listing;
pub use error::AsmError;

use lexer::tokenize_line;
use minitesk_common::Program;
use parser::parse_line;

/// Assemble text into a program.
///
/// Returns the first error encountered.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut instructions = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let tokens = tokenize_line(line, line_num)?;
        if let Some(instr) = parse_line(&tokens, line_num)? {
            instructions.push(instr);
        }
    }

    Ok(Program::new(instructions))
}

/// Disassemble a program into canonical assembly text.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
