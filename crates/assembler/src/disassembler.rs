//! Disassembler: binary program → canonical assembly text.

use std::fmt::Write;

use minitesk_common::Program;

/// Disassemble a program into canonical assembly text.
///
/// One instruction per line, no indentation, no comments. The output
/// reassembles to an identical program.
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    for instr in &program.instructions {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{instr}");
    }
    out
}

/// Disassemble with the byte address and raw word of each instruction,
/// starting at `origin`.
pub fn listing(program: &Program, origin: u32) -> String {
    let mut out = String::new();
    for (i, instr) in program.instructions.iter().enumerate() {
        let address = origin.wrapping_add(4 * i as u32);
        let _ = writeln!(out, "{address:08x}:  {:08x}  {instr}", instr.encode());
    }
    out
}
