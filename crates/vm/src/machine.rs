//! Simulator state: the register file and the program counter.

use std::fmt;

use minitesk_common::register::ALL_REGISTERS;
use minitesk_common::{Instruction, Program, Register};

/// The 32 general-purpose registers.
///
/// `$zero` always reads as 0; writes to it are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterFile {
    values: [u32; 32],
}

impl RegisterFile {
    /// A register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a register.
    pub fn get(&self, reg: Register) -> u32 {
        self.values[reg.number() as usize]
    }

    /// Write a register. Writes to `$zero` are ignored.
    pub fn set(&mut self, reg: Register, value: u32) {
        if reg != Register::Zero {
            self.values[reg.number() as usize] = value;
        }
    }

    /// Registers holding a non-zero value, in register-number order.
    pub fn non_zero(&self) -> impl Iterator<Item = (Register, u32)> + '_ {
        ALL_REGISTERS
            .iter()
            .map(|&reg| (reg, self.get(reg)))
            .filter(|&(_, value)| value != 0)
    }
}

impl fmt::Display for RegisterFile {
    /// One `$name = 0x........` line per non-zero register.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (reg, value) in self.non_zero() {
            writeln!(f, "{reg} = {value:#010x}")?;
        }
        Ok(())
    }
}

/// The MiniMIPS simulator.
pub struct Machine<'a> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Architectural register state.
    pub(crate) registers: RegisterFile,
    /// Program counter (instruction index).
    pub(crate) pc: usize,
}

impl<'a> Machine<'a> {
    /// Create a machine for the given program with all registers cleared.
    pub fn new(program: &'a Program) -> Self {
        Self::with_registers(program, RegisterFile::new())
    }

    /// Create a machine that starts from a given register state.
    pub fn with_registers(program: &'a Program, mut registers: RegisterFile) -> Self {
        // Keep $zero hardwired even if the caller built the state by hand.
        registers.values[0] = 0;
        Self {
            program,
            registers,
            pc: 0,
        }
    }

    /// Current register state.
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Index of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// True once the program counter has run past the last instruction.
    pub fn is_finished(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Fetch the instruction at the current pc.
    pub(crate) fn fetch(&self) -> Option<Instruction> {
        self.program.instructions.get(self.pc).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_register_ignores_writes() {
        let mut regs = RegisterFile::new();
        regs.set(Register::Zero, 42);
        assert_eq!(regs.get(Register::Zero), 0);
    }

    #[test]
    fn with_registers_clears_zero() {
        let program = Program::default();
        let mut regs = RegisterFile::new();
        regs.values[0] = 7;
        let machine = Machine::with_registers(&program, regs);
        assert_eq!(machine.registers().get(Register::Zero), 0);
    }

    #[test]
    fn non_zero_lists_in_order() {
        let mut regs = RegisterFile::new();
        regs.set(Register::T2, 3);
        regs.set(Register::T0, 1);
        let listed: Vec<_> = regs.non_zero().collect();
        assert_eq!(listed, vec![(Register::T0, 1), (Register::T2, 3)]);
    }

    #[test]
    fn display_dump() {
        let mut regs = RegisterFile::new();
        regs.set(Register::T1, 99);
        assert_eq!(regs.to_string(), "$t1 = 0x00000063\n");
    }

    #[test]
    fn empty_program_is_finished() {
        let program = Program::default();
        assert!(Machine::new(&program).is_finished());
    }
}
