//! Main execution loop and opcode dispatch for the MiniMIPS simulator.

use minitesk_common::{Instruction, Opcode};
use tracing::trace;

use crate::error::RuntimeError;
use crate::machine::{Machine, RegisterFile};

impl<'a> Machine<'a> {
    /// Execute the program to its end and return the final register state.
    pub fn execute(&mut self) -> Result<RegisterFile, RuntimeError> {
        while self.step()? {}
        Ok(self.registers)
    }

    /// Execute one instruction.
    ///
    /// Returns `Ok(false)` without doing anything once the program is finished.
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        let Some(instr) = self.fetch() else {
            return Ok(false);
        };

        trace!(pc = self.pc, instruction = %instr, "execute");
        let result = self.evaluate(&instr)?;
        let dst = instr.destination();
        self.registers.set(dst, result);
        trace!(register = %dst, value = result, "write");

        self.pc += 1;
        Ok(true)
    }

    /// Compute the value an instruction writes to its destination register.
    fn evaluate(&self, instr: &Instruction) -> Result<u32, RuntimeError> {
        let rs = self.registers.get(instr.rs);
        let rt = self.registers.get(instr.rt);
        let imm = instr.immediate_value();

        let value = match instr.opcode {
            // Trapping arithmetic
            Opcode::Add => self.checked(instr.opcode, (rs as i32).checked_add(rt as i32))?,
            Opcode::Sub => self.checked(instr.opcode, (rs as i32).checked_sub(rt as i32))?,
            Opcode::Addi => self.checked(instr.opcode, (rs as i32).checked_add(imm))?,

            // Wrapping arithmetic
            Opcode::Addu => rs.wrapping_add(rt),
            Opcode::Subu => rs.wrapping_sub(rt),
            Opcode::Addiu => rs.wrapping_add(imm as u32),

            // Logic
            Opcode::And => rs & rt,
            Opcode::Or => rs | rt,
            Opcode::Xor => rs ^ rt,
            Opcode::Nor => !(rs | rt),
            Opcode::Andi => rs & imm as u32,
            Opcode::Ori => rs | imm as u32,
            Opcode::Xori => rs ^ imm as u32,
            Opcode::Lui => (imm as u32) << 16,

            // Comparison
            Opcode::Slt => ((rs as i32) < (rt as i32)) as u32,
            Opcode::Sltu => (rs < rt) as u32,
            Opcode::Slti => ((rs as i32) < imm) as u32,
            Opcode::Sltiu => (rs < imm as u32) as u32,

            // Shifts
            Opcode::Sll => rt << (instr.shamt & 0x1F),
            Opcode::Srl => rt >> (instr.shamt & 0x1F),
            Opcode::Sra => ((rt as i32) >> (instr.shamt & 0x1F)) as u32,
            Opcode::Sllv => rt << (rs & 0x1F),
            Opcode::Srlv => rt >> (rs & 0x1F),
            Opcode::Srav => ((rt as i32) >> (rs & 0x1F)) as u32,
        };

        Ok(value)
    }

    fn checked(&self, opcode: Opcode, value: Option<i32>) -> Result<u32, RuntimeError> {
        value
            .map(|v| v as u32)
            .ok_or(RuntimeError::IntegerOverflow { at: self.pc, opcode })
    }
}
