//! MiniMIPS simulator for straight-line test programs.
//!
//! The simulator models the architectural register file only:
//! - 32 general-purpose registers, `$zero` hardwired to 0
//! - a program counter over the instruction list
//! - signed-overflow traps for `add`, `addi` and `sub`
//!
//! Each executed instruction is reported through `tracing` at `trace` level.
//!
//! # Usage
//!
//! ```
//! use minitesk_common::{Instruction, Opcode, Program, Register};
//! use minitesk_vm::run;
//!
//! let program = Program::new(vec![
//!     Instruction::immediate(Opcode::Addi, Register::T1, Register::Zero, 99),
//! ]);
//!
//! let registers = run(&program).unwrap();
//! assert_eq!(registers.get(Register::T1), 99);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use machine::{Machine, RegisterFile};

use minitesk_common::Program;

/// Execute a program from a cleared register file and return the final state.
///
/// # Errors
///
/// Returns [`RuntimeError`] if an instruction traps.
pub fn run(program: &Program) -> Result<RegisterFile, RuntimeError> {
    Machine::new(program).execute()
}
