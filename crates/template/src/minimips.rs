//! The MiniMIPS base template: register handles and instruction emitters.
//!
//! Templates receive a `&mut MiniMips` and describe a test program by
//! calling emitters in order:
//!
//! ```
//! use minitesk_template::MiniMips;
//!
//! let mut m = MiniMips::new();
//! m.addi(m.t1(), m.zero(), 99);
//! assert_eq!(m.instructions()[0].to_string(), "addi $t1, $zero, 99");
//! ```

use minitesk_common::{Instruction, Opcode, Register};

use crate::call::{Call, Section};

/// Builder for the call sequences of one test program.
#[derive(Debug, Clone, Default)]
pub struct MiniMips {
    sections: [Vec<Call>; 3],
    current: Section,
}

impl MiniMips {
    /// An empty builder positioned in the main section.
    pub fn new() -> Self {
        Self::default()
    }

    /// The section new calls are appended to.
    pub fn section(&self) -> Section {
        self.current
    }

    /// Direct subsequent calls to `section`.
    pub fn set_section(&mut self, section: Section) {
        self.current = section;
    }

    /// Calls recorded for `section`.
    pub fn calls(&self, section: Section) -> &[Call] {
        &self.sections[section.index()]
    }

    /// Instructions of the current section, in emission order.
    pub fn instructions(&self) -> Vec<Instruction> {
        self.calls(self.current)
            .iter()
            .filter_map(Call::instruction)
            .copied()
            .collect()
    }

    pub(crate) fn into_sections(self) -> [Vec<Call>; 3] {
        self.sections
    }

    fn push(&mut self, call: Call) {
        self.sections[self.current.index()].push(call);
    }

    fn emit(&mut self, instr: Instruction) {
        self.push(Call::Instruction(instr));
    }

    // --- Non-instruction calls ---

    pub fn label(&mut self, name: impl Into<String>) {
        self.push(Call::Label(name.into()));
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.push(Call::Comment(text.into()));
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.push(Call::Text(text.into()));
    }

    pub fn newline(&mut self) {
        self.push(Call::Newline);
    }

    /// Place the following code at `address`.
    pub fn org(&mut self, address: u32) {
        self.push(Call::Origin(address));
    }

    /// Align the following code to `alignment` (a power of two exponent, as
    /// for the `.align` directive).
    pub fn align(&mut self, alignment: u32) {
        self.push(Call::Align(alignment));
    }

    /// `sll $zero, $zero, 0`
    pub fn nop(&mut self) {
        self.emit(Instruction::nop());
    }

    pub fn lui(&mut self, rt: Register, imm: u16) {
        self.emit(Instruction::upper(rt, imm));
    }
}

macro_rules! registers {
    ($($method:ident => $reg:ident),* $(,)?) => {
        impl MiniMips {
            $(
                #[doc = concat!("The `$", stringify!($method), "` register.")]
                pub fn $method(&self) -> Register {
                    Register::$reg
                }
            )*
        }
    };
}

registers! {
    zero => Zero, at => At, v0 => V0, v1 => V1,
    a0 => A0, a1 => A1, a2 => A2, a3 => A3,
    t0 => T0, t1 => T1, t2 => T2, t3 => T3, t4 => T4, t5 => T5, t6 => T6, t7 => T7,
    s0 => S0, s1 => S1, s2 => S2, s3 => S3, s4 => S4, s5 => S5, s6 => S6, s7 => S7,
    t8 => T8, t9 => T9, k0 => K0, k1 => K1,
    gp => Gp, sp => Sp, fp => Fp, ra => Ra,
}

macro_rules! register_ops {
    ($($method:ident => $op:ident),* $(,)?) => {
        impl MiniMips {
            $(
                #[doc = concat!("`", stringify!($method), " rd, rs, rt`")]
                pub fn $method(&mut self, rd: Register, rs: Register, rt: Register) {
                    self.emit(Instruction::register(Opcode::$op, rd, rs, rt));
                }
            )*
        }
    };
}

register_ops! {
    add => Add, addu => Addu, sub => Sub, subu => Subu,
    and => And, or => Or, xor => Xor, nor => Nor,
    slt => Slt, sltu => Sltu,
}

macro_rules! shift_ops {
    ($($method:ident => $op:ident),* $(,)?) => {
        impl MiniMips {
            $(
                #[doc = concat!("`", stringify!($method), " rd, rt, shamt`; `shamt` is masked to 5 bits.")]
                pub fn $method(&mut self, rd: Register, rt: Register, shamt: u8) {
                    self.emit(Instruction::shift(Opcode::$op, rd, rt, shamt));
                }
            )*
        }
    };
}

shift_ops! { sll => Sll, srl => Srl, sra => Sra }

macro_rules! shift_variable_ops {
    ($($method:ident => $op:ident),* $(,)?) => {
        impl MiniMips {
            $(
                #[doc = concat!("`", stringify!($method), " rd, rt, rs`")]
                pub fn $method(&mut self, rd: Register, rt: Register, rs: Register) {
                    self.emit(Instruction::shift_variable(Opcode::$op, rd, rt, rs));
                }
            )*
        }
    };
}

shift_variable_ops! { sllv => Sllv, srlv => Srlv, srav => Srav }

macro_rules! immediate_ops {
    ($imm:ty; $($method:ident => $op:ident),* $(,)?) => {
        impl MiniMips {
            $(
                #[doc = concat!("`", stringify!($method), " rt, rs, imm`")]
                pub fn $method(&mut self, rt: Register, rs: Register, imm: $imm) {
                    self.emit(Instruction::immediate(Opcode::$op, rt, rs, imm as u16));
                }
            )*
        }
    };
}

immediate_ops! { i16; addi => Addi, addiu => Addiu, slti => Slti, sltiu => Sltiu }
immediate_ops! { u16; andi => Andi, ori => Ori, xori => Xori }
