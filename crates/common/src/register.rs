//! General-purpose register definitions for MiniMIPS.
//!
//! Registers are numbered 0..=31 and carry the conventional o32 ABI names.

use std::fmt;

use crate::error::DecodeError;

/// One of the 32 general-purpose registers.
///
/// `Zero` is hardwired to 0 in the simulator; writes to it are discarded.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Register {
    Zero = 0,
    /// Assembler temporary.
    At = 1,
    V0 = 2,
    V1 = 3,
    A0 = 4,
    A1 = 5,
    A2 = 6,
    A3 = 7,
    T0 = 8,
    T1 = 9,
    T2 = 10,
    T3 = 11,
    T4 = 12,
    T5 = 13,
    T6 = 14,
    T7 = 15,
    S0 = 16,
    S1 = 17,
    S2 = 18,
    S3 = 19,
    S4 = 20,
    S5 = 21,
    S6 = 22,
    S7 = 23,
    T8 = 24,
    T9 = 25,
    /// Reserved for the exception handler.
    K0 = 26,
    K1 = 27,
    Gp = 28,
    Sp = 29,
    /// Frame pointer, also known as `s8`.
    Fp = 30,
    Ra = 31,
}

/// All registers, indexed by register number.
pub const ALL_REGISTERS: [Register; 32] = [
    Register::Zero,
    Register::At,
    Register::V0,
    Register::V1,
    Register::A0,
    Register::A1,
    Register::A2,
    Register::A3,
    Register::T0,
    Register::T1,
    Register::T2,
    Register::T3,
    Register::T4,
    Register::T5,
    Register::T6,
    Register::T7,
    Register::S0,
    Register::S1,
    Register::S2,
    Register::S3,
    Register::S4,
    Register::S5,
    Register::S6,
    Register::S7,
    Register::T8,
    Register::T9,
    Register::K0,
    Register::K1,
    Register::Gp,
    Register::Sp,
    Register::Fp,
    Register::Ra,
];

impl TryFrom<u8> for Register {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_REGISTERS
            .get(value as usize)
            .copied()
            .ok_or(DecodeError::InvalidRegister(value))
    }
}

impl Register {
    /// Register number (0..=31).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// ABI name without the `$` sigil.
    pub fn name(self) -> &'static str {
        match self {
            Register::Zero => "zero",
            Register::At => "at",
            Register::V0 => "v0",
            Register::V1 => "v1",
            Register::A0 => "a0",
            Register::A1 => "a1",
            Register::A2 => "a2",
            Register::A3 => "a3",
            Register::T0 => "t0",
            Register::T1 => "t1",
            Register::T2 => "t2",
            Register::T3 => "t3",
            Register::T4 => "t4",
            Register::T5 => "t5",
            Register::T6 => "t6",
            Register::T7 => "t7",
            Register::S0 => "s0",
            Register::S1 => "s1",
            Register::S2 => "s2",
            Register::S3 => "s3",
            Register::S4 => "s4",
            Register::S5 => "s5",
            Register::S6 => "s6",
            Register::S7 => "s7",
            Register::T8 => "t8",
            Register::T9 => "t9",
            Register::K0 => "k0",
            Register::K1 => "k1",
            Register::Gp => "gp",
            Register::Sp => "sp",
            Register::Fp => "fp",
            Register::Ra => "ra",
        }
    }

    /// Look up a register by name or number.
    ///
    /// Accepts `t0`, `$t0`, `$8` and the `s8` alias for `fp`. Names are
    /// case-insensitive; numbers need the `$` prefix.
    pub fn from_name(name: &str) -> Option<Register> {
        let (dollar, name) = match name.strip_prefix('$') {
            Some(rest) => (true, rest),
            None => (false, name),
        };
        if name.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
            if !dollar {
                return None;
            }
            let number: u8 = name.parse().ok()?;
            return Register::try_from(number).ok();
        }

        let lower = name.to_ascii_lowercase();
        if lower == "s8" {
            return Some(Register::Fp);
        }
        ALL_REGISTERS.iter().find(|r| r.name() == lower).copied()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}
