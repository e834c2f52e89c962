//! Program representation for MiniMIPS instruction streams.
//!
//! A program is a sequence of 32-bit instructions. Binary images are raw
//! concatenations of 4-byte words with no header, in either byte order.

use crate::error::DecodeError;
use crate::instruction::Instruction;

/// Byte order of encoded instruction words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Endian {
    /// Most significant byte first, as on classic MIPS boards.
    #[default]
    Big,
    Little,
}

impl Endian {
    /// The four bytes of `word` in this order.
    pub fn to_bytes(self, word: u32) -> [u8; 4] {
        match self {
            Endian::Big => word.to_be_bytes(),
            Endian::Little => word.to_le_bytes(),
        }
    }

    fn read_word(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endian::Big => u32::from_be_bytes(bytes),
            Endian::Little => u32::from_le_bytes(bytes),
        }
    }
}

/// A MiniMIPS program: a sequence of instructions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The instruction stream.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Encode every instruction word into bytes.
    ///
    /// The result length is always `instructions.len() * 4`.
    pub fn encode(&self, endian: Endian) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.instructions.len() * 4);
        for instr in &self.instructions {
            bytes.extend_from_slice(&endian.to_bytes(instr.encode()));
        }
        bytes
    }

    /// Decode a byte slice into a program.
    ///
    /// The byte slice length must be a multiple of 4.
    pub fn decode(bytes: &[u8], endian: Endian) -> Result<Self, DecodeError> {
        if bytes.len() % 4 != 0 {
            return Err(DecodeError::InvalidLength(bytes.len()));
        }

        let mut instructions = Vec::with_capacity(bytes.len() / 4);
        for chunk in bytes.chunks_exact(4) {
            let word = endian.read_word([chunk[0], chunk[1], chunk[2], chunk[3]]);
            instructions.push(Instruction::decode(word)?);
        }

        Ok(Self { instructions })
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
