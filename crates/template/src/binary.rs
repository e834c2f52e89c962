//! Writes encoded instruction words to a file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use minitesk_common::{Endian, Instruction};

use crate::error::TemplateError;

/// Buffered writer of 32-bit instruction words.
pub struct BinaryWriter {
    path: PathBuf,
    endian: Endian,
    out: BufWriter<File>,
    words: usize,
}

impl BinaryWriter {
    /// Create (or truncate) `path`, creating missing parent directories.
    pub fn create(path: impl AsRef<Path>, endian: Endian) -> Result<Self, TemplateError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TemplateError::io(parent, e))?;
        }
        let file = File::create(&path).map_err(|e| TemplateError::io(&path, e))?;
        Ok(Self {
            path,
            endian,
            out: BufWriter::new(file),
            words: 0,
        })
    }

    pub fn write(&mut self, instr: &Instruction) -> Result<(), TemplateError> {
        let bytes = self.endian.to_bytes(instr.encode());
        self.out
            .write_all(&bytes)
            .map_err(|e| TemplateError::io(&self.path, e))?;
        self.words += 1;
        Ok(())
    }

    /// Number of words written so far.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Flush buffered bytes and return the path written.
    pub fn finish(mut self) -> Result<PathBuf, TemplateError> {
        self.out
            .flush()
            .map_err(|e| TemplateError::io(&self.path, e))?;
        Ok(self.path)
    }
}
