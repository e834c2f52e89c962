//! Errors raised while generating test programs.

use std::io;
use std::path::PathBuf;

use minitesk_vm::RuntimeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    /// Reading or writing a generated file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Simulating the generated program trapped.
    #[error("template '{template}': {source}")]
    Runtime {
        template: String,
        #[source]
        source: RuntimeError,
    },

    /// Settings could not be loaded.
    #[error("invalid settings: {0}")]
    Config(#[from] config::ConfigError),
}

impl TemplateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }
}
