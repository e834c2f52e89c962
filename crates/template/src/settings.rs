//! Generation settings.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional settings file, then `MINITESK_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use minitesk_common::Endian;
use serde::Deserialize;

use crate::error::TemplateError;

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "MINITESK";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory generated files are written to.
    pub out_dir: PathBuf,
    pub code_file_prefix: String,
    pub code_file_extension: String,
    pub binary_extension: String,
    pub comments_enabled: bool,
    pub comment_token: String,
    pub separator_token: String,
    pub indent_token: String,
    /// Width of separator lines, including the comment token.
    pub line_width: usize,
    /// Echo generated programs to stdout.
    pub use_stdout: bool,
    /// Run generated programs on the simulator before writing them.
    pub simulate: bool,
    /// Also write the encoded program next to the text file.
    pub binary: bool,
    pub endian: Endian,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            code_file_prefix: "test".to_string(),
            code_file_extension: "s".to_string(),
            binary_extension: "bin".to_string(),
            comments_enabled: true,
            comment_token: "#".to_string(),
            separator_token: "=".to_string(),
            indent_token: "\t".to_string(),
            line_width: 100,
            use_stdout: false,
            simulate: true,
            binary: false,
            endian: Endian::Big,
        }
    }
}

impl Settings {
    /// Load settings from an optional file and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, TemplateError> {
        Self::load_with_prefix(file, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(file: Option<&Path>, prefix: &str) -> Result<Self, TemplateError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
