//! MiniMIPS test template framework.
//!
//! A [`Template`] describes a test program by calling emitters on a
//! [`MiniMips`] builder. The [`Generator`] runs the template, simulates the
//! resulting program and writes it out through the [`Printer`] (and
//! optionally the [`BinaryWriter`]), following the loaded [`Settings`].
//!
//! # Usage
//!
//! ```
//! use minitesk_template::{Generator, MiniMips, Settings, Template};
//!
//! struct Zero;
//!
//! impl Template for Zero {
//!     fn name(&self) -> &str {
//!         "zero"
//!     }
//!
//!     fn run(&self, m: &mut MiniMips) {
//!         m.add(m.t0(), m.zero(), m.zero());
//!     }
//! }
//!
//! let generator = Generator::new(Settings::default());
//! let test = generator.build(&Zero);
//! assert_eq!(test.program().len(), 1);
//! ```

pub mod binary;
pub mod call;
pub mod error;
pub mod generator;
pub mod minimips;
pub mod printer;
pub mod settings;
pub mod template;

pub use binary::BinaryWriter;
pub use call::{Call, Section};
pub use error::TemplateError;
pub use generator::{GenerateReport, Generator, TestProgram};
pub use minimips::MiniMips;
pub use printer::Printer;
pub use settings::Settings;
pub use template::Template;
