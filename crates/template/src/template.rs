//! The `Template` trait implemented by every test template.

use crate::minimips::MiniMips;

/// A named test-generation unit producing one instruction sequence.
///
/// The generator calls [`pre`](Template::pre), [`run`](Template::run) and
/// [`post`](Template::post) in that order, each writing into its own section
/// of the test program.
pub trait Template {
    /// Short identifier, used on the command line.
    fn name(&self) -> &str;

    /// One-line summary shown by `minitesk list` and in the file header.
    fn description(&self) -> &str {
        ""
    }

    /// Emit initialization code.
    fn pre(&self, _m: &mut MiniMips) {}

    /// Emit the test body.
    fn run(&self, m: &mut MiniMips);

    /// Emit finalization code.
    fn post(&self, _m: &mut MiniMips) {}
}
