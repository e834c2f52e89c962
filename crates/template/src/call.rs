//! Elements of a generated instruction sequence.

use minitesk_common::Instruction;

/// One element of a test program, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Instruction(Instruction),
    /// A label definition, printed as `name:`.
    Label(String),
    /// A comment line; dropped when comments are disabled.
    Comment(String),
    /// Free text copied to the output as is.
    Text(String),
    /// An empty line.
    Newline,
    /// An `.org` directive.
    Origin(u32),
    /// An `.align` directive.
    Align(u32),
}

impl Call {
    /// The instruction carried by this call, if any.
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            Call::Instruction(instr) => Some(instr),
            _ => None,
        }
    }
}

/// The part of a test program a call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Initialization code, emitted by `Template::pre`.
    Pre,
    /// The test body, emitted by `Template::run`.
    #[default]
    Main,
    /// Finalization code, emitted by `Template::post`.
    Post,
}

/// All sections in print order.
pub const ALL_SECTIONS: [Section; 3] = [Section::Pre, Section::Main, Section::Post];

impl Section {
    /// Heading printed above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Pre => "Initialization",
            Section::Main => "Main Code",
            Section::Post => "Finalization",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Section::Pre => 0,
            Section::Main => 1,
            Section::Post => 2,
        }
    }
}
