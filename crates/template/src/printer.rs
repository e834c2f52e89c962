//! Renders test programs as assembly text.

use std::fmt::Write;

use tracing::debug;

use crate::call::{Call, Section, ALL_SECTIONS};
use crate::generator::TestProgram;
use crate::settings::Settings;

/// Name written into generated file headers.
pub const TOOL_NAME: &str = "MiniTESK";

/// Formats test programs according to the comment and indent settings.
#[derive(Debug, Clone)]
pub struct Printer {
    comments_enabled: bool,
    comment_token: String,
    separator_token: String,
    indent_token: String,
    line_width: usize,
    separator: String,
}

impl Printer {
    pub fn new(settings: &Settings) -> Self {
        let separator = format!(
            "{}{}",
            settings.comment_token,
            repeat_to(
                &settings.separator_token,
                settings.line_width.saturating_sub(width(&settings.comment_token))
            )
        );
        Self {
            comments_enabled: settings.comments_enabled,
            comment_token: settings.comment_token.clone(),
            separator_token: settings.separator_token.clone(),
            indent_token: settings.indent_token.clone(),
            line_width: settings.line_width,
            separator,
        }
    }

    /// The full text of a test program, one line per call plus headers.
    pub fn print(&self, program: &TestProgram) -> String {
        let mut out = Lines::default();

        if self.comments_enabled {
            out.push(self.separator.clone());
            out.push(self.comment(&format!(
                "This test program was automatically generated by {TOOL_NAME}"
            )));
            out.push(self.comment(&format!("Template: {}", program.name)));
            if !program.description.is_empty() {
                out.push(self.comment(&program.description));
            }
            out.push(self.separator.clone());
        }

        for section in ALL_SECTIONS {
            let calls = program.calls(section);
            if calls.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(String::new());
            }
            self.print_header(&mut out, section);
            for call in calls {
                self.print_call(&mut out, call);
            }
        }

        out.finish()
    }

    fn print_header(&self, out: &mut Lines, section: Section) {
        if self.comments_enabled {
            out.push(self.title_separator(section.title()));
        }
    }

    /// A separator line with `text` centred in it, e.g. `#==== Main Code ====`.
    fn title_separator(&self, text: &str) -> String {
        let text_width = width(text);
        let prefix = self.line_width.saturating_sub(text_width) / 2;
        let postfix = self.line_width.saturating_sub(prefix + text_width);
        format!(
            "{}{} {text} {}",
            self.comment_token,
            repeat_to(
                &self.separator_token,
                prefix.saturating_sub(width(&self.comment_token) + 1)
            ),
            repeat_to(&self.separator_token, postfix.saturating_sub(1))
        )
    }

    fn print_call(&self, out: &mut Lines, call: &Call) {
        match call {
            Call::Instruction(instr) => out.push(self.indented(&instr.to_string())),
            Call::Label(name) => out.push(format!("{name}:")),
            Call::Comment(text) if self.comments_enabled => {
                out.push(self.indented(&self.comment(text)))
            }
            Call::Comment(_) => {}
            Call::Text(text) => out.push(self.indented(text)),
            Call::Newline => out.push(String::new()),
            Call::Origin(address) => out.push(self.indented(&format!(".org {address:#x}"))),
            Call::Align(alignment) => out.push(self.indented(&format!(".align {alignment}"))),
        }
    }

    /// `comment_token text`, with no extra space if the token already ends in one.
    fn comment(&self, text: &str) -> String {
        let space = if self.comment_token.ends_with(' ') { "" } else { " " };
        format!("{}{space}{text}", self.comment_token)
    }

    fn indented(&self, text: &str) -> String {
        format!("{}{text}", self.indent_token)
    }
}

/// Display width in characters.
fn width(text: &str) -> usize {
    text.chars().count()
}

/// `token` repeated to fill `columns` characters (whole repetitions only).
fn repeat_to(token: &str, columns: usize) -> String {
    match width(token) {
        0 => String::new(),
        n => token.repeat(columns / n),
    }
}

#[derive(Default)]
struct Lines(String);

impl Lines {
    fn push(&mut self, line: String) {
        debug!(line = %line, "print");
        let _ = writeln!(self.0, "{line}");
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn finish(self) -> String {
        self.0
    }
}
