//! The generation driver: template → test program → files.

use std::fs;
use std::path::PathBuf;

use minitesk_common::{Instruction, Program};
use minitesk_vm::{run, RegisterFile};
use tracing::{debug, info};

use crate::binary::BinaryWriter;
use crate::call::{Call, Section, ALL_SECTIONS};
use crate::error::TemplateError;
use crate::minimips::MiniMips;
use crate::printer::Printer;
use crate::settings::Settings;
use crate::template::Template;

/// The calls a template produced, grouped by section.
#[derive(Debug, Clone)]
pub struct TestProgram {
    pub name: String,
    pub description: String,
    sections: [Vec<Call>; 3],
}

impl TestProgram {
    pub fn new(name: impl Into<String>, description: impl Into<String>, m: MiniMips) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sections: m.into_sections(),
        }
    }

    pub fn calls(&self, section: Section) -> &[Call] {
        &self.sections[section.index()]
    }

    /// All instructions in print order: initialization, main code, finalization.
    pub fn program(&self) -> Program {
        ALL_SECTIONS
            .iter()
            .flat_map(|&section| self.calls(section))
            .filter_map(Call::instruction)
            .copied()
            .collect::<Program>()
    }
}

/// What [`Generator::process`] produced for one template.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub template: String,
    /// The printed program.
    pub text: String,
    pub code_file: PathBuf,
    pub binary_file: Option<PathBuf>,
    pub instructions: usize,
    /// Final register state, when simulation is enabled.
    pub registers: Option<RegisterFile>,
}

/// Turns templates into test program files.
///
/// Output files are named `{prefix}_{NNNN}.{ext}`; the counter starts at 0
/// and advances once per program written by this generator.
pub struct Generator {
    settings: Settings,
    printer: Printer,
    counter: usize,
}

impl Generator {
    pub fn new(settings: Settings) -> Self {
        let printer = Printer::new(&settings);
        Self {
            settings,
            printer,
            counter: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the template's `pre`, `run` and `post` into their sections.
    pub fn build(&self, template: &dyn Template) -> TestProgram {
        let mut m = MiniMips::new();
        m.set_section(Section::Pre);
        template.pre(&mut m);
        m.set_section(Section::Main);
        template.run(&mut m);
        m.set_section(Section::Post);
        template.post(&mut m);
        TestProgram::new(template.name(), template.description(), m)
    }

    /// Build, optionally simulate, and write one template.
    ///
    /// Nothing is written if simulation traps. A failed program does not
    /// use up a file number.
    pub fn process(&mut self, template: &dyn Template) -> Result<GenerateReport, TemplateError> {
        let test = self.build(template);
        let program = test.program();
        debug!(template = %test.name, instructions = program.len(), "built");

        let registers = if self.settings.simulate {
            let registers = run(&program).map_err(|source| TemplateError::Runtime {
                template: test.name.clone(),
                source,
            })?;
            Some(registers)
        } else {
            None
        };

        let stem = self.stem();
        let text = self.printer.print(&test);

        fs::create_dir_all(&self.settings.out_dir)
            .map_err(|e| TemplateError::io(&self.settings.out_dir, e))?;
        let code_file = self
            .settings
            .out_dir
            .join(format!("{stem}.{}", self.settings.code_file_extension));
        fs::write(&code_file, &text).map_err(|e| TemplateError::io(&code_file, e))?;
        info!(template = %test.name, path = %code_file.display(), "wrote test program");

        let binary_file = if self.settings.binary {
            let path = self
                .settings
                .out_dir
                .join(format!("{stem}.{}", self.settings.binary_extension));
            Some(write_binary(path, &program.instructions, &self.settings)?)
        } else {
            None
        };
        self.counter += 1;

        Ok(GenerateReport {
            template: test.name,
            text,
            code_file,
            binary_file,
            instructions: program.len(),
            registers,
        })
    }

    /// File stem for the next program; the counter moves only once it is written.
    fn stem(&self) -> String {
        format!("{}_{:04}", self.settings.code_file_prefix, self.counter)
    }
}

fn write_binary(
    path: PathBuf,
    instructions: &[Instruction],
    settings: &Settings,
) -> Result<PathBuf, TemplateError> {
    let mut writer = BinaryWriter::create(&path, settings.endian)?;
    for instr in instructions {
        writer.write(instr)?;
    }
    let path = writer.finish()?;
    info!(path = %path.display(), words = instructions.len(), "wrote binary image");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use minitesk_common::Register;

    use super::*;

    struct Framed;

    impl Template for Framed {
        fn name(&self) -> &str {
            "framed"
        }

        fn pre(&self, m: &mut MiniMips) {
            m.addi(m.t0(), m.zero(), 1);
        }

        fn run(&self, m: &mut MiniMips) {
            m.add(m.t1(), m.t0(), m.t0());
        }

        fn post(&self, m: &mut MiniMips) {
            m.sll(m.t2(), m.t1(), 3);
        }
    }

    #[test]
    fn build_keeps_sections_apart() {
        let generator = Generator::new(Settings::default());
        let test = generator.build(&Framed);
        assert_eq!(test.name, "framed");
        assert_eq!(test.calls(Section::Pre).len(), 1);
        assert_eq!(test.calls(Section::Main).len(), 1);
        assert_eq!(test.calls(Section::Post).len(), 1);
    }

    #[test]
    fn program_runs_sections_in_order() {
        let generator = Generator::new(Settings::default());
        let regs = run(&generator.build(&Framed).program()).unwrap();
        assert_eq!(regs.get(Register::T1), 2);
        assert_eq!(regs.get(Register::T2), 16);
    }

    #[test]
    fn file_names_count_up() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = Generator::new(Settings {
            out_dir: dir.path().to_path_buf(),
            ..Settings::default()
        });

        let first = generator.process(&Framed).unwrap();
        let second = generator.process(&Framed).unwrap();
        assert_eq!(first.code_file, dir.path().join("test_0000.s"));
        assert_eq!(second.code_file, dir.path().join("test_0001.s"));
        assert!(first.binary_file.is_none());
    }
}
