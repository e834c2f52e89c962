//! CLI command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use minitesk_common::{Endian, Program};
use minitesk_template::{Generator, Settings, Template, TemplateError};
use tracing::info;

use crate::catalog;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available test templates.
    List,
    /// Generate test programs from templates.
    Generate(GenerateArgs),
    /// Assemble a text program to a binary image.
    Assemble(AssembleArgs),
    /// Disassemble a binary image to text.
    Disassemble(DisassembleArgs),
    /// Assemble and simulate a text program, printing the final registers.
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Templates to generate (see `minitesk list`).
    pub names: Vec<String>,

    /// Generate every template in the catalog.
    #[arg(long, conflicts_with = "names")]
    pub all: bool,

    /// Output directory.
    #[arg(short, long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Settings file (TOML, YAML, JSON, ...).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip simulating the generated programs.
    #[arg(long)]
    pub no_simulate: bool,

    /// Also write binary images.
    #[arg(long)]
    pub binary: bool,

    /// Echo generated programs to stdout.
    #[arg(long)]
    pub stdout: bool,

    /// Leave comments and headers out of generated programs.
    #[arg(long)]
    pub no_comments: bool,
}

#[derive(Debug, Args)]
pub struct AssembleArgs {
    pub input: PathBuf,

    /// Output file (defaults to the input with a `.bin` extension).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub little_endian: bool,
}

#[derive(Debug, Args)]
pub struct DisassembleArgs {
    pub input: PathBuf,

    #[arg(long)]
    pub little_endian: bool,

    /// Show the address and raw word of each instruction.
    #[arg(long)]
    pub listing: bool,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    pub input: PathBuf,
}

pub fn handle_command(cmd: Command) -> Result<(), i32> {
    match cmd {
        Command::List => list(),
        Command::Generate(args) => generate(args),
        Command::Assemble(args) => assemble(args),
        Command::Disassemble(args) => disassemble(args),
        Command::Run(args) => run(args),
    }
}

/// Print `name  description` for every catalog template.
pub fn list() -> Result<(), i32> {
    for template in catalog::all_templates() {
        println!("{:<12}{}", template.name(), template.description());
    }
    Ok(())
}

/// Generate the selected templates into the output directory.
pub fn generate(args: GenerateArgs) -> Result<(), i32> {
    let templates = select_templates(&args)?;

    let mut settings = Settings::load(args.config.as_deref()).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    if let Some(dir) = args.out_dir {
        settings.out_dir = dir;
    }
    settings.simulate &= !args.no_simulate;
    settings.binary |= args.binary;
    settings.use_stdout |= args.stdout;
    settings.comments_enabled &= !args.no_comments;

    let use_stdout = settings.use_stdout;
    let mut generator = Generator::new(settings);
    info!(count = templates.len(), "generating");

    for template in &templates {
        let report = generator.process(template.as_ref()).map_err(|e| {
            match e {
                TemplateError::Runtime { .. } => eprintln!("runtime error: {e}"),
                _ => eprintln!("error: {e}"),
            }
            exit_code(&e)
        })?;

        if use_stdout {
            print!("{}", report.text);
        }
        eprintln!(
            "generated {} ({} instructions) -> {}",
            report.template,
            report.instructions,
            report.code_file.display()
        );
        if let Some(path) = &report.binary_file {
            eprintln!("generated {} binary -> {}", report.template, path.display());
        }
    }
    Ok(())
}

/// Assemble a text file to a binary image.
pub fn assemble(args: AssembleArgs) -> Result<(), i32> {
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("bin"));

    let text = read_text(&args.input)?;
    let program = minitesk_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let bytes = program.encode(endian(args.little_endian));
    fs::write(&output, &bytes).map_err(|e| {
        eprintln!("error: cannot write '{}': {e}", output.display());
        1
    })?;

    eprintln!(
        "assembled {} instructions ({} bytes) -> {}",
        program.len(),
        bytes.len(),
        output.display()
    );
    Ok(())
}

/// Disassemble a binary image to canonical text.
pub fn disassemble(args: DisassembleArgs) -> Result<(), i32> {
    let program = read_binary(&args.input, endian(args.little_endian))?;
    let text = if args.listing {
        minitesk_assembler::listing(&program, 0)
    } else {
        minitesk_assembler::disassemble(&program)
    };
    print!("{text}");
    Ok(())
}

/// Assemble and simulate a text file.
pub fn run(args: RunArgs) -> Result<(), i32> {
    let text = read_text(&args.input)?;
    let program = minitesk_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    match minitesk_vm::run(&program) {
        Ok(registers) => {
            print!("{registers}");
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

// --- Helpers ---

fn select_templates(args: &GenerateArgs) -> Result<Vec<Box<dyn Template>>, i32> {
    if args.all {
        return Ok(catalog::all_templates());
    }
    if args.names.is_empty() {
        eprintln!("error: generate requires template names or --all");
        eprintln!("Usage: minitesk generate <NAMES>... | --all");
        return Err(1);
    }
    args.names
        .iter()
        .map(|name| {
            catalog::find(name).ok_or_else(|| {
                eprintln!("error: unknown template '{name}' (see `minitesk list`)");
                1
            })
        })
        .collect()
}

fn exit_code(e: &TemplateError) -> i32 {
    match e {
        TemplateError::Runtime { .. } => 3,
        TemplateError::Io { .. } | TemplateError::Config(_) => 1,
    }
}

fn endian(little: bool) -> Endian {
    if little {
        Endian::Little
    } else {
        Endian::Big
    }
}

fn read_text(path: &Path) -> Result<String, i32> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })
}

/// Read and decode a binary image.
fn read_binary(path: &Path, endian: Endian) -> Result<Program, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    Program::decode(&bytes, endian).map_err(|e| {
        eprintln!("error: invalid binary: {e}");
        1
    })
}
