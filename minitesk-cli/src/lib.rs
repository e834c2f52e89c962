//! MiniTESK command-line interface: generate, assemble, disassemble and run
//! MiniMIPS test programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/decode/assembly/configuration/I-O error
//! - 2: Invalid command line
//! - 3: Runtime error

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod catalog;
pub mod commands;

#[derive(Debug, Parser)]
#[command(name = "minitesk", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: commands::Command,
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn setup_logger(verbose: u8) -> tracing::subscriber::DefaultGuard {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_target(false),
        )
        .with(filter)
        .set_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbosity_is_counted() {
        let cli = Cli::parse_from(["minitesk", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
    }
}
