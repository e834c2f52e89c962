use std::process;

use clap::Parser;
use minitesk_cli::{commands, setup_logger, Cli};

fn main() {
    let cli = Cli::parse();
    let _guard = setup_logger(cli.verbose);

    if let Err(code) = commands::handle_command(cli.command) {
        process::exit(code);
    }
}
