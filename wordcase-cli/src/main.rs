//! wordcase command-line entry point

use clap::Parser;
use wordcase_cli::commands::Commands;

/// Locale-aware word case conversion
#[derive(Debug, Parser)]
#[command(name = "wordcase", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
