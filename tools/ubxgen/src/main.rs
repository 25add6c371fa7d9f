mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate::GenerateArgs, list::ListArgs};

#[derive(Parser)]
#[command(name = "ubxgen", about = "Generate C message definitions from u-blox ICD tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile ICD tables into C headers and parse functions
    Generate(GenerateArgs),
    /// Print the parsed catalogs and message directory
    List(ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
