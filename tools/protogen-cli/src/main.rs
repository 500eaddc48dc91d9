mod commands;
mod format;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate::GenerateArgs, list::ListArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "protogen",
    about = "Generate importable protobuf bindings for selected messages"
)]
struct Cli {
    /// Print the assembled compiler command and log progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the .proto files defining the given messages
    Generate(GenerateArgs),
    /// List indexed message names and their defining files
    List(ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "info" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => args.run(cli.verbose),
        Commands::List(args) => args.run(),
    }
}
