mod commands;
mod format;
mod writer;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{convert::ConvertArgs, schema::SchemaArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsonrowcat",
    about = "Decode JSON lines into typed rows using a declared column schema"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON lines to csv/parquet/table
    Convert(ConvertArgs),
    /// Print the declared row schema
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}
