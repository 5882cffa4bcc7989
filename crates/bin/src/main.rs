use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the serialized output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bracketform=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Serialize(args) => commands::serialize::run(args),
        Commands::FieldTypes(args) => commands::field_types::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
