//! `hl7c` - generate Go models for HL7 messages from a YAML config.
//!
//! HL7 is a messaging standard that lets clinical applications exchange data.
//! `hl7c` reads a config describing message models and composite data types
//! and writes Go structs that unmarshal JSON representations of those
//! messages.

mod commands;
mod postprocess;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hl7c", version, about = "Generate Go models for HL7 messages")]
struct Cli {
    /// Config file (default: model_config.yaml in the working directory)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate model.go from the config
    Generate(commands::generate::GenerateArgs),
    /// Validate the config without writing anything
    Check(commands::check::CheckArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Command::Generate(args) => commands::generate::run(cli.file.as_deref(), args),
        Command::Check(args) => commands::check::run(cli.file.as_deref(), args),
    };
    std::process::exit(code);
}
