//! badc-csv command line tool
//!
//! Commands:
//! - badc-csv validate <input> [--level basic|complete]
//! - badc-csv convert <input> --format csv|cdl|na [--output FILE]
//! - badc-csv describe <input> [--format json|yaml]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use badc_csv_sdk::cli::commands::{handle_convert, handle_describe, handle_validate, load_config};
use badc_csv_sdk::validation::ComplianceLevel;

/// Read, validate and convert BADC-CSV files
#[derive(Parser, Debug)]
#[command(name = "badc-csv")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a file parses and its metadata is valid
    Validate {
        /// Input file, or - for stdin
        input: String,

        /// Also check completeness at this compliance level
        #[arg(long)]
        level: Option<ComplianceLevel>,
    },

    /// Convert a file to another format
    Convert {
        /// Input file, or - for stdin
        input: String,

        /// Output format: csv, cdl or na
        #[arg(long)]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the array-model description of a file
    Describe {
        /// Input file, or - for stdin
        input: String,

        /// Output format: json or yaml
        #[arg(long, default_value = "json")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Validate { input, level } => handle_validate(&input, level, config)?,
        Command::Convert {
            input,
            format,
            output,
        } => handle_convert(&input, &format, output.as_deref(), config)?,
        Command::Describe { input, format } => handle_describe(&input, &format, config)?,
    }
    Ok(())
}
