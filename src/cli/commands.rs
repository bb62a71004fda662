//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csv-splitter CLI
#[derive(Parser, Debug)]
#[command(name = "csv-splitter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the header field names of a CSV file
    Headers {
        /// Source CSV file
        file: PathBuf,
    },

    /// Split a CSV file into one output file per group key
    Split {
        /// Source CSV file
        file: PathBuf,

        /// Directory where output files are created
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Field names to group by (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        group_by: Vec<String>,

        /// Field names to include in output (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        include: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
