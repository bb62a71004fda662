//! CLI module
//!
//! Command-line front end for the split engine.
//!
//! # Commands
//!
//! - `headers` - Print the header field names of a CSV file
//! - `split` - Split a CSV file into one output file per group key

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
