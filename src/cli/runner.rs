//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::engine::{ProcessingResult, SplitEngine, SplitRequest};
use crate::error::{Error, Result};
use crate::header::read_headers;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Headers { file } => self.headers(file),
            Commands::Split {
                file,
                output_dir,
                group_by,
                include,
            } => self.split(file, output_dir, group_by, include),
        }
    }

    /// Print the header fields of a CSV file
    fn headers(&self, file: &Path) -> Result<()> {
        let headers = read_headers(file)?;

        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&headers).map_err(to_other)?);
            }
            OutputFormat::Pretty => {
                for (i, name) in headers.iter().enumerate() {
                    println!("{i}: {name}");
                }
            }
        }

        Ok(())
    }

    /// Run the split engine and report its result
    fn split(
        &self,
        file: &Path,
        output_dir: &Path,
        group_by: &[String],
        include: &[String],
    ) -> Result<()> {
        // An omitted include selection means every header field.
        let included = if include.is_empty() {
            read_headers(file)?
        } else {
            include.to_vec()
        };

        let request = SplitRequest::new(file, output_dir)
            .with_group_by(group_by.iter().cloned())
            .with_included(included);

        let engine = SplitEngine::with_progress(|msg: &str| eprintln!("{msg}"));
        let result = engine.run(&request);

        self.print_result(&result)?;

        if result.success {
            Ok(())
        } else {
            Err(Error::Other(
                result.error.unwrap_or_else(|| "split failed".to_string()),
            ))
        }
    }

    fn print_result(&self, result: &ProcessingResult) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(result).map_err(to_other)?);
            }
            OutputFormat::Pretty => {
                if result.success {
                    println!(
                        "Done: {} files created, {} rows processed",
                        result.files_created, result.total_rows
                    );
                } else {
                    let message = result.error.as_deref().unwrap_or("unknown failure");
                    println!("Failed: {message}");
                }
            }
        }
        Ok(())
    }
}

fn to_other(e: serde_json::Error) -> Error {
    Error::Other(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_result_serializes_without_error_field_on_success() {
        let result = ProcessingResult::ok(2, 3);
        let value: Value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"success": true, "files_created": 2, "total_rows": 3}));
    }

    #[test]
    fn test_result_serializes_error_on_failure() {
        let result = ProcessingResult::failed("boom");
        let value: Value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("boom"));
    }
}
