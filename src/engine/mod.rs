//! Split engine
//!
//! Single-pass grouping of CSV rows into buckets keyed by the values of the
//! selected group-by fields, followed by one write pass per bucket.
//!
//! # Overview
//!
//! A run executes three phases in order:
//! - header & index resolution,
//! - grouping (one streaming read of the source),
//! - emission (one output file per bucket, in first-appearance order).
//!
//! The engine is synchronous and reentrant: all mutable state lives inside
//! one `run` call, so distinct calls may execute concurrently on distinct
//! inputs. Front ends that need a responsive event loop run the engine on a
//! worker thread and consume progress through the injected sink.

mod types;

pub use types::{ProcessingResult, SplitRequest};

use crate::config::PROGRESS_UPDATE_INTERVAL;
use crate::error::{Error, Result};
use crate::filename::{format_group_display, generate_filename};
use crate::header::{open_reader, resolve_fields, FieldIndices};
use crate::progress::{ProgressSink, TracingSink};
use crate::validate::validate;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use types::Bucket;

/// Engine performing the split of one CSV file into per-group files.
pub struct SplitEngine {
    /// Progress sink, context-passed at construction
    progress: Box<dyn ProgressSink>,
}

impl Default for SplitEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitEngine {
    /// Create an engine reporting progress through `tracing`.
    pub fn new() -> Self {
        Self {
            progress: Box::new(TracingSink),
        }
    }

    /// Create an engine with a caller-supplied progress sink.
    pub fn with_progress(sink: impl ProgressSink + 'static) -> Self {
        Self {
            progress: Box::new(sink),
        }
    }

    /// Split the source file into one output file per distinct group key.
    ///
    /// Never returns `Err` and never panics outward: every failure is
    /// folded into a `ProcessingResult` with `success: false` and a single
    /// human-readable message.
    pub fn run(&self, request: &SplitRequest) -> ProcessingResult {
        match self.split(request) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("CSV processing failed: {e}");
                ProcessingResult::failed(e.user_message())
            }
        }
    }

    /// The fallible pipeline behind [`run`](Self::run).
    fn split(&self, request: &SplitRequest) -> Result<ProcessingResult> {
        validate(request)?;

        let (buckets, indices) = self.read_and_group(request)?;
        let total_rows: usize = buckets.iter().map(|b| b.rows.len()).sum();

        let files_created = self.write_buckets(request, &buckets, &indices.output_header)?;

        tracing::info!(
            "Processing completed: {files_created} files created, {total_rows} rows processed"
        );
        Ok(ProcessingResult::ok(files_created, total_rows))
    }

    /// Phase A + B: read the header, resolve indices, bucket every data row.
    ///
    /// Buckets come back in first-appearance order of their group key.
    fn read_and_group(&self, request: &SplitRequest) -> Result<(Vec<Bucket>, FieldIndices)> {
        let mut reader = open_reader(&request.source)?;

        let mut record = csv::StringRecord::new();
        if !reader.read_record(&mut record)? {
            return Err(Error::EmptyFile {
                path: request.source.display().to_string(),
            });
        }
        let header: Vec<String> = record.iter().map(str::to_string).collect();
        let indices = resolve_fields(&header, &request.group_by, &request.included)?;

        let mut buckets: Vec<Bucket> = Vec::new();
        let mut slots: HashMap<Vec<String>, usize> = HashMap::new();
        let mut total_rows = 0usize;

        while reader.read_record(&mut record)? {
            total_rows += 1;

            let key = project(&record, &indices.group_by, total_rows)?;
            let row = project(&record, &indices.included, total_rows)?;

            let slot = match slots.get(&key) {
                Some(&slot) => slot,
                None => {
                    buckets.push(Bucket::new(key.clone()));
                    slots.insert(key, buckets.len() - 1);
                    buckets.len() - 1
                }
            };
            buckets[slot].rows.push(row);

            if total_rows % PROGRESS_UPDATE_INTERVAL == 0 {
                self.progress.emit(&format!("Processed {total_rows} rows..."));
            }
        }

        Ok((buckets, indices))
    }

    /// Phase C: write one file per bucket.
    ///
    /// A failure aborts before further buckets are written; files already
    /// emitted are not rolled back.
    fn write_buckets(
        &self,
        request: &SplitRequest,
        buckets: &[Bucket],
        output_header: &[String],
    ) -> Result<usize> {
        fs::create_dir_all(&request.output_dir).map_err(|e| Error::FileOperation {
            message: format!(
                "Cannot create output directory {}: {e}",
                request.output_dir.display()
            ),
        })?;

        let mut files_created = 0;
        for bucket in buckets {
            let filename = generate_filename(&bucket.key, &request.group_by);
            let path = request.output_dir.join(&filename);

            write_csv(&path, output_header, &bucket.rows)
                .map_err(|e| Error::FileOperation {
                    message: format!("Error writing output file {}: {e}", path.display()),
                })?;
            files_created += 1;

            let display = format_group_display(&bucket.key, &request.group_by);
            self.progress.emit(&format!(
                "Created file for {display} with {} rows",
                bucket.rows.len()
            ));
        }

        Ok(files_created)
    }
}

/// Extract the values at `indices` from a record.
///
/// A record too short to supply an index aborts the run; there is no
/// skip-row policy.
fn project(record: &csv::StringRecord, indices: &[usize], row: usize) -> Result<Vec<String>> {
    indices
        .iter()
        .map(|&index| {
            record
                .get(index)
                .map(str::to_string)
                .ok_or(Error::ShortRow { row, index })
        })
        .collect()
}

/// Write one output file: header first, then the buffered rows, every field
/// quoted — the same convention the input uses.
fn write_csv(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_path(path)?;

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
