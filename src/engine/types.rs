//! Split engine types
//!
//! The request/result pair exchanged with callers, plus the in-memory
//! bucket that accumulates rows for one group key.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Arguments for one split run.
///
/// `group_by` decides which output file a row lands in; `included` decides
/// which columns are copied, in this order. The two selections may overlap
/// or be disjoint.
#[derive(Debug, Clone, Default)]
pub struct SplitRequest {
    /// Path to the source CSV file
    pub source: PathBuf,
    /// Directory where output files will be created
    pub output_dir: PathBuf,
    /// Field names to group rows by
    pub group_by: Vec<String>,
    /// Field names to include in output files
    pub included: Vec<String>,
}

impl SplitRequest {
    /// Create a request for a source file and output directory
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            group_by: Vec::new(),
            included: Vec::new(),
        }
    }

    /// Set the group-by field names
    #[must_use]
    pub fn with_group_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the included field names
    #[must_use]
    pub fn with_included<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Source path as a `Path`
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Outcome of one split run.
///
/// `run` always returns one of these — errors are folded into
/// `success: false` plus a single human-readable message, never propagated
/// as a fault to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Whether the run completed
    pub success: bool,
    /// Number of output files written
    pub files_created: usize,
    /// Number of data rows read from the source (header excluded)
    pub total_rows: usize,
    /// Failure message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingResult {
    /// A successful result
    pub fn ok(files_created: usize, total_rows: usize) -> Self {
        Self {
            success: true,
            files_created,
            total_rows,
            error: None,
        }
    }

    /// A failed result carrying a message
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            files_created: 0,
            total_rows: 0,
            error: Some(error.into()),
        }
    }
}

/// Rows accumulated for one group key, pending emission.
///
/// Rows are already projected to the included fields, in included order.
/// Buckets are created lazily on the first row carrying their key and live
/// only for the duration of one run.
#[derive(Debug, Clone)]
pub(crate) struct Bucket {
    /// The group key values, in group-by field order
    pub key: Vec<String>,
    /// Projected rows, in source order
    pub rows: Vec<Vec<String>>,
}

impl Bucket {
    pub(crate) fn new(key: Vec<String>) -> Self {
        Self {
            key,
            rows: Vec::new(),
        }
    }
}
