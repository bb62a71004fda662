//! Processing constants
//!
//! Fixed knobs of the split engine. These are deliberately not runtime
//! configuration: the engine consults no environment variables and persists
//! nothing beyond its call arguments.

/// Emit a progress event every this many rows during the grouping pass.
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;

/// Extension appended to every generated output file.
pub const CSV_EXTENSION: &str = ".csv";

/// Placeholder used when a group value sanitizes to an empty string.
pub const EMPTY_VALUE_PLACEHOLDER: &str = "empty";
