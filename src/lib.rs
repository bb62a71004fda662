#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # csv-splitter
//!
//! Split a CSV file into per-category files by the distinct value
//! combinations of selected columns.
//!
//! The engine reads the source once, buckets rows by a composite key built
//! from the group-by fields, then writes one output file per bucket,
//! containing only the included fields. Any front end — GUI, CLI, web
//! form — drives it through three calls:
//!
//! - [`header::read_headers`] to populate field pickers,
//! - [`validate::validate`] to pre-flight the selection,
//! - [`SplitEngine::run`](engine::SplitEngine::run) to do the work.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csv_splitter::engine::{SplitEngine, SplitRequest};
//!
//! let request = SplitRequest::new("sales.csv", "out/")
//!     .with_group_by(["Region"])
//!     .with_included(["Region", "Amount"]);
//!
//! let engine = SplitEngine::with_progress(|msg: &str| println!("{msg}"));
//! let result = engine.run(&request);
//! assert!(result.success);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      SplitEngine                        │
//! │  validate → read header → resolve indices →             │
//! │  group rows into buckets → write one file per bucket    │
//! └─────────────────────────────────────────────────────────┘
//!            │              │              │
//!      ┌─────┴────┐   ┌─────┴─────┐  ┌─────┴─────┐
//!      │ validate │   │  header   │  │ filename  │
//!      │ (args)   │   │ (indices) │  │ (sanitize)│
//!      └──────────┘   └───────────┘  └───────────┘
//! ```
//!
//! The engine is synchronous and reentrant; progress flows through a single
//! typed sink ([`progress::ProgressSink`]) injected at construction.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Processing constants
pub mod config;

/// Progress reporting
pub mod progress;

/// Input validation
pub mod validate;

/// Header reading and field-index resolution
pub mod header;

/// Output filename generation
pub mod filename;

/// The split engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use engine::{ProcessingResult, SplitEngine, SplitRequest};
pub use error::{Error, Result};
pub use header::read_headers;
pub use progress::ProgressSink;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
