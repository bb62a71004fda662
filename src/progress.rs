//! Progress reporting
//!
//! A single typed channel for advisory progress messages, consumed uniformly
//! by any front end (GUI, CLI, test harness). The engine holds exactly one
//! sink per instance; there is no global logger state in the library.
//!
//! Progress is advisory only — dropping every message never affects
//! correctness of a run.

/// Receiver for progress messages emitted during a split run.
///
/// Implemented for plain closures, so callback-based front ends can pass
/// `|msg| { ... }` directly:
///
/// ```
/// use csv_splitter::progress::ProgressSink;
///
/// let sink = |msg: &str| eprintln!("{msg}");
/// sink.emit("Processed 1000 rows...");
/// ```
pub trait ProgressSink: Send + Sync {
    /// Deliver one human-readable progress message.
    fn emit(&self, message: &str);
}

impl<F: Fn(&str) + Send + Sync> ProgressSink for F {
    fn emit(&self, message: &str) {
        self(message);
    }
}

/// Default sink: forwards progress to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn emit(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Sink that discards every message. Useful in tests and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _message: &str) {}
}
