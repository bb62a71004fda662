//! Input validation
//!
//! Pure pre-flight checks on caller-supplied arguments, run before any I/O
//! against the data file itself. Check order is fixed: source file, output
//! directory, group-by selection, included selection — the first failing
//! check decides which message surfaces.

use crate::engine::SplitRequest;
use crate::error::{Error, Result};

/// Validate the arguments of a split run.
///
/// The output directory is not required to exist — the engine creates it.
/// Field names are checked for presence only; resolution against the CSV
/// header happens later, once the header has been read.
pub fn validate(request: &SplitRequest) -> Result<()> {
    let source = request.source.as_os_str();
    if source.is_empty() || !request.source.is_file() {
        return Err(Error::validation(
            "Source file does not exist or is not specified",
        ));
    }

    if request.output_dir.as_os_str().is_empty() {
        return Err(Error::validation("Output directory is not specified"));
    }

    if request.group_by.is_empty() {
        return Err(Error::validation(
            "At least one group-by field must be specified",
        ));
    }

    if request.included.is_empty() {
        return Err(Error::validation(
            "At least one field must be included in output",
        ));
    }

    Ok(())
}
