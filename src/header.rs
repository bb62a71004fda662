//! Header reading and field-index resolution
//!
//! The header is the first record of the source file. Field names are
//! opaque strings and may contain duplicates; a name always resolves to its
//! first occurrence.

use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Resolved column positions for one split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIndices {
    /// Column index per group-by field, in caller order
    pub group_by: Vec<usize>,
    /// Column index per included field, in caller order
    pub included: Vec<usize>,
    /// Header values at the included indices, in caller order
    pub output_header: Vec<String>,
}

/// Read the header row of a CSV file.
///
/// Front ends use this to populate field pickers before a run is
/// configured. Fails with a file-operation error when the file cannot be
/// opened and a processing error when it has no records at all.
pub fn read_headers(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let mut record = csv::StringRecord::new();
    let has_row = reader.read_record(&mut record)?;
    if !has_row {
        return Err(Error::EmptyFile {
            path: path.display().to_string(),
        });
    }

    Ok(record.iter().map(str::to_string).collect())
}

/// Open a CSV reader over `path`, classifying open failures.
///
/// The reader treats no row as special (`has_headers(false)`) so the caller
/// decides what the first record means, and accepts records of uneven
/// length (`flexible(true)`) so short rows surface as a domain error during
/// the grouping pass instead of a parser error.
pub(crate) fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| classify_open_error(e, path))
}

fn classify_open_error(e: csv::Error, path: &Path) -> Error {
    if let csv::ErrorKind::Io(io) = e.kind() {
        match io.kind() {
            ErrorKind::NotFound => {
                return Error::FileNotFound {
                    path: path.display().to_string(),
                }
            }
            ErrorKind::PermissionDenied => {
                return Error::PermissionDenied {
                    path: path.display().to_string(),
                }
            }
            _ => {}
        }
    }
    e.into()
}

/// Resolve the group-by and included selections against a header.
///
/// Lookup is first-match, exact, case-sensitive. When any names are absent
/// the error lists every missing group-by name followed by every missing
/// included name, so the caller can fix the whole selection in one round.
pub fn resolve_fields(
    header: &[String],
    group_by: &[String],
    included: &[String],
) -> Result<FieldIndices> {
    let mut missing = Vec::new();

    let group_by_indices = resolve_selection(header, group_by, &mut missing);
    let included_indices = resolve_selection(header, included, &mut missing);

    if !missing.is_empty() {
        return Err(Error::missing_fields(missing));
    }

    let output_header = included_indices.iter().map(|&i| header[i].clone()).collect();

    Ok(FieldIndices {
        group_by: group_by_indices,
        included: included_indices,
        output_header,
    })
}

fn resolve_selection(
    header: &[String],
    selection: &[String],
    missing: &mut Vec<String>,
) -> Vec<usize> {
    selection
        .iter()
        .filter_map(|name| {
            let index = header.iter().position(|h| h == name);
            if index.is_none() {
                missing.push(name.clone());
            }
            index
        })
        .collect()
}
