use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::HistoryRecord;
use crate::utils::validate_file_size;

/// Prefix of the file-mark lines vim writes to viminfo
const RECORD_PREFIX: &str = "> ";

/// Buffer name prefix used by the NERD tree plugin for its tree views
const TREE_BUFFER_MARKER: &str = "/NERD_tree_";

/// Parse a viminfo file and return the recorded file paths in file order
///
/// Only lines starting with `"> "` are records; everything else is ignored.
/// Records are returned even if the file they name no longer exists.
///
/// # Errors
///
/// Returns an error if the file cannot be opened (including when it does not
/// exist; the underlying [`std::io::Error`] is kept so callers can check for
/// [`std::io::ErrorKind::NotFound`]) or is larger than the size limit.
pub fn parse_viminfo_file(path: &Path) -> Result<Vec<HistoryRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open viminfo file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    // viminfo is not guaranteed to be UTF-8, so split on raw bytes
    for line in reader.split(b'\n') {
        let line = line.context("Failed to read line from viminfo file")?;
        let line = String::from_utf8_lossy(&line);
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if let Some(recorded) = line.strip_prefix(RECORD_PREFIX) {
            records.push(HistoryRecord::new(recorded));
        }
    }

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Like [`parse_viminfo_file`] but drops NERD tree buffers
pub fn parse_viminfo_file_without_tree_buffers(path: &Path) -> Result<Vec<HistoryRecord>> {
    let mut records = parse_viminfo_file(path)?;
    records.retain(|r| !is_tree_buffer(&r.path));
    Ok(records)
}

/// Whether a recorded path is a NERD tree view rather than a file
///
/// The plugin names its buffers `NERD_tree_<n>`, so the path ends in
/// `/NERD_tree_` followed by one or more digits.
pub fn is_tree_buffer(path: &str) -> bool {
    path.rsplit_once(TREE_BUFFER_MARKER)
        .is_some_and(|(_, n)| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
