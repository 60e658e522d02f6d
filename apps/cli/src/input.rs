//! # Purchase File Reader
//!
//! Loads the raw purchase lines handed to the receipt pipeline.
//!
//! Read failures surface here as [`InputSourceError`] before the core runs.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::InputSourceError;

/// Reads `path` as UTF-8 and splits it into lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped, a trailing newline does
/// not produce an extra empty line, and a leading byte-order mark is dropped.
pub fn read_purchase_lines(path: &Path) -> Result<Vec<String>, InputSourceError> {
    if path.as_os_str().is_empty() {
        return Err(InputSourceError::EmptyPath);
    }

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputSourceError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => InputSourceError::PermissionDenied(path.to_path_buf()),
        _ => InputSourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8(bytes)
        .map_err(|_| InputSourceError::InvalidEncoding(path.to_path_buf()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "Read purchase file");

    Ok(lines)
}

// =============================================================================
// Unit Tests
// =============================================================================
