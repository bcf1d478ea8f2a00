//! # Delimiter Detection
//!
//! Finds the self-declared delimiter of a line and checks that it splits the
//! line into exactly [`STRATO3_FIELD_COUNT`] data fields.

use tracing::debug;

use super::protocol::*;
use crate::error::StructuralError;

/// Printable ASCII, space included (C `isprint`)
#[inline]
pub(crate) fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Detect the delimiter declared after the `$` sentinel
///
/// # Arguments
///
/// * `line` - Raw telemetry line
///
/// # Returns
///
/// * `Result<u8, StructuralError>` - Delimiter byte, or the reason the line
///   was rejected
///
/// # Errors
///
/// Returns error if:
/// - Line is shorter than [`STRATO3_MIN_LINE_LENGTH`]
/// - First byte is not `$`
/// - Delimiter does not occur exactly [`STRATO3_FIELD_COUNT`] times, or is
///   not printable (one combined check)
pub fn detect_delimiter(line: &[u8]) -> Result<u8, StructuralError> {
    if line.len() < STRATO3_MIN_LINE_LENGTH {
        debug!(length = line.len(), "line too short");
        return Err(StructuralError::TooShort {
            length: line.len(),
            minimum: STRATO3_MIN_LINE_LENGTH,
        });
    }

    if line[0] != STRATO3_SENTINEL {
        debug!(first = line[0], "missing header sentinel");
        return Err(StructuralError::MissingSentinel);
    }

    // The separator right after '$' counts as the first one
    let delimiter = line[1];
    let found = line.iter().filter(|&&byte| byte == delimiter).count();

    if found != STRATO3_FIELD_COUNT || !is_printable(delimiter) {
        debug!(delimiter, found, "delimiter check failed");
        return Err(StructuralError::Delimiter { delimiter, found });
    }

    Ok(delimiter)
}
