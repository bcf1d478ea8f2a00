//! # Date and Time Decoding
//!
//! Both formats are three integers separated by one byte (`HH:MM:SS`,
//! `DD.MM.YYYY`). Values are kept verbatim: `25:61:99` decodes as written.
//! Malformed numbers yield zeros for the groups that could not be read.

use super::delimiter::is_printable;
use super::protocol::{CalendarDate, ClockTime};
use super::scalar::{field_bytes, scan_integer};
use crate::error::FieldError;

/// Scan `int SEP int SEP int` within one field
fn scan_triplet(bytes: &[u8], delimiter: u8) -> Result<[i64; 3], FieldError> {
    if !is_printable(delimiter) {
        return Err(FieldError::InvalidDelimiter(delimiter));
    }

    let mut rest = field_bytes(bytes, delimiter);
    let mut groups = [0i64; 3];
    for group in groups.iter_mut() {
        let (value, consumed) = scan_integer(rest);
        *group = value;
        // Skip the separator, whatever it is
        rest = rest.get(consumed + 1..).unwrap_or(&[]);
    }
    Ok(groups)
}

/// Decode `HH:MM:SS`
///
/// # Errors
///
/// Returns error only if the delimiter is not printable
pub fn decode_time(bytes: &[u8], delimiter: u8) -> Result<ClockTime, FieldError> {
    let [hour, minute, second] = scan_triplet(bytes, delimiter)?;
    Ok(ClockTime {
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
    })
}

/// Decode `DD.MM.YYYY`
///
/// # Errors
///
/// Returns error only if the delimiter is not printable
pub fn decode_date(bytes: &[u8], delimiter: u8) -> Result<CalendarDate, FieldError> {
    let [day, month, year] = scan_triplet(bytes, delimiter)?;
    Ok(CalendarDate {
        day: day as u8,
        month: month as u8,
        year: year as u16,
    })
}
