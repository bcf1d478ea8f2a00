//! # Scalar Field Decoding
//!
//! Integer scanning and the scaled-decimal decoder. Decimal values are kept
//! as an integer mantissa and a power-of-ten scale so no floating point is
//! involved while parsing.

use super::delimiter::is_printable;
use super::protocol::{ScaledDecimal, MANTISSA_UNSET};
use crate::error::FieldError;

/// Byte belongs to the current field
#[inline]
pub(crate) fn is_field_byte(byte: u8, delimiter: u8) -> bool {
    is_printable(byte) && byte != delimiter
}

/// Bytes of the current field: everything up to the delimiter or the first
/// non-printable byte
pub(crate) fn field_bytes(bytes: &[u8], delimiter: u8) -> &[u8] {
    let end = bytes
        .iter()
        .position(|&byte| !is_field_byte(byte, delimiter))
        .unwrap_or(bytes.len());
    &bytes[..end]
}

/// Scan a base-10 integer prefix the way C `strtol` does
///
/// Skips leading ASCII whitespace, accepts one optional sign, then digits.
/// Saturates at the `i64` range.
///
/// # Returns
///
/// * `(i64, usize)` - Value and number of bytes consumed; `(0, 0)` when no
///   digit was found
pub(crate) fn scan_integer(bytes: &[u8]) -> (i64, usize) {
    let mut pos = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut value: i64 = 0;
    while let Some(&byte) = bytes.get(pos) {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
        pos += 1;
    }

    if pos == digits_start {
        return (0, 0);
    }
    (value, pos)
}

/// Decode a scaled decimal such as `-12.625`
///
/// # Arguments
///
/// * `bytes` - Line bytes starting at the field
/// * `delimiter` - Line delimiter, ends the field
///
/// # Returns
///
/// * `Result<ScaledDecimal, FieldError>` - Decoded value; an empty field is
///   [`ScaledDecimal::UNKNOWN`]
///
/// # Errors
///
/// Returns error if:
/// - Delimiter is not printable
/// - Field holds a byte other than sign, digit, `.` or space
/// - Mantissa or scale overflows `i32`
///
/// A sign with no digit leaves the mantissa at its unset value `-1` before
/// the sign is applied, so `"-"` decodes to `{ mantissa: 1, scale: 0 }`.
/// The scale is still zero, so the value stays unknown.
pub fn decode_scaled_decimal(bytes: &[u8], delimiter: u8) -> Result<ScaledDecimal, FieldError> {
    if !is_printable(delimiter) {
        return Err(FieldError::InvalidDelimiter(delimiter));
    }

    let mut sign: i32 = 0;
    let mut mantissa: i32 = MANTISSA_UNSET;
    let mut scale: i32 = 0;

    for (offset, &byte) in bytes.iter().enumerate() {
        if !is_field_byte(byte, delimiter) {
            break;
        }
        let started = sign != 0 || mantissa != MANTISSA_UNSET;

        match byte {
            b'+' if !started => sign = 1,
            b'-' if !started => sign = -1,
            b'0'..=b'9' => {
                let digit = i32::from(byte - b'0');
                if mantissa == MANTISSA_UNSET {
                    mantissa = 0;
                }
                mantissa = mantissa
                    .checked_mul(10)
                    .and_then(|m| m.checked_add(digit))
                    .ok_or(FieldError::Overflow)?;
                if scale != 0 {
                    scale = scale.checked_mul(10).ok_or(FieldError::Overflow)?;
                }
            }
            b'.' => {
                if scale == 0 {
                    scale = 1;
                }
            }
            b' ' => {
                if started {
                    break;
                }
            }
            _ => return Err(FieldError::InvalidCharacter { byte, offset }),
        }
    }

    if sign != 0 {
        mantissa *= sign;
    }

    Ok(ScaledDecimal { mantissa, scale })
}
