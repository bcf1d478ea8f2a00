//! # Coordinate Decoding
//!
//! Decodes GPS positions written as `DEG MIN.DMIN DIR`, e.g. `40 40.68437 N`.

use super::delimiter::is_printable;
use super::protocol::{GeoCoordinate, Hemisphere};
use super::scalar::{decode_scaled_decimal, field_bytes, scan_integer};
use crate::error::FieldError;

/// Decode a coordinate field
///
/// Degrees are an integer prefix, minutes a scaled decimal, and the
/// hemisphere the first `N`/`S`/`E`/`W` after the degrees. Anything else
/// after the minutes is ignored.
///
/// # Errors
///
/// Returns error if:
/// - Delimiter is not printable
/// - Minutes fail to decode
/// - No hemisphere letter is present
pub fn decode_coordinate(bytes: &[u8], delimiter: u8) -> Result<GeoCoordinate, FieldError> {
    if !is_printable(delimiter) {
        return Err(FieldError::InvalidDelimiter(delimiter));
    }

    let field = field_bytes(bytes, delimiter);
    let (degrees, consumed) = scan_integer(field);
    let rest = &field[consumed..];

    let minutes = decode_scaled_decimal(rest, delimiter)?;

    let hemisphere = rest
        .iter()
        .find_map(|&byte| Hemisphere::from_byte(byte))
        .ok_or(FieldError::MissingHemisphere)?;

    Ok(GeoCoordinate {
        degrees: degrees as u8,
        minutes,
        hemisphere: Some(hemisphere),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::protocol::ScaledDecimal;

    #[test]
    fn test_decode_latitude() {
        let coord = decode_coordinate(b"40 40.68437 N;005", b';').unwrap();
        assert_eq!(coord.degrees, 40);
        assert_eq!(coord.minutes, ScaledDecimal::new(4068437, 100000));
        assert_eq!(coord.hemisphere, Some(Hemisphere::North));
    }

    #[test]
    fn test_decode_longitude_leading_zeros() {
        let coord = decode_coordinate(b"005 30.70415 E", b';').unwrap();
        assert_eq!(coord.degrees, 5);
        assert_eq!(coord.minutes, ScaledDecimal::new(3070415, 100000));
        assert_eq!(coord.hemisphere, Some(Hemisphere::East));
    }

    #[test]
    fn test_decode_southern_western() {
        let coord = decode_coordinate(b"33 52.1 S", b';').unwrap();
        assert_eq!(coord.hemisphere, Some(Hemisphere::South));

        let coord = decode_coordinate(b"122 25.5 W", b';').unwrap();
        assert_eq!(coord.degrees, 122);
        assert_eq!(coord.hemisphere, Some(Hemisphere::West));
    }

    #[test]
    fn test_first_hemisphere_letter_wins() {
        let coord = decode_coordinate(b"40 40.5 N S", b';').unwrap();
        assert_eq!(coord.hemisphere, Some(Hemisphere::North));
    }

    #[test]
    fn test_trailing_noise_ignored() {
        let coord = decode_coordinate(b"40 40.5 xx N", b';').unwrap();
        assert_eq!(coord.hemisphere, Some(Hemisphere::North));
    }

    #[test]
    fn test_missing_hemisphere() {
        assert_eq!(
            decode_coordinate(b"40 40.68437;005", b';'),
            Err(FieldError::MissingHemisphere)
        );
        assert_eq!(
            decode_coordinate(b";005 30.70415 E", b';'),
            Err(FieldError::MissingHemisphere)
        );
    }

    #[test]
    fn test_hemisphere_in_next_field_not_used() {
        assert_eq!(
            decode_coordinate(b"40 40.5;N", b';'),
            Err(FieldError::MissingHemisphere)
        );
    }

    #[test]
    fn test_bad_minutes() {
        assert_eq!(
            decode_coordinate(b"40 4x.5 N", b';'),
            Err(FieldError::InvalidCharacter { byte: b'x', offset: 2 })
        );
    }

    #[test]
    fn test_invalid_delimiter() {
        assert_eq!(
            decode_coordinate(b"40 40.5 N", 0x00),
            Err(FieldError::InvalidDelimiter(0x00))
        );
    }
}
