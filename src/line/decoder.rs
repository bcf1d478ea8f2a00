//! # STRATO3 Line Decoder
//!
//! Walks a telemetry line once, field by field, and builds a
//! [`TelemetryRecord`]. A field that fails to decode is counted and left at
//! its default; only a structurally broken line is rejected outright.

use tracing::{debug, trace};

use super::coordinate::decode_coordinate;
use super::datetime::{decode_date, decode_time};
use super::delimiter::detect_delimiter;
use super::protocol::*;
use super::scalar::{decode_scaled_decimal, scan_integer};
use crate::error::{DecodeError, FieldError, StructuralError};

/// Result of decoding one structurally valid line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded values; failed fields hold their defaults
    pub record: TelemetryRecord,

    /// Number of fields that failed to decode
    pub failures: usize,

    /// Which fields failed
    pub failed: FieldSet,

    /// First failure in line order
    pub first_error: Option<(Field, FieldError)>,
}

impl Decoded {
    /// No field failed
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }

    /// Record only if every field decoded
    ///
    /// # Errors
    ///
    /// Returns the first field failure, if any
    pub fn into_strict(self) -> Result<TelemetryRecord, DecodeError> {
        match self.first_error {
            Some((field, kind)) => Err(DecodeError::Field { field, kind }),
            None => Ok(self.record),
        }
    }
}

/// Index just past the next delimiter at or after `pos`
fn find_next_field(line: &[u8], pos: usize, delimiter: u8) -> Option<usize> {
    line[pos..]
        .iter()
        .position(|&byte| byte == delimiter)
        .map(|offset| pos + offset + 1)
}

/// Decode one field into `record`
fn decode_field(
    record: &mut TelemetryRecord,
    field: Field,
    bytes: &[u8],
    delimiter: u8,
) -> Result<(), FieldError> {
    match field {
        Field::Begin | Field::End => {}
        Field::Uptime => record.uptime = decode_time(bytes, delimiter)?,
        Field::Time => record.time = decode_time(bytes, delimiter)?,
        Field::Date => record.date = decode_date(bytes, delimiter)?,
        Field::Valid => record.valid = bytes.first() == Some(&b'Y'),
        Field::Satellites => record.satellites = scan_integer(bytes).0 as u8,
        Field::Latitude => record.latitude = decode_coordinate(bytes, delimiter)?,
        Field::Longitude => record.longitude = decode_coordinate(bytes, delimiter)?,
        Field::SpeedKnots => record.speed_knots = decode_scaled_decimal(bytes, delimiter)?,
        Field::SpeedKph => record.speed_kph = decode_scaled_decimal(bytes, delimiter)?,
        Field::Course => record.course = decode_scaled_decimal(bytes, delimiter)?,
        Field::Altitude => record.altitude = decode_scaled_decimal(bytes, delimiter)?,
        Field::TemperatureBoard => {
            record.temperature_board = decode_scaled_decimal(bytes, delimiter)?
        }
        Field::Temperature => record.temperature = decode_scaled_decimal(bytes, delimiter)?,
        Field::Humidity => record.humidity = decode_scaled_decimal(bytes, delimiter)?,
        Field::Pressure => record.pressure = decode_scaled_decimal(bytes, delimiter)?,
        Field::Voltage => record.voltage = decode_scaled_decimal(bytes, delimiter)?,
        Field::State => record.state = scan_integer(bytes).0 as i32,
    }
    Ok(())
}

/// Decode a complete STRATO3 telemetry line
///
/// # Arguments
///
/// * `line` - Raw line bytes, without a trailing newline requirement
///
/// # Returns
///
/// * `Result<Decoded, StructuralError>` - Record with its failure count, or
///   the structural rejection
///
/// # Errors
///
/// Returns error if the header is malformed, the line is too short, or the
/// declared delimiter does not split the line into the expected fields.
/// Individual field failures never produce an error here.
///
/// # Examples
///
/// ```
/// use strato3::line::decoder::parse;
///
/// let line = "$;00:05:13;19:36:26;13.09.2016;Y;04;40 40.68437 N;005 30.70415 E;0.432;0.800;;91.2;11.625;12.625;37.56;1009.809;8.6;66679";
/// let decoded = parse(line.as_bytes())?;
/// assert!(decoded.is_clean());
/// assert_eq!(decoded.record.state, 66679);
/// # Ok::<(), strato3::error::StructuralError>(())
/// ```
pub fn parse(line: &[u8]) -> Result<Decoded, StructuralError> {
    let delimiter = detect_delimiter(line)?;

    let mut decoded = Decoded {
        record: TelemetryRecord::default(),
        failures: 0,
        failed: FieldSet::default(),
        first_error: None,
    };

    let mut field = Field::Begin;
    let mut cursor = Some(0);

    while let Some(pos) = cursor {
        if field == Field::End {
            break;
        }

        trace!(%field, pos, "decoding field");
        if let Err(kind) = decode_field(&mut decoded.record, field, &line[pos..], delimiter) {
            debug!(%field, error = %kind, "field decode failed");
            decoded.failures += 1;
            decoded.failed.insert(field);
            decoded.first_error.get_or_insert((field, kind));
        }

        cursor = find_next_field(line, pos, delimiter);
        field = field.next();
    }

    Ok(decoded)
}

/// Decode a line given as text
///
/// # Errors
///
/// Same as [`parse`]
pub fn parse_str(line: &str) -> Result<Decoded, StructuralError> {
    parse(line.as_bytes())
}
