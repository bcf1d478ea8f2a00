//! # STRATO3 Line Constants and Types
//!
//! Core definitions for the STRATO3 balloon tracker telemetry line.
//!
//! A line looks like:
//!
//! ```text
//! $;00:05:13;19:36:26;13.09.2016;Y;04;40 40.68437 N;005 30.70415 E;0.432;0.800;;91.2;11.625;12.625;37.56;1009.809;8.6;66679
//! ```
//!
//! The byte after `$` declares the delimiter used for the rest of the line.

use std::fmt;

/// Header sentinel, always the first byte of a line
pub const STRATO3_SENTINEL: u8 = b'$';

/// Number of data fields in a line (uptime through state)
pub const STRATO3_FIELD_COUNT: usize = 17;

/// Lines shorter than this cannot hold one delimiter per field
pub const STRATO3_MIN_LINE_LENGTH: usize = STRATO3_FIELD_COUNT;

/// Mantissa of a scaled decimal before any digit has been seen
pub const MANTISSA_UNSET: i32 = -1;

/// Field roles in line order.
///
/// `Begin` is the `$` header segment and `End` the terminal state; the
/// seventeen roles between them are the line schema. Reordering them is a
/// format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Begin,
    Uptime,
    Time,
    Date,
    Valid,
    Satellites,
    Latitude,
    Longitude,
    SpeedKnots,
    SpeedKph,
    Course,
    Altitude,
    TemperatureBoard,
    Temperature,
    Humidity,
    Pressure,
    Voltage,
    State,
    End,
}

impl Field {
    /// Data roles in wire order
    pub const DATA: [Field; STRATO3_FIELD_COUNT] = [
        Field::Uptime,
        Field::Time,
        Field::Date,
        Field::Valid,
        Field::Satellites,
        Field::Latitude,
        Field::Longitude,
        Field::SpeedKnots,
        Field::SpeedKph,
        Field::Course,
        Field::Altitude,
        Field::TemperatureBoard,
        Field::Temperature,
        Field::Humidity,
        Field::Pressure,
        Field::Voltage,
        Field::State,
    ];

    /// Role following this one; `End` is absorbing
    pub fn next(self) -> Field {
        match self {
            Field::Begin => Field::Uptime,
            Field::Uptime => Field::Time,
            Field::Time => Field::Date,
            Field::Date => Field::Valid,
            Field::Valid => Field::Satellites,
            Field::Satellites => Field::Latitude,
            Field::Latitude => Field::Longitude,
            Field::Longitude => Field::SpeedKnots,
            Field::SpeedKnots => Field::SpeedKph,
            Field::SpeedKph => Field::Course,
            Field::Course => Field::Altitude,
            Field::Altitude => Field::TemperatureBoard,
            Field::TemperatureBoard => Field::Temperature,
            Field::Temperature => Field::Humidity,
            Field::Humidity => Field::Pressure,
            Field::Pressure => Field::Voltage,
            Field::Voltage => Field::State,
            Field::State | Field::End => Field::End,
        }
    }

    /// Snake-case name, used in logs and JSON output
    pub fn name(self) -> &'static str {
        match self {
            Field::Begin => "begin",
            Field::Uptime => "uptime",
            Field::Time => "time",
            Field::Date => "date",
            Field::Valid => "valid",
            Field::Satellites => "satellites",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::SpeedKnots => "speed_knots",
            Field::SpeedKph => "speed_kph",
            Field::Course => "course",
            Field::Altitude => "altitude",
            Field::TemperatureBoard => "temperature_board",
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
            Field::Pressure => "pressure",
            Field::Voltage => "voltage",
            Field::State => "state",
            Field::End => "end",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of field roles, one bit per role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet(u32);

impl FieldSet {
    pub fn insert(&mut self, field: Field) {
        self.0 |= 1 << field as u32;
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0 & (1 << field as u32) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in wire order
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        Field::DATA.into_iter().filter(move |field| self.contains(*field))
    }
}

/// Fixed-point decimal: `mantissa / scale`.
///
/// `scale` is a power of ten, or `0` when the value is unknown. Any mantissa
/// paired with a zero scale means "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaledDecimal {
    pub mantissa: i32,
    pub scale: i32,
}

impl ScaledDecimal {
    /// Value of an empty field
    pub const UNKNOWN: ScaledDecimal = ScaledDecimal {
        mantissa: MANTISSA_UNSET,
        scale: 0,
    };

    pub fn new(mantissa: i32, scale: i32) -> Self {
        Self { mantissa, scale }
    }

    pub fn is_known(&self) -> bool {
        self.scale != 0
    }
}

/// Hemisphere letter of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'N' => Some(Hemisphere::North),
            b'S' => Some(Hemisphere::South),
            b'E' => Some(Hemisphere::East),
            b'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// +1 for N/E, -1 for S/W
    pub fn sign(self) -> i32 {
        match self {
            Hemisphere::North | Hemisphere::East => 1,
            Hemisphere::South | Hemisphere::West => -1,
        }
    }
}

/// Raw GPS coordinate: whole degrees, decimal minutes, hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeoCoordinate {
    pub degrees: u8,
    pub minutes: ScaledDecimal,
    pub hemisphere: Option<Hemisphere>,
}

/// Time of day, taken verbatim from the line (no range checks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Calendar date in day.month.year order, taken verbatim (no range checks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

/// One decoded telemetry line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TelemetryRecord {
    /// Device uptime
    pub uptime: ClockTime,

    /// GPS wall-clock time (UTC)
    pub time: ClockTime,

    /// GPS date
    pub date: CalendarDate,

    /// GPS fix valid
    pub valid: bool,

    /// Number of satellites in use
    pub satellites: u8,

    pub latitude: GeoCoordinate,
    pub longitude: GeoCoordinate,

    /// Ground speed in knots
    pub speed_knots: ScaledDecimal,

    /// Ground speed in km/h
    pub speed_kph: ScaledDecimal,

    /// Course over ground in degrees
    pub course: ScaledDecimal,

    /// GPS altitude in meters
    pub altitude: ScaledDecimal,

    /// Board temperature in °C
    pub temperature_board: ScaledDecimal,

    /// External temperature in °C
    pub temperature: ScaledDecimal,

    /// Relative humidity in %
    pub humidity: ScaledDecimal,

    /// Air pressure in hPa
    pub pressure: ScaledDecimal,

    /// Supply voltage in volts
    pub voltage: ScaledDecimal,

    /// Device state code
    pub state: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constants() {
        assert_eq!(STRATO3_SENTINEL, b'$');
        assert_eq!(STRATO3_FIELD_COUNT, 17);
        assert_eq!(STRATO3_MIN_LINE_LENGTH, 17);
        assert_eq!(Field::DATA.len(), STRATO3_FIELD_COUNT);
    }

    #[test]
    fn test_field_sequence_order() {
        let mut field = Field::Begin;
        for expected in Field::DATA {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(field.next(), Field::End);
        assert_eq!(Field::End.next(), Field::End);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::SpeedKnots.name(), "speed_knots");
        assert_eq!(Field::TemperatureBoard.to_string(), "temperature_board");
    }

    #[test]
    fn test_field_set() {
        let mut set = FieldSet::default();
        assert!(set.is_empty());

        set.insert(Field::Longitude);
        set.insert(Field::Uptime);
        set.insert(Field::Longitude);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Field::Uptime));
        assert!(!set.contains(Field::Latitude));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Field::Uptime, Field::Longitude]);
    }

    #[test]
    fn test_scaled_decimal_known() {
        assert!(ScaledDecimal::new(12625, 1000).is_known());
        assert!(!ScaledDecimal::UNKNOWN.is_known());
        assert!(!ScaledDecimal::default().is_known());
    }

    #[test]
    fn test_hemisphere_from_byte() {
        assert_eq!(Hemisphere::from_byte(b'N'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_byte(b'W'), Some(Hemisphere::West));
        assert_eq!(Hemisphere::from_byte(b'n'), None);
        assert_eq!(Hemisphere::from_byte(b'X'), None);
    }

    #[test]
    fn test_hemisphere_sign() {
        assert_eq!(Hemisphere::North.sign(), 1);
        assert_eq!(Hemisphere::East.sign(), 1);
        assert_eq!(Hemisphere::South.sign(), -1);
        assert_eq!(Hemisphere::West.sign(), -1);
    }

    #[test]
    fn test_default_record_is_unknown() {
        let record = TelemetryRecord::default();
        assert!(!record.valid);
        assert!(!record.course.is_known());
        assert_eq!(record.latitude.hemisphere, None);
    }
}
