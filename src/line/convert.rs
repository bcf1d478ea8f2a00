//! # Value Conversion
//!
//! Converts raw decoded values to floating point and `chrono` types at the
//! boundary to consumers. Unknown values become NaN or `None`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::protocol::{CalendarDate, ClockTime, GeoCoordinate, ScaledDecimal, TelemetryRecord};

impl ScaledDecimal {
    /// `mantissa / scale`, NaN when the value is unknown
    pub fn to_f64(&self) -> f64 {
        if self.scale == 0 {
            return f64::NAN;
        }
        f64::from(self.mantissa) / f64::from(self.scale)
    }
}

impl GeoCoordinate {
    /// Decimal degrees, NaN without a hemisphere
    ///
    /// The hemisphere sign applies to the whole degrees only:
    /// `sign * degrees + minutes / 60`.
    pub fn to_decimal_degrees(&self) -> f64 {
        match self.hemisphere {
            Some(hemisphere) => {
                f64::from(hemisphere.sign()) * f64::from(self.degrees) + self.minutes.to_f64() / 60.0
            }
            None => f64::NAN,
        }
    }
}

impl ClockTime {
    /// `None` if the fields are not a valid time of day
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
    }
}

impl CalendarDate {
    /// `None` if the fields are not a valid calendar date
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl TelemetryRecord {
    /// GPS date and wall-clock time combined
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.date.to_naive_date()?.and_time(self.time.to_naive_time()?))
    }
}
