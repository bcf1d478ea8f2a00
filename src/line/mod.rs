//! # STRATO3 Line Module
//!
//! Decoding of STRATO3 balloon tracker telemetry lines.
//!
//! This module handles:
//! - Self-declared delimiter detection and field-count validation
//! - Field-by-field dispatch into a [`protocol::TelemetryRecord`]
//! - Fixed-point decimals, GPS coordinates, dates and times
//! - Conversion of decoded values to `f64` and `chrono` types

pub mod protocol;
pub mod delimiter;
pub mod scalar;
pub mod coordinate;
pub mod datetime;
pub mod convert;
pub mod decoder;

pub use decoder::{parse, parse_str, Decoded};
pub use protocol::{
    CalendarDate, ClockTime, Field, FieldSet, GeoCoordinate, Hemisphere, ScaledDecimal,
    TelemetryRecord,
};
