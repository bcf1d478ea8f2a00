//! # STRATO3 Library
//!
//! Decode telemetry lines from the STRATO3 stratospheric balloon tracker.
//!
//! A line declares its own delimiter right after the leading `$` and carries
//! seventeen fields: timestamps, GPS fix, motion, environmental sensors,
//! supply voltage and a device state code. Decimal values are decoded into a
//! lossless fixed-point form; fields that fail to decode are counted instead
//! of rejecting the whole line.

pub mod config;
pub mod error;
pub mod line;
pub mod telemetry;
