//! # Telemetry Module
//!
//! Renders decoded records for consumers.
//!
//! This module handles:
//! - Text rendering of a record (`Display`)
//! - Formatting as JSONL (JSON Lines)

pub mod jsonl;
pub mod render;

pub use jsonl::to_json_line;
