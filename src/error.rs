//! # Error Types
//!
//! Custom error types for STRATO3 decoding using `thiserror`.
//!
//! Decoding has two tiers: a [`StructuralError`] rejects the whole line
//! before any field is touched, while a [`FieldError`] only marks a single
//! field as bad and is counted by the dispatcher.

use thiserror::Error;

use crate::line::protocol::{Field, STRATO3_FIELD_COUNT};

/// Main error type for the STRATO3 application layer
#[derive(Debug, Error)]
pub enum Strato3Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whole-line rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Line cannot hold one delimiter per field
    #[error("Line too short: {length} bytes, need at least {minimum}")]
    TooShort { length: usize, minimum: usize },

    /// First byte is not `$`
    #[error("Missing '$' header sentinel")]
    MissingSentinel,

    /// Declared delimiter is unprintable or does not split the line into
    /// the expected number of fields
    #[error(
        "Field count mismatch: delimiter 0x{delimiter:02X} found {found} times, expected {}",
        STRATO3_FIELD_COUNT
    )]
    Delimiter { delimiter: u8, found: usize },
}

/// Single-field decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Delimiter handed to a field decoder is not printable
    #[error("Invalid delimiter 0x{0:02X}")]
    InvalidDelimiter(u8),

    /// Byte not allowed in a numeric field
    #[error("Invalid character 0x{byte:02X} at offset {offset}")]
    InvalidCharacter { byte: u8, offset: usize },

    /// Mantissa or scale does not fit in 32 bits
    #[error("Numeric overflow")]
    Overflow,

    /// Coordinate without N/S/E/W
    #[error("Missing hemisphere letter")]
    MissingHemisphere,
}

/// Either tier, for callers that want a single error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    #[error("Field {field}: {kind}")]
    Field { field: Field, kind: FieldError },
}

/// Result type alias for the STRATO3 application layer
pub type Result<T> = std::result::Result<T, Strato3Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_messages() {
        let err = StructuralError::TooShort { length: 3, minimum: 17 };
        assert_eq!(err.to_string(), "Line too short: 3 bytes, need at least 17");

        let err = StructuralError::Delimiter { delimiter: b';', found: 16 };
        assert_eq!(
            err.to_string(),
            "Field count mismatch: delimiter 0x3B found 16 times, expected 17"
        );
    }

    #[test]
    fn test_decode_error_wraps_field() {
        let err = DecodeError::Field {
            field: Field::Latitude,
            kind: FieldError::MissingHemisphere,
        };
        assert_eq!(err.to_string(), "Field latitude: Missing hemisphere letter");

        let err: DecodeError = StructuralError::MissingSentinel.into();
        assert!(matches!(err, DecodeError::Structural(_)));
    }
}
