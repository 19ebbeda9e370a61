//! Error types for ADEXP decoding

use thiserror::Error;

/// Result type for ADEXP decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that abort the decoding of an ADEXP message
///
/// Unmanaged tokens and lines with an empty token name are not errors: they
/// are skipped and reported through `tracing` only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The raw message has zero length
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A flight level subfield is not a letter followed by decimal digits
    #[error("Malformed flight level {value:?} in {token} field")]
    MalformedFlightLevel {
        /// Token of the record-list field carrying the subfield
        token: String,
        /// Raw subfield value (empty when the subfield is missing)
        value: String,
    },
}

impl DecodeError {
    /// Create a new EmptyInput error
    pub fn empty_input(msg: impl Into<String>) -> Self {
        DecodeError::EmptyInput(msg.into())
    }

    /// Create a new MalformedFlightLevel error
    pub fn malformed_flight_level(token: impl Into<String>, value: impl Into<String>) -> Self {
        DecodeError::MalformedFlightLevel {
            token: token.into(),
            value: value.into(),
        }
    }
}
