//! Domain Error Types
//!
//! Validation failures raised before anything reaches storage.

use thiserror::Error;

/// Reasons a submitted squirrel cannot be persisted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the request body
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Required field present but blank
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    /// Field bytes were not valid UTF-8 once percent-decoded
    #[error("Field is not valid UTF-8: {0}")]
    InvalidEncoding(&'static str),
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) | Self::InvalidEncoding(field) => {
                field
            }
        }
    }
}
