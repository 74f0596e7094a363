//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TripError {
    #[error("INPUT/{0}")]
    MissingField(String),

    #[error("DATE/{0}")]
    InvalidDate(String),

    #[error("VALIDATION/{0}")]
    Validation(String),

    #[error("CONFIG/{0}")]
    Config(String),
}

impl TripError {
    /// Short machine-readable code, used by the HTTP layer
    pub fn code(&self) -> &'static str {
        match self {
            TripError::MissingField(_) => "missing_field",
            TripError::InvalidDate(_) => "invalid_date",
            TripError::Validation(_) => "validation",
            TripError::Config(_) => "config",
        }
    }
}
