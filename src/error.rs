//! Error handling module for agreetui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Store mutators, scenario loading, and the terminal front-end all report
//! through these types.

use thiserror::Error;

/// Main error type for agreetui
#[derive(Error, Debug)]
pub enum AgreeTuiError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A price id that is not in the price catalog
    #[error("Unknown price: {0}")]
    UnknownPrice(String),

    /// A contract id that is not in the contract catalog
    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    /// Date text that is not an ISO `YYYY-MM-DD` date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Scenario file errors (parsing, catalog mismatches)
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for agreetui operations
pub type Result<T> = std::result::Result<T, AgreeTuiError>;

// Convenient error constructors
impl AgreeTuiError {
    /// Create an unknown price error
    pub fn unknown_price(id: impl Into<String>) -> Self {
        Self::UnknownPrice(id.into())
    }

    /// Create an unknown contract error
    pub fn unknown_contract(id: impl Into<String>) -> Self {
        Self::UnknownContract(id.into())
    }

    /// Create an invalid date error
    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    /// Create a scenario error
    pub fn scenario(msg: impl Into<String>) -> Self {
        Self::Scenario(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Whether this error is a rejected catalog reference
    pub fn is_unknown_reference(&self) -> bool {
        matches!(self, Self::UnknownPrice(_) | Self::UnknownContract(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgreeTuiError::unknown_price("gold");
        assert_eq!(err.to_string(), "Unknown price: gold");

        let err = AgreeTuiError::unknown_contract("777");
        assert_eq!(err.to_string(), "Unknown contract: 777");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AgreeTuiError = io_err.into();
        assert!(matches!(err, AgreeTuiError::Io(_)));
    }

    #[test]
    fn test_unknown_reference_classification() {
        assert!(AgreeTuiError::unknown_price("x").is_unknown_reference());
        assert!(AgreeTuiError::unknown_contract("x").is_unknown_reference());
        assert!(!AgreeTuiError::scenario("bad").is_unknown_reference());
        assert!(!AgreeTuiError::invalid_date("2025-13-01").is_unknown_reference());
    }
}
