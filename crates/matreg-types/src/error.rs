//! Error types for material registration

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised while handing a record to the creation endpoint
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to serialize record: {0}")]
    Serialize(String),

    #[error("Endpoint rejected the record with status {0}")]
    Rejected(u16),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Validation failed:\n{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Registration failed: {0}")]
    RegistrationFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::NotFound.into();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
        assert_eq!(err.to_string(), "Configuration error: Configuration not found");
    }

    #[test]
    fn test_transport_error_message() {
        let err: Error = TransportError::Network("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "Transport error: Network error: connection refused");
    }

    #[test]
    fn test_rejected_names_status() {
        let err = TransportError::Rejected(422);
        assert_eq!(err.to_string(), "Endpoint rejected the record with status 422");
    }
}
