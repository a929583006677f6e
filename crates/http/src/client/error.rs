//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed (401)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected the credential
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "Token is missing".into());
        assert!(err.is_auth_failure());
        assert!(matches!(err, ClientError::AuthenticationFailed(_)));

        let err = ClientError::from_status(StatusCode::FORBIDDEN, "Unauthorized access".into());
        assert!(!err.is_auth_failure());
        assert!(matches!(err, ClientError::Forbidden(_)));

        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    }
}
