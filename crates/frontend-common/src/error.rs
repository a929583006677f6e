//! Errors surfaced by session-aware operations

pub use internport_http::client::error::ClientError;
use crate::session::SessionError;
use thiserror::Error;

/// Failure of an operation that talks to the API and then updates the session
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl FrontendError {
    /// Whether the server rejected the credential
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Client(err) if err.is_auth_failure())
    }
}

pub type Result<T> = std::result::Result<T, FrontendError>;
