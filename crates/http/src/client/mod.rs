//! InternPort HTTP client

pub mod auth;
pub mod error;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedClient, ClientBuilder, PublicClient};

/// User agent sent by every client
pub(crate) const USER_AGENT: &str = "internport-client/0.1.0";

/// Send a request and decode a JSON body, mapping error statuses to [`ClientError`]
pub(crate) async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        tracing::debug!(status = status.as_u16(), "request failed");
        Err(ClientError::from_status(status, message))
    }
}
