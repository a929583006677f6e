//! Type-safe API clients that enforce authentication requirements at compile time

use super::{ClientError, USER_AGENT};
use reqwest::{Client, header};

/// Client for public endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer token
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_http_client() -> Result<Client, ClientError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        ClientBuilder::new().base_url(base_url).build_public()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        super::execute(request).await
    }

    /// Attach a bearer token, sharing the underlying connection pool
    pub fn authenticate(&self, token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: token.into(),
        }
    }
}

impl AuthenticatedClient {
    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying `Authorization: Bearer <token>`
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        super::execute(request).await
    }
}

/// Builder that creates the appropriate client type
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. An empty string means same-origin relative paths.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    fn normalized_base_url(&self) -> Result<String, ClientError> {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self.normalized_base_url()?;
        Ok(PublicClient {
            client: build_http_client()?,
            base_url,
        })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}
