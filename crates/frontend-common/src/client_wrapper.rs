//! Session-aware API client
//!
//! Reads the bearer token from the session store on every request and
//! invalidates the session when the server answers 401.

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::guard::home_path;
use crate::session::SessionStore;
use internport_http::client::{AuthenticatedClient, ClientBuilder, PublicClient};
use internport_http::types::{
    AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UserPatch, UserProfile,
};
use reqwest::Method;

/// API client bound to a session store
#[derive(Clone)]
pub struct SessionClient {
    public: PublicClient,
    session: SessionStore,
}

impl SessionClient {
    /// Create a client for `config` that authenticates from `session`
    pub fn new(config: &ApiConfig, session: SessionStore) -> std::result::Result<Self, ClientError> {
        let public = ClientBuilder::new()
            .base_url(config.resolved_base_url())
            .build_public()?;
        Ok(Self { public, session })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Create a request builder, with `Authorization: Bearer <token>` when
    /// the session has a token
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => self.public.authenticate(token).request(method, path),
            None => self.public.request(method, path),
        }
    }

    /// Execute a request; a 401 clears the session before the error is
    /// handed back to the caller
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<T, ClientError> {
        let result = self.public.execute(request).await;
        self.check_auth(result)
    }

    /// Log in and store the session. Returns the role's home path.
    ///
    /// Goes through the public client: no token is sent and a 401 here
    /// means bad credentials, not an expired session.
    pub async fn login(&self, request: &LoginRequest) -> Result<&'static str> {
        let response = self.public.login(request).await?;
        self.start_session(response)
    }

    /// Register a new account and log it in. Returns the role's home path.
    pub async fn register(&self, request: &RegisterRequest) -> Result<&'static str> {
        let response = self.public.register(request).await?;
        self.start_session(response)
    }

    /// Forget the session locally; the backend keeps no session to end
    pub fn logout(&self) {
        self.session.logout();
    }

    /// Get the current user's full profile
    pub async fn fetch_profile(&self) -> std::result::Result<ProfileResponse, ClientError> {
        let result = match self.authenticated() {
            Ok(client) => client.get_profile().await,
            Err(err) => Err(err),
        };
        self.check_auth(result)
    }

    /// Update the profile on the server, then merge the change into the session
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<UserProfile> {
        let result = match self.authenticated() {
            Ok(client) => client.update_profile(patch).await,
            Err(err) => Err(err),
        };
        self.check_auth(result)?;
        Ok(self.session.update_user(patch)?)
    }

    /// Typed client for the current token. Without a token the call fails
    /// the way the backend would answer it, without a round trip.
    fn authenticated(&self) -> std::result::Result<AuthenticatedClient, ClientError> {
        self.session
            .token()
            .map(|token| self.public.authenticate(token))
            .ok_or_else(|| ClientError::AuthenticationFailed("Token is missing".to_string()))
    }

    /// Invalidate the session when the credential was rejected
    fn check_auth<T>(
        &self,
        result: std::result::Result<T, ClientError>,
    ) -> std::result::Result<T, ClientError> {
        if let Err(err) = &result {
            if err.is_auth_failure() {
                self.session.invalidate();
            }
        }
        result
    }

    fn start_session(&self, response: AuthResponse) -> Result<&'static str> {
        let home = home_path(Some(&response.user.role));
        self.session.login(response.token, response.user)?;
        Ok(home)
    }
}

impl PartialEq for SessionClient {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.public.base_url() == other.public.base_url()
    }
}
