//! Authentication and profile endpoints

use super::{
    error::ClientError,
    typed::{AuthenticatedClient, PublicClient},
};
use crate::types::{
    AuthResponse, LoginRequest, MessageResponse, ProfileResponse, RegisterRequest, UserPatch,
};
use reqwest::Method;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/api/profile";

/// Endpoints that must not carry a credential
impl PublicClient {
    /// Exchange email and password for a token and user record
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let req = self.request(Method::POST, LOGIN_PATH).json(request);
        self.execute(req).await
    }

    /// Create an account; the backend logs the new user in directly
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let req = self.request(Method::POST, REGISTER_PATH).json(request);
        self.execute(req).await
    }
}

impl AuthenticatedClient {
    /// Get the current user's full profile
    pub async fn get_profile(&self) -> Result<ProfileResponse, ClientError> {
        let req = self.request(Method::GET, PROFILE_PATH);
        self.execute(req).await
    }

    /// Update profile fields; unset fields are left untouched by the server
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::PUT, PROFILE_PATH).json(patch);
        self.execute(req).await
    }
}
