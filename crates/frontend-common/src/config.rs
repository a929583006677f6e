//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key for the raw bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Local storage key for the JSON-encoded user profile
    pub const USER_KEY: &'static str = "user";

    /// Where the navigation layer sends the user after a 401
    pub const LOGIN_PATH: &'static str = "/login";
}

/// API endpoint configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL prepended to every request path; empty means same-origin
    pub base_url: String,
}

impl ApiConfig {
    /// Backend address used by debug builds
    pub const DEVELOPMENT_URL: &'static str = "http://localhost:5000";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Select the endpoint for this build.
    ///
    /// `INTERNPORT_API_URL` set at compile time wins; otherwise debug builds
    /// talk to the local backend and release builds use same-origin paths.
    pub fn from_env() -> Self {
        Self::select(option_env!("INTERNPORT_API_URL"), cfg!(debug_assertions))
    }

    fn select(override_url: Option<&str>, debug: bool) -> Self {
        match override_url {
            Some(url) if !url.is_empty() => Self::new(url),
            _ if debug => Self::new(Self::DEVELOPMENT_URL),
            _ => Self::new(""),
        }
    }

    /// Base URL usable by the HTTP client.
    ///
    /// reqwest needs absolute URLs, so a same-origin config is resolved
    /// against the page origin in the browser.
    pub fn resolved_base_url(&self) -> String {
        if !self.base_url.is_empty() {
            return self.base_url.clone();
        }

        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }

        // Default to relative URLs
        String::new()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
