//! Shared building blocks for the InternPort web UI: the persisted session
//! store, the navigation guard and the session-aware API client.

pub mod auth;
pub mod client_wrapper;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;

pub use auth::{use_session, SessionContext, SessionProvider};
pub use client_wrapper::SessionClient;
pub use config::{ApiConfig, AuthConfig};
pub use error::{ClientError, FrontendError};
pub use guard::{guard, home_path, Access, Navigation, RouteMeta};
pub use session::{SessionError, SessionEvent, SessionSnapshot, SessionStore};
