//! InternPort HTTP client
//!
//! Typed clients for the InternPort API. Public endpoints (login,
//! registration) go through [`client::PublicClient`]; everything else goes
//! through [`client::AuthenticatedClient`], which carries a bearer token.

pub mod client;
pub mod types;

pub use client::{AuthenticatedClient, ClientBuilder, PublicClient, error::ClientError};
pub use types::{Role, UserPatch, UserProfile};
