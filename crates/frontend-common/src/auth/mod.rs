//! Yew bindings for the session

pub mod context;

pub use context::{use_session, SessionContext, SessionProvider, SessionProviderProps};
