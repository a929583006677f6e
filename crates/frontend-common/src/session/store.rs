//! Persisted session store

use super::events::{SessionEvent, SessionEvents, Subscription};
use super::storage::{MemoryStorage, SessionStorage};
use crate::config::AuthConfig;
use internport_http::types::{Role, UserPatch, UserProfile};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Session store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Refusing to log in with an empty token")]
    EmptyToken,

    #[error("No user is logged in")]
    NoUser,
}

/// Immutable view of the session at one point in time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl SessionSnapshot {
    /// No token, no user
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        Self {
            token: Some(token.into()),
            user,
        }
    }

    /// Derived from the token, never stored separately
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|user| &user.role)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(UserProfile::display_name)
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.email.as_str())
    }
}

/// Single owner of the authentication state.
///
/// Clones share the same state, storage and listeners. Every mutation is
/// written to storage before it returns, then listeners are notified.
#[derive(Clone)]
pub struct SessionStore {
    state: Rc<RefCell<SessionSnapshot>>,
    storage: Rc<dyn SessionStorage>,
    events: SessionEvents,
}

impl SessionStore {
    /// Rehydrate the session from `storage`
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        let snapshot = rehydrate(storage.as_ref());
        tracing::debug!(
            authenticated = snapshot.is_authenticated(),
            "Session rehydrated from storage"
        );

        Self {
            state: Rc::new(RefCell::new(snapshot)),
            storage,
            events: SessionEvents::new(),
        }
    }

    /// Store backed by fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Set token and user together
    pub fn login(&self, token: impl Into<String>, user: UserProfile) -> Result<(), SessionError> {
        let token = token.into();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        self.persist(AuthConfig::TOKEN_KEY, &token);
        self.persist_user(&user);
        tracing::debug!(role = %user.role, "Logged in");
        *self.state.borrow_mut() = SessionSnapshot::authenticated(token, Some(user));

        self.events.emit(&SessionEvent::LoggedIn);
        Ok(())
    }

    /// Clear token and user. Calling this on an empty session changes nothing.
    pub fn logout(&self) {
        if self.clear() {
            tracing::debug!("Logged out");
            self.events.emit(&SessionEvent::LoggedOut);
        }
    }

    /// Alias of [`SessionStore::logout`]
    pub fn clear_session(&self) {
        self.logout();
    }

    /// Clear the session after the server rejected the credential.
    ///
    /// Unlike `logout` this always notifies, so the navigation layer goes to
    /// the login screen even when the session was already empty.
    pub fn invalidate(&self) {
        self.clear();
        tracing::warn!("Session invalidated by an authorization failure");
        self.events.emit(&SessionEvent::Invalidated);
    }

    /// Shallow-merge `patch` into the current user and persist the result.
    ///
    /// Without a user this is a no-op returning [`SessionError::NoUser`];
    /// no partial record is created.
    pub fn update_user(&self, patch: &UserPatch) -> Result<UserProfile, SessionError> {
        let updated = {
            let mut state = self.state.borrow_mut();
            let Some(user) = state.user.as_mut() else {
                tracing::warn!("Ignoring user update: no user in session");
                return Err(SessionError::NoUser);
            };
            user.merge(patch);
            user.clone()
        };

        self.persist_user(&updated);
        self.events.emit(&SessionEvent::UserUpdated);
        Ok(updated)
    }

    /// Register a listener for session changes
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> Subscription {
        self.events.subscribe(listener)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.borrow().user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.borrow().role().cloned()
    }

    pub fn display_name(&self) -> Option<String> {
        self.state.borrow().display_name().map(str::to_string)
    }

    pub fn email(&self) -> Option<String> {
        self.state.borrow().email().map(str::to_string)
    }

    /// Returns whether there was anything to clear
    fn clear(&self) -> bool {
        self.storage.remove(AuthConfig::TOKEN_KEY);
        self.storage.remove(AuthConfig::USER_KEY);

        let previous = std::mem::take(&mut *self.state.borrow_mut());
        previous != SessionSnapshot::empty()
    }

    fn persist_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(serialized) => self.persist(AuthConfig::USER_KEY, &serialized),
            Err(err) => tracing::warn!(error = %err, "Failed to serialize user"),
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            // The in-memory session still applies; it just won't survive a reload
            tracing::warn!(error = %err, "Session not persisted");
        }
    }
}

impl PartialEq for SessionStore {
    /// Identity: two handles are equal when they share the same state
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("role", &self.role())
            .finish_non_exhaustive()
    }
}

/// Read the persisted session; anything unreadable counts as no session
fn rehydrate(storage: &dyn SessionStorage) -> SessionSnapshot {
    let token = storage
        .get(AuthConfig::TOKEN_KEY)
        .filter(|token| !token.is_empty());

    let user = match storage.get(AuthConfig::USER_KEY) {
        Some(raw) => match serde_json::from_str::<Option<UserProfile>>(&raw) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "Discarding malformed stored session");
                discard(storage);
                return SessionSnapshot::empty();
            }
        },
        None => None,
    };

    match token {
        Some(token) => SessionSnapshot::authenticated(token, user),
        None => {
            if user.is_some() {
                tracing::warn!("Discarding stored user without a token");
                discard(storage);
            }
            SessionSnapshot::empty()
        }
    }
}

fn discard(storage: &dyn SessionStorage) {
    storage.remove(AuthConfig::TOKEN_KEY);
    storage.remove(AuthConfig::USER_KEY);
}
