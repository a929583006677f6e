//! Client-side authentication state

pub mod events;
pub mod storage;
pub mod store;

pub use events::{SessionEvent, SessionEvents, Subscription};
pub use storage::{
    default_storage, BrowserStorage, MemoryStorage, SessionStorage, StorageError,
};
pub use store::{SessionError, SessionSnapshot, SessionStore};
