#![forbid(unsafe_code)]

pub mod file_store;
pub mod repository;

pub use file_store::FileSessionStore;
pub use repository::{InMemorySessionStore, SessionRepository, StorageError};
