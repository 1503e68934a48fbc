use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;

use backpack_core::model::AuthSession;

/// Errors surfaced by session storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the locally persisted session.
///
/// The desktop analogue of the browser's local-storage blob: written on
/// login, cleared on logout or a failed auth probe. `load` never fails on an
/// absent or unreadable store; that state is simply a signed-out session.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Load the persisted session, falling back to signed-out.
    async fn load(&self) -> AuthSession;

    /// Persist the session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be written.
    async fn save(&self, session: &AuthSession) -> Result<(), StorageError>;

    /// Remove any persisted session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be cleared.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Mutex-held session for tests and composition.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: Mutex<AuthSession>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn load(&self) -> AuthSession {
        self.session
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    async fn save(&self, session: &AuthSession) -> Result<(), StorageError> {
        if let Ok(mut guard) = self.session.lock() {
            *guard = session.clone();
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if let Ok(mut guard) = self.session.lock() {
            *guard = AuthSession::signed_out();
        }
        Ok(())
    }
}
