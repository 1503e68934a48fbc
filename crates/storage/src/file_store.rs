use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use backpack_core::model::AuthSession;

use crate::repository::{SessionRepository, StorageError};

/// JSON-file session store.
///
/// One small blob on disk, rewritten whole on every save. A missing or
/// unparsable file loads as a signed-out session rather than an error.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionRepository for FileSessionStore {
    async fn load(&self) -> AuthSession {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(session) => session,
                Err(err) => {
                    warn!("session file unreadable, treating as signed out: {err}");
                    AuthSession::signed_out()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => AuthSession::signed_out(),
            Err(err) => {
                warn!("session file unreadable, treating as signed out: {err}");
                AuthSession::signed_out()
            }
        }
    }

    async fn save(&self, session: &AuthSession) -> Result<(), StorageError> {
        let payload = serde_json::to_vec_pretty(session)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        fs::write(&self.path, payload).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
