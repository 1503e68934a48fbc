use std::sync::Arc;

use tracing::{debug, warn};

use backpack_core::model::{AuthSession, UserProfile};
use storage::SessionRepository;

use crate::api::{ApiError, AuthApi, Registration};
use crate::error::AuthError;

/// Login, registration, and session lifecycle.
///
/// The cookie jar inside the API client holds the actual credential; this
/// service keeps the persisted profile blob in step with it.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn SessionRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn SessionRepository>) -> Self {
        Self { api, store }
    }

    /// Authenticate and persist the profile blob.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` before any network call when
    /// either field is blank, and `AuthError` for rejected credentials or
    /// storage failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        debug!("logging in {email}");
        self.api.login(email, password).await?;
        let user = self.api.current_user().await?;
        self.store
            .save(&AuthSession::signed_in(user.clone()))
            .await?;
        Ok(user)
    }

    /// Create an account. The caller lands back on the login view afterward.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` or `AuthError::InvalidAge` before
    /// any network call, and `AuthError` for a rejected registration.
    pub async fn register(&self, registration: Registration) -> Result<(), AuthError> {
        if registration.full_name.trim().is_empty()
            || registration.email.trim().is_empty()
            || registration.password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if registration.age == 0 {
            return Err(AuthError::InvalidAge);
        }

        debug!("registering {}", registration.email);
        self.api.register(&registration).await?;
        Ok(())
    }

    /// Request a password-recovery email; returns the backend's notice text.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` for a blank email, and `AuthError`
    /// for a rejected request.
    pub async fn forgot_password(&self, email: &str) -> Result<String, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(self.api.forgot_password(email).await?)
    }

    /// Sign out: best-effort server call, then clear the local store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the local store cannot be cleared;
    /// a failed server call is only logged, the local session goes anyway.
    pub async fn logout(&self) -> Result<(), AuthError> {
        if let Err(err) = self.api.logout().await {
            warn!("server logout failed, clearing local session anyway: {err}");
        }
        self.store.clear().await?;
        Ok(())
    }

    /// Probe `/auth/me` and refresh the persisted blob.
    ///
    /// A 401 clears the store so the next launch starts signed out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when the session is gone, and
    /// `AuthError` for transport failures.
    pub async fn current_user(&self) -> Result<UserProfile, AuthError> {
        match self.api.current_user().await {
            Ok(user) => {
                if let Err(err) = self.store.save(&AuthSession::signed_in(user.clone())).await {
                    warn!("could not refresh persisted session: {err}");
                }
                Ok(user)
            }
            Err(ApiError::NotAuthenticated) => {
                if let Err(err) = self.store.clear().await {
                    warn!("could not clear persisted session: {err}");
                }
                Err(AuthError::NotAuthenticated)
            }
            Err(other) => Err(other.into()),
        }
    }

    /// The locally persisted session, without touching the network.
    pub async fn cached_session(&self) -> AuthSession {
        self.store.load().await
    }
}
