//! Shared error types for the services crate.

use thiserror::Error;

use backpack_core::model::ExamError;
use storage::StorageError;

use crate::api::ApiError;

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("all fields are required")]
    MissingFields,
    #[error("age must be a positive number")]
    InvalidAge,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotAuthenticated => AuthError::NotAuthenticated,
            other => AuthError::Api(other),
        }
    }
}

/// Errors emitted by the listing services (subjects, lessons, summaries,
/// dashboard).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CatalogError {
    /// True when the backend rejected the call for a missing session, which
    /// the views translate into a redirect to the login route.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, CatalogError::Api(ApiError::NotAuthenticated))
    }
}

/// Errors emitted by `ExamService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamServiceError {
    #[error(transparent)]
    Attempt(#[from] ExamError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ExamServiceError {
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, ExamServiceError::Api(ApiError::NotAuthenticated))
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
