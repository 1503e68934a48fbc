mod dto;
mod http;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use backpack_core::model::{
    AttemptId, ChoiceId, ExamQuestion, ExamResult, Lesson, LessonId, ListQuery, Page, ProgressMap,
    ProgressStatus, Subject, SubjectId, Summary, SummaryId, TopicId, UserProfile, UserStatistics,
};

pub use http::HttpApi;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors surfaced by the REST client.
///
/// Every call is a single attempt; there is no retry or backoff.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend rejected the call with 401; the session is gone.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Non-success status, with the message the backend sent alongside it.
    #[error("{message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The response body did not carry what the endpoint promises.
    #[error("unexpected payload: {0}")]
    Payload(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

//
// ─── VALUE TYPES ───────────────────────────────────────────────────────────────
//

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
}

/// A subject as the filter dropdown needs it: id and name only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectOption {
    pub id: SubjectId,
    pub name: String,
}

/// A freshly generated exam: server-issued attempt id plus its question set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedExam {
    pub attempt_id: AttemptId,
    pub questions: Vec<ExamQuestion>,
}

//
// ─── ENDPOINT CONTRACTS ────────────────────────────────────────────────────────
//

/// Authentication endpoints. The credential itself lives in the HTTP
/// client's cookie jar; these calls only move the profile around.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// POST `/api/v1/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or rejected credentials.
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError>;

    /// POST `/api/v1/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a rejected registration
    /// (e.g. an email already in use).
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    /// POST `/api/v1/auth/forgot-password`; the body is a plain-text notice.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn forgot_password(&self, email: &str) -> Result<String, ApiError>;

    /// POST `/api/v1/auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn logout(&self) -> Result<(), ApiError>;

    /// GET `/api/v1/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotAuthenticated` when the session cookie is
    /// missing or expired.
    async fn current_user(&self) -> Result<UserProfile, ApiError>;
}

/// Subject and lesson endpoints.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// GET `/api/v1/materias/progresso`: every subject with the caller's
    /// completion percentage.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn subjects_with_progress(&self) -> Result<Vec<Subject>, ApiError>;

    /// GET `/api/v1/materias`, paged.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn subjects_page(&self, query: &ListQuery) -> Result<Page<SubjectOption>, ApiError>;

    /// GET `/api/v1/aulas`, paged and filtered.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn lessons_page(&self, query: &ListQuery) -> Result<Page<Lesson>, ApiError>;

    /// GET `/api/v1/progresso`: the caller's per-lesson progress.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn lesson_progress(&self) -> Result<ProgressMap<LessonId>, ApiError>;

    /// POST `/api/v1/progresso/{aulaId}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn mark_lesson_progress(
        &self,
        lesson_id: LessonId,
        status: ProgressStatus,
    ) -> Result<(), ApiError>;
}

/// Summary endpoints.
#[async_trait]
pub trait SummaryApi: Send + Sync {
    /// GET `/api/v1/resumo`, paged and filtered.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn summaries_page(&self, query: &ListQuery) -> Result<Page<Summary>, ApiError>;

    /// GET `/api/v1/resumo/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn summary(&self, id: SummaryId) -> Result<Summary, ApiError>;

    /// GET `/api/v1/progresso-resumo`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn summary_progress(&self) -> Result<ProgressMap<SummaryId>, ApiError>;

    /// POST `/api/v1/progresso-resumo/{resumoId}`: mark a summary read.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn mark_summary_read(&self, id: SummaryId) -> Result<(), ApiError>;
}

/// Statistics endpoint behind the dashboard tiles.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// GET `/api/v1/estatisticas/meu-progresso`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn statistics(&self) -> Result<UserStatistics, ApiError>;
}

/// Practice-exam endpoints, including the AI explanation proxy.
#[async_trait]
pub trait ExamApi: Send + Sync {
    /// POST `/api/v1/simulados/gerar`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, or a non-success status when
    /// the subject's question bank is too small for an exam.
    async fn generate_exam(&self, subject_id: SubjectId) -> Result<GeneratedExam, ApiError>;

    /// POST `/api/v1/simulados/submeter` with the full answer map.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn submit_exam(
        &self,
        attempt_id: AttemptId,
        answers: &HashMap<TopicId, ChoiceId>,
    ) -> Result<ExamResult, ApiError>;

    /// POST `/api/v1/ai/gemini/sync/analise-questao`: plain text in, plain
    /// text out.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn explain_question(&self, prompt: &str) -> Result<String, ApiError>;
}
