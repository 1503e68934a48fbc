use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;

use backpack_core::model::{
    AttemptId, ChoiceId, Lesson, LessonId, ListQuery, Page, ProgressMap, ProgressStatus, Subject,
    SubjectId, Summary, SummaryId, TopicId, UserProfile, UserStatistics, SORT_BY_ID,
};

use super::dto::{
    lesson_progress_map, summary_progress_map, ErrorBodyDto, ExamResultDto, GeneratedExamDto,
    LessonDto, LessonProgressDto, PageDto, StatisticsDto, SubjectDto, SubjectProgressDto,
    SummaryDto, SummaryProgressDto,
};
use super::{
    ApiError, AuthApi, CatalogApi, ExamApi, GeneratedExam, Registration, StatsApi, SubjectOption,
    SummaryApi,
};

/// Reqwest-backed client for the Backpack REST API.
///
/// A single auth transport: the cookie jar carries the session cookie the
/// login endpoint sets, and every call sends it. No retries, no timeouts;
/// each call is one attempt whose failure is scoped to the view that made it.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client for the given base URL (e.g. `http://localhost:8080`).
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the underlying client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Map a non-success response to a descriptive error, preferring the
    /// backend's `message` field, then the raw body, then the bare status.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::NotAuthenticated);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBodyDto>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or(body);
        let message = if message.trim().is_empty() {
            format!("request failed with status {status}")
        } else {
            message
        };

        Err(ApiError::Status { status, message })
    }

    fn paged_query(query: &ListQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
            ("sort", SORT_BY_ID.to_string()),
        ];
        if let Some(subject_id) = query.subject_id {
            params.push(("materiaId", subject_id.to_string()));
        }
        if let Some(search) = &query.search {
            params.push(("searchTerm", search.clone()));
        }
        params
    }
}

//
// ─── REQUEST BODIES ────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    #[serde(rename = "nomeCompleto")]
    nome_completo: &'a str,
    email: &'a str,
    idade: u32,
    senha: &'a str,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct MarkProgressRequest<'a> {
    status: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerateExamRequest {
    #[serde(rename = "materiaId")]
    materia_id: u64,
}

#[derive(Debug, Serialize)]
struct SubmitExamRequest {
    #[serde(rename = "tentativaId")]
    tentativa_id: u64,
    respostas: HashMap<u64, u64>,
}

//
// ─── ENDPOINT IMPLEMENTATIONS ──────────────────────────────────────────────────
//

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/v1/auth/login"))
            .json(&LoginRequest {
                email,
                senha: password,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/v1/auth/register"))
            .json(&RegisterRequest {
                nome_completo: &registration.full_name,
                email: &registration.email,
                idade: registration.age,
                senha: &registration.password,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/v1/auth/forgot-password"))
            .json(&ForgotPasswordRequest { email })
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.text().await?)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/v1/auth/logout"))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/auth/me"))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpApi {
    async fn subjects_with_progress(&self) -> Result<Vec<Subject>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/materias/progresso"))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let subjects: Vec<SubjectProgressDto> = response.json().await?;
        Ok(subjects.into_iter().map(Subject::from).collect())
    }

    async fn subjects_page(&self, query: &ListQuery) -> Result<Page<SubjectOption>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/materias"))
            .query(&Self::paged_query(query))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let page: PageDto<SubjectDto> = response.json().await?;
        page.try_into_page(|subject| Ok(SubjectOption::from(subject)))
    }

    async fn lessons_page(&self, query: &ListQuery) -> Result<Page<Lesson>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/aulas"))
            .query(&Self::paged_query(query))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let page: PageDto<LessonDto> = response.json().await?;
        page.try_into_page(Lesson::try_from)
    }

    async fn lesson_progress(&self) -> Result<ProgressMap<LessonId>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/progresso"))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let entries: Vec<LessonProgressDto> = response.json().await?;
        Ok(lesson_progress_map(entries))
    }

    async fn mark_lesson_progress(
        &self,
        lesson_id: LessonId,
        status: ProgressStatus,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(&format!("api/v1/progresso/{lesson_id}")))
            .json(&MarkProgressRequest {
                status: status.as_wire(),
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SummaryApi for HttpApi {
    async fn summaries_page(&self, query: &ListQuery) -> Result<Page<Summary>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/resumo"))
            .query(&Self::paged_query(query))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let page: PageDto<SummaryDto> = response.json().await?;
        page.try_into_page(|summary| Ok(Summary::from(summary)))
    }

    async fn summary(&self, id: SummaryId) -> Result<Summary, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&format!("api/v1/resumo/{id}")))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let summary: SummaryDto = response.json().await?;
        Ok(Summary::from(summary))
    }

    async fn summary_progress(&self) -> Result<ProgressMap<SummaryId>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/progresso-resumo"))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let entries: Vec<SummaryProgressDto> = response.json().await?;
        Ok(summary_progress_map(entries))
    }

    async fn mark_summary_read(&self, id: SummaryId) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(&format!("api/v1/progresso-resumo/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl StatsApi for HttpApi {
    async fn statistics(&self) -> Result<UserStatistics, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/v1/estatisticas/meu-progresso"))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let statistics: StatisticsDto = response.json().await?;
        Ok(UserStatistics::from(statistics))
    }
}

#[async_trait]
impl ExamApi for HttpApi {
    async fn generate_exam(&self, subject_id: SubjectId) -> Result<GeneratedExam, ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/v1/simulados/gerar"))
            .json(&GenerateExamRequest {
                materia_id: subject_id.value(),
            })
            .send()
            .await?;
        let response = Self::check(response).await?;
        let generated: GeneratedExamDto = response.json().await?;
        Ok(GeneratedExam::from(generated))
    }

    async fn submit_exam(
        &self,
        attempt_id: AttemptId,
        answers: &HashMap<TopicId, ChoiceId>,
    ) -> Result<backpack_core::model::ExamResult, ApiError> {
        let respostas = answers
            .iter()
            .map(|(topic_id, choice_id)| (topic_id.value(), choice_id.value()))
            .collect();
        let response = self
            .client
            .post(self.endpoint("api/v1/simulados/submeter"))
            .json(&SubmitExamRequest {
                tentativa_id: attempt_id.value(),
                respostas,
            })
            .send()
            .await?;
        let response = Self::check(response).await?;
        let result: ExamResultDto = response.json().await?;
        Ok(backpack_core::model::ExamResult::from(result))
    }

    async fn explain_question(&self, prompt: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/v1/ai/gemini/sync/analise-questao"))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(prompt.to_string())
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.text().await?)
    }
}
