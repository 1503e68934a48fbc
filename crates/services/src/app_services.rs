use std::sync::Arc;

use storage::SessionRepository;

use crate::api::{AuthApi, CatalogApi, ExamApi, HttpApi, StatsApi, SummaryApi};
use crate::auth_service::AuthService;
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::exam_service::ExamService;
use crate::lesson_service::LessonService;
use crate::subject_service::SubjectService;
use crate::summary_service::SummaryService;
use crate::Clock;

/// Assembles the app-facing services around one API client and one
/// session store.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    subjects: Arc<SubjectService>,
    lessons: Arc<LessonService>,
    summaries: Arc<SummaryService>,
    dashboard: Arc<DashboardService>,
    exams: Arc<ExamService>,
}

impl AppServices {
    /// Build services backed by the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn new_http(
        base_url: &str,
        store: Arc<dyn SessionRepository>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let api = Arc::new(HttpApi::new(base_url)?);
        Ok(Self::with_api(api, store, clock))
    }

    /// Build services on top of any API implementation (tests use stubs).
    pub fn with_api<A>(api: Arc<A>, store: Arc<dyn SessionRepository>, clock: Clock) -> Self
    where
        A: AuthApi + CatalogApi + SummaryApi + StatsApi + ExamApi + 'static,
    {
        let auth_api: Arc<dyn AuthApi> = Arc::clone(&api) as Arc<dyn AuthApi>;
        let catalog_api: Arc<dyn CatalogApi> = Arc::clone(&api) as Arc<dyn CatalogApi>;
        let summary_api: Arc<dyn SummaryApi> = Arc::clone(&api) as Arc<dyn SummaryApi>;
        let stats_api: Arc<dyn StatsApi> = Arc::clone(&api) as Arc<dyn StatsApi>;
        let exam_api: Arc<dyn ExamApi> = api as Arc<dyn ExamApi>;

        let auth = Arc::new(AuthService::new(Arc::clone(&auth_api), store));
        let subjects = Arc::new(SubjectService::new(Arc::clone(&catalog_api)));
        let lessons = Arc::new(LessonService::new(catalog_api));
        let summaries = Arc::new(SummaryService::new(summary_api));
        let dashboard = Arc::new(DashboardService::new(auth_api, stats_api));
        let exams = Arc::new(ExamService::new(exam_api, clock));

        Self {
            auth,
            subjects,
            lessons,
            summaries,
            dashboard,
            exams,
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn subjects(&self) -> Arc<SubjectService> {
        Arc::clone(&self.subjects)
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn summaries(&self) -> Arc<SummaryService> {
        Arc::clone(&self.summaries)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn exams(&self) -> Arc<ExamService> {
        Arc::clone(&self.exams)
    }
}
