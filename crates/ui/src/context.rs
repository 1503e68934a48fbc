use std::sync::Arc;

use services::{
    AuthService, DashboardService, ExamService, LessonService, SubjectService, SummaryService,
};

/// What the composition root must hand the UI.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn subjects(&self) -> Arc<SubjectService>;
    fn lessons(&self) -> Arc<LessonService>;
    fn summaries(&self) -> Arc<SummaryService>;
    fn dashboard(&self) -> Arc<DashboardService>;
    fn exams(&self) -> Arc<ExamService>;
}

/// Services as the views consume them, shared through Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    subjects: Arc<SubjectService>,
    lessons: Arc<LessonService>,
    summaries: Arc<SummaryService>,
    dashboard: Arc<DashboardService>,
    exams: Arc<ExamService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            subjects: app.subjects(),
            lessons: app.lessons(),
            summaries: app.summaries(),
            dashboard: app.dashboard(),
            exams: app.exams(),
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

/// Build an `AppContext` from a UI-facing app implementation.
///
/// Provided by the application composition root (e.g. `crates/app`).
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
