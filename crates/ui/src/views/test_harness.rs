use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use backpack_core::model::{
    AttemptId, ChoiceId, Lesson, LessonId, ListQuery, Page, ProgressMap, ProgressStatus, Subject,
    SubjectId, Summary, SummaryId, TopicId, UserProfile, UserStatistics,
};
use backpack_core::time::fixed_clock;
use services::api::{
    ApiError, AuthApi, CatalogApi, ExamApi, GeneratedExam, Registration, StatsApi, SubjectOption,
    SummaryApi,
};
use services::{
    AppServices, AuthService, DashboardService, ExamService, LessonService, SubjectService,
    SummaryService,
};
use storage::InMemorySessionStore;

use crate::context::{build_app_context, UiApp};
use crate::views::{
    DashboardView, LoginView, PracticeExamView, SummariesView, SummaryDetailView, VideoClassesView,
};

//
// ─── STUB API ──────────────────────────────────────────────────────────────────
//

/// Canned backend for view tests.
pub struct StubApi {
    pub profile: UserProfile,
    pub subjects: Vec<Subject>,
    pub options: Vec<SubjectOption>,
    pub lessons: Vec<Lesson>,
    pub lesson_progress: ProgressMap<LessonId>,
    pub summaries: Vec<Summary>,
    pub summary_progress: ProgressMap<SummaryId>,
    pub statistics: UserStatistics,
    pub fail_lists: bool,
}

impl Default for StubApi {
    fn default() -> Self {
        let mut lesson_progress = ProgressMap::new();
        lesson_progress.insert(LessonId::new(2), ProgressStatus::Completed);
        let mut summary_progress = ProgressMap::new();
        summary_progress.insert(SummaryId::new(1), ProgressStatus::Completed);

        Self {
            profile: UserProfile {
                full_name: "Ana Clara Souza".to_string(),
                email: "ana@example.com".to_string(),
                age: 21,
            },
            subjects: vec![Subject {
                id: SubjectId::new(1),
                name: "Math".to_string(),
                completion_percent: 42.6,
            }],
            options: vec![SubjectOption {
                id: SubjectId::new(1),
                name: "Math".to_string(),
            }],
            lessons: vec![
                Lesson::new(
                    LessonId::new(1),
                    "Limits",
                    "Intro to limits",
                    "https://videos.example.com/watch?v=1",
                    605,
                    Some("Math".to_string()),
                )
                .expect("stub lesson"),
                Lesson::new(
                    LessonId::new(2),
                    "Derivatives",
                    "Rates of change",
                    "https://videos.example.com/watch?v=2",
                    720,
                    Some("Math".to_string()),
                )
                .expect("stub lesson"),
            ],
            lesson_progress,
            summaries: vec![Summary {
                id: SummaryId::new(1),
                title: "Key ideas".to_string(),
                content: "# Key ideas\n\n- one\n- two".to_string(),
                subject_name: Some("Math".to_string()),
            }],
            summary_progress,
            statistics: UserStatistics {
                lessons: backpack_core::model::LessonStats {
                    watched: 1,
                    pending: 1,
                    total: 2,
                    per_day_avg: 0.5,
                },
                summaries: backpack_core::model::SummaryStats {
                    completed: 1,
                    pending: 0,
                    total: 1,
                    per_day_avg: 0.2,
                },
            },
            fail_lists: false,
        }
    }
}

fn server_down() -> ApiError {
    ApiError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        message: "server down".to_string(),
    }
}

fn one_page<T: Clone>(items: &[T]) -> Page<T> {
    Page {
        content: items.to_vec(),
        number: 0,
        size: 10,
        total_elements: items.len() as u64,
        total_pages: 1,
        first: true,
        last: true,
    }
}

#[async_trait]
impl AuthApi for StubApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn register(&self, _registration: &Registration) -> Result<(), ApiError> {
        Ok(())
    }

    async fn forgot_password(&self, _email: &str) -> Result<String, ApiError> {
        Ok("sent".to_string())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        Ok(self.profile.clone())
    }
}

#[async_trait]
impl CatalogApi for StubApi {
    async fn subjects_with_progress(&self) -> Result<Vec<Subject>, ApiError> {
        if self.fail_lists {
            return Err(server_down());
        }
        Ok(self.subjects.clone())
    }

    async fn subjects_page(&self, _query: &ListQuery) -> Result<Page<SubjectOption>, ApiError> {
        Ok(one_page(&self.options))
    }

    async fn lessons_page(&self, _query: &ListQuery) -> Result<Page<Lesson>, ApiError> {
        if self.fail_lists {
            return Err(server_down());
        }
        Ok(one_page(&self.lessons))
    }

    async fn lesson_progress(&self) -> Result<ProgressMap<LessonId>, ApiError> {
        Ok(self.lesson_progress.clone())
    }

    async fn mark_lesson_progress(
        &self,
        _lesson_id: LessonId,
        _status: ProgressStatus,
    ) -> Result<(), ApiError> {
        Ok(())
    }
}

#[async_trait]
impl SummaryApi for StubApi {
    async fn summaries_page(&self, _query: &ListQuery) -> Result<Page<Summary>, ApiError> {
        if self.fail_lists {
            return Err(server_down());
        }
        Ok(one_page(&self.summaries))
    }

    async fn summary(&self, id: SummaryId) -> Result<Summary, ApiError> {
        self.summaries
            .iter()
            .find(|summary| summary.id == id)
            .cloned()
            .ok_or_else(server_down)
    }

    async fn summary_progress(&self) -> Result<ProgressMap<SummaryId>, ApiError> {
        Ok(self.summary_progress.clone())
    }

    async fn mark_summary_read(&self, _id: SummaryId) -> Result<(), ApiError> {
        Ok(())
    }
}

#[async_trait]
impl StatsApi for StubApi {
    async fn statistics(&self) -> Result<UserStatistics, ApiError> {
        Ok(self.statistics.clone())
    }
}

#[async_trait]
impl ExamApi for StubApi {
    async fn generate_exam(&self, _subject_id: SubjectId) -> Result<GeneratedExam, ApiError> {
        Ok(GeneratedExam {
            attempt_id: AttemptId::new(1),
            questions: Vec::new(),
        })
    }

    async fn submit_exam(
        &self,
        _attempt_id: AttemptId,
        _answers: &HashMap<TopicId, ChoiceId>,
    ) -> Result<backpack_core::model::ExamResult, ApiError> {
        Err(server_down())
    }

    async fn explain_question(&self, _prompt: &str) -> Result<String, ApiError> {
        Ok("because".to_string())
    }
}

//
// ─── HARNESS ───────────────────────────────────────────────────────────────────
//

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn subjects(&self) -> Arc<SubjectService> {
        self.services.subjects()
    }

    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn summaries(&self) -> Arc<SummaryService> {
        self.services.summaries()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn exams(&self) -> Arc<ExamService> {
        self.services.exams()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Dashboard,
    VideoClasses,
    Summaries,
    SummaryDetail(u64),
    PracticeExam,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::VideoClasses => rsx! { VideoClassesView {} },
        ViewKind::Summaries => rsx! { SummariesView {} },
        ViewKind::SummaryDetail(summary_id) => rsx! { SummaryDetailView { summary_id } },
        ViewKind::PracticeExam => rsx! { PracticeExamView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then give pending resources a few turns to resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: StubApi) -> ViewHarness {
    let store = Arc::new(InMemorySessionStore::new());
    let services = AppServices::with_api(Arc::new(api), store, fixed_clock());
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}
