use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use backpack_core::model::{
    Lesson, LessonId, ListQuery, Page, ProgressMap, ProgressStatus, Subject, UserProfile,
    UserStatistics,
};
use services::api::{ApiError, AuthApi, CatalogApi, Registration, StatsApi, SubjectOption};
use services::{DashboardService, LessonService, SubjectService};

fn lesson(id: u64) -> Lesson {
    Lesson::new(
        LessonId::new(id),
        format!("Lesson {id}"),
        "Intro",
        "https://videos.example.com/watch?v=1",
        300,
        Some("Math".to_string()),
    )
    .unwrap()
}

fn lessons_page() -> Page<Lesson> {
    Page {
        content: vec![lesson(1), lesson(2)],
        number: 0,
        size: 10,
        total_elements: 2,
        total_pages: 1,
        first: true,
        last: true,
    }
}

#[derive(Default)]
struct StubCatalogApi {
    fail_progress: AtomicBool,
    subjects_page_calls: AtomicUsize,
}

#[async_trait]
impl CatalogApi for StubCatalogApi {
    async fn subjects_with_progress(&self) -> Result<Vec<Subject>, ApiError> {
        Ok(vec![Subject {
            id: backpack_core::model::SubjectId::new(1),
            name: "Math".to_string(),
            completion_percent: 42.6,
        }])
    }

    async fn subjects_page(&self, _query: &ListQuery) -> Result<Page<SubjectOption>, ApiError> {
        self.subjects_page_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Page {
            content: vec![SubjectOption {
                id: backpack_core::model::SubjectId::new(1),
                name: "Math".to_string(),
            }],
            number: 0,
            size: 100,
            total_elements: 1,
            total_pages: 1,
            first: true,
            last: true,
        })
    }

    async fn lessons_page(&self, _query: &ListQuery) -> Result<Page<Lesson>, ApiError> {
        Ok(lessons_page())
    }

    async fn lesson_progress(&self) -> Result<ProgressMap<LessonId>, ApiError> {
        if self.fail_progress.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "progress down".to_string(),
            });
        }
        let mut map = ProgressMap::new();
        map.insert(LessonId::new(2), ProgressStatus::Completed);
        Ok(map)
    }

    async fn mark_lesson_progress(
        &self,
        _lesson_id: LessonId,
        _status: ProgressStatus,
    ) -> Result<(), ApiError> {
        Ok(())
    }
}

#[tokio::test]
async fn lessons_merge_progress_by_id() {
    let service = LessonService::new(Arc::new(StubCatalogApi::default()));

    let page = service
        .lessons_with_progress(&ListQuery::default())
        .await
        .unwrap();

    assert!(!page.content[0].is_completed());
    assert!(page.content[1].is_completed());
}

#[tokio::test]
async fn failed_progress_fetch_still_renders_the_list() {
    let api = Arc::new(StubCatalogApi::default());
    api.fail_progress.store(true, Ordering::SeqCst);
    let service = LessonService::new(api);

    let page = service
        .lessons_with_progress(&ListQuery::default())
        .await
        .unwrap();

    assert_eq!(page.content.len(), 2);
    assert!(page
        .content
        .iter()
        .all(|item| item.status == ProgressStatus::NotStarted));
}

#[tokio::test]
async fn filter_options_are_fetched_once_per_process() {
    let api = Arc::new(StubCatalogApi::default());
    let service = SubjectService::new(Arc::clone(&api) as Arc<dyn CatalogApi>);

    let first = service.filter_options().await.unwrap();
    let second = service.filter_options().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(api.subjects_page_calls.load(Ordering::SeqCst), 1);
}

//
// ─── DASHBOARD ─────────────────────────────────────────────────────────────────
//

struct StubDashboardApi {
    fail_stats: bool,
}

#[async_trait]
impl AuthApi for StubDashboardApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn register(&self, _registration: &Registration) -> Result<(), ApiError> {
        Ok(())
    }

    async fn forgot_password(&self, _email: &str) -> Result<String, ApiError> {
        Ok(String::new())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        Ok(UserProfile {
            full_name: "Ana Clara Souza".to_string(),
            email: "ana@example.com".to_string(),
            age: 21,
        })
    }
}

#[async_trait]
impl StatsApi for StubDashboardApi {
    async fn statistics(&self) -> Result<UserStatistics, ApiError> {
        if self.fail_stats {
            return Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "stats down".to_string(),
            });
        }
        Ok(UserStatistics {
            lessons: backpack_core::model::LessonStats {
                watched: 3,
                pending: 1,
                total: 4,
                per_day_avg: 0.5,
            },
            summaries: backpack_core::model::SummaryStats::default(),
        })
    }
}

#[tokio::test]
async fn dashboard_merges_profile_and_statistics() {
    let api = Arc::new(StubDashboardApi { fail_stats: false });
    let service = DashboardService::new(
        Arc::clone(&api) as Arc<dyn AuthApi>,
        api as Arc<dyn StatsApi>,
    );

    let data = service.overview().await.unwrap();

    assert_eq!(data.user.first_name(), "Ana");
    assert_eq!(data.statistics.lessons.watched, 3);
}

#[tokio::test]
async fn dashboard_degrades_to_empty_tiles_when_stats_fail() {
    let api = Arc::new(StubDashboardApi { fail_stats: true });
    let service = DashboardService::new(
        Arc::clone(&api) as Arc<dyn AuthApi>,
        api as Arc<dyn StatsApi>,
    );

    let data = service.overview().await.unwrap();

    assert_eq!(data.user.first_name(), "Ana");
    assert_eq!(data.statistics, UserStatistics::default());
}
