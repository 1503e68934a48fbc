#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod dashboard_service;
pub mod error;
pub mod exam_service;
pub mod lesson_service;
pub mod subject_service;
pub mod summary_service;

pub use backpack_core::Clock;

pub use api::{ApiError, GeneratedExam, HttpApi, Registration, SubjectOption};
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use dashboard_service::{DashboardData, DashboardService};
pub use error::{AppServicesError, AuthError, CatalogError, ExamServiceError};
pub use exam_service::ExamService;
pub use lesson_service::LessonService;
pub use subject_service::SubjectService;
pub use summary_service::SummaryService;
