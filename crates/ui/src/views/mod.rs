mod dashboard;
mod forgot_password;
mod login;
mod not_found;
mod practice_exam;
mod register;
mod state;
mod summaries;
mod summary_detail;
mod video_classes;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use forgot_password::ForgotPasswordView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use practice_exam::PracticeExamView;
pub use register::RegisterView;
pub use state::{view_state_from_resource, RedirectToLogin, ViewError, ViewState};
pub use summaries::SummariesView;
pub use summary_detail::SummaryDetailView;
pub use video_classes::{VideoClassesForSubjectView, VideoClassesView};
