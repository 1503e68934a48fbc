mod exam;
mod ids;
mod lesson;
mod progress;
mod query;
mod session;
mod stats;
mod subject;
mod summary;

pub use ids::{AttemptId, ChoiceId, LessonId, ParseIdError, SubjectId, SummaryId, TopicId};

pub use exam::{
    CorrectedQuestion, ExamAttempt, ExamChoice, ExamError, ExamPhase, ExamQuestion, ExamResult,
};
pub use lesson::{Lesson, LessonError, LessonWithProgress, merge_lesson_progress};
pub use progress::{ProgressMap, ProgressStatus};
pub use query::{DEFAULT_PAGE_SIZE, ListQuery, Page, SORT_BY_ID};
pub use session::{AuthSession, UserProfile};
pub use stats::{LessonStats, SummaryStats, UserStatistics};
pub use subject::Subject;
pub use summary::{Summary, SummaryWithProgress, merge_summary_progress};
