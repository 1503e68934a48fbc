use thiserror::Error;
use url::Url;

use crate::model::{LessonId, ProgressMap, ProgressStatus};

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A video lesson ("aula") as the catalog lists it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub link: Url,
    pub duration_secs: u32,
    /// Name of the owning subject; the catalog may omit it.
    pub subject_name: Option<String>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonError {
    #[error("invalid lesson link: {0}")]
    InvalidLink(#[from] url::ParseError),
}

impl Lesson {
    /// Build a lesson, validating that `link` parses as a URL.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::InvalidLink` if the link is not a valid URL.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        link: &str,
        duration_secs: u32,
        subject_name: Option<String>,
    ) -> Result<Self, LessonError> {
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            link: Url::parse(link)?,
            duration_secs,
            subject_name,
        })
    }
}

//
// ─── PROGRESS MERGE ────────────────────────────────────────────────────────────
//

/// A lesson joined with the caller's progress status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonWithProgress {
    pub lesson: Lesson,
    pub status: ProgressStatus,
}

impl LessonWithProgress {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.is_done()
    }
}

/// Join a lesson list with a progress map fetched separately.
///
/// Lessons absent from the map render as not started; the join depends only
/// on id membership, never on the order of either input.
#[must_use]
pub fn merge_lesson_progress(
    lessons: Vec<Lesson>,
    progress: &ProgressMap<LessonId>,
) -> Vec<LessonWithProgress> {
    lessons
        .into_iter()
        .map(|lesson| {
            let status = progress.get(&lesson.id).copied().unwrap_or_default();
            LessonWithProgress { lesson, status }
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
