use std::sync::Arc;

use tracing::{debug, warn};

use backpack_core::model::{
    merge_lesson_progress, LessonId, LessonWithProgress, ListQuery, Page, ProgressMap,
    ProgressStatus,
};

use crate::api::CatalogApi;
use crate::error::CatalogError;

/// The lesson list with the caller's progress merged in.
#[derive(Clone)]
pub struct LessonService {
    api: Arc<dyn CatalogApi>,
}

impl LessonService {
    #[must_use]
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Fetch one lesson page and the progress map in parallel, then join
    /// them by lesson id.
    ///
    /// A failed progress fetch degrades to an empty map so the list still
    /// renders, just without completion badges. A failed list fetch is the
    /// view's error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only when the lesson page itself fails.
    pub async fn lessons_with_progress(
        &self,
        query: &ListQuery,
    ) -> Result<Page<LessonWithProgress>, CatalogError> {
        debug!("loading lessons page {} (size {})", query.page, query.size);
        let (page, progress) = tokio::join!(
            self.api.lessons_page(query),
            self.api.lesson_progress()
        );

        let mut page = page?;
        let progress = match progress {
            Ok(map) => map,
            Err(err) => {
                warn!("lesson progress unavailable, rendering without badges: {err}");
                ProgressMap::new()
            }
        };

        let lessons = std::mem::take(&mut page.content);
        let merged = merge_lesson_progress(lessons, &progress);
        Ok(page.with_content(merged))
    }

    /// Record a watch status for one lesson.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the call fails.
    pub async fn mark_progress(
        &self,
        lesson_id: LessonId,
        status: ProgressStatus,
    ) -> Result<(), CatalogError> {
        Ok(self.api.mark_lesson_progress(lesson_id, status).await?)
    }
}
