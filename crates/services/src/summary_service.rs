use std::sync::Arc;

use tracing::{debug, warn};

use backpack_core::model::{
    merge_summary_progress, ListQuery, Page, ProgressMap, Summary, SummaryId, SummaryWithProgress,
};

use crate::api::SummaryApi;
use crate::error::CatalogError;

/// Summaries with the caller's read status merged in, plus the detail view.
#[derive(Clone)]
pub struct SummaryService {
    api: Arc<dyn SummaryApi>,
}

impl SummaryService {
    #[must_use]
    pub fn new(api: Arc<dyn SummaryApi>) -> Self {
        Self { api }
    }

    /// Same fan-out/fan-in as lessons: one page, one progress map, joined
    /// by summary id; a failed progress fetch only loses the badges.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only when the summary page itself fails.
    pub async fn summaries_with_progress(
        &self,
        query: &ListQuery,
    ) -> Result<Page<SummaryWithProgress>, CatalogError> {
        debug!("loading summaries page {} (size {})", query.page, query.size);
        let (page, progress) = tokio::join!(
            self.api.summaries_page(query),
            self.api.summary_progress()
        );

        let mut page = page?;
        let progress = match progress {
            Ok(map) => map,
            Err(err) => {
                warn!("summary progress unavailable, rendering without badges: {err}");
                ProgressMap::new()
            }
        };

        let summaries = std::mem::take(&mut page.content);
        let merged = merge_summary_progress(summaries, &progress);
        Ok(page.with_content(merged))
    }

    /// One summary, for the detail view.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the fetch fails.
    pub async fn summary(&self, id: SummaryId) -> Result<Summary, CatalogError> {
        Ok(self.api.summary(id).await?)
    }

    /// Mark a summary as read.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the call fails.
    pub async fn mark_read(&self, id: SummaryId) -> Result<(), CatalogError> {
        Ok(self.api.mark_summary_read(id).await?)
    }
}
