use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use backpack_core::model::{ListQuery, Subject};

use crate::api::{CatalogApi, SubjectOption};
use crate::error::CatalogError;

/// Page size used when loading the full subject list for filter dropdowns.
const SUPPORT_PAGE_SIZE: u32 = 100;

/// Subjects for the dashboard cards and the shared filter dropdowns.
pub struct SubjectService {
    api: Arc<dyn CatalogApi>,
    /// Support data: the dropdown subject list, fetched once per process and
    /// never evicted. A failed fetch is not cached, so the next view retries.
    options: Mutex<Option<Vec<SubjectOption>>>,
}

impl SubjectService {
    #[must_use]
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            options: Mutex::new(None),
        }
    }

    /// Every subject with the caller's completion percentage attached.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the fetch fails; the view renders the
    /// error state, nothing is cached.
    pub async fn subjects_with_progress(&self) -> Result<Vec<Subject>, CatalogError> {
        Ok(self.api.subjects_with_progress().await?)
    }

    /// The memoized subject list for filter dropdowns.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the first fetch fails.
    pub async fn filter_options(&self) -> Result<Vec<SubjectOption>, CatalogError> {
        let mut cached = self.options.lock().await;
        if let Some(options) = cached.as_ref() {
            return Ok(options.clone());
        }

        debug!("loading subject filter options");
        let query = ListQuery {
            size: SUPPORT_PAGE_SIZE,
            ..ListQuery::default()
        };
        let page = self.api.subjects_page(&query).await?;
        *cached = Some(page.content.clone());
        Ok(page.content)
    }
}
