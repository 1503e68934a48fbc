use crate::model::SubjectId;

/// Default page size of the list views.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Stable sort the backend's paged endpoints expect.
pub const SORT_BY_ID: &str = "id,asc";

//
// ─── LIST QUERY ────────────────────────────────────────────────────────────────
//

/// Pagination and filter state behind a list view.
///
/// Every filter mutation resets to the first page so a narrowed result set
/// never starts on a page that no longer exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub subject_id: Option<SubjectId>,
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            subject_id: None,
            search: None,
        }
    }
}

impl ListQuery {
    /// Replace the subject filter and reset to the first page.
    pub fn set_subject(&mut self, subject_id: Option<SubjectId>) {
        self.subject_id = subject_id;
        self.page = 0;
    }

    /// Replace the search term and reset to the first page.
    ///
    /// Blank input clears the filter.
    pub fn set_search(&mut self, term: &str) {
        let trimmed = term.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.page = 0;
    }

    /// Replace the page size and reset to the first page.
    pub fn set_size(&mut self, size: u32) {
        self.size = size.max(1);
        self.page = 0;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

//
// ─── PAGE ENVELOPE ─────────────────────────────────────────────────────────────
//

/// One page of a paged listing, with the metadata the controls render.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size: DEFAULT_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_elements == 0
    }

    /// 1-based index of the first item shown, for the "Showing X-Y of Z" line.
    #[must_use]
    pub fn start_item(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size) + 1
    }

    /// 1-based index of the last item shown.
    #[must_use]
    pub fn end_item(&self) -> u64 {
        self.start_item() + self.content.len() as u64 - 1
    }

    /// Swap in new content while keeping the page metadata.
    #[must_use]
    pub fn with_content<U>(self, content: Vec<U>) -> Page<U> {
        Page {
            content,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
