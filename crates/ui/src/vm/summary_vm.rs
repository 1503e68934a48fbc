use backpack_core::model::{SummaryId, SummaryWithProgress};

/// Render-ready summary list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryCardVm {
    pub id: SummaryId,
    pub title: String,
    pub subject_label: Option<String>,
    pub read: bool,
}

impl From<&SummaryWithProgress> for SummaryCardVm {
    fn from(item: &SummaryWithProgress) -> Self {
        Self {
            id: item.summary.id,
            title: item.summary.title.clone(),
            subject_label: item.summary.subject_name.clone(),
            read: item.is_read(),
        }
    }
}

#[must_use]
pub fn map_summary_cards(items: &[SummaryWithProgress]) -> Vec<SummaryCardVm> {
    items.iter().map(SummaryCardVm::from).collect()
}
