use crate::model::{ProgressMap, ProgressStatus, SummaryId};

/// A study summary ("resumo"): markdown content attached to a subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub id: SummaryId,
    pub title: String,
    /// Markdown source; rendering and sanitizing happen in the UI layer.
    pub content: String,
    pub subject_name: Option<String>,
}

/// A summary joined with the caller's read status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryWithProgress {
    pub summary: Summary,
    pub status: ProgressStatus,
}

impl SummaryWithProgress {
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.status.is_done()
    }
}

/// Join a summary list with a progress map, same id-membership rule as lessons.
#[must_use]
pub fn merge_summary_progress(
    summaries: Vec<Summary>,
    progress: &ProgressMap<SummaryId>,
) -> Vec<SummaryWithProgress> {
    summaries
        .into_iter()
        .map(|summary| {
            let status = progress.get(&summary.id).copied().unwrap_or_default();
            SummaryWithProgress { summary, status }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64) -> Summary {
        Summary {
            id: SummaryId::new(id),
            title: format!("Summary {id}"),
            content: "# Notes".to_string(),
            subject_name: Some("History".to_string()),
        }
    }

    #[test]
    fn merge_marks_read_summaries_by_id() {
        let mut progress = ProgressMap::new();
        progress.insert(SummaryId::new(2), ProgressStatus::Completed);

        let merged = merge_summary_progress(vec![summary(1), summary(2)], &progress);

        assert!(!merged[0].is_read());
        assert!(merged[1].is_read());
    }

    #[test]
    fn unmapped_summaries_default_to_not_started() {
        let merged = merge_summary_progress(vec![summary(7)], &ProgressMap::new());
        assert_eq!(merged[0].status, ProgressStatus::NotStarted);
    }
}
