use backpack_core::model::{Subject, SubjectId};

/// Render-ready subject card: whole-percent label and progress-bar width.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectCardVm {
    pub id: SubjectId,
    pub name: String,
    pub percent_label: String,
    pub bar_width: String,
}

impl From<&Subject> for SubjectCardVm {
    fn from(subject: &Subject) -> Self {
        let percent = subject.completion_whole_percent();
        Self {
            id: subject.id,
            name: subject.name.clone(),
            percent_label: format!("{percent}%"),
            bar_width: format!("width: {percent}%;"),
        }
    }
}

#[must_use]
pub fn map_subject_cards(subjects: &[Subject]) -> Vec<SubjectCardVm> {
    subjects.iter().map(SubjectCardVm::from).collect()
}
