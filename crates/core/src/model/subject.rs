use crate::model::SubjectId;

/// A subject ("matéria") with the caller's completion ratio attached.
#[derive(Clone, Debug, PartialEq)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// Server-computed share of this subject's lessons completed, 0.0..=100.0.
    pub completion_percent: f64,
}

impl Subject {
    /// Completion truncated to a whole percent, the granularity cards render.
    #[must_use]
    pub fn completion_whole_percent(&self) -> u8 {
        self.completion_percent.clamp(0.0, 100.0).floor() as u8
    }
}
