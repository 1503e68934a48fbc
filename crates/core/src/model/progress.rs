use std::collections::HashMap;

/// Progress states the backend tracks per lesson and per summary.
///
/// Wire names are the backend's own (`CONCLUIDO` etc.); anything the
/// client does not recognize degrades to `NotStarted` so a new backend
/// status never breaks rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProgressStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "CONCLUIDO" => Self::Completed,
            "EM_ANDAMENTO" => Self::InProgress,
            _ => Self::NotStarted,
        }
    }

    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::NotStarted => "NAO_INICIADO",
            Self::InProgress => "EM_ANDAMENTO",
            Self::Completed => "CONCLUIDO",
        }
    }

    /// The one status that counts as done when merging progress into lists.
    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// User progress keyed by resource id, as returned by the progress endpoints.
pub type ProgressMap<Id> = HashMap<Id, ProgressStatus>;
