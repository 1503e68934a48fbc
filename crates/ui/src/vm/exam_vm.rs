use backpack_core::model::{ExamAttempt, ExamResult};

/// Header line and counters for the in-progress exam view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamProgressVm {
    pub position_label: String,
    pub answered: usize,
    pub missing: usize,
}

#[must_use]
pub fn map_exam_progress(attempt: &ExamAttempt) -> ExamProgressVm {
    ExamProgressVm {
        position_label: format!(
            "Question {} of {}",
            attempt.current_index() + 1,
            attempt.questions().len()
        ),
        answered: attempt.answered_count(),
        missing: attempt.missing_count(),
    }
}

/// Render-ready result header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub score_label: String,
    pub ratio_label: String,
}

#[must_use]
pub fn map_score(result: &ExamResult) -> ScoreVm {
    ScoreVm {
        score_label: format!("{:.1}", result.final_score),
        ratio_label: format!("{} of {} correct", result.correct, result.total),
    }
}
