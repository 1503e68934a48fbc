use std::sync::Arc;

use tracing::debug;

use backpack_core::model::{CorrectedQuestion, ExamAttempt, ExamResult, SubjectId};
use backpack_core::Clock;

use crate::api::ExamApi;
use crate::error::ExamServiceError;

/// Drives the practice-exam flow around the in-memory attempt.
///
/// The attempt itself is owned by the view; this service only moves it
/// across the two network boundaries (generate and submit) and keeps the
/// completeness guard in front of submission.
#[derive(Clone)]
pub struct ExamService {
    api: Arc<dyn ExamApi>,
    clock: Clock,
}

impl ExamService {
    #[must_use]
    pub fn new(api: Arc<dyn ExamApi>, clock: Clock) -> Self {
        Self { api, clock }
    }

    /// Generate an exam for a subject and build the in-memory attempt.
    ///
    /// Starting a new exam replaces any previous attempt wholesale; the
    /// server tracks abandoned attempts on its own.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError` when generation fails or the server sends
    /// an empty question set.
    pub async fn start(&self, subject_id: SubjectId) -> Result<ExamAttempt, ExamServiceError> {
        debug!("generating exam for subject {subject_id}");
        let generated = self.api.generate_exam(subject_id).await?;
        let attempt =
            ExamAttempt::new(generated.attempt_id, generated.questions, self.clock.now())?;
        Ok(attempt)
    }

    /// Submit a fully answered attempt and store the graded result in it.
    ///
    /// The completeness guard runs before any network call: with unanswered
    /// questions the attempt is left untouched and no request is sent.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Attempt` for guard violations and
    /// `ExamServiceError::Api` for submission failures.
    pub async fn submit(&self, attempt: &mut ExamAttempt) -> Result<ExamResult, ExamServiceError> {
        let answers = attempt.submission()?.clone();
        debug!(
            "submitting attempt {} with {} answers",
            attempt.attempt_id(),
            answers.len()
        );
        let result = self.api.submit_exam(attempt.attempt_id(), &answers).await?;
        attempt.complete(result.clone())?;
        Ok(result)
    }

    /// Ask the AI proxy to explain one corrected question.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Api` when the proxy call fails.
    pub async fn explain(&self, question: &CorrectedQuestion) -> Result<String, ExamServiceError> {
        let prompt = explanation_prompt(question);
        Ok(self.api.explain_question(&prompt).await?)
    }
}

/// Prompt sent to the AI proxy for a per-question explanation.
fn explanation_prompt(question: &CorrectedQuestion) -> String {
    format!(
        "Question: {}\nChosen answer: {}\nCorrect answer: {}\nExplain briefly why the correct answer is right{}",
        question.topic_title,
        question.chosen_text,
        question.correct_text,
        if question.is_correct {
            " and reinforce the key concept."
        } else {
            " and where the chosen answer goes wrong."
        }
    )
}
