use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

use crate::model::{AttemptId, ChoiceId, TopicId};

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One answer choice ("alternativa") of a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamChoice {
    pub id: ChoiceId,
    pub text: String,
}

/// One question of a generated practice exam, keyed by its topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamQuestion {
    pub topic_id: TopicId,
    pub title: String,
    pub choices: Vec<ExamChoice>,
}

impl ExamQuestion {
    #[must_use]
    pub fn has_choice(&self, choice_id: ChoiceId) -> bool {
        self.choices.iter().any(|choice| choice.id == choice_id)
    }
}

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

/// Per-question correction returned after submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectedQuestion {
    pub topic_id: TopicId,
    pub topic_title: String,
    pub chosen_id: ChoiceId,
    pub chosen_text: String,
    pub correct_id: ChoiceId,
    pub correct_text: String,
    pub is_correct: bool,
    /// Rationale of the correct choice, when the bank carries one.
    pub rationale: Option<String>,
}

/// Graded outcome of an attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamResult {
    pub attempt_id: AttemptId,
    pub final_score: f64,
    pub correct: u32,
    pub total: u32,
    pub corrected: Vec<CorrectedQuestion>,
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamPhase {
    InProgress,
    Submitted,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("an exam needs at least one question")]
    Empty,
    #[error("choice does not belong to the current question")]
    UnknownChoice,
    #[error("{missing} question(s) still unanswered")]
    MissingAnswers { missing: usize },
    #[error("attempt already submitted")]
    AlreadySubmitted,
}

/// In-memory state of one practice-exam attempt.
///
/// The attempt lives only in memory: at most one exists at a time and
/// starting a new exam replaces the whole value. Navigation and answer
/// selection never touch the network; the answer map is sent once, on
/// submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamAttempt {
    attempt_id: AttemptId,
    started_at: DateTime<Utc>,
    questions: Vec<ExamQuestion>,
    answers: HashMap<TopicId, ChoiceId>,
    current: usize,
    result: Option<ExamResult>,
}

impl ExamAttempt {
    /// Start an attempt from a server-issued question set.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Empty` if the question set is empty.
    pub fn new(
        attempt_id: AttemptId,
        questions: Vec<ExamQuestion>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, ExamError> {
        if questions.is_empty() {
            return Err(ExamError::Empty);
        }
        Ok(Self {
            attempt_id,
            started_at,
            questions,
            answers: HashMap::new(),
            current: 0,
            result: None,
        })
    }

    #[must_use]
    pub fn attempt_id(&self) -> AttemptId {
        self.attempt_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn questions(&self) -> &[ExamQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &ExamQuestion {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn answer_for(&self, topic_id: TopicId) -> Option<ChoiceId> {
        self.answers.get(&topic_id).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.questions.len() - self.answers.len()
    }

    #[must_use]
    pub fn phase(&self) -> ExamPhase {
        if self.result.is_some() {
            ExamPhase::Submitted
        } else {
            ExamPhase::InProgress
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&ExamResult> {
        self.result.as_ref()
    }

    /// Record (or overwrite) the answer to the current question.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::UnknownChoice` if the choice does not belong to the
    /// current question, or `ExamError::AlreadySubmitted` after submission.
    pub fn select(&mut self, choice_id: ChoiceId) -> Result<(), ExamError> {
        if self.result.is_some() {
            return Err(ExamError::AlreadySubmitted);
        }
        let question = &self.questions[self.current];
        if !question.has_choice(choice_id) {
            return Err(ExamError::UnknownChoice);
        }
        self.answers.insert(question.topic_id, choice_id);
        Ok(())
    }

    /// Move to the next question; stays put on the last one.
    pub fn go_next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Move to the previous question; stays put on the first one.
    pub fn go_prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump straight to a question; out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.questions.len() {
            self.current = index;
        }
    }

    /// The full answer map, only once every question has an answer.
    ///
    /// The guard runs before any network call and leaves the attempt
    /// untouched when it fails.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::MissingAnswers` with the unanswered count, or
    /// `ExamError::AlreadySubmitted` after a completed submission.
    pub fn submission(&self) -> Result<&HashMap<TopicId, ChoiceId>, ExamError> {
        if self.result.is_some() {
            return Err(ExamError::AlreadySubmitted);
        }
        let missing = self.missing_count();
        if missing > 0 {
            return Err(ExamError::MissingAnswers { missing });
        }
        Ok(&self.answers)
    }

    /// Store the graded result, moving the attempt to its terminal phase.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::AlreadySubmitted` if a result is already present.
    pub fn complete(&mut self, result: ExamResult) -> Result<(), ExamError> {
        if self.result.is_some() {
            return Err(ExamError::AlreadySubmitted);
        }
        self.result = Some(result);
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
