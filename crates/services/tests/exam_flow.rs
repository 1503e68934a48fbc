use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use backpack_core::model::{
    AttemptId, ChoiceId, CorrectedQuestion, ExamChoice, ExamError, ExamPhase, ExamQuestion,
    ExamResult, SubjectId, TopicId,
};
use backpack_core::time::{fixed_clock, fixed_now};
use services::api::{ApiError, ExamApi, GeneratedExam};
use services::{ExamService, ExamServiceError};

fn questions() -> Vec<ExamQuestion> {
    (1..=2)
        .map(|topic| ExamQuestion {
            topic_id: TopicId::new(topic),
            title: format!("Topic {topic}"),
            choices: vec![
                ExamChoice {
                    id: ChoiceId::new(topic * 10),
                    text: "A".to_string(),
                },
                ExamChoice {
                    id: ChoiceId::new(topic * 10 + 1),
                    text: "B".to_string(),
                },
            ],
        })
        .collect()
}

#[derive(Default)]
struct StubExamApi {
    submit_calls: AtomicUsize,
}

#[async_trait]
impl ExamApi for StubExamApi {
    async fn generate_exam(&self, _subject_id: SubjectId) -> Result<GeneratedExam, ApiError> {
        Ok(GeneratedExam {
            attempt_id: AttemptId::new(42),
            questions: questions(),
        })
    }

    async fn submit_exam(
        &self,
        attempt_id: AttemptId,
        answers: &HashMap<TopicId, ChoiceId>,
    ) -> Result<ExamResult, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ExamResult {
            attempt_id,
            final_score: 5.0,
            correct: 1,
            total: answers.len() as u32,
            corrected: vec![CorrectedQuestion {
                topic_id: TopicId::new(1),
                topic_title: "Topic 1".to_string(),
                chosen_id: answers[&TopicId::new(1)],
                chosen_text: "A".to_string(),
                correct_id: ChoiceId::new(10),
                correct_text: "A".to_string(),
                is_correct: true,
                rationale: Some("definition".to_string()),
            }],
        })
    }

    async fn explain_question(&self, prompt: &str) -> Result<String, ApiError> {
        Ok(format!("explained: {prompt}"))
    }
}

#[tokio::test]
async fn start_builds_a_clock_stamped_attempt() {
    let api = Arc::new(StubExamApi::default());
    let service = ExamService::new(api, fixed_clock());

    let attempt = service.start(SubjectId::new(3)).await.unwrap();

    assert_eq!(attempt.attempt_id(), AttemptId::new(42));
    assert_eq!(attempt.started_at(), fixed_now());
    assert_eq!(attempt.questions().len(), 2);
    assert_eq!(attempt.phase(), ExamPhase::InProgress);
}

#[tokio::test]
async fn incomplete_submission_never_reaches_the_network() {
    let api = Arc::new(StubExamApi::default());
    let service = ExamService::new(Arc::clone(&api) as Arc<dyn ExamApi>, fixed_clock());

    let mut attempt = service.start(SubjectId::new(3)).await.unwrap();
    attempt.select(ChoiceId::new(10)).unwrap();
    let before = attempt.clone();

    let err = service.submit(&mut attempt).await.unwrap_err();

    assert!(matches!(
        err,
        ExamServiceError::Attempt(ExamError::MissingAnswers { missing: 1 })
    ));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
    assert_eq!(attempt, before);
}

#[tokio::test]
async fn full_submission_completes_the_attempt_once() {
    let api = Arc::new(StubExamApi::default());
    let service = ExamService::new(Arc::clone(&api) as Arc<dyn ExamApi>, fixed_clock());

    let mut attempt = service.start(SubjectId::new(3)).await.unwrap();
    attempt.select(ChoiceId::new(10)).unwrap();
    attempt.go_next();
    attempt.select(ChoiceId::new(21)).unwrap();

    let result = service.submit(&mut attempt).await.unwrap();

    assert_eq!(result.total, 2);
    assert_eq!(attempt.phase(), ExamPhase::Submitted);
    assert_eq!(attempt.result(), Some(&result));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);

    // The terminal state refuses a second submission.
    let err = service.submit(&mut attempt).await.unwrap_err();
    assert!(matches!(
        err,
        ExamServiceError::Attempt(ExamError::AlreadySubmitted)
    ));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn explain_routes_the_corrected_question_through_the_proxy() {
    let api = Arc::new(StubExamApi::default());
    let service = ExamService::new(api, fixed_clock());

    let question = CorrectedQuestion {
        topic_id: TopicId::new(1),
        topic_title: "Cell biology".to_string(),
        chosen_id: ChoiceId::new(2),
        chosen_text: "wrong".to_string(),
        correct_id: ChoiceId::new(3),
        correct_text: "right".to_string(),
        is_correct: false,
        rationale: None,
    };

    let explanation = service.explain(&question).await.unwrap();
    assert!(explanation.contains("Cell biology"));
}
