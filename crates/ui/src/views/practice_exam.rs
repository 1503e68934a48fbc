use std::collections::HashMap;

use dioxus::prelude::*;

use backpack_core::model::{ExamAttempt, SubjectId};
use services::SubjectOption;

use crate::context::AppContext;
use crate::views::{view_state_from_resource, RedirectToLogin, ViewError, ViewState};
use crate::vm::{map_exam_progress, map_score};

#[derive(Clone, Debug, PartialEq, Eq)]
enum StartState {
    Idle,
    Starting,
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ExplainState {
    Loading,
    Ready(String),
    Error,
}

fn pill_class(is_answered: bool, is_current: bool) -> String {
    let mut class = String::from("pill");
    if is_answered {
        class.push_str(" answered");
    }
    if is_current {
        class.push_str(" current");
    }
    class
}

#[component]
pub fn PracticeExamView() -> Element {
    let ctx = use_context::<AppContext>();
    // The single in-memory attempt; starting a new exam replaces it whole,
    // leaving discards it. Nothing survives a restart.
    let mut attempt = use_signal(|| None::<ExamAttempt>);
    let mut selected_subject = use_signal(String::new);
    let mut start_state = use_signal(|| StartState::Idle);
    let mut submit_state = use_signal(|| SubmitState::Idle);
    let mut guard_message = use_signal(|| None::<String>);
    let mut explanations = use_signal(HashMap::<u64, ExplainState>::new);
    let mut session_expired = use_signal(|| false);

    let subjects_for_options = ctx.subjects();
    let options_resource = use_resource(move || {
        let subjects = subjects_for_options.clone();
        async move {
            subjects
                .filter_options()
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });
    let options = match view_state_from_resource(&options_resource) {
        ViewState::Ready(options) => options,
        _ => Vec::<SubjectOption>::new(),
    };

    let exams_for_start = ctx.exams();
    let on_start = move |_| {
        if start_state() == StartState::Starting {
            return;
        }
        let Ok(subject_id) = selected_subject().parse::<u64>() else {
            start_state.set(StartState::Error("Choose a subject first.".to_string()));
            return;
        };
        let exams = exams_for_start.clone();
        start_state.set(StartState::Starting);
        spawn(async move {
            match exams.start(SubjectId::new(subject_id)).await {
                Ok(new_attempt) => {
                    attempt.set(Some(new_attempt));
                    explanations.set(HashMap::new());
                    guard_message.set(None);
                    submit_state.set(SubmitState::Idle);
                    start_state.set(StartState::Idle);
                }
                Err(err) => {
                    if err.is_auth() {
                        session_expired.set(true);
                    } else {
                        start_state.set(StartState::Error(err.to_string()));
                    }
                }
            }
        });
    };

    let exams_for_submit = ctx.exams();
    let on_submit = move |_| {
        if submit_state() == SubmitState::Submitting {
            return;
        }
        let Some(current) = attempt() else {
            return;
        };
        // The guard runs here, before any network call; the attempt stays
        // untouched when answers are missing.
        let missing = current.missing_count();
        if missing > 0 {
            guard_message.set(Some(format!("{missing} question(s) still unanswered.")));
            return;
        }
        guard_message.set(None);
        let exams = exams_for_submit.clone();
        submit_state.set(SubmitState::Submitting);
        spawn(async move {
            let mut working = current;
            match exams.submit(&mut working).await {
                Ok(_) => {
                    attempt.set(Some(working));
                    submit_state.set(SubmitState::Idle);
                }
                Err(err) => {
                    if err.is_auth() {
                        session_expired.set(true);
                    } else {
                        submit_state.set(SubmitState::Error(err.to_string()));
                    }
                }
            }
        });
    };

    let exams_for_explain = ctx.exams();

    if session_expired() {
        return rsx! {
            div { class: "page exam-page",
                RedirectToLogin {}
            }
        };
    }

    rsx! {
        div { class: "page exam-page",
            header { class: "view-header",
                h2 { "Practice exam" }
            }

            match attempt() {
                None => rsx! {
                    section { class: "exam-start",
                        p { "Generate a ten-question exam for one of your subjects." }
                        select {
                            id: "exam-subject",
                            onchange: move |evt| selected_subject.set(evt.value()),
                            option { value: "", selected: selected_subject().is_empty(), "Choose a subject" }
                            for subject in options {
                                option {
                                    value: "{subject.id}",
                                    selected: selected_subject() == subject.id.to_string(),
                                    "{subject.name}"
                                }
                            }
                        }
                        if let StartState::Error(message) = start_state() {
                            p { class: "form-error", "{message}" }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: start_state() == StartState::Starting,
                            onclick: on_start,
                            if start_state() == StartState::Starting { "Generating..." } else { "Start exam" }
                        }
                    }
                },
                Some(current) => {
                    if let Some(result) = current.result().cloned() {
                        let score = map_score(&result);
                        let explanations_now = explanations();
                        let correction_items = result.corrected.iter().map(|question| {
                            let exams = exams_for_explain.clone();
                            let key = question.topic_id.value();
                            let topic_title = question.topic_title.clone();
                            let chosen_text = question.chosen_text.clone();
                            let correct_text = question.correct_text.clone();
                            let rationale = question.rationale.clone();
                            let is_correct = question.is_correct;
                            let question_for_explain = question.clone();
                            let explain_state = explanations_now.get(&key).cloned();
                            let mut explanations = explanations;
                            rsx! {
                                li { class: if is_correct { "correction right" } else { "correction wrong" },
                                    h4 { "{topic_title}" }
                                    p { "Your answer: {chosen_text}" }
                                    if !is_correct {
                                        p { "Correct answer: {correct_text}" }
                                    }
                                    if let Some(rationale) = rationale {
                                        p { class: "rationale", "{rationale}" }
                                    }
                                    match explain_state {
                                        Some(ExplainState::Loading) => rsx! {
                                            p { class: "explanation", "Asking for an explanation..." }
                                        },
                                        Some(ExplainState::Ready(text)) => rsx! {
                                            p { class: "explanation", "{text}" }
                                        },
                                        Some(ExplainState::Error) => rsx! {
                                            p { class: "form-error", "Explanation unavailable right now." }
                                        },
                                        None => rsx! {
                                            button {
                                                class: "btn btn-secondary",
                                                r#type: "button",
                                                onclick: move |_| {
                                                    let exams = exams.clone();
                                                    let question = question_for_explain.clone();
                                                    explanations.with_mut(|map| {
                                                        map.insert(key, ExplainState::Loading);
                                                    });
                                                    spawn(async move {
                                                        let state = match exams.explain(&question).await {
                                                            Ok(text) => ExplainState::Ready(text),
                                                            Err(_) => ExplainState::Error,
                                                        };
                                                        explanations.with_mut(|map| {
                                                            map.insert(key, state);
                                                        });
                                                    });
                                                },
                                                "Explain with AI"
                                            }
                                        },
                                    }
                                }
                            }
                        });

                        rsx! {
                            section { class: "exam-result",
                                header { class: "result-header",
                                    h3 { "Score: {score.score_label}" }
                                    p { "{score.ratio_label}" }
                                }
                                ul { class: "corrections",
                                    {correction_items}
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| {
                                        // Leaving the result discards the attempt.
                                        attempt.set(None);
                                        explanations.set(HashMap::new());
                                        selected_subject.set(String::new());
                                    },
                                    "New exam"
                                }
                            }
                        }
                    } else {
                        let progress = map_exam_progress(&current);
                        let question = current.current_question().clone();
                        let chosen = current.answer_for(question.topic_id);
                        let answered: Vec<bool> = current
                            .questions()
                            .iter()
                            .map(|q| current.answer_for(q.topic_id).is_some())
                            .collect();
                        let current_index = current.current_index();
                        let on_first = current_index == 0;
                        let on_last = current_index + 1 == current.questions().len();
                        let pills = answered.into_iter().enumerate().map(|(index, is_answered)| {
                            let label = (index + 1).to_string();
                            rsx! {
                                button {
                                    class: pill_class(is_answered, index == current_index),
                                    r#type: "button",
                                    onclick: move |_| {
                                        attempt.with_mut(|slot| {
                                            if let Some(active) = slot.as_mut() {
                                                active.jump_to(index);
                                            }
                                        });
                                    },
                                    "{label}"
                                }
                            }
                        });

                        rsx! {
                            section { class: "exam-question",
                                header { class: "question-header",
                                    span { class: "page-info", "{progress.position_label}" }
                                    span { class: "answered-info", "{progress.answered} answered" }
                                }
                                h3 { "{question.title}" }
                                ul { class: "choices",
                                    for choice in question.choices.clone() {
                                        li {
                                            button {
                                                class: if chosen == Some(choice.id) { "choice selected" } else { "choice" },
                                                r#type: "button",
                                                onclick: move |_| {
                                                    guard_message.set(None);
                                                    attempt.with_mut(|slot| {
                                                        if let Some(active) = slot.as_mut() {
                                                            let _ = active.select(choice.id);
                                                        }
                                                    });
                                                },
                                                "{choice.text}"
                                            }
                                        }
                                    }
                                }
                                div { class: "question-pills",
                                    {pills}
                                }
                                if let Some(message) = guard_message() {
                                    p { class: "form-error", "{message}" }
                                }
                                if let SubmitState::Error(message) = submit_state() {
                                    p { class: "form-error", "{message}" }
                                }
                                div { class: "question-nav",
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        disabled: on_first,
                                        onclick: move |_| {
                                            attempt.with_mut(|slot| {
                                                if let Some(active) = slot.as_mut() {
                                                    active.go_prev();
                                                }
                                            });
                                        },
                                        "Previous"
                                    }
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        disabled: on_last,
                                        onclick: move |_| {
                                            attempt.with_mut(|slot| {
                                                if let Some(active) = slot.as_mut() {
                                                    active.go_next();
                                                }
                                            });
                                        },
                                        "Next"
                                    }
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        disabled: submit_state() == SubmitState::Submitting,
                                        onclick: on_submit,
                                        if submit_state() == SubmitState::Submitting { "Submitting..." } else { "Submit exam" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
