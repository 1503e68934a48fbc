use std::time::Duration;

use dioxus::prelude::*;

use backpack_core::model::{LessonWithProgress, ListQuery, Page, ProgressStatus, SubjectId};
use services::SubjectOption;

use crate::context::AppContext;
use crate::views::{view_state_from_resource, RedirectToLogin, ViewError, ViewState};
use crate::vm::{map_lesson_cards, LessonCardVm};

/// How long the search input stays quiet before a refetch.
const SEARCH_DEBOUNCE_MS: u64 = 350;

#[derive(Clone, Debug, PartialEq)]
struct LessonListData {
    cards: Vec<LessonCardVm>,
    range_label: String,
    page_label: String,
    first: bool,
    last: bool,
    empty: bool,
}

fn list_data(page: &Page<LessonWithProgress>) -> LessonListData {
    LessonListData {
        cards: map_lesson_cards(&page.content),
        range_label: format!(
            "Showing {}-{} of {}",
            page.start_item(),
            page.end_item(),
            page.total_elements
        ),
        page_label: format!("Page {} of {}", page.number + 1, page.total_pages.max(1)),
        first: page.first,
        last: page.last,
        empty: page.is_empty(),
    }
}

#[component]
pub fn VideoClassesView() -> Element {
    rsx! {
        VideoClassList { subject_id: None::<u64> }
    }
}

#[component]
pub fn VideoClassesForSubjectView(subject_id: u64) -> Element {
    rsx! {
        VideoClassList { subject_id: Some(subject_id) }
    }
}

#[component]
fn VideoClassList(subject_id: Option<u64>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(|| ListQuery {
        subject_id: subject_id.map(SubjectId::new),
        ..ListQuery::default()
    });
    let mut search_input = use_signal(String::new);
    let mut search_generation = use_signal(|| 0u64);
    let mut mark_error = use_signal(|| None::<String>);

    let lessons_for_resource = ctx.lessons();
    let resource = use_resource(move || {
        let lessons = lessons_for_resource.clone();
        let query = query();
        async move {
            let page = lessons
                .lessons_with_progress(&query)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(list_data(&page))
        }
    });
    let state = view_state_from_resource(&resource);

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
    // A failed support fetch only loses the dropdown; the list still works.
    let options = match view_state_from_resource(&options_resource) {
        ViewState::Ready(options) => options,
        _ => Vec::<SubjectOption>::new(),
    };

    let lessons_for_mark = ctx.lessons();

    rsx! {
        div { class: "page classes-page",
            header { class: "view-header",
                h2 { "Video classes" }
            }

            div { class: "list-controls",
                select {
                    id: "filter-subject",
                    onchange: move |evt| {
                        let selected = evt.value().parse::<u64>().ok().map(SubjectId::new);
                        query.with_mut(|q| q.set_subject(selected));
                    },
                    option { value: "", selected: query().subject_id.is_none(), "All subjects" }
                    for subject in options {
                        option {
                            value: "{subject.id}",
                            selected: query().subject_id == Some(subject.id),
                            "{subject.name}"
                        }
                    }
                }
                input {
                    id: "search-lessons",
                    r#type: "search",
                    placeholder: "Search lessons...",
                    value: "{search_input}",
                    oninput: move |evt| {
                        let value = evt.value();
                        search_input.set(value.clone());
                        let generation = search_generation() + 1;
                        search_generation.set(generation);
                        spawn(async move {
                            tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
                            // Only the most recent pending edit applies.
                            if search_generation() == generation {
                                query.with_mut(|q| q.set_search(&value));
                            }
                        });
                    },
                }
            }

            if let Some(message) = mark_error() {
                p { class: "form-error", "{message}" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(ViewError::NotAuthenticated) => rsx! {
                    RedirectToLogin {}
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => {
                    let lesson_cards = data.cards.iter().map(|card| {
                        let lessons = lessons_for_mark.clone();
                        let lesson_id = card.id;
                        let card = card.clone();
                        let mut mark_error = mark_error;
                        rsx! {
                            LessonCard {
                                card,
                                on_mark: move |_| {
                                    let lessons = lessons.clone();
                                    spawn(async move {
                                        match lessons
                                            .mark_progress(lesson_id, ProgressStatus::Completed)
                                            .await
                                        {
                                            Ok(()) => {
                                                mark_error.set(None);
                                                let mut resource = resource;
                                                resource.restart();
                                            }
                                            Err(err) => {
                                                mark_error.set(Some(err.to_string()));
                                            }
                                        }
                                    });
                                },
                            }
                        }
                    });

                    rsx! {
                        if data.empty {
                            p { "No lessons found." }
                        } else {
                            ul { class: "lesson-list",
                                {lesson_cards}
                            }
                            div { class: "pagination",
                                div { class: "pagination-summary", "{data.range_label}" }
                                div { class: "pagination-size",
                                    label { r#for: "items-per-page", "Items:" }
                                    select {
                                        id: "items-per-page",
                                        onchange: move |evt| {
                                            if let Ok(size) = evt.value().parse::<u32>() {
                                                query.with_mut(|q| q.set_size(size));
                                            }
                                        },
                                        option { value: "10", selected: query().size == 10, "10" }
                                        option { value: "25", selected: query().size == 25, "25" }
                                        option { value: "50", selected: query().size == 50, "50" }
                                    }
                                }
                                div { class: "pagination-nav",
                                    button {
                                        class: "btn-icon",
                                        r#type: "button",
                                        disabled: data.first,
                                        onclick: move |_| query.with_mut(ListQuery::prev_page),
                                        "<"
                                    }
                                    span { class: "page-info", "{data.page_label}" }
                                    button {
                                        class: "btn-icon",
                                        r#type: "button",
                                        disabled: data.last,
                                        onclick: move |_| query.with_mut(ListQuery::next_page),
                                        ">"
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

#[component]
fn LessonCard(card: LessonCardVm, on_mark: EventHandler<()>) -> Element {
    rsx! {
        li { class: if card.completed { "card lesson-card completed" } else { "card lesson-card" },
            div { class: "lesson-card-body",
                h3 { "{card.title}" }
                if let Some(subject) = &card.subject_label {
                    span { class: "lesson-subject", "{subject}" }
                }
                p { "{card.description}" }
                span { class: "lesson-duration", "{card.duration_label}" }
            }
            div { class: "lesson-card-actions",
                span { class: "status-badge", "{card.status_label}" }
                a { class: "card-link", href: "{card.link_href}", target: "_blank", "Watch" }
                if !card.completed {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_mark.call(()),
                        "Mark watched"
                    }
                }
            }
        }
    }
}
