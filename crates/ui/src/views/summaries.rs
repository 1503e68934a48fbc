use dioxus::prelude::*;
use dioxus_router::Link;

use backpack_core::model::{ListQuery, Page, SubjectId, SummaryWithProgress};
use services::SubjectOption;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, RedirectToLogin, ViewError, ViewState};
use crate::vm::{map_summary_cards, SummaryCardVm};

#[derive(Clone, Debug, PartialEq)]
struct SummaryListData {
    cards: Vec<SummaryCardVm>,
    range_label: String,
    page_label: String,
    first: bool,
    last: bool,
    empty: bool,
}

fn list_data(page: &Page<SummaryWithProgress>) -> SummaryListData {
    SummaryListData {
        cards: map_summary_cards(&page.content),
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
pub fn SummariesView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(ListQuery::default);

    let summaries_for_resource = ctx.summaries();
    let resource = use_resource(move || {
        let summaries = summaries_for_resource.clone();
        let query = query();
        async move {
            let page = summaries
                .summaries_with_progress(&query)
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
    let options = match view_state_from_resource(&options_resource) {
        ViewState::Ready(options) => options,
        _ => Vec::<SubjectOption>::new(),
    };

    rsx! {
        div { class: "page summaries-page",
            header { class: "view-header",
                h2 { "Summaries" }
            }

            div { class: "list-controls",
                select {
                    id: "filter-summary-subject",
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
                    let SummaryListData {
                        cards,
                        range_label,
                        page_label,
                        first,
                        last,
                        empty,
                    } = data;
                    rsx! {
                    if empty {
                        p { "No summaries found." }
                    } else {
                        ul { class: "summary-list",
                            for card in cards {
                                li { class: if card.read { "card summary-card read" } else { "card summary-card" },
                                    div { class: "summary-card-body",
                                        h3 { "{card.title}" }
                                        if let Some(subject) = &card.subject_label {
                                            span { class: "summary-subject", "{subject}" }
                                        }
                                    }
                                    div { class: "summary-card-actions",
                                        if card.read {
                                            span { class: "status-badge", "Read" }
                                        }
                                        Link {
                                            class: "card-link",
                                            to: Route::SummaryDetail { summary_id: card.id.value() },
                                            "Open"
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "pagination",
                            div { class: "pagination-summary", "{range_label}" }
                            div { class: "pagination-nav",
                                button {
                                    class: "btn-icon",
                                    r#type: "button",
                                    disabled: first,
                                    onclick: move |_| query.with_mut(ListQuery::prev_page),
                                    "<"
                                }
                                span { class: "page-info", "{page_label}" }
                                button {
                                    class: "btn-icon",
                                    r#type: "button",
                                    disabled: last,
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
