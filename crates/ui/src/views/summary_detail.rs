use dioxus::prelude::*;
use dioxus_router::Link;

use backpack_core::model::SummaryId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, RedirectToLogin, ViewError, ViewState};
use crate::vm::markdown_to_html;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MarkState {
    Idle,
    Marking,
    Marked,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
struct SummaryDetailData {
    title: String,
    subject_label: Option<String>,
    body_html: String,
}

#[component]
pub fn SummaryDetailView(summary_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let summary_id = SummaryId::new(summary_id);
    let mut mark_state = use_signal(|| MarkState::Idle);

    let summaries_for_resource = ctx.summaries();
    let resource = use_resource(move || {
        let summaries = summaries_for_resource.clone();
        async move {
            let summary = summaries
                .summary(summary_id)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(SummaryDetailData {
                title: summary.title.clone(),
                subject_label: summary.subject_name.clone(),
                body_html: markdown_to_html(&summary.content),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let summaries_for_mark = ctx.summaries();

    rsx! {
        div { class: "page summary-detail-page",
            Link { class: "back-link", to: Route::Summaries {}, "Back to summaries" }

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
                ViewState::Ready(data) => rsx! {
                    header { class: "view-header",
                        h2 { "{data.title}" }
                        if let Some(subject) = &data.subject_label {
                            span { class: "summary-subject", "{subject}" }
                        }
                    }
                    article {
                        class: "summary-body",
                        dangerous_inner_html: "{data.body_html}",
                    }
                    div { class: "summary-actions",
                        match mark_state() {
                            MarkState::Marked => rsx! {
                                span { class: "status-badge", "Read" }
                            },
                            MarkState::Error => rsx! {
                                p { class: "form-error", "Could not save your progress." }
                            },
                            _ => rsx! {
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    disabled: mark_state() == MarkState::Marking,
                                    onclick: move |_| {
                                        let summaries = summaries_for_mark.clone();
                                        mark_state.set(MarkState::Marking);
                                        spawn(async move {
                                            match summaries.mark_read(summary_id).await {
                                                Ok(()) => mark_state.set(MarkState::Marked),
                                                Err(_) => mark_state.set(MarkState::Error),
                                            }
                                        });
                                    },
                                    "Mark as read"
                                }
                            },
                        }
                    }
                },
            }
        }
    }
}
