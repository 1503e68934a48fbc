use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, RedirectToLogin, ViewError, ViewState};
use crate::vm::{map_stat_tiles, map_subject_cards, StatTileVm, SubjectCardVm};

#[derive(Clone, Debug, PartialEq)]
struct DashboardViewData {
    first_name: String,
    avatar_initial: String,
    tiles: Vec<StatTileVm>,
    subject_cards: Vec<SubjectCardVm>,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();
    let subjects = ctx.subjects();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        let subjects = subjects.clone();
        async move {
            // Fan out: overview (profile + statistics) and the subject cards.
            let (overview, subject_list) =
                tokio::join!(dashboard.overview(), subjects.subjects_with_progress());

            let overview = overview.map_err(|err| ViewError::from(&err))?;
            let subject_list = subject_list.map_err(|err| ViewError::from(&err))?;

            Ok::<_, ViewError>(DashboardViewData {
                first_name: overview.user.first_name().to_string(),
                avatar_initial: overview.user.avatar_initial(),
                tiles: map_stat_tiles(&overview.statistics),
                subject_cards: map_subject_cards(&subject_list),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard-page",
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
                    let DashboardViewData {
                        first_name,
                        avatar_initial,
                        tiles,
                        subject_cards,
                    } = data;
                    let no_subjects = subject_cards.is_empty();
                    rsx! {
                    header { class: "welcome-banner",
                        div { class: "avatar", "{avatar_initial}" }
                        h2 { "Hello, {first_name}! 👋" }
                    }
                    section { class: "stat-tiles",
                        for tile in tiles {
                            div { class: "stat-tile",
                                span { class: "stat-value", "{tile.value}" }
                                span { class: "stat-label", "{tile.label}" }
                            }
                        }
                    }
                    section { class: "subjects",
                        h3 { "Your subjects" }
                        if no_subjects {
                            p { "No subjects yet." }
                        } else {
                            div { class: "subjects-grid",
                                for card in subject_cards {
                                    div { class: "card subject-card",
                                        h3 { "{card.name}" }
                                        div { class: "progress-bar",
                                            div {
                                                class: "progress",
                                                style: "{card.bar_width}",
                                                "{card.percent_label}"
                                            }
                                        }
                                        Link {
                                            class: "card-link",
                                            to: Route::VideoClassesForSubject { subject_id: card.id.value() },
                                            "View lessons"
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
    }
}
