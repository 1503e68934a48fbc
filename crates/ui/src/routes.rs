use dioxus::prelude::*;
use dioxus_router::{use_navigator, use_route, Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    DashboardView, ForgotPasswordView, LoginView, NotFoundView, PracticeExamView, RegisterView,
    SummariesView, SummaryDetailView, VideoClassesForSubjectView, VideoClassesView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthLayout)]
        #[route("/", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/forgot-password", ForgotPasswordView)] ForgotPassword {},
    #[end_layout]
    #[layout(ShellLayout)]
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/video-class", VideoClassesView)] VideoClasses {},
        #[route("/video-class/:subject_id", VideoClassesForSubjectView)] VideoClassesForSubject { subject_id: u64 },
        #[route("/summaries", SummariesView)] Summaries {},
        #[route("/summaries/:summary_id", SummaryDetailView)] SummaryDetail { summary_id: u64 },
        #[route("/practice-exam", PracticeExamView)] PracticeExam {},
    #[end_layout]
    // Unknown paths land on the login view.
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// Root container class, so CSS can key off the active section.
    #[must_use]
    pub fn section_class(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "dashboard-view",
            Route::VideoClasses {} | Route::VideoClassesForSubject { .. } => "classes-view",
            Route::Summaries {} | Route::SummaryDetail { .. } => "summaries-view",
            Route::PracticeExam {} => "exam-view",
            Route::Login {}
            | Route::Register {}
            | Route::ForgotPassword {}
            | Route::NotFound { .. } => "auth-view",
        }
    }
}

#[component]
fn AuthLayout() -> Element {
    rsx! {
        div { class: "app auth-view",
            main { class: "auth-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn ShellLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div { class: "app {route.section_class()}",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let section = route.section_class();

    rsx! {
        nav { class: "sidebar",
            h1 { class: "brand", "Backpack" }
            ul {
                li {
                    Link {
                        class: nav_class(section == "dashboard-view"),
                        to: Route::Dashboard {},
                        "Dashboard"
                    }
                }
                li {
                    Link {
                        class: nav_class(section == "classes-view"),
                        to: Route::VideoClasses {},
                        "Video classes"
                    }
                }
                li {
                    Link {
                        class: nav_class(section == "summaries-view"),
                        to: Route::Summaries {},
                        "Summaries"
                    }
                }
                li {
                    Link {
                        class: nav_class(section == "exam-view"),
                        to: Route::PracticeExam {},
                        "Practice exam"
                    }
                }
            }
            button {
                class: "btn btn-secondary logout",
                r#type: "button",
                onclick: move |_| {
                    let auth = ctx.auth();
                    spawn(async move {
                        // Local session goes regardless of the server call.
                        let _ = auth.logout().await;
                        let _ = navigator.replace(Route::Login {});
                    });
                },
                "Log out"
            }
        }
    }
}
