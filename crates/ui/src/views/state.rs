use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{CatalogError, ExamServiceError};

use crate::routes::Route;

/// Failures a view can render. Everything not auth-shaped collapses to
/// `Unknown`: the user can only retry, the log has the detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotAuthenticated,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::NotAuthenticated => "Your session has expired. Please sign in again.",
        }
    }
}

impl From<&CatalogError> for ViewError {
    fn from(err: &CatalogError) -> Self {
        if err.is_auth() {
            ViewError::NotAuthenticated
        } else {
            ViewError::Unknown
        }
    }
}

impl From<&ExamServiceError> for ViewError {
    fn from(err: &ExamServiceError) -> Self {
        if err.is_auth() {
            ViewError::NotAuthenticated
        } else {
            ViewError::Unknown
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Rendered in place of a view whose session is gone; replaces the route so
/// Back does not bounce through the dead page.
#[component]
pub fn RedirectToLogin() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        let _ = navigator.replace(Route::Login {});
    });

    let message = ViewError::NotAuthenticated.message();
    rsx! {
        p { class: "redirect-note", "{message}" }
    }
}
