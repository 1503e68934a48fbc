use dioxus::prelude::*;

use crate::views::LoginView;

/// Catch-all target: any path the router does not recognize renders the
/// login view.
#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    rsx! {
        LoginView {}
    }
}
