use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // A cached signed-in session skips the form; if the cookie is gone the
    // dashboard's own probe bounces straight back here.
    let auth_for_probe = ctx.auth();
    use_effect(move || {
        let auth = auth_for_probe.clone();
        spawn(async move {
            if auth.cached_session().await.is_authenticated() {
                let _ = navigator.replace(Route::Dashboard {});
            }
        });
    });

    let auth = ctx.auth();
    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let auth = auth.clone();
        let email_value = email();
        let password_value = password();
        error.set(None);
        submitting.set(true);
        spawn(async move {
            match auth.login(&email_value, &password_value).await {
                Ok(_) => {
                    let _ = navigator.replace(Route::Dashboard {});
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page auth-card",
            h2 { "Sign in" }
            form { class: "auth-form", onsubmit: submit,
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
            p { class: "auth-links",
                Link { to: Route::ForgotPassword {}, "Forgot password?" }
                Link { to: Route::Register {}, "Create account" }
            }
        }
    }
}
