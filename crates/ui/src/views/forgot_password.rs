use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn ForgotPasswordView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let auth = ctx.auth();
    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let auth = auth.clone();
        let email_value = email();
        error.set(None);
        notice.set(None);
        submitting.set(true);
        spawn(async move {
            match auth.forgot_password(&email_value).await {
                Ok(message) => {
                    let message = if message.trim().is_empty() {
                        "Recovery instructions were sent to your email.".to_string()
                    } else {
                        message
                    };
                    notice.set(Some(message));
                    email.set(String::new());
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
            h2 { "Recover password" }
            form { class: "auth-form", onsubmit: submit,
                label { r#for: "forgot-email", "Email" }
                input {
                    id: "forgot-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                if let Some(message) = notice() {
                    p { class: "form-success", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Sending..." } else { "Send instructions" }
                }
            }
            p { class: "auth-links",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
