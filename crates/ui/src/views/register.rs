use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link};

use services::Registration;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let auth = ctx.auth();
    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        if name().trim().is_empty()
            || email().trim().is_empty()
            || age().trim().is_empty()
            || password().is_empty()
        {
            error.set(Some("All fields are required.".to_string()));
            return;
        }
        let Ok(parsed_age) = age().trim().parse::<u32>() else {
            error.set(Some("Age must be a positive number.".to_string()));
            return;
        };
        if parsed_age == 0 {
            error.set(Some("Age must be a positive number.".to_string()));
            return;
        }

        let auth = auth.clone();
        let registration = Registration {
            full_name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            age: parsed_age,
        };
        error.set(None);
        submitting.set(true);
        spawn(async move {
            match auth.register(registration).await {
                Ok(()) => {
                    let _ = navigator.replace(Route::Login {});
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
            h2 { "Create account" }
            form { class: "auth-form", onsubmit: submit,
                label { r#for: "register-name", "Full name" }
                input {
                    id: "register-name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "register-age", "Age" }
                input {
                    id: "register-age",
                    r#type: "number",
                    min: "1",
                    value: "{age}",
                    oninput: move |evt| age.set(evt.value()),
                }
                label { r#for: "register-password", "Password" }
                input {
                    id: "register-password",
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
                    if submitting() { "Creating..." } else { "Create account" }
                }
            }
            p { class: "auth-links",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
