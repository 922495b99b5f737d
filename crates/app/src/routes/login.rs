use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use validator::Validate;

use crate::api::ApiClient;
use crate::auth::{use_auth, use_identity_gate};
use crate::routes::{section_target, Route};

/// Login page with username/password.
///
/// On success the session store and the identity cache are seeded from
/// the response, then the user lands on their role's section.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let gate = use_identity_gate();
    let api = use_context::<ApiClient>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        let gate = gate.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            if let Err(invalid) = request.validate() {
                field_errors.set(AppError::from(invalid).field_errors);
                return;
            }

            loading.set(true);
            match api.login(&request).await {
                Ok(user) => {
                    gate.prime(user.clone());
                    auth.set_user(user.clone());
                    let section = user
                        .parsed_role()
                        .map(|r| r.section_path())
                        .unwrap_or("/");
                    navigator().push(section_target(section));
                }
                Err(err) => {
                    if err.field_errors.is_empty() {
                        error_msg.set(Some(err.message));
                    } else {
                        field_errors.set(err.field_errors);
                    }
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Sign In" }
                p { class: "auth-subtitle", "Enter your credentials to access your dashboard" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "username", "Username" }
                        input {
                            r#type: "text",
                            id: "username",
                            placeholder: "Enter your username",
                            value: username(),
                            oninput: move |e: FormEvent| username.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("username") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            r#type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p { class: "auth-link",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Create one" }
                }
            }
        }
    }
}
