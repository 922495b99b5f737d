use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest};
use validator::Validate;

use crate::api::ApiClient;
use crate::auth::{use_auth, use_identity_gate};
use crate::routes::{section_target, Route};

/// Account creation page. The backend opens a session for the new
/// account, so a successful registration continues straight into the
/// matching section.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let gate = use_identity_gate();
    let api = use_context::<ApiClient>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let api = api.clone();
        let gate = gate.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = RegisterRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            let mut invalid_fields = match request.validate() {
                Ok(()) => HashMap::new(),
                Err(invalid) => AppError::from(invalid).field_errors,
            };
            if confirm() != password() {
                invalid_fields.insert("confirm".to_string(), "Passwords do not match".to_string());
            }
            if !invalid_fields.is_empty() {
                field_errors.set(invalid_fields);
                return;
            }

            loading.set(true);
            match api.register(&request).await {
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
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Create an account to get started" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_register,
                    div { class: "auth-field",
                        label { r#for: "username", "Username" }
                        input {
                            r#type: "text",
                            id: "username",
                            placeholder: "At least 3 characters",
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
                            placeholder: "At least 8 characters",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "confirm", "Confirm Password" }
                        input {
                            r#type: "password",
                            id: "confirm",
                            placeholder: "Repeat your password",
                            value: confirm(),
                            oninput: move |e: FormEvent| confirm.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("confirm") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create Account" }
                    }
                }

                p { class: "auth-link",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
