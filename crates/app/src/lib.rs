use std::sync::Arc;

use dioxus::prelude::*;

pub mod api;
pub mod auth;
pub mod config;
pub mod guard;
pub mod routes;

use api::ApiClient;
use auth::AuthState;
use guard::{IdentityGate, IdentitySource};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Application root: wires up the shared services and mounts the router.
///
/// Session state and the identity gate are provided as context objects so
/// every page (and the route guard) receives them by injection instead of
/// reaching for globals.
#[component]
pub fn App() -> Element {
    use_context_provider(AuthState::new);

    let api = use_hook(|| ApiClient::new(config::api_url()));
    use_context_provider(|| api.clone());
    use_context_provider(|| IdentityGate::new(Arc::new(api.clone()) as Arc<dyn IdentitySource>));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
