pub mod admin;
pub mod client;
pub mod consultant;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLeaf, LdLogOut};
use dioxus_free_icons::Icon;

use crate::api::ApiClient;
use crate::auth::{use_auth, use_identity_gate};
use crate::guard::{decide, GuardDecision, Resolution};

use admin::AdminHome;
use client::ClientHome;
use consultant::ConsultantHome;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
///
/// Every route renders behind the guard — the login and register pages
/// included, since the guard is also what bounces signed-in users off
/// them.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AuthGuard)]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminHome {},
    #[route("/client")]
    ClientHome {},
    #[route("/consultant")]
    ConsultantHome {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Typed navigation target for a guard redirect path.
pub(crate) fn section_target(path: &str) -> NavigationTarget<Route> {
    match path {
        "/admin" => Route::AdminHome {}.into(),
        "/client" => Route::ClientHome {}.into(),
        "/consultant" => Route::ConsultantHome {}.into(),
        "/login" => Route::Login {}.into(),
        "/" => Route::Home {}.into(),
        other => NavigationTarget::External(other.to_string()),
    }
}

/// Gatekeeper layout evaluated before every page renders.
///
/// Resolves identity through the gate (cached after the first success),
/// mirrors the outcome into the session store, and applies the navigation
/// decision. Identity-check failures never reach the page below: the only
/// user-visible effect is a redirect to the login page.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let gate = use_identity_gate();
    let route: Route = use_route();
    let path = route.to_string();

    // Re-resolve on every navigation; the gate's cache keeps repeat
    // checks local.
    let mut nav_path = use_signal(|| path.clone());
    if *nav_path.peek() != path {
        nav_path.set(path.clone());
    }

    let gate_for_resolution = gate.clone();
    let resolution = use_resource(move || {
        let gate = gate_for_resolution.clone();
        let _path = nav_path();
        async move { gate.resolve().await }
    });

    let current = resolution.read().as_ref().cloned();

    match current {
        Some(resolution) => {
            match &resolution {
                Resolution::Authenticated(user) => {
                    if auth.current_user.peek().as_ref() != Some(user) {
                        auth.set_user(user.clone());
                    }
                }
                Resolution::Unauthenticated => {
                    if auth.current_user.peek().is_some() {
                        auth.clear_auth();
                    }
                }
            }

            match decide(&path, &resolution) {
                GuardDecision::Allow => rsx! { Outlet::<Route> {} },
                GuardDecision::Redirect(target) => {
                    navigator().push(section_target(&target));
                    rsx! {
                        div { class: "guard-loading",
                            p { "Redirecting..." }
                        }
                    }
                }
            }
        }
        None => rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Shared section chrome: brand, section title, signed-in identity, and
/// the sign-out action.
#[component]
pub fn SectionHeader(title: String) -> Element {
    let mut auth = use_auth();
    let gate = use_identity_gate();
    let api = use_context::<ApiClient>();
    let mut signing_out = use_signal(|| false);

    let identity = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| format!("{} ({})", u.username, u.role));

    let handle_logout = move |_| {
        let api = api.clone();
        let gate = gate.clone();
        spawn(async move {
            signing_out.set(true);
            match api.logout().await {
                Ok(()) => {
                    gate.invalidate();
                    auth.clear_auth();
                    navigator().push(Route::Login {});
                }
                Err(err) => tracing::warn!("logout failed: {err}"),
            }
            signing_out.set(false);
        });
    };

    rsx! {
        header { class: "section-header",
            div { class: "section-brand",
                Icon::<LdLeaf> { icon: LdLeaf, width: 20, height: 20 }
                span { class: "section-brand-name", "Agrovista" }
            }
            span { class: "section-title", "{title}" }
            div { class: "section-spacer" }
            if let Some(identity) = identity {
                span { class: "section-identity", "{identity}" }
            }
            button {
                class: "section-logout button",
                disabled: signing_out(),
                onclick: handle_logout,
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                if signing_out() { "Signing out..." } else { "Sign Out" }
            }
        }
    }
}

/// Landing page for signed-in users whose role has no section of its own.
/// Mapped roles never see it — the guard sends them to their section.
#[component]
fn Home() -> Element {
    let auth = use_auth();
    let username = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./section.css") }

        div { class: "section-page",
            SectionHeader { title: "Dashboard" }
            main { class: "section-content",
                h1 { "Welcome, {username}" }
                p {
                    "Your account has no workspace assigned yet. "
                    "Ask an administrator to set up your role."
                }
            }
        }
    }
}
