use app::guard::{decide, GuardDecision, Resolution};
use pretty_assertions::assert_eq;

use crate::common::user;

fn authed(role: &str) -> Resolution {
    Resolution::Authenticated(user(1, "test", role))
}

fn redirect(to: &str) -> GuardDecision {
    GuardDecision::Redirect(to.to_string())
}

// ── Unauthenticated ──

#[test]
fn failed_check_redirects_everything_to_login() {
    for path in ["/", "/admin", "/client/land/42", "/consultant", "/reports/weekly"] {
        assert_eq!(
            decide(path, &Resolution::Unauthenticated),
            redirect("/login"),
            "path {path}"
        );
    }
}

#[test]
fn failed_check_keeps_login_and_register_reachable() {
    for path in ["/login", "/register"] {
        assert_eq!(
            decide(path, &Resolution::Unauthenticated),
            GuardDecision::Allow,
            "path {path}"
        );
    }
}

// ── Authenticated ──

#[test]
fn login_page_bounces_to_role_section() {
    // Scenario: landing on /login while the session cookie is still valid.
    assert_eq!(decide("/login", &authed("admin")), redirect("/admin"));
    assert_eq!(decide("/login", &authed("client")), redirect("/client"));
    assert_eq!(decide("/login", &authed("farmer")), redirect("/client"));
    assert_eq!(decide("/login", &authed("consultant")), redirect("/consultant"));
}

#[test]
fn foreign_section_redirects_home() {
    // A client poking at consultant pages is sent back to their section.
    assert_eq!(
        decide("/consultant/seed/create", &authed("client")),
        redirect("/client")
    );
    assert_eq!(decide("/client/land/7", &authed("admin")), redirect("/admin"));
    assert_eq!(decide("/", &authed("consultant")), redirect("/consultant"));
}

#[test]
fn own_section_is_allowed() {
    assert_eq!(decide("/admin", &authed("admin")), GuardDecision::Allow);
    assert_eq!(
        decide("/admin/create-user", &authed("admin")),
        GuardDecision::Allow
    );
    // Farmer maps to the client section.
    assert_eq!(decide("/client/land/42", &authed("farmer")), GuardDecision::Allow);
    assert_eq!(
        decide("/consultant/recommendation/3", &authed("consultant")),
        GuardDecision::Allow
    );
}

#[test]
fn unknown_role_is_not_forced_anywhere() {
    assert_eq!(decide("/reports", &authed("surveyor")), GuardDecision::Allow);
    // Except off the login page, which falls through to the root.
    assert_eq!(decide("/login", &authed("surveyor")), redirect("/"));
}

// ── Stability ──

#[test]
fn decisions_are_idempotent() {
    let cases = [
        ("/admin", authed("client")),
        ("/login", authed("admin")),
        ("/register", Resolution::Unauthenticated),
        ("/client/land/42", authed("farmer")),
        ("/anything", Resolution::Unauthenticated),
    ];
    for (path, resolution) in &cases {
        assert_eq!(
            decide(path, resolution),
            decide(path, resolution),
            "path {path}"
        );
    }
}

#[test]
fn redirect_targets_settle() {
    // Following a redirect and re-evaluating must always end in Allow,
    // otherwise the guard would loop.
    let resolutions = [
        authed("admin"),
        authed("client"),
        authed("farmer"),
        authed("consultant"),
        Resolution::Unauthenticated,
    ];
    for resolution in &resolutions {
        for path in ["/", "/login", "/admin/x", "/client", "/consultant/seed"] {
            if let GuardDecision::Redirect(target) = decide(path, resolution) {
                assert_eq!(
                    decide(&target, resolution),
                    GuardDecision::Allow,
                    "loop from {path} via {target}"
                );
            }
        }
    }
}

// ── Representative journeys ──

#[test]
fn admin_cookie_on_login_page() {
    assert_eq!(decide("/login", &authed("admin")), redirect("/admin"));
}

#[test]
fn client_in_consultant_territory() {
    assert_eq!(
        decide("/consultant/seed/create", &authed("client")),
        redirect("/client")
    );
}

#[test]
fn server_error_on_admin_page() {
    // A 500 from the identity check resolves to Unauthenticated upstream.
    assert_eq!(decide("/admin", &Resolution::Unauthenticated), redirect("/login"));
}

#[test]
fn register_stays_open_when_check_fails() {
    assert_eq!(
        decide("/register", &Resolution::Unauthenticated),
        GuardDecision::Allow
    );
}

#[test]
fn farmer_deep_in_client_section() {
    assert_eq!(decide("/client/land/42", &authed("farmer")), GuardDecision::Allow);
}
