use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Global authentication state.
///
/// A plain in-memory register: writes broadcast synchronously to every
/// subscribed reader through the signal. Provided via context so pages and
/// the route guard share one instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Replace the current session unconditionally.
    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    /// Drop the current session; subsequent reads see no user.
    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the shared identity gate.
pub fn use_identity_gate() -> crate::guard::IdentityGate {
    use_context::<crate::guard::IdentityGate>()
}

/// The current user's parsed role, or `None` while logged out or when the
/// backend reports a role the dashboard has no section for.
pub fn use_user_role() -> Option<UserRole> {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().and_then(|u| u.parsed_role())
}
