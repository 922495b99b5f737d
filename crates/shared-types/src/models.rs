use serde::{Deserialize, Serialize};

/// The authenticated identity as reported by the backend.
///
/// Exists only while a session is live: populated on successful login or a
/// successful identity recheck, dropped on logout or a failed recheck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    /// Raw role string from the backend; parse with [`UserRole::parse`].
    pub role: String,
}

/// Dashboard role controlling which section of the app a user lives in.
///
/// - `Admin` — user management.
/// - `Client` / `Farmer` — land, sensor, and irrigation management. Both
///   roles share the client section.
/// - `Consultant` — seed catalog and recommendations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum UserRole {
    Admin,
    Client,
    Farmer,
    Consultant,
}

impl UserRole {
    /// Parse a backend role string, case-insensitively.
    /// Unknown roles yield `None`; callers treat those as unmapped.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "client" => Some(UserRole::Client),
            "farmer" => Some(UserRole::Farmer),
            "consultant" => Some(UserRole::Consultant),
            _ => None,
        }
    }

    /// Lowercase string form as stored by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Client => "client",
            UserRole::Farmer => "farmer",
            UserRole::Consultant => "consultant",
        }
    }

    /// The URL prefix this role is confined to. Client and farmer share
    /// the client section; exactly one section per role.
    pub fn section_path(&self) -> &'static str {
        match self {
            UserRole::Admin => "/admin",
            UserRole::Client | UserRole::Farmer => "/client",
            UserRole::Consultant => "/consultant",
        }
    }
}

impl AuthUser {
    /// Parsed role, or `None` when the backend reports a role the
    /// dashboard has no section for.
    pub fn parsed_role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }
}
