use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{AppError, AuthUser};

/// Outcome of resolving "who is this user" for one navigation.
///
/// Transport failures, non-success envelopes, and an explicit
/// not-authenticated answer all collapse into `Unauthenticated`: the
/// gate fails closed and never surfaces identity-check errors to pages.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Authenticated(AuthUser),
    Unauthenticated,
}

/// What the router should do with a navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Decide whether a navigation to `path` may proceed.
///
/// Authenticated users are confined to their role's section: landing on
/// the login page bounces them home, and any path outside their section
/// redirects to it. Roles without a section are left wherever they are
/// (the mapping is the authority on valid sections), except on the login
/// page, which falls through to `/`.
///
/// Unauthenticated users may only reach the login and register pages;
/// everything else redirects to `/login`.
///
/// Deciding the same path twice against the same resolution returns the
/// same answer, and a decision's redirect target always re-decides to
/// `Allow` — there are no redirect loops.
pub fn decide(path: &str, resolution: &Resolution) -> GuardDecision {
    match resolution {
        Resolution::Authenticated(user) => {
            let section = user.parsed_role().map(|r| r.section_path());

            if path.starts_with("/login") {
                return GuardDecision::Redirect(section.unwrap_or("/").to_string());
            }

            match section {
                Some(section) if !path.starts_with(section) => {
                    GuardDecision::Redirect(section.to_string())
                }
                _ => GuardDecision::Allow,
            }
        }
        Resolution::Unauthenticated => {
            if path.starts_with("/login") || path.starts_with("/register") {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect("/login".to_string())
            }
        }
    }
}

/// The remote "who am I" check consumed by [`IdentityGate`].
///
/// `?Send` because the gate also runs on wasm, where futures are
/// single-threaded.
#[async_trait(?Send)]
pub trait IdentitySource {
    async fn current_user(&self) -> Result<AuthUser, AppError>;
}

#[derive(Debug, Default)]
struct GateInner {
    /// Last successful resolution; failures are never cached so the next
    /// navigation re-checks.
    cached: Option<AuthUser>,
    /// Sequence number handed to the most recent resolution attempt.
    issued: u64,
    /// Sequence number of the attempt (or prime/invalidate) that last
    /// wrote `cached`.
    applied: u64,
}

/// Identity cache between the route guard and the remote identity check.
///
/// Every resolution attempt is tagged with a sequence number. Rapid
/// back-to-back navigations are not fenced against each other, so an
/// older check can finish after a newer one (or after a login/logout);
/// a completion whose sequence number is stale must not overwrite the
/// cache. It still reports its own outcome to the navigation that
/// started it, which independently recomputes a consistent redirect.
#[derive(Clone)]
pub struct IdentityGate {
    inner: Arc<Mutex<GateInner>>,
    source: Arc<dyn IdentitySource>,
}

impl IdentityGate {
    pub fn new(source: Arc<dyn IdentitySource>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(GateInner::default())),
            source,
        }
    }

    /// Resolve the current identity, consulting the cache first.
    ///
    /// A cached successful resolution is authoritative and short-circuits
    /// the remote check entirely.
    pub async fn resolve(&self) -> Resolution {
        let generation = {
            let mut inner = self.inner.lock();
            if let Some(user) = inner.cached.clone() {
                return Resolution::Authenticated(user);
            }
            inner.issued += 1;
            inner.issued
        };

        let outcome = match self.source.current_user().await {
            Ok(user) => Resolution::Authenticated(user),
            Err(err) => {
                tracing::debug!("identity check failed: {err}");
                Resolution::Unauthenticated
            }
        };

        let mut inner = self.inner.lock();
        if generation > inner.applied {
            inner.applied = generation;
            inner.cached = match &outcome {
                Resolution::Authenticated(user) => Some(user.clone()),
                Resolution::Unauthenticated => None,
            };
        } else {
            tracing::debug!(generation, applied = inner.applied, "stale identity resolution discarded");
        }
        outcome
    }

    /// Seed the cache after a successful login. Supersedes any in-flight
    /// check.
    pub fn prime(&self, user: AuthUser) {
        let mut inner = self.inner.lock();
        inner.issued += 1;
        inner.applied = inner.issued;
        inner.cached = Some(user);
    }

    /// Discard the cache (logout, or any event that invalidates the
    /// session). Supersedes any in-flight check.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock();
        inner.issued += 1;
        inner.applied = inner.issued;
        inner.cached = None;
    }

    /// Snapshot of the cached identity.
    pub fn cached_user(&self) -> Option<AuthUser> {
        self.inner.lock().cached.clone()
    }
}
