use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use app::guard::IdentitySource;
use async_trait::async_trait;
use shared_types::{AppError, AuthUser};

/// Build a test user with the given role.
pub fn user(id: i64, username: &str, role: &str) -> AuthUser {
    AuthUser {
        id,
        username: username.to_string(),
        role: role.to_string(),
    }
}

/// One scripted answer from the stub identity source.
#[derive(Clone)]
pub struct ScriptedCall {
    pub delay: Option<Duration>,
    pub outcome: Result<AuthUser, AppError>,
}

impl ScriptedCall {
    pub fn immediate(outcome: Result<AuthUser, AppError>) -> Self {
        Self {
            delay: None,
            outcome,
        }
    }

    pub fn delayed(outcome: Result<AuthUser, AppError>, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            outcome,
        }
    }
}

/// Scriptable stand-in for the remote "who am I" check.
///
/// Answers are consumed front to back; once the script runs out, the
/// last answer repeats. A call counter records how often the guard
/// actually reached out.
pub struct StubIdentity {
    script: Mutex<VecDeque<ScriptedCall>>,
    calls: AtomicUsize,
}

impl StubIdentity {
    pub fn scripted(calls: Vec<ScriptedCall>) -> Self {
        assert!(!calls.is_empty(), "script needs at least one answer");
        Self {
            script: Mutex::new(calls.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Stub that always answers with the same user.
    pub fn always(user: AuthUser) -> Self {
        Self::scripted(vec![ScriptedCall::immediate(Ok(user))])
    }

    /// Stub that always fails with the given error.
    pub fn failing(err: AppError) -> Self {
        Self::scripted(vec![ScriptedCall::immediate(Err(err))])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_call(&self) -> ScriptedCall {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().cloned().unwrap()
        }
    }
}

#[async_trait(?Send)]
impl IdentitySource for StubIdentity {
    async fn current_user(&self) -> Result<AuthUser, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let call = self.next_call();
        if let Some(delay) = call.delay {
            tokio::time::sleep(delay).await;
        }
        call.outcome
    }
}
