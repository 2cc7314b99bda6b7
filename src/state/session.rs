//! Session state: the credential context and the login phase machine.
//!
//! DESIGN
//! ======
//! The `Authorization` header value lives in an explicit [`AuthContext`]
//! threaded into each request instead of a process-wide default header, so
//! login/logout replace one value owned by the session rather than mutating
//! ambient client configuration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Credential context attached to authenticated requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    header: Option<String>,
}

impl AuthContext {
    /// Build the context for a stored token, yielding a
    /// `Basic <token>` authorization header value.
    pub fn from_token(token: &str) -> Self {
        Self {
            header: Some(format!("Basic {token}")),
        }
    }

    /// The header value to attach, when a credential is installed.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn clear(&mut self) {
        self.header = None;
    }
}

/// Where the session stands between page load and logout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No valid credential; only the login route is reachable.
    #[default]
    Unauthenticated,
    /// A stored token was found and the auth probe is in flight.
    Authenticating,
    /// The probe (or a fresh credential check) succeeded.
    Authenticated,
}

/// Shared session state provided via context.
///
/// Route-change refetches only happen in the `Authenticated` phase; the
/// probe path is the single place a failure forces a login redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub auth: AuthContext,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated)
    }

    /// A stored token was found; the probe request is about to go out.
    pub fn begin_probe(&mut self, token: &str) {
        self.phase = SessionPhase::Authenticating;
        self.auth = AuthContext::from_token(token);
    }

    /// Install the credential after a successful check.
    pub fn establish(&mut self, token: &str) {
        self.phase = SessionPhase::Authenticated;
        self.auth = AuthContext::from_token(token);
    }

    /// Drop the candidate credential after a failed probe.
    pub fn reject(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.auth.clear();
    }

    /// Explicit logout. Safe to call when already logged out.
    pub fn logout(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.auth.clear();
    }
}
