//! Session gate
//!
//! Login, credential checks and inactivity timeouts live outside the
//! workspace. The workspace only asks whether it may mount.

/// Answers whether a user is currently logged in
pub trait SessionGate {
    fn is_logged_in(&self) -> bool;
}

/// Fixed answer, for hosts that resolve the session before mounting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticSession(pub bool);

impl StaticSession {
    pub const LOGGED_IN: StaticSession = StaticSession(true);
    pub const LOGGED_OUT: StaticSession = StaticSession(false);
}

impl SessionGate for StaticSession {
    fn is_logged_in(&self) -> bool {
        self.0
    }
}

impl<F: Fn() -> bool> SessionGate for F {
    fn is_logged_in(&self) -> bool {
        self()
    }
}
