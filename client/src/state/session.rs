#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// Viewer session as seen by the page.
///
/// The page owns one of these and threads the derived viewer into the
/// components that need it as an explicit prop.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    /// State while the viewer lookup is in flight.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Record the outcome of the viewer lookup.
    pub fn resolve(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.loading = false;
    }

    /// Forget the viewer (sign-out).
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
