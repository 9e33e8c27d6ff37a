//! Authenticated session context.
//!
//! The browser-storage-backed store of the original client is modelled as an
//! explicit, swappable provider: decision code never reads ambient global
//! state, it is handed an [`Actor`] derived from whatever the provider
//! currently holds.

use serde::{Deserialize, Serialize};

use crate::usuario::{Actor, Role, Usuario};

/// An authenticated session: the bearer token plus the logged-in user record,
/// exactly what the login endpoint returns and every later request reuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to every backend call.
    pub token: String,

    /// The logged-in user.
    pub user: Usuario,
}

impl Session {
    /// The actor this session acts as.
    #[must_use]
    pub fn actor(&self) -> Actor {
        self.user.actor()
    }
}

/// Source of the current session.
///
/// The production implementation wraps browser storage and lives outside this
/// crate; [`MemorySessionStore`] serves tests and any host without ambient
/// storage.
pub trait SessionStore {
    /// The session currently held, if any.
    fn session(&self) -> Option<&Session>;

    /// Replace the session wholesale. Also used after profile updates, which
    /// re-store the refreshed user under the existing token.
    fn login(&mut self, session: Session);

    /// Drop the session.
    fn logout(&mut self);

    /// The actor for the current session, if logged in.
    fn actor(&self) -> Option<Actor> {
        self.session().map(Session::actor)
    }
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: Option<Session>,
}

impl MemorySessionStore {
    /// An empty store, logged out.
    #[must_use]
    pub fn new() -> Self {
        MemorySessionStore::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    fn login(&mut self, session: Session) {
        self.current = Some(session);
    }

    fn logout(&mut self) {
        self.current = None;
    }
}

/// Outcome of gating a route on authentication and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the page.
    Allow,

    /// No session: send the visitor to the login page.
    RedirectToLogin,

    /// Logged in but the role is not on the route's allow-list: send them
    /// back to the landing page.
    RedirectToHome,
}

/// Decide whether the current session may enter a role-gated route.
///
/// `allowed` of `None` means the route only requires being logged in. This
/// is a UX affordance: hiding a page does not authorize anything, the
/// decision functions in [`policy`](crate::policy) are still consulted before
/// any mutating call.
#[must_use]
pub fn route_decision(session: Option<&Session>, allowed: Option<&[Role]>) -> RouteDecision {
    let Some(session) = session else {
        return RouteDecision::RedirectToLogin;
    };

    match allowed {
        Some(roles) if !roles.contains(&session.user.role) => RouteDecision::RedirectToHome,
        _ => RouteDecision::Allow,
    }
}
