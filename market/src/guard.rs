//! Role-gated route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected views are wrapped in a guard configured with the roles allowed
//! to see them. The guard never trusts a cached role: each evaluation looks
//! the current user up again.
//!
//! STATE MACHINE
//! =============
//! `Resolving` -> `DeniedNoSession`   no local token (no request is made)
//! `Resolving` -> `Allowed`           lookup succeeded, role in allow-list
//! `Resolving` -> `DeniedWrongRole`   any other role, no role, or lookup error
//!
//! Lookup errors count as a wrong role and are not retried.

use crate::error::ApiError;
use crate::session::Session;
use crate::types::{CurrentUser, Role};

pub const SIGN_IN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Source of the current user's record. Implemented by [`crate::ApiClient`];
/// tests substitute an in-memory resolver.
#[async_trait::async_trait(?Send)]
pub trait RoleResolver {
    async fn resolve_current_user(&self) -> Result<CurrentUser, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Resolving,
    Allowed(Role),
    DeniedNoSession,
    DeniedWrongRole,
}

/// What the router should do for a given [`GuardState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    Pending,
    RedirectUnauthenticated,
    RedirectUnauthorized,
    Allow,
}

impl GuardState {
    #[must_use]
    pub fn decision(&self) -> AuthorizationDecision {
        match self {
            Self::Resolving => AuthorizationDecision::Pending,
            Self::Allowed(_) => AuthorizationDecision::Allow,
            Self::DeniedNoSession => AuthorizationDecision::RedirectUnauthenticated,
            Self::DeniedWrongRole => AuthorizationDecision::RedirectUnauthorized,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Resolving)
    }
}

impl AuthorizationDecision {
    /// Redirect target for the two deny outcomes.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectUnauthenticated => Some(SIGN_IN_PATH),
            Self::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
            Self::Pending | Self::Allow => None,
        }
    }
}

/// Dashboard a signed-in user lands on.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Teacher => "/teacher",
        Role::School => "/school",
        Role::Recruiter => "/recruiter",
        Role::Unknown => UNAUTHORIZED_PATH,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGuard {
    allowed: Vec<Role>,
}

impl RoleGuard {
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self { allowed: allowed.into_iter().filter(|r| *r != Role::Unknown).collect() }
    }

    /// Guard that admits any known role; used for "signed in at all" routes.
    #[must_use]
    pub fn any_role() -> Self {
        Self::new(Role::ALL)
    }

    #[must_use]
    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }

    #[must_use]
    pub fn admits(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    /// First step: decide synchronously whether a lookup is needed at all.
    #[must_use]
    pub fn begin(&self, session: &Session) -> GuardState {
        if session.is_authenticated() {
            GuardState::Resolving
        } else {
            tracing::debug!("route guard: no session token");
            GuardState::DeniedNoSession
        }
    }

    /// Second step: turn the lookup outcome into a terminal state.
    #[must_use]
    pub fn decide(&self, outcome: Result<CurrentUser, ApiError>) -> GuardState {
        match outcome {
            Ok(CurrentUser { role: Some(role), .. }) if self.admits(role) => GuardState::Allowed(role),
            Ok(user) => {
                tracing::debug!(role = ?user.role, allowed = ?self.allowed, "route guard: role not allowed");
                GuardState::DeniedWrongRole
            }
            Err(e) => {
                tracing::warn!(error = %e, "route guard: role lookup failed");
                GuardState::DeniedWrongRole
            }
        }
    }

    /// Run both steps, issuing at most one lookup.
    pub async fn evaluate<R>(&self, session: &Session, resolver: &R) -> GuardState
    where
        R: RoleResolver + ?Sized,
    {
        match self.begin(session) {
            GuardState::Resolving => self.decide(resolver.resolve_current_user().await),
            terminal => terminal,
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
