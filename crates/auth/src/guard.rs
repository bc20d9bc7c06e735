//! Route-guard decisions.
//!
//! The guard owns no state of its own: it maps the session manager's
//! current view and a per-mount access policy onto what the caller should
//! do with the protected region.

use crate::model::{Session, UserRole};

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/login";

/// What the session manager currently knows.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Restoration from persistence has not completed yet.
    Restoring,
    Ready(Option<Session>),
}

/// Access policy for a protected mount; configured once, static afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePolicy {
    pub require_auth: bool,
    pub allowed_roles: Option<Vec<UserRole>>,
}

impl RoutePolicy {
    /// No requirements; renders for everyone.
    pub fn public() -> Self {
        Self {
            require_auth: false,
            allowed_roles: None,
        }
    }

    /// Any signed-in user.
    pub fn authenticated() -> Self {
        Self {
            require_auth: true,
            allowed_roles: None,
        }
    }

    /// A signed-in user holding one of `roles`.
    pub fn roles(roles: &[UserRole]) -> Self {
        Self {
            require_auth: true,
            allowed_roles: Some(roles.to_vec()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Restoration pending; render a placeholder, decide nothing yet.
    Pending,
    /// Render the protected content.
    Allow,
    /// No session where one is required.
    RedirectToLogin,
    /// Signed in but outside the allow-list: send the user to their own
    /// dashboard, never to an error page.
    RedirectToDashboard(&'static str),
}

/// Evaluate `policy` against the session manager's current state.
pub fn evaluate(policy: &RoutePolicy, state: &SessionState) -> RouteDecision {
    let session = match state {
        SessionState::Restoring => return RouteDecision::Pending,
        SessionState::Ready(session) => session.as_ref(),
    };

    match session {
        None if policy.require_auth => RouteDecision::RedirectToLogin,
        None => RouteDecision::Allow,
        Some(session) => match &policy.allowed_roles {
            Some(roles) if !roles.contains(&session.role) => {
                RouteDecision::RedirectToDashboard(session.role.dashboard_path())
            }
            _ => RouteDecision::Allow,
        },
    }
}
