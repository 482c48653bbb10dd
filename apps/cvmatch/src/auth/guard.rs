//! Route authorization: a pure decision function over a session snapshot
//! plus the mapping from decision to the side effect the navigation layer
//! executes.

use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::session::Session;
use crate::models::Role;
use crate::nav::{Notice, Redirect};

pub const PERMISSION_DENIED_MESSAGE: &str = "You don't have permission to access that page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Loading,
    Unauthenticated,
    Authorized,
    WrongRole,
}

/// Classifies a session snapshot against the roles a route requires.
/// Total over all inputs: every combination maps to exactly one state.
///
/// An empty `required_roles` set admits any authenticated user.
pub fn decide(session: &Session, required_roles: &[Role]) -> GuardState {
    if session.is_loading {
        return GuardState::Loading;
    }
    if !session.is_authenticated {
        return GuardState::Unauthenticated;
    }
    let Some(user) = session.user.as_ref() else {
        // Authenticated with no user is an identity-collaborator invariant
        // violation; treat it as signed out rather than crash.
        warn!("session authenticated without a user; treating as unauthenticated");
        return GuardState::Unauthenticated;
    };
    if !required_roles.is_empty() && !required_roles.contains(&user.role) {
        return GuardState::WrongRole;
    }
    GuardState::Authorized
}

/// What the navigation layer should do with a guarded route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum GuardOutcome {
    /// Session still resolving: render a placeholder, no navigation.
    Placeholder,
    /// Render the protected content unchanged.
    Render,
    Redirect(Redirect),
}

pub struct AuthGuard {
    login_path: String,
}

impl AuthGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        AuthGuard {
            login_path: login_path.into(),
        }
    }

    /// Resolves one route request. Pure in its arguments, so the caller can
    /// (and must) re-run it on every session emission or role-set change.
    ///
    /// A redirect whose target equals `current_path` degrades to rendering
    /// in place, so re-evaluation can never loop.
    pub fn resolve(
        &self,
        session: &Session,
        required_roles: &[Role],
        requested_path: &str,
        current_path: &str,
    ) -> GuardOutcome {
        match decide(session, required_roles) {
            GuardState::Loading => GuardOutcome::Placeholder,
            GuardState::Authorized => GuardOutcome::Render,
            GuardState::Unauthenticated => {
                self.redirect_unless_there(self.login_redirect(requested_path), current_path)
            }
            GuardState::WrongRole => {
                // decide() only returns WrongRole with a user present; a
                // missing user here means signed out, same as above.
                let Some(user) = session.user.as_ref() else {
                    return self
                        .redirect_unless_there(self.login_redirect(requested_path), current_path);
                };
                debug!(
                    role = user.role.as_str(),
                    requested_path, "denied route for wrong role"
                );
                self.redirect_unless_there(
                    Redirect {
                        to: user.role.dashboard_path().to_string(),
                        return_to: None,
                        notice: Some(Notice::warning(PERMISSION_DENIED_MESSAGE)),
                    },
                    current_path,
                )
            }
        }
    }

    fn login_redirect(&self, requested_path: &str) -> Redirect {
        Redirect {
            to: self.login_path.clone(),
            return_to: Some(requested_path.to_string()),
            notice: None,
        }
    }

    fn redirect_unless_there(&self, redirect: Redirect, current_path: &str) -> GuardOutcome {
        if redirect.to == current_path {
            GuardOutcome::Render
        } else {
            GuardOutcome::Redirect(redirect)
        }
    }
}
