//! The platform route registry and the contracts the navigation layer
//! fulfils: redirect instructions, transient notices, and history
//! ownership. This crate decides; the navigation collaborator moves.

use serde::Serialize;
use tracing::debug;

use crate::auth::guard::{AuthGuard, GuardOutcome};
use crate::auth::session::Session;
use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A transient, user-facing message (rendered as a toast, never a hard
/// error page).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// An instruction for the navigation collaborator. `return_to` lets the
/// identity flow send the user back after login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Redirect {
    pub to: String,
    pub return_to: Option<String>,
    pub notice: Option<Notice>,
}

/// Owns actual history mutation. Implementations must tolerate receiving
/// the same instruction twice (guard re-evaluation is idempotent, delivery
/// may not be).
pub trait Navigator {
    fn navigate(&mut self, redirect: &Redirect);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Empty role set admits any authenticated user.
    RequireRoles(&'static [Role]),
}

#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub path: &'static str,
    pub access: Access,
}

/// What the navigation layer does with a resolved route request.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    NotFound,
    Placeholder,
    Render,
    Redirect(Redirect),
}

pub struct RouteRegistry {
    routes: Vec<RouteSpec>,
}

const CANDIDATE: &[Role] = &[Role::Candidate];
const EMPLOYER: &[Role] = &[Role::Employer];
const ADMIN: &[Role] = &[Role::Admin];
const ANY_AUTHENTICATED: &[Role] = &[];

impl RouteRegistry {
    /// The CV Matcher route table: public entry points plus the three role
    /// areas.
    pub fn platform() -> Self {
        RouteRegistry {
            routes: vec![
                RouteSpec { path: "/", access: Access::Public },
                RouteSpec { path: "/login", access: Access::Public },
                RouteSpec { path: "/register", access: Access::Public },
                RouteSpec { path: "/jobs", access: Access::Public },
                RouteSpec { path: "/profile", access: Access::RequireRoles(ANY_AUTHENTICATED) },
                RouteSpec { path: "/candidate/dashboard", access: Access::RequireRoles(CANDIDATE) },
                RouteSpec { path: "/candidate/jobs", access: Access::RequireRoles(CANDIDATE) },
                RouteSpec { path: "/candidate/cv", access: Access::RequireRoles(CANDIDATE) },
                RouteSpec { path: "/candidate/applications", access: Access::RequireRoles(CANDIDATE) },
                RouteSpec { path: "/employer/dashboard", access: Access::RequireRoles(EMPLOYER) },
                RouteSpec { path: "/employer/jobs", access: Access::RequireRoles(EMPLOYER) },
                RouteSpec { path: "/employer/candidates", access: Access::RequireRoles(EMPLOYER) },
                RouteSpec { path: "/admin/dashboard", access: Access::RequireRoles(ADMIN) },
                RouteSpec { path: "/admin/users", access: Access::RequireRoles(ADMIN) },
                RouteSpec { path: "/admin/jobs", access: Access::RequireRoles(ADMIN) },
            ],
        }
    }

    pub fn find(&self, path: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Resolves a route change end to end: registry lookup, then the guard
    /// for protected routes. Re-run on every session emission.
    pub fn resolve(
        &self,
        guard: &AuthGuard,
        session: &Session,
        requested_path: &str,
        current_path: &str,
    ) -> RouteOutcome {
        let Some(route) = self.find(requested_path) else {
            debug!(requested_path, "no route registered");
            return RouteOutcome::NotFound;
        };
        match route.access {
            Access::Public => RouteOutcome::Render,
            Access::RequireRoles(roles) => {
                match guard.resolve(session, roles, requested_path, current_path) {
                    GuardOutcome::Placeholder => RouteOutcome::Placeholder,
                    GuardOutcome::Render => RouteOutcome::Render,
                    GuardOutcome::Redirect(redirect) => RouteOutcome::Redirect(redirect),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::auth::guard::PERMISSION_DENIED_MESSAGE;
    use crate::models::UserAccount;

    /// Test double standing in for the history-owning collaborator.
    #[derive(Default)]
    struct RecordingNavigator {
        visits: Vec<Redirect>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, redirect: &Redirect) {
            self.visits.push(redirect.clone());
        }
    }

    fn make_user(role: Role) -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role,
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }

    fn setup() -> (RouteRegistry, AuthGuard) {
        (RouteRegistry::platform(), AuthGuard::new("/login"))
    }

    #[test]
    fn test_public_routes_render_for_anyone() {
        let (registry, guard) = setup();
        for path in ["/", "/login", "/jobs"] {
            let outcome = registry.resolve(&guard, &Session::anonymous(), path, "/");
            assert_eq!(outcome, RouteOutcome::Render, "path {path}");
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let (registry, guard) = setup();
        let session = Session::signed_in(make_user(Role::Admin));
        assert_eq!(
            registry.resolve(&guard, &session, "/nope", "/"),
            RouteOutcome::NotFound
        );
    }

    #[test]
    fn test_each_role_reaches_its_own_area() {
        let (registry, guard) = setup();
        let cases = [
            (Role::Candidate, "/candidate/jobs"),
            (Role::Employer, "/employer/candidates"),
            (Role::Admin, "/admin/users"),
        ];
        for (role, path) in cases {
            let session = Session::signed_in(make_user(role));
            assert_eq!(
                registry.resolve(&guard, &session, path, "/"),
                RouteOutcome::Render,
                "role {role:?} path {path}"
            );
        }
    }

    #[test]
    fn test_cross_role_access_redirects_home_with_notice() {
        let (registry, guard) = setup();
        let session = Session::signed_in(make_user(Role::Employer));
        match registry.resolve(&guard, &session, "/admin/users", "/employer/jobs") {
            RouteOutcome::Redirect(redirect) => {
                assert_eq!(redirect.to, "/employer/dashboard");
                assert_eq!(
                    redirect.notice.map(|n| n.message),
                    Some(PERMISSION_DENIED_MESSAGE.to_string())
                );
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_profile_admits_any_authenticated_role() {
        let (registry, guard) = setup();
        for role in [Role::Candidate, Role::Employer, Role::Admin] {
            let session = Session::signed_in(make_user(role));
            assert_eq!(
                registry.resolve(&guard, &session, "/profile", "/"),
                RouteOutcome::Render
            );
        }
        match registry.resolve(&guard, &Session::anonymous(), "/profile", "/") {
            RouteOutcome::Redirect(redirect) => assert_eq!(redirect.to, "/login"),
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_session_renders_placeholder_on_protected_routes() {
        let (registry, guard) = setup();
        assert_eq!(
            registry.resolve(&guard, &Session::loading(), "/admin/jobs", "/"),
            RouteOutcome::Placeholder
        );
    }

    #[test]
    fn test_navigator_receives_redirect_instructions() {
        let (registry, guard) = setup();
        let mut navigator = RecordingNavigator::default();

        let outcome = registry.resolve(&guard, &Session::anonymous(), "/candidate/cv", "/");
        if let RouteOutcome::Redirect(redirect) = outcome {
            navigator.navigate(&redirect);
        }
        assert_eq!(navigator.visits.len(), 1);
        assert_eq!(navigator.visits[0].to, "/login");
        assert_eq!(
            navigator.visits[0].return_to.as_deref(),
            Some("/candidate/cv")
        );
    }
}
