use std::sync::Arc;

use crate::auth::guard::AuthGuard;
use crate::auth::session::SessionHandle;
use crate::config::Config;
use crate::data::DataSource;
use crate::nav::RouteRegistry;

/// Shared collaborators handed to every page of the presentation shell.
pub struct PlatformState {
    pub data: Arc<dyn DataSource>,
    pub sessions: SessionHandle,
    pub guard: AuthGuard,
    pub routes: RouteRegistry,
    pub config: Config,
}

impl PlatformState {
    pub fn new(data: Arc<dyn DataSource>, sessions: SessionHandle, config: Config) -> Self {
        let guard = AuthGuard::new(config.login_path.clone());
        PlatformState {
            data,
            sessions,
            guard,
            routes: RouteRegistry::platform(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::{channel, Session};
    use crate::data::FixtureSource;
    use crate::nav::RouteOutcome;

    #[tokio::test]
    async fn test_state_wires_guard_routes_and_data_together() {
        let (publisher, handle) = channel();
        let state = PlatformState::new(
            Arc::new(FixtureSource::seeded()),
            handle,
            Config::default(),
        );

        publisher.publish(Session::anonymous());
        let session = state.sessions.snapshot();
        match state
            .routes
            .resolve(&state.guard, &session, "/candidate/jobs", "/")
        {
            RouteOutcome::Redirect(redirect) => assert_eq!(redirect.to, "/login"),
            other => panic!("expected redirect, got {other:?}"),
        }

        let jobs = state.data.jobs().await.unwrap();
        assert!(!jobs.is_empty());
    }
}
