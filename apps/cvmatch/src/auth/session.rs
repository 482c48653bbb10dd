//! The externally-owned authentication snapshot and its reactive feed.
//!
//! The identity collaborator owns the publisher half and emits a fresh
//! `Session` on app load, login, and logout; guard evaluations hold handles
//! and re-resolve on every emission.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::UserAccount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub user: Option<UserAccount>,
}

impl Session {
    /// Identity resolution still in flight.
    pub fn loading() -> Self {
        Session {
            is_loading: true,
            is_authenticated: false,
            user: None,
        }
    }

    /// No authenticated user.
    pub fn anonymous() -> Self {
        Session {
            is_loading: false,
            is_authenticated: false,
            user: None,
        }
    }

    pub fn signed_in(user: UserAccount) -> Self {
        Session {
            is_loading: false,
            is_authenticated: true,
            user: Some(user),
        }
    }
}

/// Creates the session channel. The publisher goes to the identity
/// collaborator; handles go to everything that guards on session state.
pub fn channel() -> (SessionPublisher, SessionHandle) {
    let (tx, rx) = watch::channel(Session::loading());
    (SessionPublisher { tx }, SessionHandle { rx })
}

pub struct SessionPublisher {
    tx: watch::Sender<Session>,
}

impl SessionPublisher {
    pub fn publish(&self, session: Session) {
        // Receivers may all be gone during shutdown; publishing is then a no-op.
        let _ = self.tx.send(session);
    }
}

#[derive(Debug, Clone)]
pub struct SessionHandle {
    rx: watch::Receiver<Session>,
}

impl SessionHandle {
    /// The latest emitted session.
    pub fn snapshot(&self) -> Session {
        self.rx.borrow().clone()
    }

    /// Waits for the next emission. Returns `false` once the publisher is
    /// dropped and no further sessions will arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
