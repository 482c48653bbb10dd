pub mod guard;
pub mod session;

pub use guard::{decide, AuthGuard, GuardOutcome, GuardState};
pub use session::{channel, Session, SessionHandle, SessionPublisher};
