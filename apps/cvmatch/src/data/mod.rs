//! The data-fetch collaborator boundary. Pages consume fully-resolved
//! collections; where they come from is this trait's problem.

pub mod fixtures;

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::{CvProfile, JobPosting, UserAccount};

/// Supplies the collections behind the listing screens.
///
/// Carried in `PlatformState` as `Arc<dyn DataSource>`; swap the
/// implementation without touching any page code.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn jobs(&self) -> Result<Vec<JobPosting>, CoreError>;

    async fn cvs(&self) -> Result<Vec<CvProfile>, CoreError>;

    async fn users(&self) -> Result<Vec<UserAccount>, CoreError>;
}

pub use fixtures::FixtureSource;
