pub mod cv;
pub mod job;
pub mod user;

pub use cv::CvProfile;
pub use job::JobPosting;
pub use user::{Role, UserAccount};
