pub mod submission;
pub mod validation;
pub mod verdict;

pub use submission::SubmissionController;
pub use validation::{validate_found, validate_missing};
pub use verdict::{present, resolve, resolve_verdict};
