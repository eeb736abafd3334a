pub mod form_state;
pub mod outcome;
pub mod report;
pub mod validation;
pub mod verdict;

pub use form_state::{FormState, FoundFormState, MissingFormState};
pub use outcome::{Notice, Outcome, Severity};
pub use report::{fields, FoundReportDraft, MissingReportDraft, SkinColor};
pub use validation::ValidationErrors;
pub use verdict::{MatchPresentation, MatchReport, Verdict, CONFIDENCE_THRESHOLD};
