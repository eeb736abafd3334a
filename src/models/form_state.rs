use crate::models::outcome::Outcome;
use crate::models::report::{FoundReportDraft, MissingReportDraft};
use crate::models::validation::ValidationErrors;
use crate::models::verdict::MatchReport;
use photo_selection::{PreviewSet, SelectedPhoto};

/// Everything one form shows: typed values, the live photo selection with
/// its previews, inline errors, the in-flight flag and (found path) the last
/// match report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub photos: Vec<SelectedPhoto>,
    pub previews: PreviewSet,
    pub errors: ValidationErrors,
    pub in_flight: bool,
    /// Only ever set on the found-child form
    pub last_match: Option<MatchReport>,
}

pub type MissingFormState = FormState<MissingReportDraft>;
pub type FoundFormState = FormState<FoundReportDraft>;

impl<D: Default> FormState<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            photos: Vec::new(),
            previews: PreviewSet::new(),
            errors: ValidationErrors::new(),
            in_flight: false,
            last_match: None,
        }
    }

    /// Replaces the selection; previews of the previous selection are released
    pub fn select_photos(&mut self, photos: Vec<SelectedPhoto>) {
        self.previews.replace(&photos);
        self.photos = photos;
    }

    pub fn clear_photos(&mut self) {
        self.previews.release_all();
        self.photos.clear();
    }

    /// Clears fields, selection, previews and errors. The last match report
    /// is kept so the verdict of the submission that caused the reset stays known.
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.clear_photos();
        self.errors = ValidationErrors::new();
    }

    /// Marks the form as submitting. Returns `false` if it already was.
    pub fn begin_submission(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Applies the outcome and clears the in-flight flag, unless the outcome
    /// says another submission is still outstanding.
    pub fn finish_submission(&mut self, outcome: &Outcome) {
        self.apply_outcome(outcome);
        if !matches!(outcome, Outcome::Busy) {
            self.in_flight = false;
        }
    }

    pub fn apply_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Busy => {}
            Outcome::ValidationFailed(errors) => {
                self.errors = errors.clone();
            }
            Outcome::Failed(_) => {
                // Validation passed; keep every value for a retry
                self.errors = ValidationErrors::new();
                self.last_match = None;
            }
            Outcome::Submitted(_) => {
                self.last_match = None;
                self.reset();
            }
            Outcome::Matched(report) => {
                self.errors = ValidationErrors::new();
                self.last_match = Some(report.clone());
                if !report.verdict.is_match() {
                    self.reset();
                }
            }
        }
    }
}
