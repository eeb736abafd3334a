use crate::models::report::fields;
use crate::models::{FoundReportDraft, MissingReportDraft, ValidationErrors};
use photo_selection::SelectedPhoto;

const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";

/// Exactly ten ASCII digits, nothing else (no spaces, dashes or country code)
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_positive_whole_number(value: &str) -> bool {
    matches!(value.trim().parse::<u32>(), Ok(n) if n > 0)
}

fn is_positive_number(value: &str) -> bool {
    matches!(value.trim().parse::<f64>(), Ok(n) if n.is_finite() && n > 0.0)
}

/// Validates the missing-child form. `photos` is the live selection, not a
/// copy taken with the field values.
pub fn validate_missing(draft: &MissingReportDraft, photos: &[SelectedPhoto]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&draft.child_name) {
        errors.insert(fields::CHILD_NAME, "Child's name is required");
    }
    if !is_positive_whole_number(&draft.age) {
        errors.insert(fields::AGE, "Age must be a positive whole number");
    }
    if !is_positive_number(&draft.height) {
        errors.insert(fields::HEIGHT, "Height must be a positive number");
    }
    // The select only offers known values, so presence is all that is checked
    if is_blank(&draft.skin_color) {
        errors.insert(fields::SKIN_COLOR, "Please select skin color");
    }
    if is_blank(&draft.location) {
        errors.insert(fields::LOCATION, "Last seen location is required");
    }
    if !is_valid_phone(&draft.parent_phone) {
        errors.insert(fields::PARENT_PHONE, PHONE_MESSAGE);
    }
    if !is_valid_phone(&draft.police_contact) {
        errors.insert(fields::POLICE_CONTACT, PHONE_MESSAGE);
    }
    if photos.is_empty() {
        errors.insert(fields::PHOTOS, "Please select at least one photo");
    }

    errors
}

/// Validates the found-child form. `photo` is the live selection.
pub fn validate_found(draft: &FoundReportDraft, photo: Option<&SelectedPhoto>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&draft.reporter_name) {
        errors.insert(fields::REPORTER_NAME, "Your name is required");
    }
    if !is_valid_phone(&draft.reporter_phone) {
        errors.insert(fields::REPORTER_PHONE, PHONE_MESSAGE);
    }
    if is_blank(&draft.location) {
        errors.insert(fields::LOCATION, "Location where child was found is required");
    }
    if photo.is_none() {
        errors.insert(fields::FOUND_PHOTO, "Please select a photo");
    }

    errors
}
