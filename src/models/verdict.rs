use match_client::{MatchMethod, MatchResponse};

/// Minimum facial-recognition confidence accepted as a match.
///
/// Every message that mentions the threshold is derived from this value.
pub const CONFIDENCE_THRESHOLD: f64 = 0.75;

/// Final decision presented for a found-child report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    ConfirmedMatch,
    LowConfidenceMatch,
    NoMatch,
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        !matches!(self, Verdict::NoMatch)
    }
}

/// Raw service response together with the verdict derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub response: MatchResponse,
    pub verdict: Verdict,
}

/// What the match card shows for a report
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPresentation {
    Confirmed {
        child_name: String,
        location: String,
        method: MatchMethod,
        /// Formatted percentage, facial matches only
        confidence: Option<String>,
        mole_confirmed: bool,
        /// `None` when the service did not say whether it notified anyone
        notification_sent: Option<bool>,
    },
    LowConfidence {
        confidence: String,
        threshold: String,
    },
    Nothing,
}

/// Formats a [0, 1] score as a percentage with one decimal, e.g. `76.0%`
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Threshold as shown to users, e.g. `75%`
pub fn threshold_percent() -> String {
    format!("{}%", (CONFIDENCE_THRESHOLD * 100.0).round())
}

/// Location to display; the service reports unknown locations as `"Unknown"`
pub fn display_location(location: Option<&str>) -> String {
    match location.map(str::trim) {
        Some(loc) if !loc.is_empty() && loc != "Unknown" => loc.to_string(),
        _ => "Unknown location".to_string(),
    }
}

pub fn display_child_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => "an unnamed child".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_location() {
        assert_eq!(display_location(Some("Central Station")), "Central Station");
        assert_eq!(display_location(Some("Unknown")), "Unknown location");
        assert_eq!(display_location(Some("  ")), "Unknown location");
        assert_eq!(display_location(None), "Unknown location");
        assert_eq!(display_location(Some("Unknown location")), "Unknown location");
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(0.76), "76.0%");
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(threshold_percent(), "75%");
    }
}
