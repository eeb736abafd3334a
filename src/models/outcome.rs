use crate::models::validation::ValidationErrors;
use crate::models::verdict::{
    display_child_name, display_location, threshold_percent, MatchReport, Verdict,
};
use chrono::{DateTime, Local};
use match_client::Acknowledgment;

/// Result of one submit action, handed to the form state and the notification banner
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Rejected because a submission from this form is still outstanding
    Busy,
    /// Nothing was sent; the errors belong next to their fields
    ValidationFailed(ValidationErrors),
    /// Transport, status or parse failure, with the message to show
    Failed(String),
    /// Missing-child report accepted
    Submitted(Acknowledgment),
    /// Found-child report answered, whatever the verdict
    Matched(MatchReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Destructive,
}

/// Transient notification shown after a submission
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: DateTime<Local>,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            created_at: Local::now(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

impl Outcome {
    /// Notification for this outcome; `Busy` is silent
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Outcome::Busy => None,
            Outcome::ValidationFailed(_) => Some(Notice::new(
                "Validation Error",
                "Please correct the errors in the form",
                Severity::Destructive,
            )),
            Outcome::Failed(message) => {
                Some(Notice::new("Error", message.clone(), Severity::Destructive))
            }
            Outcome::Submitted(ack) => {
                let mut description =
                    "Missing child report has been submitted successfully.".to_string();
                if let Some(case_id) = ack.case_id.as_deref().filter(|c| !c.is_empty()) {
                    description.push_str(&format!(" Case ID: {}", case_id));
                }
                Some(Notice::new("Report Submitted", description, Severity::Normal))
            }
            Outcome::Matched(report) => Some(match_notice(report)),
        }
    }
}

fn match_notice(report: &MatchReport) -> Notice {
    let response = &report.response;
    match report.verdict {
        Verdict::ConfirmedMatch => {
            let method = response
                .method()
                .map(|m| m.description().to_string())
                .unwrap_or_else(|| "an unknown method".to_string());
            Notice::new(
                "Match Found!",
                format!(
                    "This child matches with {} (via {}) who was last seen at {}",
                    display_child_name(response.child_name.as_deref()),
                    method,
                    display_location(response.last_seen_location.as_deref())
                ),
                Severity::Normal,
            )
        }
        Verdict::LowConfidenceMatch => Notice::new(
            "No Match Found",
            format!(
                "The facial recognition confidence is below {}",
                threshold_percent()
            ),
            Severity::Normal,
        ),
        Verdict::NoMatch => Notice::new(
            "No Match Found",
            "The child could not be matched with any missing children reports.",
            Severity::Normal,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_client::MatchResponse;

    #[test]
    fn test_busy_is_silent() {
        assert!(Outcome::Busy.notice().is_none());
    }

    #[test]
    fn test_failure_notices_are_destructive() {
        assert!(Outcome::ValidationFailed(ValidationErrors::new())
            .notice()
            .unwrap()
            .is_destructive());
        let notice = Outcome::Failed("Server error: 500".into()).notice().unwrap();
        assert!(notice.is_destructive());
        assert_eq!(notice.description, "Server error: 500");
    }

    #[test]
    fn test_submitted_notice_includes_case_id() {
        let ack = Acknowledgment {
            message: Some("Report submitted successfully".into()),
            case_id: Some("1f0e-42".into()),
        };
        let notice = Outcome::Submitted(ack).notice().unwrap();
        assert_eq!(notice.title, "Report Submitted");
        assert!(notice.description.ends_with("Case ID: 1f0e-42"));
        assert!(!notice.is_destructive());
    }

    #[test]
    fn test_low_confidence_notice_uses_threshold() {
        let report = MatchReport {
            response: MatchResponse {
                match_found: true,
                match_method: Some("facial_recognition".into()),
                confidence: Some(0.6),
                ..Default::default()
            },
            verdict: Verdict::LowConfidenceMatch,
        };
        let notice = Outcome::Matched(report).notice().unwrap();
        assert_eq!(notice.title, "No Match Found");
        assert!(notice.description.contains("75%"));
        assert!(!notice.description.contains("80%"));
    }

    #[test]
    fn test_mole_match_notice() {
        let report = MatchReport {
            response: MatchResponse {
                match_found: true,
                match_method: Some("mole_description".into()),
                child_name: Some("Ravi".into()),
                last_seen_location: Some("Unknown".into()),
                ..Default::default()
            },
            verdict: Verdict::ConfirmedMatch,
        };
        let notice = Outcome::Matched(report).notice().unwrap();
        assert_eq!(
            notice.description,
            "This child matches with Ravi (via mole description) who was last seen at Unknown location"
        );
    }
}
