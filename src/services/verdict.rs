use crate::models::verdict::{
    display_child_name, display_location, format_percent, threshold_percent,
};
use crate::models::{MatchPresentation, MatchReport, Verdict, CONFIDENCE_THRESHOLD};
use match_client::{MatchMethod, MatchResponse};

/// Derives the verdict from the independent match signals in a response.
///
/// Mole-description matches carry no score and are trusted as reported.
/// Facial matches must carry a confidence of at least `CONFIDENCE_THRESHOLD`;
/// a facial match without any confidence is not trusted at all.
pub fn resolve_verdict(response: &MatchResponse) -> Verdict {
    if !response.match_found {
        return Verdict::NoMatch;
    }

    match response.method() {
        Some(MatchMethod::MoleDescription) => Verdict::ConfirmedMatch,
        Some(MatchMethod::FacialRecognition) => match response.confidence {
            None => Verdict::NoMatch,
            Some(c) if c >= CONFIDENCE_THRESHOLD => Verdict::ConfirmedMatch,
            Some(_) => Verdict::LowConfidenceMatch,
        },
        Some(MatchMethod::Other) | None => Verdict::NoMatch,
    }
}

pub fn resolve(response: MatchResponse) -> MatchReport {
    let verdict = resolve_verdict(&response);
    MatchReport { response, verdict }
}

/// What the match card renders for a report
pub fn present(report: &MatchReport) -> MatchPresentation {
    let response = &report.response;
    match report.verdict {
        Verdict::ConfirmedMatch => {
            let method = response.method().unwrap_or(MatchMethod::Other);
            let facial = method == MatchMethod::FacialRecognition;
            MatchPresentation::Confirmed {
                child_name: display_child_name(response.child_name.as_deref()),
                location: display_location(response.last_seen_location.as_deref()),
                method,
                confidence: response.confidence.filter(|_| facial).map(format_percent),
                mole_confirmed: facial && response.mole_match_confirmation == Some(true),
                notification_sent: response.notification_sent,
            }
        }
        Verdict::LowConfidenceMatch => MatchPresentation::LowConfidence {
            confidence: format_percent(response.confidence.unwrap_or(0.0)),
            threshold: threshold_percent(),
        },
        Verdict::NoMatch => MatchPresentation::Nothing,
    }
}
