use serde::{Deserialize, Serialize};

/// Endpoints exposed by the matching service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /api/report-missing`
    ReportMissing,
    /// `POST /api/report-found`
    ReportFound,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ReportMissing => "/api/report-missing",
            Endpoint::ReportFound => "/api/report-found",
        }
    }
}

/// Value carried by a single multipart part
#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
    },
}

/// A named multipart part
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

/// Ordered multipart payload, independent of any HTTP library.
///
/// Parts are transmitted in insertion order. A name may appear more than
/// once (repeated file parts such as `photos`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    parts: Vec<Part>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(Part {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
    }

    pub fn push_file(
        &mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) {
        self.parts.push(Part {
            name: name.into(),
            value: PartValue::File {
                file_name: file_name.into(),
                mime_type: mime_type.into(),
                bytes,
            },
        });
    }

    /// Removes every part with the given name, returning how many were removed
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.parts.len();
        self.parts.retain(|p| p.name != name);
        before - self.parts.len()
    }

    /// First text value stored under `name`
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(v) if p.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// File names of all file parts stored under `name`, in order
    pub fn file_names(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|p| match &p.value {
                PartValue::File { file_name, .. } if p.name == name => Some(file_name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn text_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|p| matches!(p.value, PartValue::Text(_)))
            .count()
    }

    pub fn file_count(&self) -> usize {
        self.parts.len() - self.text_count()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }
}

/// Status and body of whatever the service answered
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Which signal produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    FacialRecognition,
    MoleDescription,
    /// A method name this client does not know
    Other,
}

impl MatchMethod {
    pub fn as_str(&self) -> &str {
        match self {
            MatchMethod::FacialRecognition => "facial_recognition",
            MatchMethod::MoleDescription => "mole_description",
            MatchMethod::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "facial_recognition" => MatchMethod::FacialRecognition,
            "mole_description" => MatchMethod::MoleDescription,
            _ => MatchMethod::Other,
        }
    }

    /// Human-readable name used in notifications
    pub fn description(&self) -> &str {
        match self {
            MatchMethod::FacialRecognition => "facial recognition",
            MatchMethod::MoleDescription => "mole description",
            MatchMethod::Other => "an unknown method",
        }
    }
}

/// Body of a successful `POST /api/report-found`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub match_found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_sent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mole_match_confirmation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MatchResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Parsed `match_method`, `None` when the service omitted it
    pub fn method(&self) -> Option<MatchMethod> {
        self.match_method.as_deref().map(MatchMethod::from_str)
    }
}

/// Body of a successful `POST /api/report-missing`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Acknowledgment {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub case_id: Option<String>,
}

impl Acknowledgment {
    /// Any JSON object is accepted; unknown keys are ignored
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Optional JSON error body of a non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Returns the `error` message if the body is JSON carrying one
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|e| !e.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facial_match() {
        let body = r#"{
            "match_found": true,
            "match_method": "facial_recognition",
            "child_name": "Asha",
            "confidence": 0.91,
            "last_seen_location": "Central Station",
            "notification_sent": true,
            "mole_match_confirmation": false
        }"#;
        let response = MatchResponse::parse(body).unwrap();
        assert!(response.match_found);
        assert_eq!(response.method(), Some(MatchMethod::FacialRecognition));
        assert_eq!(response.confidence, Some(0.91));
        assert_eq!(response.notification_sent, Some(true));
    }

    #[test]
    fn test_parse_no_match_with_message() {
        let response =
            MatchResponse::parse(r#"{"message": "No match found", "match_found": false}"#).unwrap();
        assert!(!response.match_found);
        assert_eq!(response.method(), None);
        assert_eq!(response.message.as_deref(), Some("No match found"));
    }

    #[test]
    fn test_unknown_method_is_other() {
        let response =
            MatchResponse::parse(r#"{"match_found": true, "match_method": "gait"}"#).unwrap();
        assert_eq!(response.method(), Some(MatchMethod::Other));
    }

    #[test]
    fn test_parse_rejects_missing_match_found() {
        assert!(MatchResponse::parse(r#"{"child_name": "X"}"#).is_err());
        assert!(MatchResponse::parse("<html>oops</html>").is_err());
    }

    #[test]
    fn test_error_body_extract() {
        assert_eq!(
            ErrorBody::extract(r#"{"error": "No files uploaded"}"#),
            Some("No files uploaded".to_string())
        );
        assert_eq!(ErrorBody::extract(r#"{"error": "  "}"#), None);
        assert_eq!(ErrorBody::extract("Internal Server Error"), None);
    }

    #[test]
    fn test_acknowledgment_parse() {
        let ack = Acknowledgment::parse(
            r#"{"message": "Report submitted successfully", "case_id": "abc-123"}"#,
        )
        .unwrap();
        assert_eq!(ack.case_id.as_deref(), Some("abc-123"));
        assert_eq!(Acknowledgment::parse("{}").unwrap(), Acknowledgment::default());
        assert!(Acknowledgment::parse("OK").is_err());
    }

    #[test]
    fn test_payload_remove_and_reattach() {
        let mut payload = MultipartPayload::new();
        payload.push_text("childName", "Asha");
        payload.push_file("photos", "stale.jpg", "image/jpeg", vec![1]);
        assert_eq!(payload.remove("photos"), 1);
        payload.push_file("photos", "a.png", "image/png", vec![2]);
        payload.push_file("photos", "b.jpg", "image/jpeg", vec![3]);

        assert_eq!(payload.file_names("photos"), vec!["a.png", "b.jpg"]);
        assert_eq!(payload.text_value("childName"), Some("Asha"));
        assert_eq!(payload.text_count(), 1);
        assert_eq!(payload.file_count(), 2);
    }

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse { status: 200, body: String::new() }.is_success());
        assert!(RawResponse { status: 204, body: String::new() }.is_success());
        assert!(!RawResponse { status: 302, body: String::new() }.is_success());
        assert!(!RawResponse { status: 500, body: String::new() }.is_success());
    }
}
