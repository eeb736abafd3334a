//! Submission controller for both report forms
//!
//! One submit action runs: claim the in-flight flag, validate, build the
//! multipart payload from the live photo selection, post it, interpret the
//! answer. The flag is released by a guard on every exit path, including a
//! panic inside the transport, so a failure can never lock the form.

use crate::error::AppError;
use crate::models::report::fields;
use crate::models::{FoundReportDraft, MissingReportDraft, Outcome};
use crate::services::{validation, verdict};
use match_client::{
    Acknowledgment, Endpoint, ErrorBody, MatchResponse, MultipartPayload, RawResponse,
    ReportTransport,
};
use photo_selection::SelectedPhoto;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Longest slice of a plain-text error body shown to the user
const MAX_ERROR_TEXT: usize = 200;

pub struct SubmissionController<T: ReportTransport> {
    transport: Arc<T>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when dropped
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<T: ReportTransport> SubmissionController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_transport(Arc::new(transport))
    }

    pub fn with_transport(transport: Arc<T>) -> Self {
        Self {
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_claim(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.in_flight,
            })
    }

    /// Submits a missing-child report with the currently selected photos
    pub async fn submit_missing(
        &self,
        draft: &MissingReportDraft,
        photos: &[SelectedPhoto],
    ) -> Outcome {
        let Some(_guard) = self.try_claim() else {
            log::debug!("Missing-child submission rejected: another one is in flight");
            return Outcome::Busy;
        };

        let errors = validation::validate_missing(draft, photos);
        if !errors.is_empty() {
            log::debug!("Missing-child report invalid: {:?}", errors.fields());
            return Outcome::ValidationFailed(errors);
        }

        match self.send_missing(draft, photos).await {
            Ok(ack) => {
                log::info!(
                    "Missing-child report accepted (case id: {})",
                    ack.case_id.as_deref().unwrap_or("none")
                );
                Outcome::Submitted(ack)
            }
            Err(e) => {
                log::warn!("Missing-child report failed: {}", e);
                Outcome::Failed(e.user_message())
            }
        }
    }

    /// Submits a found-child report and resolves the verdict of the answer
    pub async fn submit_found(
        &self,
        draft: &FoundReportDraft,
        photo: Option<&SelectedPhoto>,
    ) -> Outcome {
        let Some(_guard) = self.try_claim() else {
            log::debug!("Found-child submission rejected: another one is in flight");
            return Outcome::Busy;
        };

        let errors = validation::validate_found(draft, photo);
        if !errors.is_empty() {
            log::debug!("Found-child report invalid: {:?}", errors.fields());
            return Outcome::ValidationFailed(errors);
        }

        match self.send_found(draft, photo).await {
            Ok(response) => {
                let report = verdict::resolve(response);
                log::info!("Found-child report answered: {:?}", report.verdict);
                Outcome::Matched(report)
            }
            Err(e) => {
                log::warn!("Found-child report failed: {}", e);
                Outcome::Failed(e.user_message())
            }
        }
    }

    async fn send_missing(
        &self,
        draft: &MissingReportDraft,
        photos: &[SelectedPhoto],
    ) -> Result<Acknowledgment, AppError> {
        let payload = build_missing_payload(draft, photos)?;
        let response = self.post(Endpoint::ReportMissing, payload).await?;
        Acknowledgment::parse(&response.body).map_err(|e| AppError::ResponseParse(e.to_string()))
    }

    async fn send_found(
        &self,
        draft: &FoundReportDraft,
        photo: Option<&SelectedPhoto>,
    ) -> Result<MatchResponse, AppError> {
        let payload = build_found_payload(draft, photo)?;
        let response = self.post(Endpoint::ReportFound, payload).await?;
        MatchResponse::parse(&response.body).map_err(|e| AppError::ResponseParse(e.to_string()))
    }

    async fn post(
        &self,
        endpoint: Endpoint,
        payload: MultipartPayload,
    ) -> Result<RawResponse, AppError> {
        let response = self.transport.post_multipart(endpoint, payload).await?;
        if !response.is_success() {
            return Err(AppError::Transport(failure_message(&response)));
        }
        Ok(response)
    }
}

/// Message for a non-2xx answer: the JSON `error` if present, else the
/// status with whatever plain text the service sent.
pub fn failure_message(response: &RawResponse) -> String {
    if let Some(error) = ErrorBody::extract(&response.body) {
        return error;
    }

    let text = response.body.trim();
    if text.is_empty() {
        format!("Server error: {}", response.status)
    } else {
        let shown: String = text.chars().take(MAX_ERROR_TEXT).collect();
        format!("Server error: {} - {}", response.status, shown)
    }
}

/// Drops any file parts stored under `name` and attaches the live selection.
/// An empty selection is rejected here as well, even though the validator
/// already checks it.
fn attach_photos(
    payload: &mut MultipartPayload,
    name: &str,
    photos: &[&SelectedPhoto],
    missing_message: &str,
) -> Result<(), AppError> {
    if photos.is_empty() {
        return Err(AppError::Validation(missing_message.to_string()));
    }

    payload.remove(name);
    for photo in photos {
        payload.push_file(
            name,
            photo.file_name.clone(),
            photo.mime_type(),
            photo.bytes.clone(),
        );
    }
    Ok(())
}

pub fn build_missing_payload(
    draft: &MissingReportDraft,
    photos: &[SelectedPhoto],
) -> Result<MultipartPayload, AppError> {
    let mut payload = MultipartPayload::new();
    payload.push_text(fields::CHILD_NAME, draft.child_name.trim());
    payload.push_text(fields::AGE, draft.age.trim());
    payload.push_text(fields::HEIGHT, draft.height.trim());
    payload.push_text(fields::SKIN_COLOR, draft.skin_color.trim());
    payload.push_text(fields::LOCATION, draft.location.trim());
    payload.push_text(
        fields::DISTINGUISHING_FEATURES,
        draft.distinguishing_features.trim(),
    );
    payload.push_text(fields::PARENT_PHONE, draft.parent_phone.as_str());
    payload.push_text(fields::POLICE_CONTACT, draft.police_contact.as_str());

    let selection: Vec<&SelectedPhoto> = photos.iter().collect();
    attach_photos(
        &mut payload,
        fields::PHOTOS,
        &selection,
        "Please select at least one photo",
    )?;
    Ok(payload)
}

pub fn build_found_payload(
    draft: &FoundReportDraft,
    photo: Option<&SelectedPhoto>,
) -> Result<MultipartPayload, AppError> {
    let mut payload = MultipartPayload::new();
    payload.push_text(fields::CHILD_NAME, draft.child_name.trim());
    payload.push_text(fields::REPORTER_NAME, draft.reporter_name.trim());
    payload.push_text(fields::REPORTER_PHONE, draft.reporter_phone.as_str());
    payload.push_text(fields::LOCATION, draft.location.trim());
    payload.push_text(fields::DETAILS, draft.details.trim());

    let selection: Vec<&SelectedPhoto> = photo.into_iter().collect();
    attach_photos(
        &mut payload,
        fields::FOUND_PHOTO,
        &selection,
        "Please select a photo",
    )?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoundFormState, MissingFormState, Verdict};
    use async_trait::async_trait;
    use match_client::ClientError;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// In-memory transport that records every call and answers from a script
    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<(Endpoint, MultipartPayload)>>,
        reply: Mutex<Option<Result<RawResponse, String>>>,
        panic_on_send: bool,
        hold: Option<(Notify, Notify)>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Mutex::new(Some(Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }))),
                ..Default::default()
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Mutex::new(Some(Err(message.to_string()))),
                ..Default::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_call(&self) -> (Endpoint, MultipartPayload) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ReportTransport for RecordingTransport {
        async fn post_multipart(
            &self,
            endpoint: Endpoint,
            payload: MultipartPayload,
        ) -> Result<RawResponse, ClientError> {
            self.calls.lock().unwrap().push((endpoint, payload));
            if let Some((entered, release)) = &self.hold {
                entered.notify_one();
                release.notified().await;
            }
            if self.panic_on_send {
                panic!("transport blew up");
            }
            let reply = self.reply.lock().unwrap().clone();
            match reply {
                Some(Ok(response)) => Ok(response),
                Some(Err(msg)) => Err(ClientError::Network(msg)),
                None => Ok(RawResponse {
                    status: 200,
                    body: "{}".to_string(),
                }),
            }
        }
    }

    fn photo(name: &str) -> SelectedPhoto {
        SelectedPhoto::from_bytes(name, vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap()
    }

    fn missing_draft() -> MissingReportDraft {
        MissingReportDraft {
            child_name: "Asha Verma".to_string(),
            age: "7".to_string(),
            height: "121".to_string(),
            skin_color: "medium".to_string(),
            location: "Central Station".to_string(),
            distinguishing_features: "small mole above right eyebrow".to_string(),
            parent_phone: "9876543210".to_string(),
            police_contact: "1002003000".to_string(),
        }
    }

    fn found_draft() -> FoundReportDraft {
        FoundReportDraft {
            child_name: String::new(),
            reporter_name: "Jane Doe".to_string(),
            reporter_phone: "5551234567".to_string(),
            location: "Pier 39".to_string(),
            details: "wearing a red jacket".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_report_never_reaches_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let controller = SubmissionController::with_transport(transport.clone());

        let mut draft = missing_draft();
        draft.parent_phone = "123-456-7890".to_string();
        let outcome = controller.submit_missing(&draft, &[photo("a.jpg")]).await;
        match outcome {
            Outcome::ValidationFailed(errors) => {
                assert_eq!(errors.fields(), vec![fields::PARENT_PHONE]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let outcome = controller.submit_found(&FoundReportDraft::default(), None).await;
        assert!(matches!(outcome, Outcome::ValidationFailed(_)));

        assert_eq!(transport.call_count(), 0);
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_missing_report_end_to_end() {
        let transport = Arc::new(RecordingTransport::replying(
            200,
            r#"{"message": "Report submitted successfully", "case_id": "c-42"}"#,
        ));
        let controller = SubmissionController::with_transport(transport.clone());

        let mut state = MissingFormState::new();
        state.draft = missing_draft();
        state.select_photos(vec![photo("asha.jpg")]);

        assert!(state.begin_submission());
        let outcome = controller.submit_missing(&state.draft, &state.photos).await;
        state.finish_submission(&outcome);

        assert_eq!(transport.call_count(), 1);
        let (endpoint, payload) = transport.last_call();
        assert_eq!(endpoint, Endpoint::ReportMissing);
        assert_eq!(payload.text_count(), 8);
        assert_eq!(payload.file_names(fields::PHOTOS), vec!["asha.jpg"]);
        assert_eq!(payload.text_value(fields::CHILD_NAME), Some("Asha Verma"));
        assert_eq!(payload.text_value(fields::SKIN_COLOR), Some("medium"));
        assert_eq!(
            payload.text_value(fields::DISTINGUISHING_FEATURES),
            Some("small mole above right eyebrow")
        );

        let notice = outcome.notice().unwrap();
        assert_eq!(notice.title, "Report Submitted");
        assert!(!notice.is_destructive());

        assert_eq!(state.draft, MissingReportDraft::default());
        assert!(state.photos.is_empty());
        assert!(state.previews.is_empty());
        assert!(!state.in_flight);
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_all_selected_photos_are_sent_in_order() {
        let transport = Arc::new(RecordingTransport::default());
        let controller = SubmissionController::with_transport(transport.clone());

        let photos = vec![photo("one.jpg"), photo("two.png"), photo("three.jpeg")];
        controller.submit_missing(&missing_draft(), &photos).await;

        let (_, payload) = transport.last_call();
        assert_eq!(
            payload.file_names(fields::PHOTOS),
            vec!["one.jpg", "two.png", "three.jpeg"]
        );
    }

    #[tokio::test]
    async fn test_found_report_confirmed_match_keeps_form() {
        let transport = Arc::new(RecordingTransport::replying(
            200,
            r#"{"match_found": true, "match_method": "facial_recognition", "confidence": 0.76,
                "child_name": "X", "last_seen_location": "Y", "notification_sent": true}"#,
        ));
        let controller = SubmissionController::with_transport(transport.clone());

        let mut state = FoundFormState::new();
        state.draft = found_draft();
        state.select_photos(vec![photo("found.jpg")]);

        state.begin_submission();
        let outcome = controller
            .submit_found(&state.draft, state.photos.first())
            .await;
        state.finish_submission(&outcome);

        let (endpoint, payload) = transport.last_call();
        assert_eq!(endpoint, Endpoint::ReportFound);
        assert_eq!(payload.file_names(fields::FOUND_PHOTO), vec!["found.jpg"]);
        assert_eq!(payload.text_value(fields::REPORTER_NAME), Some("Jane Doe"));

        let notice = outcome.notice().unwrap();
        assert_eq!(notice.title, "Match Found!");
        assert!(notice.description.contains("matches with X"));
        assert!(notice.description.contains("last seen at Y"));

        let report = state.last_match.as_ref().unwrap();
        assert_eq!(report.verdict, Verdict::ConfirmedMatch);
        assert_eq!(report.response.child_name.as_deref(), Some("X"));
        assert_eq!(state.draft, found_draft());
        assert_eq!(state.photos.len(), 1);
        assert!(!state.in_flight);
    }

    #[tokio::test]
    async fn test_found_report_no_match_resets_form() {
        let transport = Arc::new(RecordingTransport::replying(
            200,
            r#"{"message": "No match found", "match_found": false}"#,
        ));
        let controller = SubmissionController::with_transport(transport);

        let mut state = FoundFormState::new();
        state.draft = found_draft();
        state.select_photos(vec![photo("found.jpg")]);

        state.begin_submission();
        let outcome = controller
            .submit_found(&state.draft, state.photos.first())
            .await;
        state.finish_submission(&outcome);

        assert_eq!(outcome.notice().unwrap().title, "No Match Found");
        assert_eq!(state.draft, FoundReportDraft::default());
        assert!(state.photos.is_empty());
        assert_eq!(state.last_match.unwrap().verdict, Verdict::NoMatch);
    }

    #[tokio::test]
    async fn test_network_failure_preserves_form() {
        let transport = Arc::new(RecordingTransport::failing("connection refused"));
        let controller = SubmissionController::with_transport(transport.clone());

        let mut state = MissingFormState::new();
        state.draft = missing_draft();
        state.select_photos(vec![photo("asha.jpg")]);

        state.begin_submission();
        let outcome = controller.submit_missing(&state.draft, &state.photos).await;
        state.finish_submission(&outcome);

        assert_eq!(
            outcome,
            Outcome::Failed("Network error: connection refused".to_string())
        );
        assert!(outcome.notice().unwrap().is_destructive());
        assert_eq!(state.draft, missing_draft());
        assert_eq!(state.photos.len(), 1);
        assert!(!state.in_flight);
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_error_status_messages() {
        let transport = Arc::new(RecordingTransport::replying(
            400,
            r#"{"error": "No files uploaded"}"#,
        ));
        let controller = SubmissionController::with_transport(transport);
        let outcome = controller
            .submit_missing(&missing_draft(), &[photo("a.jpg")])
            .await;
        assert_eq!(outcome, Outcome::Failed("No files uploaded".to_string()));

        let transport = Arc::new(RecordingTransport::replying(502, ""));
        let controller = SubmissionController::with_transport(transport);
        let outcome = controller
            .submit_found(&found_draft(), Some(&photo("a.jpg")))
            .await;
        assert_eq!(outcome, Outcome::Failed("Server error: 502".to_string()));

        let transport = Arc::new(RecordingTransport::replying(500, "Internal Server Error"));
        let controller = SubmissionController::with_transport(transport);
        let outcome = controller
            .submit_found(&found_draft(), Some(&photo("a.jpg")))
            .await;
        assert_eq!(
            outcome,
            Outcome::Failed("Server error: 500 - Internal Server Error".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_failure() {
        let transport = Arc::new(RecordingTransport::replying(200, "<html>proxy page</html>"));
        let controller = SubmissionController::with_transport(transport);

        let mut state = FoundFormState::new();
        state.draft = found_draft();
        state.select_photos(vec![photo("found.jpg")]);
        let outcome = controller
            .submit_found(&state.draft, state.photos.first())
            .await;
        state.finish_submission(&outcome);

        match &outcome {
            Outcome::Failed(msg) => assert!(msg.starts_with("Unexpected response from server")),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(state.draft, found_draft());
        assert!(state.last_match.is_none());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let transport = Arc::new(RecordingTransport {
            hold: Some((Notify::new(), Notify::new())),
            ..Default::default()
        });
        let controller = Arc::new(SubmissionController::with_transport(transport.clone()));

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move {
                let photos = vec![photo("a.jpg")];
                controller.submit_missing(&missing_draft(), &photos).await
            })
        };

        let (entered, release) = transport.hold.as_ref().unwrap();
        entered.notified().await;
        assert!(controller.is_in_flight());

        let second = controller
            .submit_missing(&missing_draft(), &[photo("b.jpg")])
            .await;
        assert_eq!(second, Outcome::Busy);
        let second_found = controller
            .submit_found(&found_draft(), Some(&photo("c.jpg")))
            .await;
        assert_eq!(second_found, Outcome::Busy);

        release.notify_one();
        let first = first.await.unwrap();
        assert!(matches!(first, Outcome::Submitted(_)));
        assert_eq!(transport.call_count(), 1);
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_flag_released_when_transport_panics() {
        let transport = Arc::new(RecordingTransport {
            panic_on_send: true,
            ..Default::default()
        });
        let controller = Arc::new(SubmissionController::with_transport(transport.clone()));

        let task = {
            let controller = controller.clone();
            tokio::spawn(async move {
                let photos = vec![photo("a.jpg")];
                controller.submit_missing(&missing_draft(), &photos).await
            })
        };
        assert!(task.await.is_err());
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn test_payload_builders_reject_empty_selection() {
        assert!(matches!(
            build_missing_payload(&missing_draft(), &[]),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            build_found_payload(&found_draft(), None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_attach_photos_replaces_stale_parts() {
        let mut payload = MultipartPayload::new();
        payload.push_file(fields::FOUND_PHOTO, "stale.jpg", "image/jpeg", vec![0]);
        let fresh = photo("fresh.png");
        attach_photos(&mut payload, fields::FOUND_PHOTO, &[&fresh], "Please select a photo")
            .unwrap();
        assert_eq!(payload.file_names(fields::FOUND_PHOTO), vec!["fresh.png"]);
    }

    #[test]
    fn test_failure_message_truncates_long_bodies() {
        let response = RawResponse {
            status: 500,
            body: "x".repeat(1000),
        };
        let message = failure_message(&response);
        assert_eq!(message.len(), "Server error: 500 - ".len() + MAX_ERROR_TEXT);
    }
}
