//! # Match Client
//!
//! Multipart HTTP client for the remote matching service that backs the
//! missing-child and found-child report forms.
//!
//! This crate provides:
//! - Wire models for both endpoints (`MatchResponse`, `Acknowledgment`, `ErrorBody`)
//! - A transport-agnostic multipart payload (`MultipartPayload`)
//! - The `ReportTransport` trait and its reqwest implementation
//!
//! ## Separation of Concerns
//!
//! This crate only moves bytes. It does **not**:
//! - Validate form input (handled by the application)
//! - Interpret HTTP status codes or decide on a verdict (handled by the application)
//! - Retry failed requests
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use match_client::{ClientConfig, Endpoint, MatchServiceClient, MultipartPayload, ReportTransport};
//!
//! let client = MatchServiceClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//! let mut payload = MultipartPayload::new();
//! payload.push_text("reporterName", "Jane Doe");
//! payload.push_file("foundPhoto", "child.jpg", "image/jpeg", bytes);
//!
//! let response = client.post_multipart(Endpoint::ReportFound, payload).await?;
//! ```

pub mod models;
pub mod service;

pub use models::{
    Acknowledgment, Endpoint, ErrorBody, MatchMethod, MatchResponse, MultipartPayload, Part,
    PartValue, RawResponse,
};
pub use service::{ClientConfig, ClientError, MatchServiceClient, ReportTransport};
