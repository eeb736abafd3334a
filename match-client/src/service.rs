use crate::models::{Endpoint, MultipartPayload, PartValue, RawResponse};
use async_trait::async_trait;

/// Error type for transport operations
#[derive(Debug)]
pub enum ClientError {
    /// No HTTP response was obtained (connection refused, DNS, TLS, reset)
    Network(String),
    /// The request could not be built
    InvalidRequest(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Sends a multipart payload to one of the service endpoints.
///
/// Every HTTP response is `Ok`, whatever its status; interpreting the status
/// is left to the caller. Only a missing response is an error.
#[async_trait]
pub trait ReportTransport: Send + Sync {
    async fn post_multipart(
        &self,
        endpoint: Endpoint,
        payload: MultipartPayload,
    ) -> Result<RawResponse, ClientError>;
}

/// Connection settings for the matching service
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            user_agent: "Reunite/0.1.0".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

/// reqwest-backed transport for the matching service
pub struct MatchServiceClient {
    base_url: String,
    http: reqwest::Client,
}

impl MatchServiceClient {
    /// Build the client once; it is reused for every submission.
    ///
    /// Only the connect phase is bounded. Face matching on the service side
    /// can take a while, so the request itself has no deadline.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidRequest(format!(
                "Service URL must start with http:// or https://: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| ClientError::InvalidRequest(format!("Client build failed: {}", e)))?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Checks that the service answers at all. Any status counts as reachable.
    pub async fn ping(&self) -> Result<u16, ClientError> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;
        Ok(response.status().as_u16())
    }

    fn build_form(payload: MultipartPayload) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new();
        for part in payload.into_parts() {
            form = match part.value {
                PartValue::Text(value) => form.text(part.name, value),
                PartValue::File {
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let file_part = reqwest::multipart::Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&mime_type)
                        .map_err(|e| {
                            ClientError::InvalidRequest(format!(
                                "Invalid MIME type '{}': {}",
                                mime_type, e
                            ))
                        })?;
                    form.part(part.name, file_part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl ReportTransport for MatchServiceClient {
    async fn post_multipart(
        &self,
        endpoint: Endpoint,
        payload: MultipartPayload,
    ) -> Result<RawResponse, ClientError> {
        let url = self.url_for(endpoint);
        log::debug!(
            "POST {} ({} text parts, {} file parts)",
            url,
            payload.text_count(),
            payload.file_count()
        );

        let form = Self::build_form(payload)?;

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        // An unreadable body still leaves us with a usable status
        let body = response.text().await.unwrap_or_else(|e| {
            log::warn!("Failed to read response body from {}: {}", url, e);
            String::new()
        });

        log::info!("POST {} answered with status {}", url, status);
        Ok(RawResponse { status, body })
    }
}
