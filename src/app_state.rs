//! Shared application state handed to every screen through the Dioxus context

use crate::config::{self, AppConfig};
use crate::services::SubmissionController;
use match_client::MatchServiceClient;
use std::sync::Arc;

pub type Controller = SubmissionController<MatchServiceClient>;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` when the configured service URL could not be turned into a client
    pub client: Option<Arc<MatchServiceClient>>,
    /// Configuration or client problem to show on the home screen
    pub problem: Option<String>,
}

impl AppState {
    /// Loads the configuration from disk (falling back to defaults) and builds the client
    pub fn load() -> Self {
        match config::load_config() {
            Ok(cfg) => Self::from_config(cfg),
            Err(e) => {
                log::error!("Failed to load configuration: {}", e);
                let mut state = Self::from_config(AppConfig::default());
                state.problem = Some(e.user_message());
                state
            }
        }
    }

    pub fn from_config(config: AppConfig) -> Self {
        match MatchServiceClient::new(config.to_client_config()) {
            Ok(client) => {
                log::info!("Using matching service at {}", client.base_url());
                Self {
                    config,
                    client: Some(Arc::new(client)),
                    problem: None,
                }
            }
            Err(e) => {
                log::error!("Cannot create service client: {}", e);
                Self {
                    config,
                    client: None,
                    problem: Some(e.to_string()),
                }
            }
        }
    }

    /// A fresh controller sharing this state's client. Each form owns one, so
    /// the in-flight guard is per form.
    pub fn controller(&self) -> Option<Arc<Controller>> {
        self.client
            .clone()
            .map(|client| Arc::new(SubmissionController::with_transport(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_builds_client_and_controller() {
        let state = AppState::from_config(AppConfig::default());
        assert!(state.problem.is_none());
        let client = state.client.as_ref().unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");

        let first = state.controller().unwrap();
        let second = state.controller().unwrap();
        assert!(!first.is_in_flight());
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalid_service_url_is_reported() {
        let config = AppConfig {
            service_url: "ftp://example.org".to_string(),
            ..AppConfig::default()
        };
        let state = AppState::from_config(config);
        assert!(state.client.is_none());
        assert!(state.controller().is_none());
        assert!(state.problem.unwrap().starts_with("Invalid request"));
    }
}
