use std::fmt;

/// Central error types for the Reunite app
#[derive(Debug)]
pub enum AppError {
    /// Invalid form input, or a submission attempted without a photo
    Validation(String),
    /// No response from the matching service, or a non-2xx status
    Transport(String),
    /// A 2xx response whose body could not be understood
    ResponseParse(String),
    /// Configuration file could not be read or written
    Config(String),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Photo could not be selected or read
    Photo(photo_selection::PickerError),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AppError::ResponseParse(msg) => write!(f, "Response parse error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Photo(e) => write!(f, "Photo error: {}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<match_client::ClientError> for AppError {
    fn from(e: match_client::ClientError) -> Self {
        AppError::Transport(e.to_string())
    }
}

impl From<photo_selection::PickerError> for AppError {
    fn from(e: photo_selection::PickerError) -> Self {
        AppError::Photo(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(e: toml::ser::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-facing messages for notifications
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Transport(msg) => msg.clone(),
            AppError::ResponseParse(msg) => format!("Unexpected response from server: {}", msg),
            AppError::Config(msg) => format!("Configuration error: {}", msg),
            AppError::Filesystem(_) => {
                "Error accessing files. Please check app permissions.".to_string()
            }
            AppError::Photo(e) => e.to_string(),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
