use std::time::Duration;

/// Fallback text when the backend reports failure without a message
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to get recommendations";

/// Fallback text for a non-success HTTP status with no usable body
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Network response was not ok";

/// Client-level errors
///
/// None of these cross the controller boundary: every variant is folded into
/// an `Error` phase carrying [`AppError::user_message`].
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed backend payload
    #[error("Invalid field in recommendation payload: {field}")]
    Validation { field: &'static str },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Well-formed response whose status is not "success"
    #[error("Backend failure: {0}")]
    Backend(String),
}

impl AppError {
    pub fn validation(field: &'static str) -> Self {
        AppError::Validation { field }
    }

    /// The single human-readable message surfaced in the `Error` phase
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation { field } => {
                format!("Received malformed recommendation data ({})", field)
            }
            AppError::Http(e) if e.is_connect() => {
                "Could not connect to the recommendation service".to_string()
            }
            AppError::Http(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
            AppError::Transport(msg) => msg.clone(),
            AppError::Timeout(_) => self.to_string(),
            AppError::Backend(msg) if msg.trim().is_empty() => GENERIC_FAILURE_MESSAGE.to_string(),
            AppError::Backend(msg) => msg.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
