use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult, GENERIC_FAILURE_MESSAGE};

pub mod recommendation;
pub mod state;

pub use recommendation::{parse_collection, RankedResult, MAX_RANK, MIN_RANK};
pub use state::{Phase, RequestState};

/// Status value the backend uses to mark a successful response
pub const SUCCESS_STATUS: &str = "success";

// ============================================================================
// Recommendation API Types
// ============================================================================

/// Request body for POST /api/v1/top3
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordRequest {
    pub keyword: String,
}

/// Response envelope returned by the recommendation endpoint
///
/// `data` is kept as raw JSON so that each record can be validated
/// individually by [`RankedResult::parse`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Resolves the envelope into a ranked result set
    ///
    /// A success envelope without `data` is an empty result set.
    pub fn into_results(self) -> AppResult<Vec<RankedResult>> {
        if !self.is_success() {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(AppError::Backend(message));
        }

        match self.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(records)) => parse_collection(&records),
            Some(_) => Err(AppError::validation("data")),
        }
    }
}

/// Error body produced by the backend framework for unhandled failures
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// The `detail` text, when it is a plain string
    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}
