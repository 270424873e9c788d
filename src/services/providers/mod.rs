/// Recommendation backend abstraction
///
/// The controller only talks to the backend through [`RecommendationProvider`],
/// so tests can swap in scripted or mocked backends.
use crate::{error::AppResult, models::ApiEnvelope, request_id::RequestId};

pub mod http;

pub use http::HttpRecommendationProvider;

/// Trait for recommendation backends
///
/// One call is one outbound request carrying `{keyword}`. Implementations
/// return the decoded response envelope; interpreting `status` and `data` is
/// left to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Request recommendations for an already-trimmed keyword
    async fn fetch(&self, keyword: &str, request_id: RequestId) -> AppResult<ApiEnvelope>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
