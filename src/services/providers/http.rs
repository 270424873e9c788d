//! HTTP recommendation backend
//!
//! POSTs `{"keyword": ...}` to the top-3 endpoint and decodes the
//! `{status, data, message}` envelope.

use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};

use crate::{
    config::Config,
    error::{AppError, AppResult, TRANSPORT_FAILURE_MESSAGE},
    models::{ApiEnvelope, ApiErrorBody, KeywordRequest},
    request_id::{RequestId, REQUEST_ID_HEADER},
    services::providers::RecommendationProvider,
};

#[derive(Clone)]
pub struct HttpRecommendationProvider {
    http_client: HttpClient,
    endpoint_url: String,
    timeout: Duration,
}

impl HttpRecommendationProvider {
    pub fn new(endpoint_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            endpoint_url,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(config.endpoint_url(), config.request_timeout())
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    fn map_transport_error(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::Timeout(self.timeout)
        } else {
            AppError::Http(err)
        }
    }
}

/// Builds the error for a non-success HTTP status
///
/// Prefers a message the backend put in the body, either in our envelope or
/// in a framework `detail` field.
fn failure_from_body(status: StatusCode, body: &str) -> AppError {
    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope>(body) {
        if let Some(message) = envelope.message.filter(|m| !m.trim().is_empty()) {
            return AppError::Backend(message);
        }
    }

    if let Ok(error_body) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(detail) = error_body.detail_text() {
            return AppError::Backend(detail.to_string());
        }
    }

    tracing::debug!(status = %status, "No usable error message in response body");
    AppError::Transport(TRANSPORT_FAILURE_MESSAGE.to_string())
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn fetch(&self, keyword: &str, request_id: RequestId) -> AppResult<ApiEnvelope> {
        let response = self
            .http_client
            .post(&self.endpoint_url)
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .json(&KeywordRequest {
                keyword: keyword.to_string(),
            })
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                provider = self.name(),
                "Recommendation endpoint returned non-success status"
            );
            return Err(failure_from_body(status, &body));
        }

        let envelope: ApiEnvelope = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, provider = self.name(), "Undecodable response body");
            AppError::validation("body")
        })?;

        tracing::info!(
            status = %envelope.status,
            provider = self.name(),
            "Recommendation response received"
        );

        Ok(envelope)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
