use uuid::Uuid;

/// HTTP header carrying the request ID to the backend
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID attached to one outbound recommendation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Creates a new random request ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the UUID as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Span covering one submission, keyed by request ID and sequence number
pub fn submission_span(request_id: &RequestId, seq: u64, keyword: &str) -> tracing::Span {
    tracing::info_span!(
        "recommendation_request",
        request_id = %request_id,
        seq = seq,
        keyword = %keyword,
    )
}
