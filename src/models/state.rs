use chrono::{DateTime, Utc};
use serde::Serialize;

use super::RankedResult;

/// Lifecycle phase of the recommendation request
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Snapshot of the controller's request state
///
/// Outside the controller this is read-only: transitions are crate-private and
/// always replace results and error together, so a snapshot never mixes the
/// two.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RequestState {
    phase: Phase,
    keyword: String,
    results: Vec<RankedResult>,
    error_message: Option<String>,
    request_seq: u64,
    resolved_at: Option<DateTime<Utc>>,
}

impl RequestState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last submitted keyword, trimmed; empty before the first submission
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Results ordered by ascending rank; empty unless `Success`
    pub fn results(&self) -> &[RankedResult] {
        &self.results
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Sequence number of the request this state belongs to (0 while idle)
    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// A search completed but the backend found nothing
    ///
    /// Distinguishes "searched, zero found" from "never searched".
    pub fn has_searched_without_results(&self) -> bool {
        self.phase == Phase::Success && self.results.is_empty()
    }

    pub(crate) fn begin(&mut self, keyword: String, seq: u64) {
        self.phase = Phase::Loading;
        self.keyword = keyword;
        self.results.clear();
        self.error_message = None;
        self.request_seq = seq;
        self.resolved_at = None;
    }

    pub(crate) fn succeed(&mut self, results: Vec<RankedResult>) {
        self.phase = Phase::Success;
        self.results = results;
        self.error_message = None;
        self.resolved_at = Some(Utc::now());
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = Phase::Error;
        self.results.clear();
        self.error_message = Some(message);
        self.resolved_at = Some(Utc::now());
    }
}
