use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::Instrument;

use crate::{
    error::{AppError, AppResult},
    models::{Phase, RankedResult, RequestState},
    request_id::{submission_span, RequestId},
    services::providers::RecommendationProvider,
};

/// What a call to [`RecommendationController::submit`] did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank keyword; no request issued and state untouched
    Ignored,
    /// The request's outcome was published with this phase
    Applied(Phase),
    /// A later submission was issued first; this outcome was discarded
    Superseded,
}

/// Owns the recommendation request lifecycle
///
/// `Idle -> Loading -> Success | Error`, re-enterable from any resolved phase.
/// Every issued request is tagged with a sequence number and only the most
/// recently issued one may publish its outcome.
pub struct RecommendationController {
    provider: Arc<dyn RecommendationProvider>,
    timeout: Duration,
    issued: AtomicU64,
    state: watch::Sender<RequestState>,
}

impl RecommendationController {
    pub fn new(provider: Arc<dyn RecommendationProvider>, timeout: Duration) -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            provider,
            timeout,
            issued: AtomicU64::new(0),
            state,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published state
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Submits a keyword and resolves its request
    ///
    /// The `Loading` transition happens before the first await. Blank input
    /// is a silent no-op. A call made while another is in flight supersedes
    /// it, whichever of the two completes first.
    pub async fn submit(&self, keyword_text: &str) -> SubmitOutcome {
        let keyword = keyword_text.trim();
        if keyword.is_empty() {
            tracing::debug!("Ignoring blank keyword");
            return SubmitOutcome::Ignored;
        }

        let keyword = keyword.to_string();
        let mut seq = 0;
        self.state.send_modify(|state| {
            seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            state.begin(keyword.clone(), seq);
        });

        let request_id = RequestId::new();
        let span = submission_span(&request_id, seq, &keyword);
        self.resolve(seq, keyword, request_id).instrument(span).await
    }

    async fn resolve(&self, seq: u64, keyword: String, request_id: RequestId) -> SubmitOutcome {
        tracing::info!(provider = self.provider.name(), "Requesting recommendations");

        let outcome = self.fetch(&keyword, request_id).await;

        let mut applied = None;
        self.state.send_if_modified(|state| {
            if self.issued.load(Ordering::SeqCst) != seq {
                return false;
            }
            match outcome {
                Ok(results) => {
                    tracing::info!(results = results.len(), "Recommendations received");
                    state.succeed(results);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Recommendation request failed");
                    state.fail(err.user_message());
                }
            }
            applied = Some(state.phase());
            true
        });

        match applied {
            Some(phase) => SubmitOutcome::Applied(phase),
            None => {
                tracing::debug!("Discarding outcome of superseded request");
                SubmitOutcome::Superseded
            }
        }
    }

    async fn fetch(&self, keyword: &str, request_id: RequestId) -> AppResult<Vec<RankedResult>> {
        let envelope = tokio::time::timeout(self.timeout, self.provider.fetch(keyword, request_id))
            .await
            .map_err(|_| AppError::Timeout(self.timeout))??;

        envelope.into_results()
    }
}
