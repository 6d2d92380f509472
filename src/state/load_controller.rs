//! Fetch lifecycle for one screen.
//!
//! At most one request is in flight. `load()` flips the loading flag before
//! the worker starts, and a resolution updates the loading flag and receipts
//! in a single step.

use super::ViewState;
use crate::fetch::{FetchOutcome, PendingFetch, ReceiptFetcher, spawn_fetch};
use crate::logging::{Diagnostic, DiagnosticSink};
use crate::model::MessageId;
use serde::Deserialize;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// How a `success: false` response is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalFailurePolicy {
    /// Same as a transport failure: loading cleared, receipts kept.
    #[default]
    ResetLoading,
    /// Leave the state untouched. Loading stays set and later loads are
    /// ignored for the lifetime of the screen.
    KeepLoading,
}

impl LogicalFailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalFailurePolicy::ResetLoading => "reset-loading",
            LogicalFailurePolicy::KeepLoading => "keep-loading",
        }
    }
}

/// Result of calling [`LoadController::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    Issued,
    /// A fetch is already running; nothing was done.
    AlreadyLoading,
}

pub struct LoadController {
    message_id: MessageId,
    fetcher: Arc<dyn ReceiptFetcher>,
    diagnostics: Rc<dyn DiagnosticSink>,
    policy: LogicalFailurePolicy,
    in_flight: Option<PendingFetch>,
    issued: u64,
}

impl LoadController {
    pub fn new(
        message_id: MessageId,
        fetcher: Arc<dyn ReceiptFetcher>,
        diagnostics: Rc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            message_id,
            fetcher,
            diagnostics,
            policy: LogicalFailurePolicy::default(),
            in_flight: None,
            issued: 0,
        }
    }

    pub fn with_policy(mut self, policy: LogicalFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    pub fn policy(&self) -> LogicalFailurePolicy {
        self.policy
    }

    /// Number of requests started so far.
    pub fn requests_issued(&self) -> u64 {
        self.issued
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a fetch unless one is already running.
    pub fn load(&mut self, state: &mut ViewState) -> LoadRequest {
        if state.loading() {
            debug!(message_id = %self.message_id, "Load ignored, fetch already in progress");
            return LoadRequest::AlreadyLoading;
        }

        state.begin_loading();
        self.issued += 1;
        debug!(message_id = %self.message_id, request = self.issued, "Fetching read receipts");

        match spawn_fetch(Arc::clone(&self.fetcher), self.message_id.clone()) {
            Ok(pending) => self.in_flight = Some(pending),
            Err(error) => self.apply(state, FetchOutcome::TransportFailure(error)),
        }
        LoadRequest::Issued
    }

    /// Apply the outcome if the worker has finished. Returns true if one was applied.
    pub fn poll(&mut self, state: &mut ViewState) -> bool {
        let Some(outcome) = self.in_flight.as_ref().and_then(PendingFetch::try_take) else {
            return false;
        };
        self.resolve(state, outcome);
        true
    }

    /// Block until the in-flight fetch resolves or `timeout` passes.
    ///
    /// Returns true if an outcome was applied.
    pub fn settle(&mut self, state: &mut ViewState, timeout: Duration) -> bool {
        let Some(outcome) = self.in_flight.as_ref().and_then(|p| p.wait(timeout)) else {
            return false;
        };
        self.resolve(state, outcome);
        true
    }

    fn resolve(&mut self, state: &mut ViewState, outcome: FetchOutcome) {
        if let Some(pending) = self.in_flight.take() {
            debug!(
                message_id = %self.message_id,
                elapsed_ms = pending.elapsed().as_millis() as u64,
                outcome = outcome.kind(),
                "Fetch resolved"
            );
        }
        self.apply(state, outcome);
    }

    fn apply(&self, state: &mut ViewState, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Success(receipts) => {
                info!(
                    message_id = %self.message_id,
                    count = receipts.len(),
                    "Read receipts loaded"
                );
                state.finish_loading(Some(receipts));
            }
            FetchOutcome::LogicalFailure { reason } => {
                self.diagnostics.report(Diagnostic::FetchRejected {
                    message_id: self.message_id.clone(),
                    reason,
                });
                match self.policy {
                    LogicalFailurePolicy::ResetLoading => state.finish_loading(None),
                    LogicalFailurePolicy::KeepLoading => {}
                }
            }
            FetchOutcome::TransportFailure(error) => {
                self.diagnostics.report(Diagnostic::FetchFailed {
                    message_id: self.message_id.clone(),
                    error: error.to_string(),
                });
                state.finish_loading(None);
            }
        }
    }
}

impl std::fmt::Debug for LoadController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadController")
            .field("message_id", &self.message_id)
            .field("policy", &self.policy)
            .field("in_flight", &self.in_flight.is_some())
            .field("issued", &self.issued)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchResponse;
    use crate::logging::DiagnosticLog;
    use crate::model::{FetchError, ReadReceipt, ReceiptId, ReceiptUser, UserId};

    struct Unused;

    impl ReceiptFetcher for Unused {
        fn get_read_receipts(&self, _: &MessageId) -> Result<FetchResponse, FetchError> {
            Ok(FetchResponse::success(Vec::new()))
        }
    }

    fn receipt(id: &str) -> ReadReceipt {
        ReadReceipt::new(
            ReceiptId::new(id).unwrap(),
            1_610_000_000_000,
            ReceiptUser::new(UserId::new("u1").unwrap(), "alice", "Alice"),
        )
    }

    fn controller(policy: LogicalFailurePolicy) -> (LoadController, Rc<DiagnosticLog>) {
        let log = Rc::new(DiagnosticLog::new());
        let sink: Rc<dyn DiagnosticSink> = log.clone();
        let controller = LoadController::new(MessageId::new("m1").unwrap(), Arc::new(Unused), sink)
            .with_policy(policy);
        (controller, log)
    }

    fn loading_with(receipts: Vec<ReadReceipt>) -> ViewState {
        let mut state = ViewState::from_parts(false, receipts);
        state.begin_loading();
        state
    }

    #[test]
    fn success_replaces_receipts_and_clears_loading() {
        let (controller, log) = controller(LogicalFailurePolicy::ResetLoading);
        let mut state = loading_with(vec![receipt("old")]);

        controller.apply(&mut state, FetchOutcome::Success(vec![receipt("r1"), receipt("r2")]));

        assert_eq!(state, ViewState::from_parts(false, vec![receipt("r1"), receipt("r2")]));
        assert!(log.is_empty());
    }

    #[test]
    fn transport_failure_keeps_prior_receipts_and_reports() {
        let (controller, log) = controller(LogicalFailurePolicy::ResetLoading);
        let mut state = loading_with(vec![receipt("r1")]);

        controller.apply(&mut state, FetchOutcome::TransportFailure(FetchError::WorkerLost));

        assert_eq!(state, ViewState::from_parts(false, vec![receipt("r1")]));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].code(), "err_fetch_read_receipts");
    }

    #[test]
    fn logical_failure_resets_loading_like_transport_failure() {
        let (controller, log) = controller(LogicalFailurePolicy::ResetLoading);
        let mut state = loading_with(vec![receipt("r1")]);

        controller.apply(
            &mut state,
            FetchOutcome::LogicalFailure {
                reason: Some("error-not-allowed".to_string()),
            },
        );

        assert_eq!(state, ViewState::from_parts(false, vec![receipt("r1")]));
        assert_eq!(log.entries()[0].code(), "warn_read_receipts_rejected");
    }

    #[test]
    fn keep_loading_policy_leaves_loading_stuck() {
        let (controller, _log) = controller(LogicalFailurePolicy::KeepLoading);
        let mut state = loading_with(Vec::new());

        controller.apply(&mut state, FetchOutcome::LogicalFailure { reason: None });

        assert!(state.loading(), "Legacy behaviour keeps the spinner up");
    }

    #[test]
    fn load_while_loading_is_a_no_op() {
        let (mut controller, _log) = controller(LogicalFailurePolicy::ResetLoading);
        let mut state = loading_with(vec![receipt("r1")]);
        let before = state.clone();

        assert_eq!(controller.load(&mut state), LoadRequest::AlreadyLoading);
        assert_eq!(state, before);
        assert_eq!(controller.requests_issued(), 0);
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn load_sets_loading_before_returning() {
        let (mut controller, _log) = controller(LogicalFailurePolicy::ResetLoading);
        let mut state = ViewState::new();

        assert_eq!(controller.load(&mut state), LoadRequest::Issued);
        assert!(state.loading());
        assert_eq!(controller.requests_issued(), 1);

        assert!(controller.settle(&mut state, Duration::from_secs(5)));
        assert!(!state.loading());
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn poll_and_settle_without_fetch_do_nothing() {
        let (mut controller, _log) = controller(LogicalFailurePolicy::ResetLoading);
        let mut state = ViewState::new();
        assert!(!controller.poll(&mut state));
        assert!(!controller.settle(&mut state, Duration::from_millis(1)));
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        #[derive(Deserialize)]
        struct Doc {
            logical_failure: LogicalFailurePolicy,
        }
        let doc: Doc = toml::from_str(r#"logical_failure = "keep-loading""#).unwrap();
        assert_eq!(doc.logical_failure, LogicalFailurePolicy::KeepLoading);
        assert_eq!(LogicalFailurePolicy::default().as_str(), "reset-loading");
    }
}
