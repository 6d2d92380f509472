//! Read receipt fetching.
//!
//! A [`ReceiptFetcher`] performs one blocking request. The [`worker`] module
//! runs it off the UI thread and hands back a single [`FetchOutcome`].

use crate::model::{FetchError, MessageId, ReadReceipt};
use serde::Deserialize;

pub mod file;
pub mod rest;
pub mod worker;

pub use file::FileFetcher;
pub use rest::RestFetcher;
pub use worker::{PendingFetch, spawn_fetch};

/// Wire shape of a read receipts response.
///
/// `receipts` may be absent on failure responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchResponse {
    pub success: bool,
    #[serde(default)]
    pub receipts: Vec<ReadReceipt>,
    #[serde(default)]
    pub error: Option<String>,
}

impl FetchResponse {
    pub fn success(receipts: Vec<ReadReceipt>) -> Self {
        Self {
            success: true,
            receipts,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            receipts: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Decode a response body.
pub fn decode_response(body: &str) -> Result<FetchResponse, serde_json::Error> {
    serde_json::from_str(body)
}

/// Source of read receipts for a message.
///
/// Implementations block until the request completes. They are shared with
/// the worker thread, hence `Send + Sync`.
pub trait ReceiptFetcher: Send + Sync {
    fn get_read_receipts(&self, message_id: &MessageId) -> Result<FetchResponse, FetchError>;
}

/// Resolution of one fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server returned `success: true` with these receipts, in server order.
    Success(Vec<ReadReceipt>),
    /// The server answered with `success: false`.
    LogicalFailure { reason: Option<String> },
    /// The request did not produce a decodable response.
    TransportFailure(FetchError),
}

impl FetchOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchOutcome::Success(_) => "success",
            FetchOutcome::LogicalFailure { .. } => "logical_failure",
            FetchOutcome::TransportFailure(_) => "transport_failure",
        }
    }
}

impl From<Result<FetchResponse, FetchError>> for FetchOutcome {
    fn from(result: Result<FetchResponse, FetchError>) -> Self {
        match result {
            Ok(response) if response.success => FetchOutcome::Success(response.receipts),
            Ok(response) => FetchOutcome::LogicalFailure {
                reason: response.error,
            },
            Err(error) => FetchOutcome::TransportFailure(error),
        }
    }
}
