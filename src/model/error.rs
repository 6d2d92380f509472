//! Error types for rrview.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`FetchError`] - Read-receipt request failures (transport, decode, credentials)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: the screen clears its loading flag, keeps the
//! receipts it already had, and reports the error on the diagnostic channel.
//! There is no retry and no user-facing error banner. Config and terminal errors
//! are fatal and propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or resolved.
    ///
    /// **Recovery**: Fatal. Printed to stderr before exit.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A read-receipt fetch failed.
    ///
    /// Only surfaces here in print mode, where a failed fetch makes the
    /// process exit non-zero. The TUI absorbs these errors.
    #[error("Failed to fetch read receipts: {0}")]
    Fetch(#[from] FetchError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt graceful terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while requesting read receipts.
///
/// Every variant is a *transport* failure in the sense of the load protocol:
/// the request did not produce a decodable `{success, receipts}` body. A body
/// that decodes with `success: false` is a logical failure and is not an error
/// value at all (see [`FetchOutcome`](crate::fetch::FetchOutcome)).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request could not be performed (DNS, TLS, connection reset, timeout).
    #[error("Request failed: {0}")]
    Request(#[from] ureq::Error),

    /// The server answered with a body that is not a read-receipts response.
    #[error("Unexpected response (HTTP {status}): {reason}")]
    UnexpectedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Decoder error message.
        reason: String,
    },

    /// A fixture or response document could not be decoded.
    #[error("Invalid read receipts document: {0}")]
    Decode(#[from] serde_json::Error),

    /// A fixture file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the fixture file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The REST fetcher needs both a user id and an auth token.
    #[error("Missing credentials: {0} is not configured")]
    MissingCredentials(&'static str),

    /// The background fetch ended without delivering a result.
    #[error("Fetch worker exited without a result")]
    WorkerLost,

    /// No outcome arrived within the allotted time.
    #[error("No response within {0:?}")]
    TimedOut(std::time::Duration),

    /// The background fetch thread could not be started.
    #[error("Failed to start fetch worker: {0}")]
    Spawn(#[source] std::io::Error),
}
