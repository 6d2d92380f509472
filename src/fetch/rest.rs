//! REST fetcher for `chat.getMessageReadReceipts`.

use super::{FetchResponse, ReceiptFetcher, decode_response};
use crate::config::Settings;
use crate::model::{FetchError, MessageId};
use std::time::Duration;
use tracing::debug;

const ENDPOINT: &str = "/api/v1/chat.getMessageReadReceipts";

/// Blocking HTTP fetcher authenticated with a user id and personal token.
#[derive(Debug, Clone)]
pub struct RestFetcher {
    base_url: String,
    user_id: Option<String>,
    auth_token: Option<String>,
    timeout: Duration,
}

impl RestFetcher {
    pub fn new(
        base_url: impl Into<String>,
        user_id: Option<String>,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            user_id,
            auth_token,
            timeout,
        }
    }

    pub fn from_settings(settings: &Settings, timeout: Duration) -> Self {
        Self::new(
            settings.base_url.clone(),
            settings.user_id.clone(),
            settings.auth_token.clone(),
            timeout,
        )
    }

    /// Full endpoint URL, tolerant of a trailing slash on the base URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ENDPOINT)
    }

    fn credentials(&self) -> Result<(&str, &str), FetchError> {
        let user_id = self
            .user_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(FetchError::MissingCredentials("user id"))?;
        let token = self
            .auth_token
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(FetchError::MissingCredentials("auth token"))?;
        Ok((user_id, token))
    }
}

impl ReceiptFetcher for RestFetcher {
    fn get_read_receipts(&self, message_id: &MessageId) -> Result<FetchResponse, FetchError> {
        let (user_id, token) = self.credentials()?;
        let url = self.endpoint();
        debug!(url = %url, message_id = %message_id, "Requesting read receipts");

        // Error statuses still carry a JSON body worth decoding.
        let mut response = ureq::get(url)
            .header("X-User-Id", user_id)
            .header("X-Auth-Token", token)
            .query("messageId", message_id.as_str())
            .config()
            .http_status_as_error(false)
            .timeout_global(Some(self.timeout))
            .build()
            .call()?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        debug!(status, bytes = body.len(), "Read receipts response received");

        decode_response(&body).map_err(|e| FetchError::UnexpectedResponse {
            status,
            reason: e.to_string(),
        })
    }
}
