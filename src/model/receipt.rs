//! Read receipt values as delivered by the server.

use super::identifiers::{ReceiptId, UserId};
use chrono::DateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// The user who read the message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReceiptUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    pub username: String,
    /// Human-readable name. Servers omit it for users without one.
    #[serde(rename = "name", alias = "displayName", default)]
    pub display_name: String,
}

impl ReceiptUser {
    pub fn new(id: UserId, username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            display_name: display_name.into(),
        }
    }
}

/// A record that a specific user read the message, and when.
///
/// Immutable once received. Equality is structural over every field, which
/// is what the render gate relies on for its deep comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadReceipt {
    #[serde(rename = "_id", alias = "id")]
    pub id: ReceiptId,
    /// Epoch milliseconds.
    #[serde(
        rename = "ts",
        alias = "timestamp",
        deserialize_with = "deserialize_epoch_millis"
    )]
    pub timestamp: i64,
    pub user: ReceiptUser,
}

impl ReadReceipt {
    pub fn new(id: ReceiptId, timestamp: i64, user: ReceiptUser) -> Self {
        Self {
            id,
            timestamp,
            user,
        }
    }

    /// Primary row label: the display name, or the username when the
    /// server sent no name.
    pub fn label(&self) -> &str {
        if self.user.display_name.is_empty() {
            &self.user.username
        } else {
            &self.user.display_name
        }
    }

    /// Secondary row text, `@username`.
    pub fn handle(&self) -> String {
        format!("@{}", self.user.username)
    }
}

/// Timestamp encodings seen on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Extended {
        #[serde(rename = "$date")]
        date: i64,
    },
    Text(String),
}

fn deserialize_epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => Ok(ms),
        RawTimestamp::Extended { date } => Ok(date),
        RawTimestamp::Text(raw) => DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.timestamp_millis())
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", raw, e))),
    }
}
