//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod receipt;

// Re-export for convenience
pub use error::{AppError, FetchError};
pub use identifiers::{
    InvalidMessageId, InvalidReceiptId, InvalidUserId, MessageId, ReceiptId, UserId,
};
pub use key_action::KeyAction;
pub use receipt::{ReadReceipt, ReceiptUser};
