//! Read Receipt Viewer (rrview)
//!
//! Terminal screen listing the users who have read a chat message.
//!
//! This is the library root. The pure core lives in `model` and `state`;
//! `fetch` and `view` form the impure shell around it.

pub mod config;
pub mod fetch;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod state;
pub mod theme;
pub mod time_format;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
