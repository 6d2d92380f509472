//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based tests driving `ReceiptApp<TestBackend>` with a scripted
//! fetcher. They reach test-only hooks on the app that integration tests
//! under `tests/` cannot see.

mod view_snapshots;
