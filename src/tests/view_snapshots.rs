//! Snapshot tests for the read receipt screen
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.
//! Frames are 40x10 with colors off, UTC times and an `HH:mm` pattern.

use crate::test_harness::{AcceptanceTestHarness, receipt};
use crossterm::event::KeyCode;

fn five_readers() -> Vec<crate::model::ReadReceipt> {
    vec![
        receipt("r1", "alice", "Alice", 1_610_000_000_000),
        receipt("r2", "bob", "Bob", 1_610_000_060_000),
        receipt("r3", "carol", "Carol", 1_610_000_120_000),
        receipt("r4", "dave", "", 1_610_000_180_000),
        receipt("r5", "erin.k", "Erin K", 1_610_000_240_000),
    ]
}

#[test]
fn snapshot_loading() {
    let mut harness = AcceptanceTestHarness::with_receipts(Vec::new());
    harness.mount();

    let output = harness.screen_text();
    insta::assert_snapshot!("receipt_screen_loading", output);
}

#[test]
fn snapshot_empty() {
    let mut harness = AcceptanceTestHarness::with_receipts(Vec::new());
    harness.mount_and_settle();

    let output = harness.screen_text();
    insta::assert_snapshot!("receipt_screen_empty", output);
}

#[test]
fn snapshot_single_receipt() {
    let mut harness = AcceptanceTestHarness::with_receipts(vec![receipt(
        "r1",
        "alice",
        "Alice",
        1_610_000_000_000,
    )]);
    harness.mount_and_settle();

    let output = harness.screen_text();
    insta::assert_snapshot!("receipt_screen_single_receipt", output);
}

#[test]
fn snapshot_list_top() {
    let mut harness = AcceptanceTestHarness::with_receipts(five_readers());
    harness.mount_and_settle();

    let output = harness.screen_text();
    insta::assert_snapshot!("receipt_screen_list_top", output);
}

#[test]
fn snapshot_scrolled_to_bottom() {
    let mut harness = AcceptanceTestHarness::with_receipts(five_readers());
    harness.mount_and_settle();
    harness.send_key(KeyCode::Char('G'));

    let output = harness.screen_text();
    insta::assert_snapshot!("receipt_screen_scrolled_to_bottom", output);
}
