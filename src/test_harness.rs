//! Acceptance Test Harness for TUI testing
//!
//! Wraps ReceiptApp<TestBackend> with a scripted fetcher and convenient
//! methods for simulating the event loop.

use crate::config::{KeyBindings, Settings, SettingsStore};
use crate::fetch::{FetchResponse, ReceiptFetcher};
use crate::logging::DiagnosticLog;
use crate::model::{FetchError, MessageId, ReadReceipt, ReceiptId, ReceiptUser, UserId};
use crate::state::{LogicalFailurePolicy, ReceiptScreen};
use crate::time_format::DisplayZone;
use crate::view::{AppOptions, ColorConfig, ReceiptApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Build a receipt for tests.
pub(crate) fn receipt(id: &str, username: &str, name: &str, timestamp: i64) -> ReadReceipt {
    ReadReceipt::new(
        ReceiptId::new(id).unwrap(),
        timestamp,
        ReceiptUser::new(UserId::new(format!("u-{}", username)).unwrap(), username, name),
    )
}

/// Fetcher that answers from a queue. A final success answer repeats
/// forever; once the queue is empty every call fails.
pub(crate) struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<FetchResponse, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub(crate) fn new(script: Vec<Result<FetchResponse, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReceiptFetcher for ScriptedFetcher {
    fn get_read_receipts(&self, _: &MessageId) -> Result<FetchResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().unwrap();
        if script.len() == 1 {
            if let Some(Ok(response)) = script.front() {
                return Ok(response.clone());
            }
        }
        script.pop_front().unwrap_or(Err(FetchError::WorkerLost))
    }
}

/// Harness configuration.
pub(crate) struct HarnessOptions {
    pub width: u16,
    pub height: u16,
    pub render_gate: bool,
    pub policy: LogicalFailurePolicy,
    pub settings: Settings,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            width: 40,
            height: 10,
            render_gate: true,
            policy: LogicalFailurePolicy::default(),
            settings: Settings {
                time_format: "HH:mm".to_string(),
                ..Settings::default()
            },
        }
    }
}

/// Test harness for acceptance testing
pub(crate) struct AcceptanceTestHarness {
    app: ReceiptApp<TestBackend>,
    fetcher: Arc<ScriptedFetcher>,
    diagnostics: Rc<DiagnosticLog>,
    running: bool,
}

impl AcceptanceTestHarness {
    pub(crate) fn new(script: Vec<Result<FetchResponse, FetchError>>) -> Self {
        Self::with_options(script, HarnessOptions::default())
    }

    pub(crate) fn with_options(
        script: Vec<Result<FetchResponse, FetchError>>,
        options: HarnessOptions,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(options.width, options.height)).unwrap();
        let fetcher = Arc::new(ScriptedFetcher::new(script));
        let diagnostics = Rc::new(DiagnosticLog::new());

        let screen = ReceiptScreen::new(
            MessageId::new("m1").unwrap(),
            fetcher.clone(),
            diagnostics.clone(),
        )
        .with_policy(options.policy);

        let app_options = AppOptions {
            colors: ColorConfig::new(false),
            zone: DisplayZone::Utc,
            render_gate: options.render_gate,
            key_bindings: KeyBindings::default(),
        };
        let app = ReceiptApp::new_for_test(
            terminal,
            screen,
            SettingsStore::new(options.settings),
            app_options,
        );

        Self {
            app,
            fetcher,
            diagnostics,
            running: true,
        }
    }

    /// Harness with one successful response.
    pub(crate) fn with_receipts(receipts: Vec<ReadReceipt>) -> Self {
        Self::new(vec![Ok(FetchResponse::success(receipts))])
    }

    /// Mount and draw the first frame, as the event loop does on startup.
    pub(crate) fn mount(&mut self) {
        self.app.mount_test();
        self.app.draw_if_needed_test().unwrap();
    }

    /// Mount, then run ticks until the initial fetch has been applied.
    pub(crate) fn mount_and_settle(&mut self) {
        self.mount();
        self.settle();
    }

    /// Run event-loop ticks until no fetch is in flight.
    pub(crate) fn settle(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while self.app.screen().is_in_flight() {
            assert!(Instant::now() < deadline, "Fetch did not resolve in time");
            self.tick();
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    /// One loop iteration without input.
    pub(crate) fn tick(&mut self) -> bool {
        self.app.tick_test();
        self.app.draw_if_needed_test().unwrap()
    }

    pub(crate) fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C), then finish the loop iteration.
    pub(crate) fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
            return true;
        }

        self.tick();
        false
    }

    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize_test(width, height);
        self.tick();
    }

    /// The last drawn frame.
    pub(crate) fn screen_text(&self) -> String {
        buffer_to_string(self.buffer())
    }

    pub(crate) fn buffer(&self) -> &Buffer {
        self.app.terminal().backend().buffer()
    }

    pub(crate) fn app(&self) -> &ReceiptApp<TestBackend> {
        &self.app
    }

    pub(crate) fn app_mut(&mut self) -> &mut ReceiptApp<TestBackend> {
        &mut self.app
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetcher.calls()
    }

    pub(crate) fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }
}
