//! TUI rendering and terminal management (impure shell)

pub mod avatar;
pub mod print;
pub mod receipt_list;
pub mod screen;
mod styles;

pub use avatar::Avatar;
pub use print::print_receipts;
pub use receipt_list::{ReceiptList, RowText, visible_rows};
pub use screen::{ScreenContext, body_height, render_screen};
pub use styles::{ColorConfig, ReceiptStyles};

use crate::config::{KeyBindings, Settings, SettingsStore};
use crate::model::KeyAction;
use crate::state::{ListScroll, ReceiptScreen, RenderGate, RenderSnapshot};
use crate::time_format::DisplayZone;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Presentation options fixed for the lifetime of the app.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub colors: ColorConfig,
    pub zone: DisplayZone,
    pub render_gate: bool,
    pub key_bindings: KeyBindings,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            colors: ColorConfig::from_env_and_args(false),
            zone: DisplayZone::default(),
            render_gate: true,
            key_bindings: KeyBindings::default(),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct ReceiptApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    screen: ReceiptScreen,
    settings: SettingsStore,
    /// Set by the settings observer when something the gate does not track changed.
    settings_dirty: Rc<Cell<bool>>,
    options: AppOptions,
    gate: RenderGate,
    scroll: ListScroll,
    frames_drawn: u64,
}

impl ReceiptApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        screen: ReceiptScreen,
        settings: SettingsStore,
        options: AppOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, screen, settings, options))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C). The screen is mounted
    /// before the first frame, so the first frame already shows loading.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Poll interval for fetch completion
        const TICK_INTERVAL: Duration = Duration::from_millis(50);

        self.mount();
        self.draw_if_needed()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(()); // User quit
                        }
                    }
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
            }

            self.tick();
            self.draw_if_needed()?;
        }
    }
}

impl<B> ReceiptApp<B>
where
    B: Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        screen: ReceiptScreen,
        mut settings: SettingsStore,
        options: AppOptions,
    ) -> Self {
        let settings_dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&settings_dirty);
        let mut seen = settings.snapshot().clone();
        settings.subscribe(move |next: &Settings| {
            let theme_only = Settings {
                theme: next.theme,
                ..seen.clone()
            } == *next;
            debug!(theme = %next.theme, theme_only, "Settings changed");
            // Theme changes reach the gate through the snapshot.
            if !theme_only {
                flag.set(true);
            }
            seen = next.clone();
        });

        let gate = RenderGate::new(options.render_gate);
        Self {
            terminal,
            screen,
            settings,
            settings_dirty,
            options,
            gate,
            scroll: ListScroll::default(),
            frames_drawn: 0,
        }
    }

    fn mount(&mut self) {
        if self.screen.on_mount() {
            info!(message_id = %self.screen.message_id(), "Read receipt screen mounted");
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.options.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Reload => {
                let request = self.screen.load();
                debug!(?request, "Reload requested");
            }
            KeyAction::CycleTheme => {
                self.settings.update(|s| s.theme = s.theme.next());
            }
            scroll if scroll.is_scroll() => {
                let total = self.screen.state().receipts().len();
                let height = self.list_height();
                if self.scroll.apply(scroll, total, height) {
                    self.gate.invalidate();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.scroll
            .clamp(self.screen.state().receipts().len(), body_height(height));
        self.gate.invalidate();
    }

    /// Apply a finished fetch, if any.
    fn tick(&mut self) {
        let before = self.screen.state().shared_receipts();
        if !self.screen.poll() {
            return;
        }
        let replaced = !Rc::ptr_eq(&before, &self.screen.state().shared_receipts());
        if replaced && self.scroll.offset() != 0 {
            self.scroll.reset();
            self.gate.invalidate();
        }
    }

    fn list_height(&self) -> u16 {
        self.terminal
            .size()
            .map(|size| body_height(size.height))
            .unwrap_or(0)
    }

    /// Draw unless the render gate says the frame would be unchanged.
    ///
    /// Returns whether a frame was drawn.
    fn draw_if_needed(&mut self) -> Result<bool, TuiError> {
        if self.settings_dirty.replace(false) {
            self.gate.invalidate();
        }
        let snapshot = RenderSnapshot::new(self.settings.snapshot().theme, self.screen.state());
        if !self.gate.should_render(snapshot) {
            return Ok(false);
        }
        self.draw()?;
        Ok(true)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let ctx = ScreenContext::from_settings(
            self.settings.snapshot(),
            self.options.zone,
            self.options.colors,
        );
        let state = self.screen.state();
        let scroll = &mut self.scroll;
        self.terminal.draw(|frame| {
            render_screen(frame, state, &ctx, scroll);
        })?;
        self.frames_drawn += 1;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> ReceiptApp<B>
where
    B: Backend,
{
    /// Create ReceiptApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        screen: ReceiptScreen,
        settings: SettingsStore,
        options: AppOptions,
    ) -> Self {
        Self::with_terminal(terminal, screen, settings, options)
    }

    pub(crate) fn mount_test(&mut self) {
        self.mount();
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height);
    }

    pub(crate) fn tick_test(&mut self) {
        self.tick();
    }

    pub(crate) fn draw_if_needed_test(&mut self) -> Result<bool, TuiError> {
        self.draw_if_needed()
    }

    pub(crate) fn screen(&self) -> &ReceiptScreen {
        &self.screen
    }

    pub(crate) fn screen_mut(&mut self) -> &mut ReceiptScreen {
        &mut self.screen
    }

    pub(crate) fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub(crate) fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    pub(crate) fn scroll(&self) -> ListScroll {
        self.scroll
    }

    pub(crate) fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub(crate) fn gate(&self) -> &RenderGate {
        &self.gate
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(
    screen: ReceiptScreen,
    settings: SettingsStore,
    options: AppOptions,
) -> Result<(), TuiError> {
    let mut app = ReceiptApp::new(screen, settings, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
