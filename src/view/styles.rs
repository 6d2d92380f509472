//! Screen styling derived from the active theme.

use crate::theme::{Palette, ThemeName};
use ratatui::style::{Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ReceiptStyles =====

/// Styles for every part of the screen.
///
/// With colors disabled only text modifiers (bold, dim) remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptStyles {
    /// Body background behind the list and the activity indicator.
    pub body: Style,
    pub header: Style,
    pub empty: Style,
    /// Background of a single row.
    pub row: Style,
    pub name: Style,
    pub auxiliary: Style,
    pub separator: Style,
    pub hint: Style,
}

impl ReceiptStyles {
    pub fn for_theme(theme: ThemeName, colors: ColorConfig) -> Self {
        Self::with_palette(theme.palette(), colors)
    }

    pub fn with_palette(palette: Palette, colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                body: Style::default().bg(palette.chat_component_background),
                header: Style::default()
                    .bg(palette.header_background)
                    .fg(palette.header_title_color)
                    .add_modifier(Modifier::BOLD),
                empty: Style::default()
                    .bg(palette.chat_component_background)
                    .fg(palette.title_text),
                row: Style::default().bg(palette.background_color),
                name: Style::default()
                    .fg(palette.title_text)
                    .add_modifier(Modifier::BOLD),
                auxiliary: Style::default().fg(palette.auxiliary_text),
                separator: Style::default()
                    .bg(palette.chat_component_background)
                    .fg(palette.separator_color),
                hint: Style::default()
                    .bg(palette.header_background)
                    .fg(palette.auxiliary_text),
            }
        } else {
            Self {
                body: Style::default(),
                header: Style::default().add_modifier(Modifier::BOLD),
                empty: Style::default(),
                row: Style::default(),
                name: Style::default().add_modifier(Modifier::BOLD),
                auxiliary: Style::default(),
                separator: Style::default(),
                hint: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }
}

// ===== Tests =====
