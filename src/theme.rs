//! Theme names and their color tokens.
//!
//! Each theme resolves to a [`Palette`] of named tokens. The screen consumes
//! these read-only; styling decisions live in `view::styles`.

use ratatui::style::Color;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Supported theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Black,
}

impl ThemeName {
    /// All themes in cycling order.
    pub const ALL: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Black];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Black => "black",
        }
    }

    /// Next theme in cycling order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Black,
            ThemeName::Black => ThemeName::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeName::Light => Palette {
                background_color: Color::Rgb(0xff, 0xff, 0xff),
                chat_component_background: Color::Rgb(0xf3, 0xf4, 0xf5),
                title_text: Color::Rgb(0x0d, 0x0e, 0x12),
                auxiliary_text: Color::Rgb(0x9c, 0xa2, 0xa8),
                separator_color: Color::Rgb(0xcb, 0xcb, 0xcc),
                header_background: Color::Rgb(0xf8, 0xf8, 0xf8),
                header_title_color: Color::Rgb(0x0d, 0x0e, 0x12),
            },
            ThemeName::Dark => Palette {
                background_color: Color::Rgb(0x03, 0x0b, 0x1b),
                chat_component_background: Color::Rgb(0x19, 0x21, 0x32),
                title_text: Color::Rgb(0xf9, 0xf9, 0xf9),
                auxiliary_text: Color::Rgb(0x92, 0x97, 0xa2),
                separator_color: Color::Rgb(0x2b, 0x2b, 0x2d),
                header_background: Color::Rgb(0x0b, 0x18, 0x2c),
                header_title_color: Color::Rgb(0xf9, 0xf9, 0xf9),
            },
            ThemeName::Black => Palette {
                background_color: Color::Rgb(0x00, 0x00, 0x00),
                chat_component_background: Color::Rgb(0x0d, 0x0d, 0x0d),
                title_text: Color::Rgb(0xf9, 0xf9, 0xf9),
                auxiliary_text: Color::Rgb(0xb2, 0xb8, 0xc6),
                separator_color: Color::Rgb(0x27, 0x27, 0x28),
                header_background: Color::Rgb(0x0d, 0x0d, 0x0d),
                header_title_color: Color::Rgb(0xf9, 0xf9, 0xf9),
            },
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown theme names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}' (expected light, dark or black)")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Color tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background_color: Color,
    pub chat_component_background: Color,
    pub title_text: Color,
    pub auxiliary_text: Color,
    pub separator_color: Color,
    pub header_background: Color,
    pub header_title_color: Color,
}
