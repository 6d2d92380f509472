//! Initials badge standing in for the user's avatar image.

use super::styles::ColorConfig;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

/// Columns taken by a badge.
pub const AVATAR_WIDTH: u16 = 4;

const BADGE_COLORS: [Color; 8] = [
    Color::Rgb(0xf5, 0x45, 0x5c),
    Color::Rgb(0xf3, 0x8c, 0x39),
    Color::Rgb(0xe3, 0xaa, 0x0c),
    Color::Rgb(0x2d, 0xe0, 0xa5),
    Color::Rgb(0x15, 0x93, 0x8f),
    Color::Rgb(0x1d, 0x74, 0xf5),
    Color::Rgb(0x9e, 0x5d, 0xf3),
    Color::Rgb(0xd1, 0x4a, 0xa6),
];

/// Up to two uppercase initials.
///
/// `john.doe` gives `JD`; a single-word name uses its first two characters.
pub fn initials(username: &str) -> String {
    let parts: Vec<&str> = username
        .split(['.', '_', '-', ' '])
        .filter(|part| !part.is_empty())
        .collect();

    let raw: String = match parts.as_slice() {
        [] => return "?".to_string(),
        [single] => single.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    raw.to_uppercase()
}

/// Badge color, stable for a given username.
pub fn badge_color(username: &str) -> Color {
    // FNV-1a
    let hash = username
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        });
    BADGE_COLORS[(hash % BADGE_COLORS.len() as u64) as usize]
}

/// Badge keyed by username.
#[derive(Debug, Clone, Copy)]
pub struct Avatar<'a> {
    username: &'a str,
    colors: ColorConfig,
}

impl<'a> Avatar<'a> {
    pub fn new(username: &'a str, colors: ColorConfig) -> Self {
        Self { username, colors }
    }

    fn style(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default()
                .bg(badge_color(self.username))
                .fg(Color::Rgb(0xff, 0xff, 0xff))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        }
    }

    /// Fill `area` with the badge color and put the initials on its first line.
    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = self.style();
        buf.set_style(area, style);
        let text = format!(" {}", initials(self.username));
        buf.set_stringn(area.x, area.y, text, usize::from(area.width), style);
    }
}
