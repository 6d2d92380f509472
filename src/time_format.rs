//! Timestamp formatting with moment-style patterns.
//!
//! Servers configure the message time format with moment.js tokens
//! (`"LT"`, `"HH:mm"`, `"h:mm A"`). Patterns are translated once into a
//! chrono strftime string and reused for every row.
//!
//! Locale-dependent long formats (`LT`, `L`, `LL`, ...) use their English
//! definitions.

use chrono::{DateTime, Local, Utc};

/// Time zone used when rendering timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
}

/// Formats epoch-millisecond timestamps with a fixed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormatter {
    pattern: String,
    strftime: String,
    zone: DisplayZone,
}

impl TimeFormatter {
    pub fn new(pattern: impl Into<String>, zone: DisplayZone) -> Self {
        let pattern = pattern.into();
        let strftime = moment_to_strftime(&pattern);
        Self {
            pattern,
            strftime,
            zone,
        }
    }

    /// The moment-style pattern this formatter was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    /// Format a timestamp. Out-of-range timestamps render as an empty string.
    pub fn format(&self, epoch_millis: i64) -> String {
        let Some(utc) = DateTime::<Utc>::from_timestamp_millis(epoch_millis) else {
            return String::new();
        };
        match self.zone {
            DisplayZone::Utc => utc.format(&self.strftime).to_string(),
            DisplayZone::Local => utc.with_timezone(&Local).format(&self.strftime).to_string(),
        }
    }
}

/// Tokens ordered longest-first so prefixes never shadow longer tokens.
const TOKENS: &[(&str, Translation)] = &[
    ("LLLL", Translation::Expand("dddd, MMMM D, YYYY h:mm A")),
    ("LLL", Translation::Expand("MMMM D, YYYY h:mm A")),
    ("LTS", Translation::Expand("h:mm:ss A")),
    ("LL", Translation::Expand("MMMM D, YYYY")),
    ("LT", Translation::Expand("h:mm A")),
    ("L", Translation::Expand("MM/DD/YYYY")),
    ("YYYY", Translation::Spec("%Y")),
    ("YY", Translation::Spec("%y")),
    ("MMMM", Translation::Spec("%B")),
    ("MMM", Translation::Spec("%b")),
    ("MM", Translation::Spec("%m")),
    ("M", Translation::Spec("%-m")),
    ("dddd", Translation::Spec("%A")),
    ("ddd", Translation::Spec("%a")),
    ("DD", Translation::Spec("%d")),
    ("D", Translation::Spec("%-d")),
    ("HH", Translation::Spec("%H")),
    ("H", Translation::Spec("%-H")),
    ("hh", Translation::Spec("%I")),
    ("h", Translation::Spec("%-I")),
    ("mm", Translation::Spec("%M")),
    ("m", Translation::Spec("%-M")),
    ("SSS", Translation::Spec("%3f")),
    ("ss", Translation::Spec("%S")),
    ("s", Translation::Spec("%-S")),
    ("A", Translation::Spec("%p")),
    ("a", Translation::Spec("%P")),
    ("ZZ", Translation::Spec("%z")),
    ("Z", Translation::Spec("%:z")),
    ("X", Translation::Spec("%s")),
];

#[derive(Debug, Clone, Copy)]
enum Translation {
    Spec(&'static str),
    Expand(&'static str),
}

/// Translate a moment-style pattern into a chrono strftime string.
///
/// Text inside `[...]` is copied literally. Characters that are not tokens
/// are copied literally as well; `%` is escaped.
pub fn moment_to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            let body = &rest[1..];
            match body.find(']') {
                Some(end) => {
                    push_literal(&mut out, &body[..end]);
                    rest = &body[end + 1..];
                }
                None => {
                    push_literal(&mut out, body);
                    rest = "";
                }
            }
            continue;
        }

        if let Some((token, translation)) =
            TOKENS.iter().find(|(token, _)| rest.starts_with(token))
        {
            match translation {
                Translation::Spec(spec) => out.push_str(spec),
                Translation::Expand(expansion) => out.push_str(&moment_to_strftime(expansion)),
            }
            rest = &rest[token.len()..];
            continue;
        }

        push_literal(&mut out, &rest[..ch.len_utf8()]);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}
