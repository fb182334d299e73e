//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Columns taken on screen, ignoring colour codes.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut `s` to at most `max` columns, ending with "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    for ch in strip_ansi(s).chars() {
        let candidate = format!("{out}{ch}");
        if UnicodeWidthStr::width(candidate.as_str()) + 3 > max {
            break;
        }
        out = candidate;
    }
    out.push_str("...");
    out
}
