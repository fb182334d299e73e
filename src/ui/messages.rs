//! User-facing console messages: coloured, one line each.
//! Warnings and errors go to stderr so they never mix with rendered output.

use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged<T: fmt::Display>(style: Style, icon: &str, msg: T) -> String {
    format!("{} {}", style.paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue.bold(), ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green.bold(), ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Yellow.bold(), ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red.bold(), ICON_ERR, msg));
}

/// Section header: `sep` repeated as a rule, then the title.
pub fn header<T: fmt::Display>(msg: T, sep: &str) {
    let rule = sep.repeat(22);
    println!("{}", Colour::Blue.bold().paint(format!("{rule} {msg}")));
}
