//! User-facing status lines. Errors and warnings go to stderr.

use std::fmt;

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
    Party,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => ("\x1b[1;34m", "ℹ️"),
            Tone::Success => ("\x1b[1;32m", "✅"),
            Tone::Warning => ("\x1b[1;33m", "⚠️"),
            Tone::Error => ("\x1b[1;31m", "❌"),
            Tone::Party => ("\x1b[1;35m", "🎉"),
        }
    }
}

fn line<T: fmt::Display>(tone: Tone, msg: T) -> String {
    let (color, icon) = tone.style();
    format!("{color}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Tone::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Tone::Error, msg));
}

/// Every dose of the day is taken.
pub fn celebrate<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Party, msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("\x1b[1;34m=== {} ==={RESET}", msg);
}
