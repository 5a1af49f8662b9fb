//! ANSI color codes for terminal output, honoring NO_COLOR.

use std::env;

/// ANSI color codes for diagnostic rendering.
pub struct Colors {
    pub red: &'static str,
    pub yellow: &'static str,
    pub reset: &'static str,
}

impl Colors {
    /// Colors based on the NO_COLOR environment variable.
    pub fn new() -> Self {
        if env::var("NO_COLOR").is_ok() {
            Self::no_color()
        } else {
            Self::with_color()
        }
    }

    pub fn with_color() -> Self {
        Self {
            red: "\u{1b}[31m",
            yellow: "\u{1b}[33m",
            reset: "\u{1b}[0m",
        }
    }

    pub fn no_color() -> Self {
        Self {
            red: "",
            yellow: "",
            reset: "",
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::new()
    }
}
