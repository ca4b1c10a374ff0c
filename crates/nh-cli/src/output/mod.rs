//! Human-readable console messages.
//!
//! Every outcome the user should see goes through here; colours follow
//! `--no-color` via `colored`'s global override.

use colored::Colorize;

/// How a message is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Note,
    Warning,
    Failure,
}

/// A line of user-facing output, built first and printed later
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

impl Message {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Print with the style of its level
    pub fn emit(&self) {
        match self.level {
            Level::Success => success(&self.text),
            Level::Note => note(&self.text),
            Level::Warning => warning(&self.text),
            Level::Failure => failure(&self.text),
        }
    }
}

/// Something is about to take a while
pub fn progress(message: &str) {
    println!("{}", message.dimmed());
}

/// The action completed
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Informational detail
pub fn note(message: &str) {
    println!("{}", message.cyan());
}

/// The action went ahead but something was skipped or dropped
pub fn warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}

/// The action failed
pub fn failure(message: &str) {
    println!("{} {}", "Error:".red().bold(), message);
}
