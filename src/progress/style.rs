//! Text decoration applied to parts of menu messages

use colored::Colorize;

/// Markup hooks used when composing node labels and messages
///
/// Implementations must only wrap the text they are given; builders rely on
/// the undecorated text being recoverable with [`PlainStyle`].
pub trait TextStyle {
    /// Titles
    fn bold(&self, text: &str) -> String;
    /// Values the user looks up (addresses, dates, counts)
    fn accent(&self, text: &str) -> String;
    /// Scores and gas figures
    fn highlight(&self, text: &str) -> String;
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl TextStyle for PlainStyle {
    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.to_string()
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI escapes via `colored`: bold, blue accents, yellow highlights
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl TextStyle for AnsiStyle {
    fn bold(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.blue().to_string()
    }

    fn highlight(&self, text: &str) -> String {
        text.yellow().to_string()
    }
}
