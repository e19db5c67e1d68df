//! 256-color terminal rendering.

use std::fmt;

use owo_colors::{OwoColorize, XtermColors};

/// Palette index used for the elapsed-time suffix.
pub const GRAY: Color256 = Color256(240);

/// A foreground color from the terminal's 256-color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color256(u8);

impl Color256 {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn xterm(self) -> XtermColors {
        XtermColors::from(self.0)
    }

    /// Render text in this color, followed by a reset.
    pub fn wrap<T: fmt::Display>(self, text: T) -> String {
        text.color(self.xterm()).to_string()
    }
}
