//! Terminal highlighting utilities used by the logger and error reporting.
use std::{fmt, ops::BitOr};

/// Base colours understood by the highlighter.
#[derive(Debug, Clone, Copy)]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Additional decorations that can be combined with a [Colour].
#[derive(Debug, Clone, Copy)]
pub enum Modifier {
    Bold,
    Underline,
    Inverted,
}

/// A [Colour] paired with a [Modifier], built with the `|` operator:
/// `Colour::Red | Modifier::Bold`.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub colour: Colour,
    pub modifier: Modifier,
}

impl BitOr<Modifier> for Colour {
    type Output = Decoration;

    fn bitor(self, modifier: Modifier) -> Decoration {
        Decoration { colour: self, modifier }
    }
}

impl BitOr<Colour> for Modifier {
    type Output = Decoration;

    fn bitor(self, colour: Colour) -> Decoration {
        Decoration { colour, modifier: self }
    }
}

/// Anything that can produce an ANSI escape prefix.
pub trait Highlighter {
    fn escape_code(&self) -> String;
}

impl Highlighter for Colour {
    fn escape_code(&self) -> String {
        let code = match self {
            Colour::Black => 30,
            Colour::Red => 31,
            Colour::Green => 32,
            Colour::Yellow => 33,
            Colour::Blue => 34,
            Colour::Magenta => 35,
            Colour::Cyan => 36,
            Colour::White => 37,
        };

        format!("\u{001b}[{code};1m")
    }
}

impl Highlighter for Modifier {
    fn escape_code(&self) -> String {
        let code = match self {
            Modifier::Bold => 1,
            Modifier::Underline => 4,
            Modifier::Inverted => 7,
        };

        format!("\u{001b}[{code}m")
    }
}

impl Highlighter for Decoration {
    fn escape_code(&self) -> String {
        format!("{}{}", self.colour.escape_code(), self.modifier.escape_code())
    }
}

/// Wrap `message` in the escape codes produced by `highlighter`, resetting
/// the style afterwards.
pub fn highlight(highlighter: impl Highlighter, message: impl fmt::Display) -> String {
    const RESET: &str = "\u{001b}[0m";

    format!("{}{message}{RESET}", highlighter.escape_code())
}
