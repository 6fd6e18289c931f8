//! Terminal color palette.
//!
//! The formatter only ever talks about [`Color`]s. Escape sequences are
//! produced here, at the output boundary, and only when the [`Palette`] is
//! [`Ansi`](Palette::Ansi). [`Palette::Plain`] renders the same layout with
//! no escapes at all, which keeps formatted output easy to assert on.

use std::fmt::Write;
use std::sync::LazyLock;

use owo_colors::{AnsiColors, OwoColorize};
use regex::Regex;

/// The fixed set of colors used by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Red,
    Magenta,
    /// The terminal's default foreground.
    Default,
}

impl Color {
    const fn ansi(self) -> AnsiColors {
        match self {
            Self::Cyan => AnsiColors::Cyan,
            Self::Green => AnsiColors::Green,
            Self::Yellow => AnsiColors::Yellow,
            Self::Red => AnsiColors::Red,
            Self::Magenta => AnsiColors::Magenta,
            Self::Default => AnsiColors::Default,
        }
    }
}

/// How colors are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// ANSI SGR escape sequences.
    #[default]
    Ansi,
    /// No escape sequences; text only.
    Plain,
}

impl Palette {
    /// Pick a palette from a resolved "use color" decision.
    pub const fn from_use_color(use_color: bool) -> Self {
        if use_color { Self::Ansi } else { Self::Plain }
    }

    /// Append `text` to `out`, wrapped in `color` when this palette paints.
    pub fn paint(self, out: &mut String, color: Color, text: &str) {
        match self {
            Self::Ansi => {
                let _ = write!(out, "{}", text.color(color.ansi()));
            }
            Self::Plain => out.push_str(text),
        }
    }
}

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static ANSI pattern is valid"));

/// Remove SGR escape sequences, leaving only the visible text.
pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Visible width of `s` in characters, ignoring SGR escape sequences.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}
