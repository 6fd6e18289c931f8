//! Decorative title, section, and subsection lines.
//!
//! Each helper hands ready-made lines to a caller-supplied emit function,
//! so the banner lands at whatever level the caller picks:
//!
//! ```
//! use fogline::{Logger, Level, Palette, banner};
//! use fogline::formatter::{Formatter, FormatterConfig};
//!
//! let formatter = Formatter::new(FormatterConfig::default(), Palette::Plain).unwrap();
//! let logger = Logger::new(formatter, Level::Info, false, Vec::new());
//! banner::section(Some(&logger), "Server Initialization", Logger::info);
//!
//! let out = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(out.lines().count(), 3);
//! ```
//!
//! Passing `None` (no logger set up yet) is not an error: nothing is emitted.

/// Width of the section rule, in characters.
pub const RULE_WIDTH: usize = 80;

const RULE_CHAR: char = '—';

/// A one-line title: `          .•( title )•. `
pub fn title<L: ?Sized, F>(logger: Option<&L>, title: &str, log_fn: F)
where
    F: Fn(&L, &str),
{
    let Some(logger) = logger else { return };
    log_fn(logger, &title_line(title));
}

/// A rule, a title line, and the rule again.
pub fn section<L: ?Sized, F>(logger: Option<&L>, title: &str, log_fn: F)
where
    F: Fn(&L, &str),
{
    let Some(logger) = logger else { return };
    let rule = rule();
    log_fn(logger, &rule);
    log_fn(logger, &section_line(title));
    log_fn(logger, &rule);
}

/// A smaller one-line marker: `[ -- title -- ]`
pub fn subsection<L: ?Sized, F>(logger: Option<&L>, title: &str, log_fn: F)
where
    F: Fn(&L, &str),
{
    let Some(logger) = logger else { return };
    log_fn(logger, &subsection_line(title));
}

fn title_line(title: &str) -> String {
    format!("          .•( {title} )•. ")
}

fn section_line(title: &str) -> String {
    format!("                   .•( {title} )•.")
}

fn subsection_line(title: &str) -> String {
    format!("[ -- {title} -- ]")
}

fn rule() -> String {
    std::iter::repeat_n(RULE_CHAR, RULE_WIDTH).collect()
}
