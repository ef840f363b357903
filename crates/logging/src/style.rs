//! crates/logging/src/style.rs
//! Pluggable styling of severity tags.
//!
//! The logger never emits escape sequences itself. It hands the unstyled tag
//! to a [`Styler`], which may decorate it for terminals or return it as-is.
//! Continuation padding is derived from [`Severity::name`], so whatever a
//! styler adds has no influence on alignment.

use std::fmt;
use std::str::FromStr;

use anstyle::{AnsiColor, Color, Style};
use logging_sink::Stream;

use crate::levels::Severity;

/// Decorates a severity tag for display.
///
/// Closures with the signature `Fn(&str, Severity) -> String` implement the
/// trait, which keeps tests free to inject recording or no-op stylers.
pub trait Styler {
    /// Returns the decorated form of `tag`.
    fn style(&self, tag: &str, severity: Severity) -> String;
}

impl<F> Styler for F
where
    F: Fn(&str, Severity) -> String,
{
    fn style(&self, tag: &str, severity: Severity) -> String {
        self(tag, severity)
    }
}

/// Returns the tag unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn style(&self, tag: &str, _severity: Severity) -> String {
        tag.to_owned()
    }
}

/// Renders the tag in bold black on a bright, severity-specific background.
///
/// | severity | background     |
/// |----------|----------------|
/// | debug    | bright blue    |
/// | info     | bright white   |
/// | warning  | bright yellow  |
/// | error    | bright red     |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnsiStyler;

impl AnsiStyler {
    /// Style applied to tags of `severity`.
    #[must_use]
    pub const fn style_for(severity: Severity) -> Style {
        let background = match severity {
            Severity::Debug => AnsiColor::BrightBlue,
            Severity::Info => AnsiColor::BrightWhite,
            Severity::Warning => AnsiColor::BrightYellow,
            Severity::Error => AnsiColor::BrightRed,
        };
        Style::new()
            .bg_color(Some(Color::Ansi(background)))
            .fg_color(Some(Color::Ansi(AnsiColor::Black)))
            .bold()
    }
}

impl Styler for AnsiStyler {
    fn style(&self, tag: &str, severity: Severity) -> String {
        let style = Self::style_for(severity);
        format!("{}{tag}{}", style.render(), style.render_reset())
    }
}

/// When to decorate tags with ANSI styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorChoice {
    /// Style only when both stdout and stderr are terminals.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the current process' streams.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => Stream::Standard.is_terminal() && Stream::Error.is_terminal(),
        }
    }

    /// Builds the styler matching this choice.
    #[must_use]
    pub fn styler(self) -> Box<dyn Styler + Send + Sync> {
        if self.enabled() {
            Box::new(AnsiStyler)
        } else {
            Box::new(PlainStyler)
        }
    }

    /// Lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color choice other than `auto`, `always` or `never`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("color choice \"{0}\" is not valid, expected auto, always or never")]
pub struct InvalidColorChoice(pub String);

impl FromStr for ColorChoice {
    type Err = InvalidColorChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "yes" | "on" => Ok(Self::Always),
            "never" | "no" | "off" => Ok(Self::Never),
            _ => Err(InvalidColorChoice(s.to_owned())),
        }
    }
}
