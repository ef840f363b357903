//! crates/logging/src/levels.rs
//! Message severities and the filter level that admits them.

use std::fmt;
use std::str::FromStr;

use logging_sink::Stream;

use crate::error::InvalidLevelError;

/// Severity of a single log message.
///
/// Variants are ordered by their numeric rank, so `Severity::Debug` compares
/// greater than `Severity::Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Failures; written to the error stream.
    Error = 1,
    /// Suspicious conditions that do not stop the program.
    Warning = 2,
    /// Progress and status information.
    Info = 3,
    /// Diagnostics aimed at developers.
    Debug = 4,
}

impl Severity {
    /// Every severity, from most to least verbose.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Numeric rank compared against the filter level.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Lowercase kind name, also used to size continuation padding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Unstyled tag printed in front of the message.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR:",
            Self::Warning => "WARNING:",
            Self::Info => "INFO:",
            Self::Debug => "DEBUG:",
        }
    }

    /// Stream that messages of this severity are written to.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Error => Stream::Error,
            Self::Warning | Self::Info | Self::Debug => Stream::Standard,
        }
    }

    /// Number of spaces that align a continuation line under the message text.
    ///
    /// Computed from the kind name rather than the styled tag so ANSI escape
    /// sequences never affect alignment.
    #[must_use]
    pub const fn continuation_width(self) -> usize {
        self.name().len() + 2
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Filter threshold of a logger.
///
/// A message is emitted iff the filter's rank is greater than or equal to the
/// message's [`Severity::rank`]. [`LogLevel::NoLogging`] admits nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
#[repr(u8)]
pub enum LogLevel {
    /// Emit nothing.
    NoLogging = 0,
    /// Emit errors only.
    #[default]
    Error = 1,
    /// Emit warnings and errors.
    Warning = 2,
    /// Emit info, warnings and errors.
    Info = 3,
    /// Emit everything.
    Debug = 4,
}

impl LogLevel {
    /// Every level, from silent to most verbose.
    pub const ALL: [Self; 5] = [
        Self::NoLogging,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
    ];

    /// Numeric value in `0..=4`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks up the level with the given numeric value.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::NoLogging),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Reports whether a message of `severity` passes this filter.
    ///
    /// ```
    /// use logging::{LogLevel, Severity};
    ///
    /// assert!(LogLevel::Warning.permits(Severity::Error));
    /// assert!(LogLevel::Warning.permits(Severity::Warning));
    /// assert!(!LogLevel::Warning.permits(Severity::Info));
    /// assert!(!LogLevel::NoLogging.permits(Severity::Error));
    /// ```
    #[must_use]
    pub const fn permits(self, severity: Severity) -> bool {
        self.as_u8() >= severity.rank()
    }

    /// Lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoLogging => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl From<Severity> for LogLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warning,
            Severity::Info => Self::Info,
            Severity::Debug => Self::Debug,
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = InvalidLevelError;

    fn try_from(value: i64) -> Result<Self, InvalidLevelError> {
        value.try_into_level()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for LogLevel {
    type Err = InvalidLevelError;

    /// Parses `0`..`4`, integral spellings such as `3.0`, or a level name.
    ///
    /// ```
    /// use logging::LogLevel;
    ///
    /// assert_eq!("3".parse::<LogLevel>(), Ok(LogLevel::Info));
    /// assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warning));
    /// assert!("2.5".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "none" | "off" | "no_logging" => return Ok(Self::NoLogging),
            "error" => return Ok(Self::Error),
            "warning" | "warn" => return Ok(Self::Warning),
            "info" => return Ok(Self::Info),
            "debug" => return Ok(Self::Debug),
            _ => {}
        }

        if let Ok(value) = trimmed.parse::<i64>() {
            return value.try_into_level();
        }

        match trimmed.parse::<f64>() {
            Ok(value) => value.try_into_level().map_err(|error| {
                if error.is_out_of_range() {
                    InvalidLevelError::out_of_range(trimmed)
                } else {
                    InvalidLevelError::not_an_integer(trimmed)
                }
            }),
            Err(_) => Err(InvalidLevelError::not_an_integer(trimmed)),
        }
    }
}

/// Values that can be validated into a [`LogLevel`].
///
/// Integers must lie in `0..=4`; floats must additionally be finite and have
/// no fractional part. Strings are never integers and are always rejected;
/// textual configuration goes through [`LogLevel::from_str`] instead.
pub trait TryIntoLevel {
    /// Validates `self` as a filter level.
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError>;
}

impl TryIntoLevel for LogLevel {
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
        Ok(self)
    }
}

impl TryIntoLevel for Severity {
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
        Ok(self.into())
    }
}

macro_rules! impl_try_into_level_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryIntoLevel for $ty {
                fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
                    u8::try_from(self)
                        .ok()
                        .and_then(LogLevel::from_rank)
                        .ok_or_else(|| InvalidLevelError::out_of_range(self))
                }
            }
        )*
    };
}

impl_try_into_level_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryIntoLevel for f64 {
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(InvalidLevelError::not_an_integer(self));
        }
        if (0.0..=4.0).contains(&self) {
            LogLevel::from_rank(self as u8).ok_or_else(|| InvalidLevelError::out_of_range(self))
        } else {
            Err(InvalidLevelError::out_of_range(self))
        }
    }
}

impl TryIntoLevel for f32 {
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
        f64::from(self).try_into_level()
    }
}

impl TryIntoLevel for &str {
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
        Err(InvalidLevelError::not_an_integer(self))
    }
}

impl TryIntoLevel for String {
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
        self.as_str().try_into_level()
    }
}

impl TryIntoLevel for &String {
    fn try_into_level(self) -> Result<LogLevel, InvalidLevelError> {
        self.as_str().try_into_level()
    }
}
