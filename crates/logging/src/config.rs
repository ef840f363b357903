//! crates/logging/src/config.rs
//! Construction-time configuration for the console logger.

use std::env;

use logging_sink::LineMode;

use crate::error::InvalidLevelError;
use crate::levels::LogLevel;
use crate::style::{ColorChoice, InvalidColorChoice};

/// Environment variable holding the initial filter level.
pub const LEVEL_ENV: &str = "LOGTOCONSOLE_LEVEL";
/// Environment variable holding the color choice.
pub const COLOR_ENV: &str = "LOGTOCONSOLE_COLOR";
/// Conventional opt-out from colored output, honoured when [`COLOR_ENV`] is unset.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Settings used to build a [`ConsoleLogger`](crate::ConsoleLogger).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Initial filter level.
    pub level: LogLevel,
    /// Whether tags are styled.
    pub color: ColorChoice,
    /// Whether each written line ends with a newline.
    pub line_mode: LineMode,
}

/// A configuration value read from the environment could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The level variable did not hold a valid level.
    #[error("{variable}: {source}")]
    Level {
        /// Name of the offending variable.
        variable: &'static str,
        /// Underlying level error.
        #[source]
        source: InvalidLevelError,
    },
    /// The color variable did not hold a valid choice.
    #[error("{variable}: {source}")]
    Color {
        /// Name of the offending variable.
        variable: &'static str,
        /// Underlying color error.
        #[source]
        source: InvalidColorChoice,
    },
}

impl LoggerConfig {
    /// Creates a configuration with the given level and default color and line mode.
    #[must_use]
    pub fn with_level(level: LogLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Reads [`LEVEL_ENV`], [`COLOR_ENV`] and [`NO_COLOR_ENV`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables keep their defaults. An empty [`LEVEL_ENV`] is treated
    /// as unset.
    ///
    /// ```
    /// use logging::{ColorChoice, LogLevel, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_lookup(|name| match name {
    ///     "LOGTOCONSOLE_LEVEL" => Some("debug".to_owned()),
    ///     "NO_COLOR" => Some("1".to_owned()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.level, LogLevel::Debug);
    /// assert_eq!(config.color, ColorChoice::Never);
    /// # Ok::<(), logging::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LEVEL_ENV).filter(|value| !value.trim().is_empty()) {
            config.level = raw.parse().map_err(|source| ConfigError::Level {
                variable: LEVEL_ENV,
                source,
            })?;
        }

        match lookup(COLOR_ENV).filter(|value| !value.trim().is_empty()) {
            Some(raw) => {
                config.color = raw.parse().map_err(|source| ConfigError::Color {
                    variable: COLOR_ENV,
                    source,
                })?;
            }
            None => {
                if lookup(NO_COLOR_ENV).is_some_and(|value| !value.is_empty()) {
                    config.color = ColorChoice::Never;
                }
            }
        }

        Ok(config)
    }
}
