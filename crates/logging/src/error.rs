//! crates/logging/src/error.rs
//! Error types surfaced by the console logger.

use std::fmt;
use std::io;

/// A filter level that is not an integer in `0..=4`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLevelError {
    /// The value is not an integer (for example `2.5`, `NaN` or `"loud"`).
    #[error("log level \"{value}\" is not valid, it should be an integer between 0 and 4")]
    NotAnInteger {
        /// Textual form of the rejected value.
        value: String,
    },
    /// The value is an integer outside `0..=4`.
    #[error("log level \"{value}\" is out of range, it should be an integer between 0 and 4")]
    OutOfRange {
        /// Textual form of the rejected value.
        value: String,
    },
}

impl InvalidLevelError {
    pub(crate) fn not_an_integer(value: impl fmt::Display) -> Self {
        Self::NotAnInteger {
            value: value.to_string(),
        }
    }

    pub(crate) fn out_of_range(value: impl fmt::Display) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
        }
    }

    /// Returns the textual form of the rejected value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::NotAnInteger { value } | Self::OutOfRange { value } => value,
        }
    }

    /// Reports whether the value was an integer that fell outside `0..=4`.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// A message argument that is not a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("message type \"{found}\" is not valid, it should be a string")]
pub struct InvalidMessageTypeError {
    found: &'static str,
}

impl InvalidMessageTypeError {
    pub(crate) const fn new(found: &'static str) -> Self {
        Self { found }
    }

    /// Returns the kind name of the rejected argument.
    #[must_use]
    pub const fn found(&self) -> &'static str {
        self.found
    }
}

/// Failure of a logging or continuation call.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The message argument was not a string.
    #[error(transparent)]
    InvalidMessageType(#[from] InvalidMessageTypeError),
    /// The output stream rejected the write.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
}

impl LogError {
    /// Returns the message-type error when that is the cause.
    #[must_use]
    pub const fn as_invalid_message_type(&self) -> Option<&InvalidMessageTypeError> {
        match self {
            Self::InvalidMessageType(error) => Some(error),
            Self::Io(_) => None,
        }
    }
}
