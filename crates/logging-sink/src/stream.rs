//! crates/logging-sink/src/stream.rs
//! Destination selector for console output.

use std::fmt;
use std::io;

use is_terminal::IsTerminal;

/// One of the two console destinations a line can be written to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Stream {
    /// The standard output stream.
    Standard,
    /// The standard error stream.
    Error,
}

impl Stream {
    /// Returns a short lowercase name for the stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "stdout",
            Self::Error => "stderr",
        }
    }

    /// Reports whether the process' corresponding stream is attached to a terminal.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        match self {
            Self::Standard => io::stdout().is_terminal(),
            Self::Error => io::stderr().is_terminal(),
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_conventional_names() {
        assert_eq!(Stream::Standard.to_string(), "stdout");
        assert_eq!(Stream::Error.to_string(), "stderr");
    }

    #[test]
    fn streams_are_distinct() {
        assert_ne!(Stream::Standard, Stream::Error);
    }
}
