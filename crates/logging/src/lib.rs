#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a leveled console logger. Messages carry one of four
//! [`Severity`] values and are written only when the logger's [`LogLevel`]
//! admits them. Each line starts with a styled tag (`DEBUG:`, `INFO:`,
//! `WARNING:` or `ERROR:`); errors go to standard error and everything else to
//! standard output.
//!
//! # Design
//!
//! [`ConsoleLogger`] owns two pieces of state: the filter level and the
//! severity of the most recent logging call. The latter drives
//! [`ConsoleLogger::same`], which writes an untagged continuation line aligned
//! under the previous message. Writes go through
//! [`logging_sink::OutputStreams`] and tags are decorated by a pluggable
//! [`Styler`], so both collaborators can be replaced in tests.
//!
//! # Invariants
//!
//! - The filter level is always one of `0..=4`; invalid values are rejected
//!   with [`InvalidLevelError`] and leave the level unchanged.
//! - A message is written iff `level >= severity`.
//! - Every `debug`/`info`/`warning`/`error` call records its severity and
//!   validates its message before the filter is applied.
//! - Continuation padding is `len(kind name) + 2` spaces, independent of
//!   styling.
//!
//! # Errors
//!
//! Logging calls return [`LogError`]: either [`InvalidMessageTypeError`] for a
//! non-string message or the [`std::io::Error`] raised by the stream.
//!
//! # Examples
//!
//! ```
//! use logging::{ConsoleLogger, LogArg, LogLevel};
//! use logging_sink::StreamPair;
//!
//! let streams = StreamPair::new(Vec::new(), Vec::new());
//! let mut logger = ConsoleLogger::with_streams(LogLevel::Warning, streams)?;
//!
//! logger.info("not shown")?;
//! logger
//!     .warning_with("retrying", &[LogArg::from(3), "times".into()])?
//!     .same("after a short pause")?;
//!
//! let (standard, _) = logger.into_streams().into_inner();
//! assert_eq!(
//!     String::from_utf8(standard).unwrap(),
//!     "WARNING: retrying 3 times\n         after a short pause\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the stream primitives.
//! - [`LoggerConfig::from_env`] for environment-driven configuration.

mod arg;
mod config;
mod error;
mod levels;
mod logger;
mod style;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use arg::LogArg;
pub use config::{COLOR_ENV, ConfigError, LEVEL_ENV, LoggerConfig, NO_COLOR_ENV};
pub use error::{InvalidLevelError, InvalidMessageTypeError, LogError};
pub use levels::{LogLevel, Severity, TryIntoLevel};
pub use logger::ConsoleLogger;
pub use style::{AnsiStyler, ColorChoice, InvalidColorChoice, PlainStyler, Styler};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{ConsoleLayer, init_tracing, init_tracing_with_filter};
