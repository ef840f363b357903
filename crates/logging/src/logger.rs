//! crates/logging/src/logger.rs
//! The leveled console logger and its continuation mechanic.

use std::fmt;

use logging_sink::{ConsoleStreams, OutputStreams};

use crate::arg::LogArg;
use crate::config::LoggerConfig;
use crate::error::{InvalidLevelError, LogError};
use crate::levels::{LogLevel, Severity, TryIntoLevel};
use crate::style::{PlainStyler, Styler};

/// Leveled console logger.
///
/// Each instance owns its filter level and the severity of the most recent
/// logging call; nothing is shared between instances. Messages are formatted
/// as `<styled tag> <message>` and written immediately through the
/// [`OutputStreams`] implementation `S`. Errors go to [`Stream::Error`],
/// everything else to [`Stream::Standard`].
///
/// [`same`](Self::same) writes a continuation line at the severity of the
/// previous logging call, indented to sit under that call's message text.
///
/// # Examples
///
/// ```
/// use logging::{ConsoleLogger, LogLevel};
/// use logging_sink::StreamPair;
///
/// let mut logger = ConsoleLogger::with_streams(LogLevel::Debug, StreamPair::new(Vec::new(), Vec::new()))?;
/// logger.error("boom")?.same("more detail")?;
/// logger.info("loaded")?;
///
/// let (standard, error) = logger.into_streams().into_inner();
/// assert_eq!(String::from_utf8(standard).unwrap(), "INFO: loaded\n");
/// assert_eq!(String::from_utf8(error).unwrap(), "ERROR: boom\n       more detail\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`Stream::Error`]: logging_sink::Stream::Error
/// [`Stream::Standard`]: logging_sink::Stream::Standard
pub struct ConsoleLogger<S = ConsoleStreams> {
    level: LogLevel,
    last_kind: Option<Severity>,
    streams: S,
    styler: Box<dyn Styler + Send + Sync>,
}

impl ConsoleLogger<ConsoleStreams> {
    /// Creates a logger writing to stdout and stderr at [`LogLevel::Error`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    /// Creates a console logger with the given initial filter level.
    pub fn with_level(level: impl TryIntoLevel) -> Result<Self, InvalidLevelError> {
        let level = level.try_into_level()?;
        Ok(Self::from_config(LoggerConfig::with_level(level)))
    }

    /// Creates a console logger from a [`LoggerConfig`].
    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        let mut streams = ConsoleStreams::console();
        streams.set_line_mode(config.line_mode);
        Self::with_parts(config.level, streams, config.color.styler())
    }
}

impl Default for ConsoleLogger<ConsoleStreams> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ConsoleLogger<S> {
    /// Creates a logger over custom streams with unstyled tags.
    pub fn with_streams(level: impl TryIntoLevel, streams: S) -> Result<Self, InvalidLevelError> {
        let level = level.try_into_level()?;
        Ok(Self::with_parts(level, streams, Box::new(PlainStyler)))
    }

    /// Assembles a logger from already validated parts.
    #[must_use]
    pub fn with_parts(level: LogLevel, streams: S, styler: Box<dyn Styler + Send + Sync>) -> Self {
        Self {
            level,
            last_kind: None,
            streams,
            styler,
        }
    }

    /// Replaces the styler, consuming and returning the logger.
    #[must_use]
    pub fn styled_with<T>(mut self, styler: T) -> Self
    where
        T: Styler + Send + Sync + 'static,
    {
        self.set_styler(styler);
        self
    }

    /// Replaces the styler used for subsequent tags.
    pub fn set_styler<T>(&mut self, styler: T)
    where
        T: Styler + Send + Sync + 'static,
    {
        self.styler = Box::new(styler);
    }

    /// Returns the current filter level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Validates and installs a new filter level, returning it.
    ///
    /// On failure the previous level stays in effect. Nothing is written.
    pub fn set_level(&mut self, level: impl TryIntoLevel) -> Result<LogLevel, InvalidLevelError> {
        self.level = level.try_into_level()?;
        Ok(self.level)
    }

    /// Severity of the most recent `debug`/`info`/`warning`/`error` call, if any.
    #[must_use]
    pub const fn last_kind(&self) -> Option<Severity> {
        self.last_kind
    }

    /// Borrows the output streams.
    #[must_use]
    pub const fn streams(&self) -> &S {
        &self.streams
    }

    /// Mutably borrows the output streams.
    #[must_use]
    pub fn streams_mut(&mut self) -> &mut S {
        &mut self.streams
    }

    /// Consumes the logger and returns its output streams.
    #[must_use]
    pub fn into_streams(self) -> S {
        self.streams
    }
}

impl<S> ConsoleLogger<S>
where
    S: OutputStreams,
{
    /// Logs `message` at `severity`, followed by `extra` values.
    ///
    /// The call records `severity` as the last kind and rejects non-string
    /// messages before the filter is consulted, so a suppressed call still
    /// updates [`last_kind`](Self::last_kind) and still fails on a bad
    /// message.
    pub fn log<'m>(
        &mut self,
        severity: Severity,
        message: impl Into<LogArg<'m>>,
        extra: &[LogArg<'_>],
    ) -> Result<&mut Self, LogError> {
        self.last_kind = Some(severity);
        let message = message.into();
        let text = message.as_message()?;

        if !self.level.permits(severity) {
            return Ok(self);
        }

        let tag = self.styler.style(severity.tag(), severity);
        let line = format!("{tag} {text}");
        self.streams.write_line(severity.stream(), &line, extra)?;
        Ok(self)
    }

    /// Writes a continuation line at the severity of the previous logging call.
    ///
    /// The line carries no tag and is indented by
    /// [`Severity::continuation_width`] spaces. Nothing is written when no
    /// logging call has been made yet, or when the current filter level no
    /// longer admits that severity. The last kind is left untouched.
    pub fn same<'m>(&mut self, message: impl Into<LogArg<'m>>) -> Result<&mut Self, LogError> {
        self.same_with(message, &[])
    }

    /// Like [`same`](Self::same), followed by `extra` values.
    pub fn same_with<'m>(
        &mut self,
        message: impl Into<LogArg<'m>>,
        extra: &[LogArg<'_>],
    ) -> Result<&mut Self, LogError> {
        let message = message.into();
        let text = message.as_message()?;

        let Some(kind) = self.last_kind else {
            return Ok(self);
        };
        if !self.level.permits(kind) {
            return Ok(self);
        }

        let line = format!("{:width$}{text}", "", width = kind.continuation_width());
        self.streams.write_line(kind.stream(), &line, extra)?;
        Ok(self)
    }

    /// Logs a debug message.
    pub fn debug<'m>(&mut self, message: impl Into<LogArg<'m>>) -> Result<&mut Self, LogError> {
        self.log(Severity::Debug, message, &[])
    }

    /// Logs a debug message followed by `extra` values.
    pub fn debug_with<'m>(
        &mut self,
        message: impl Into<LogArg<'m>>,
        extra: &[LogArg<'_>],
    ) -> Result<&mut Self, LogError> {
        self.log(Severity::Debug, message, extra)
    }

    /// Logs an info message.
    pub fn info<'m>(&mut self, message: impl Into<LogArg<'m>>) -> Result<&mut Self, LogError> {
        self.log(Severity::Info, message, &[])
    }

    /// Logs an info message followed by `extra` values.
    pub fn info_with<'m>(
        &mut self,
        message: impl Into<LogArg<'m>>,
        extra: &[LogArg<'_>],
    ) -> Result<&mut Self, LogError> {
        self.log(Severity::Info, message, extra)
    }

    /// Logs a warning message.
    pub fn warning<'m>(&mut self, message: impl Into<LogArg<'m>>) -> Result<&mut Self, LogError> {
        self.log(Severity::Warning, message, &[])
    }

    /// Logs a warning message followed by `extra` values.
    pub fn warning_with<'m>(
        &mut self,
        message: impl Into<LogArg<'m>>,
        extra: &[LogArg<'_>],
    ) -> Result<&mut Self, LogError> {
        self.log(Severity::Warning, message, extra)
    }

    /// Logs an error message to the error stream.
    pub fn error<'m>(&mut self, message: impl Into<LogArg<'m>>) -> Result<&mut Self, LogError> {
        self.log(Severity::Error, message, &[])
    }

    /// Logs an error message followed by `extra` values.
    pub fn error_with<'m>(
        &mut self,
        message: impl Into<LogArg<'m>>,
        extra: &[LogArg<'_>],
    ) -> Result<&mut Self, LogError> {
        self.log(Severity::Error, message, extra)
    }
}

impl<S> fmt::Debug for ConsoleLogger<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("level", &self.level)
            .field("last_kind", &self.last_kind)
            .field("streams", &self.streams)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
