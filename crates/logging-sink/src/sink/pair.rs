use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

use super::MessageSink;
use crate::line_mode::LineMode;
use crate::stream::Stream;

/// Destination for rendered console lines.
///
/// The console logger writes through this trait rather than through concrete
/// writers so tests and embedders can substitute in-memory or custom sinks.
pub trait OutputStreams {
    /// Appends `line` followed by every `extra` value to the selected stream.
    fn write_line<D>(&mut self, stream: Stream, line: &str, extra: &[D]) -> io::Result<()>
    where
        D: fmt::Display;
}

impl<S> OutputStreams for &mut S
where
    S: OutputStreams + ?Sized,
{
    fn write_line<D>(&mut self, stream: Stream, line: &str, extra: &[D]) -> io::Result<()>
    where
        D: fmt::Display,
    {
        (**self).write_line(stream, line, extra)
    }
}

/// A pair of [`MessageSink`]s, one per [`Stream`].
///
/// # Examples
///
/// ```
/// use logging_sink::{LineMode, OutputStreams, Stream, StreamPair};
///
/// let mut streams = StreamPair::new(Vec::new(), Vec::new());
/// streams.set_line_mode(LineMode::WithoutNewline);
/// streams.write_line::<&str>(Stream::Standard, "a", &[])?;
/// streams.write_line::<&str>(Stream::Standard, "b", &[])?;
///
/// assert_eq!(streams.standard().get_ref(), b"ab");
/// assert!(streams.error().get_ref().is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct StreamPair<O, E> {
    standard: MessageSink<O>,
    error: MessageSink<E>,
}

/// Streams bound to the process' standard output and standard error.
pub type ConsoleStreams = StreamPair<Stdout, Stderr>;

impl ConsoleStreams {
    /// Creates a pair writing to [`io::stdout`] and [`io::stderr`].
    #[must_use]
    pub fn console() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> StreamPair<O, E> {
    /// Creates a pair that appends a newline after each rendered line.
    #[must_use]
    pub fn new(standard: O, error: E) -> Self {
        Self::with_line_mode(standard, error, LineMode::WithNewline)
    }

    /// Creates a pair whose sinks share the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(standard: O, error: E, line_mode: LineMode) -> Self {
        Self {
            standard: MessageSink::with_line_mode(standard, line_mode),
            error: MessageSink::with_line_mode(error, line_mode),
        }
    }

    /// Updates the [`LineMode`] of both sinks.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.standard.set_line_mode(line_mode);
        self.error.set_line_mode(line_mode);
    }

    /// Borrows the sink behind [`Stream::Standard`].
    #[must_use]
    pub const fn standard(&self) -> &MessageSink<O> {
        &self.standard
    }

    /// Borrows the sink behind [`Stream::Error`].
    #[must_use]
    pub const fn error(&self) -> &MessageSink<E> {
        &self.error
    }

    /// Consumes the pair and returns the standard and error writers.
    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.standard.into_inner(), self.error.into_inner())
    }
}

impl<O, E> StreamPair<O, E>
where
    O: Write,
    E: Write,
{
    /// Flushes both writers, standard first.
    pub fn flush(&mut self) -> io::Result<()> {
        self.standard.flush()?;
        self.error.flush()
    }
}

impl<O, E> OutputStreams for StreamPair<O, E>
where
    O: Write,
    E: Write,
{
    fn write_line<D>(&mut self, stream: Stream, line: &str, extra: &[D]) -> io::Result<()>
    where
        D: fmt::Display,
    {
        match stream {
            Stream::Standard => self.standard.write_line(line, extra),
            Stream::Error => self.error.write_line(line, extra),
        }
    }
}
