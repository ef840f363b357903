use std::fmt;

use crate::line_mode::LineMode;

/// Streaming sink that renders text lines into an [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// [`String`]. Each call to [`write_line`](Self::write_line) renders the line
/// and its extra values into the scratch buffer and forwards the result with a
/// single `write_all`, so the scratch allocation survives across lines.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
///
/// sink.write_line("WARNING: disk almost full", &["93%"])?;
/// sink.write_line::<u32>("ERROR: disk full", &[])?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "WARNING: disk almost full 93%\nERROR: disk full\n");
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Render a line without appending a newline:
///
/// ```
/// use logging_sink::{LineMode, MessageSink};
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write_line::<u32>("INFO: ready", &[])?;
///
/// assert_eq!(sink.into_inner(), b"INFO: ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    scratch: String,
    line_mode: LineMode,
}

mod writing;

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each rendered line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer,
            scratch: String::new(),
            line_mode,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}
