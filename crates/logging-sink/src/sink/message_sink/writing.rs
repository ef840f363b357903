use super::MessageSink;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `line` followed by each `extra` value using the sink's current
    /// [`LineMode`](crate::LineMode).
    ///
    /// Extra values are rendered with their [`Display`](fmt::Display)
    /// implementation and separated from the line and from each other by a
    /// single space. The whole line reaches the writer in one `write_all`.
    pub fn write_line<D>(&mut self, line: &str, extra: &[D]) -> io::Result<()>
    where
        D: fmt::Display,
    {
        self.scratch.clear();
        self.scratch.push_str(line);
        for value in extra {
            // Formatting into a String only fails if a Display impl reports an error.
            write!(self.scratch, " {value}").map_err(io::Error::other)?;
        }
        if self.line_mode.append_newline() {
            self.scratch.push('\n');
        }
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
