#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the write primitives the console logger sits on:
//! a line-oriented [`MessageSink`] wrapping a single [`std::io::Write`]
//! implementor, and a [`StreamPair`] that routes lines to either a
//! "standard" or an "error" destination selected by [`Stream`].
//!
//! # Design
//!
//! Each [`MessageSink`] keeps a reusable scratch buffer. A line and its trailing
//! extra values are rendered into that buffer first and then handed to the
//! writer with a single `write_all`, so a line is never split across several
//! writes. Callers control whether rendered lines end with a newline by
//! selecting a [`LineMode`].
//!
//! Higher layers depend on the [`OutputStreams`] trait rather than on concrete
//! writers. [`ConsoleStreams`] binds the trait to the process' stdout and
//! stderr, while `StreamPair<Vec<u8>, Vec<u8>>` captures output in memory.
//!
//! # Invariants
//!
//! - Extra values are appended verbatim, each preceded by a single space.
//! - `LineMode::WithNewline` terminates every rendered line with `\n`.
//! - No buffering or flushing policy is imposed beyond what the wrapped writer
//!   already provides.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{OutputStreams, Stream, StreamPair};
//!
//! let mut streams = StreamPair::new(Vec::new(), Vec::new());
//! streams.write_line(Stream::Standard, "INFO: ready", &[42])?;
//! streams.write_line::<&str>(Stream::Error, "ERROR: boom", &[])?;
//!
//! let (standard, error) = streams.into_inner();
//! assert_eq!(standard, b"INFO: ready 42\n");
//! assert_eq!(error, b"ERROR: boom\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod line_mode;
mod sink;
mod stream;

pub use line_mode::LineMode;
pub use sink::{ConsoleStreams, MessageSink, OutputStreams, StreamPair};
pub use stream::Stream;
