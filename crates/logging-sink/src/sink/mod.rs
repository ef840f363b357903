mod message_sink;
mod pair;

pub use message_sink::MessageSink;
pub use pair::{ConsoleStreams, OutputStreams, StreamPair};
