//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the console logger.
//!
//! [`ConsoleLayer`] is a tracing-subscriber layer that forwards every event to
//! a [`ConsoleLogger`], so code instrumented with the standard tracing macros
//! (`trace!`, `debug!`, `info!`, `warn!`, `error!`) produces the same tagged
//! console lines as direct logger calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{ConsoleLogger, init_tracing};
//!
//! init_tracing(ConsoleLogger::with_level(3)?)?;
//!
//! tracing::info!("listening");
//! tracing::warn!(path = "a.txt", "vanished");
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

use logging_sink::OutputStreams;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::util::TryInitError;

use crate::arg::LogArg;
use crate::levels::Severity;
use crate::logger::ConsoleLogger;

/// A tracing layer that writes events through a [`ConsoleLogger`].
///
/// The `message` field becomes the logged message; every other field is
/// appended as a `name=value` extra. The logger's own filter level decides
/// what is written.
pub struct ConsoleLayer<S> {
    logger: Mutex<ConsoleLogger<S>>,
}

impl<S> ConsoleLayer<S> {
    /// Wraps `logger` in a layer.
    #[must_use]
    pub const fn new(logger: ConsoleLogger<S>) -> Self {
        Self {
            logger: Mutex::new(logger),
        }
    }

    /// Runs `f` with exclusive access to the wrapped logger.
    pub fn with_logger<R>(&self, f: impl FnOnce(&mut ConsoleLogger<S>) -> R) -> R {
        let mut logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut logger)
    }

    /// Consumes the layer and returns the wrapped logger.
    #[must_use]
    pub fn into_logger(self) -> ConsoleLogger<S> {
        self.logger
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Map a tracing level to a severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<S, Sub> Layer<Sub> for ConsoleLayer<S>
where
    S: OutputStreams + Send + 'static,
    Sub: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let severity = Self::severity_for(event.metadata().level());

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let message = visitor.message.unwrap_or_default();
        let extra: Vec<LogArg<'static>> = visitor.fields.into_iter().map(LogArg::from).collect();

        self.with_logger(|logger| {
            // Layers have no error channel; a failed write is dropped here.
            let _ = logger.log(severity, message, &extra);
        });
    }
}

/// Visitor splitting an event into its message and remaining fields.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs a global subscriber that forwards events to `logger`.
///
/// Fails if a global subscriber has already been set.
pub fn init_tracing<S>(logger: ConsoleLogger<S>) -> Result<(), TryInitError>
where
    S: OutputStreams + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ConsoleLayer::new(logger))
        .try_init()
}

/// Installs a global subscriber that applies `filter` before forwarding events to `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{ConsoleLogger, init_tracing_with_filter};
/// use tracing_subscriber::filter::LevelFilter;
///
/// init_tracing_with_filter(ConsoleLogger::with_level(4)?, LevelFilter::INFO)?;
/// ```
pub fn init_tracing_with_filter<S, F>(logger: ConsoleLogger<S>, filter: F) -> Result<(), TryInitError>
where
    S: OutputStreams + Send + 'static,
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::LogLevel;
    use logging_sink::StreamPair;
    use std::io;
    use std::sync::Arc;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_severity_for() {
        type Bridge = ConsoleLayer<StreamPair<Vec<u8>, Vec<u8>>>;
        assert_eq!(Bridge::severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(Bridge::severity_for(&Level::WARN), Severity::Warning);
        assert_eq!(Bridge::severity_for(&Level::INFO), Severity::Info);
        assert_eq!(Bridge::severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(Bridge::severity_for(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn events_are_written_through_the_logger() {
        let standard = SharedBuf::default();
        let error = SharedBuf::default();
        let logger = ConsoleLogger::with_streams(
            LogLevel::Info,
            StreamPair::new(standard.clone(), error.clone()),
        )
        .unwrap();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("service started");
            tracing::debug!("hidden");
            tracing::warn!(path = "a.txt", "vanished");
            tracing::error!(code = 23, "partial transfer");
        });

        assert_eq!(
            standard.contents(),
            "INFO: service started\nWARNING: vanished path=a.txt\n"
        );
        assert_eq!(error.contents(), "ERROR: partial transfer code=23\n");
    }

    #[test]
    fn trace_events_use_the_debug_tag() {
        let standard = SharedBuf::default();
        let logger = ConsoleLogger::with_streams(
            LogLevel::Debug,
            StreamPair::new(standard.clone(), Vec::new()),
        )
        .unwrap();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            let attempt = 2;
            tracing::trace!("fine detail, attempt {attempt}");
        });

        assert_eq!(standard.contents(), "DEBUG: fine detail, attempt 2\n");
    }

    #[test]
    fn wrapped_logger_is_reachable() {
        let layer = ConsoleLayer::new(
            ConsoleLogger::with_streams(LogLevel::Debug, StreamPair::new(Vec::new(), Vec::new()))
                .unwrap(),
        );
        layer.with_logger(|logger| {
            logger.warning("direct").unwrap();
        });

        let logger = layer.into_logger();
        assert_eq!(logger.last_kind(), Some(Severity::Warning));
        assert_eq!(logger.streams().standard().get_ref(), b"WARNING: direct\n");
    }

    #[test]
    fn global_subscriber_installs_once() {
        let logger = ConsoleLogger::with_streams(
            LogLevel::Debug,
            StreamPair::new(Vec::new(), Vec::new()),
        )
        .unwrap();
        init_tracing_with_filter(logger, tracing_subscriber::filter::LevelFilter::TRACE)
            .expect("first installation succeeds");

        let again = ConsoleLogger::with_streams(
            LogLevel::Debug,
            StreamPair::new(Vec::new(), Vec::new()),
        )
        .unwrap();
        assert!(init_tracing(again).is_err());
    }
}
