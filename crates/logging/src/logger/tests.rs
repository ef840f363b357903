use super::*;
use crate::error::InvalidMessageTypeError;
use crate::style::AnsiStyler;
use logging_sink::StreamPair;
use std::io;
use std::sync::{Arc, Mutex};

type Captured = StreamPair<Vec<u8>, Vec<u8>>;

fn capture(level: u8) -> ConsoleLogger<Captured> {
    ConsoleLogger::with_streams(level, StreamPair::new(Vec::new(), Vec::new()))
        .expect("level is valid")
}

fn standard(logger: &ConsoleLogger<Captured>) -> String {
    String::from_utf8(logger.streams().standard().get_ref().clone()).expect("utf-8")
}

fn error(logger: &ConsoleLogger<Captured>) -> String {
    String::from_utf8(logger.streams().error().get_ref().clone()).expect("utf-8")
}

#[test]
fn each_severity_uses_its_tag_and_stream() {
    let mut logger = capture(4);
    logger.debug("d").unwrap();
    logger.info("i").unwrap();
    logger.warning("w").unwrap();
    logger.error("e").unwrap();

    assert_eq!(standard(&logger), "DEBUG: d\nINFO: i\nWARNING: w\n");
    assert_eq!(error(&logger), "ERROR: e\n");
}

#[test]
fn filter_suppresses_more_verbose_messages() {
    let mut logger = capture(2);
    logger.debug("hidden").unwrap();
    logger.info("hidden").unwrap();
    logger.warning("shown").unwrap();
    logger.error("shown").unwrap();

    assert_eq!(standard(&logger), "WARNING: shown\n");
    assert_eq!(error(&logger), "ERROR: shown\n");
}

#[test]
fn no_logging_suppresses_everything() {
    let mut logger = capture(0);
    logger.error("hidden").unwrap().same("hidden").unwrap();
    assert!(standard(&logger).is_empty());
    assert!(error(&logger).is_empty());
}

#[test]
fn extras_are_appended_verbatim() {
    let mut logger = capture(3);
    logger
        .info_with("copied", &[LogArg::from(3), "files".into(), LogArg::from(true)])
        .unwrap();
    assert_eq!(standard(&logger), "INFO: copied 3 files true\n");
}

#[test]
fn error_continuation_is_padded_on_error_stream() {
    let mut logger = capture(4);
    logger.error("boom").unwrap().same("more").unwrap();

    assert_eq!(error(&logger), "ERROR: boom\n       more\n");
    assert!(standard(&logger).is_empty());
}

#[test]
fn continuation_padding_follows_kind_name() {
    let mut logger = capture(4);
    logger.debug("a").unwrap().same("b").unwrap();
    logger.info("c").unwrap().same("d").unwrap();
    logger.warning("e").unwrap().same_with("f", &[LogArg::from(1)]).unwrap();

    assert_eq!(
        standard(&logger),
        "DEBUG: a\n       b\nINFO: c\n      d\nWARNING: e\n         f 1\n"
    );
}

#[test]
fn repeated_continuations_keep_the_same_kind() {
    let mut logger = capture(3);
    logger.info("first").unwrap();
    logger.same("second").unwrap().same("third").unwrap();

    assert_eq!(logger.last_kind(), Some(Severity::Info));
    assert_eq!(standard(&logger), "INFO: first\n      second\n      third\n");
}

#[test]
fn same_before_any_call_is_silent() {
    let mut logger = capture(4);
    logger.same("first").unwrap();
    assert_eq!(logger.last_kind(), None);
    assert!(standard(&logger).is_empty());
    assert!(error(&logger).is_empty());
}

#[test]
fn suppressed_call_still_records_kind() {
    let mut logger = capture(2);
    logger.debug("x").unwrap();
    assert_eq!(logger.last_kind(), Some(Severity::Debug));

    logger.same("y").unwrap();
    assert!(standard(&logger).is_empty());
}

#[test]
fn continuation_rechecks_current_level() {
    let mut logger = capture(3);
    logger.warning("w").unwrap();
    logger.set_level(1).unwrap();
    logger.same("cont").unwrap();

    assert_eq!(standard(&logger), "WARNING: w\n");
}

#[test]
fn raising_level_reveals_continuation_of_suppressed_call() {
    let mut logger = capture(1);
    logger.info("hidden").unwrap();
    logger.set_level(LogLevel::Info).unwrap();
    logger.same("visible").unwrap();

    assert_eq!(standard(&logger), "      visible\n");
}

#[test]
fn non_string_message_fails_even_when_filtered() {
    let mut logger = capture(0);
    let error = logger.debug(42).unwrap_err();
    assert_eq!(
        error.as_invalid_message_type(),
        Some(&InvalidMessageTypeError::new("integer"))
    );
    assert_eq!(logger.last_kind(), Some(Severity::Debug));
}

#[test]
fn non_string_message_fails_without_output() {
    let mut logger = capture(4);
    assert!(logger.error(false).is_err());
    assert!(logger.info(None::<&str>).is_err());
    assert_eq!(logger.last_kind(), Some(Severity::Info));
    assert!(standard(&logger).is_empty());
    assert!(error(&logger).is_empty());
}

#[test]
fn non_string_message_fails_at_every_level_and_severity() {
    for level in LogLevel::ALL {
        for severity in Severity::ALL {
            let mut logger = capture(level.as_u8());
            let result = match severity {
                Severity::Debug => logger.debug(1),
                Severity::Info => logger.info(1),
                Severity::Warning => logger.warning(1),
                Severity::Error => logger.error(1),
            }
            .map(|_| ());

            assert!(
                matches!(result, Err(LogError::InvalidMessageType(_))),
                "level {level}, severity {severity}"
            );
            assert_eq!(logger.last_kind(), Some(severity));
            assert!(standard(&logger).is_empty());
            assert!(error(&logger).is_empty());
        }
    }
}

#[test]
fn same_rejects_non_string_message() {
    let mut logger = capture(4);
    let error = logger.same(1.5).unwrap_err();
    assert_eq!(
        error.as_invalid_message_type().map(InvalidMessageTypeError::found),
        Some("float")
    );
}

#[test]
fn same_does_not_change_last_kind_on_failure() {
    let mut logger = capture(4);
    logger.warning("w").unwrap();
    assert!(logger.same(7).is_err());
    assert_eq!(logger.last_kind(), Some(Severity::Warning));
}

#[test]
fn set_level_round_trips_and_rejects_invalid_values() {
    let mut logger = capture(1);
    for level in 0..=4_u8 {
        assert_eq!(logger.set_level(level).unwrap().as_u8(), level);
        assert_eq!(logger.level().as_u8(), level);
    }

    assert!(logger.set_level(5).unwrap_err().is_out_of_range());
    assert!(!logger.set_level(2.5).unwrap_err().is_out_of_range());
    assert!(logger.set_level(-1).is_err());
    assert!(logger.set_level("verbose").is_err());
    assert!(logger.set_level("4").is_err());
    assert!(logger.set_level("info").is_err());
    assert_eq!(logger.level(), LogLevel::Debug);
}

#[test]
fn construction_rejects_invalid_levels() {
    assert!(ConsoleLogger::with_streams(9, Captured::default()).is_err());
    assert!(ConsoleLogger::with_streams(f64::NAN, Captured::default()).is_err());
    assert!(ConsoleLogger::with_level(-3).is_err());
}

#[test]
fn default_console_logger_filters_at_error() {
    let logger = ConsoleLogger::new();
    assert_eq!(logger.level(), LogLevel::Error);
    assert_eq!(logger.last_kind(), None);
}

#[test]
fn styled_tag_does_not_affect_padding() {
    let mut logger = capture(4).styled_with(AnsiStyler);
    logger.error("boom").unwrap().same("more").unwrap();

    let output = error(&logger);
    let mut lines = output.lines();
    let first = lines.next().unwrap();
    assert!(first.starts_with('\u{1b}'));
    assert!(first.ends_with(" boom"));
    assert_eq!(lines.next(), Some("       more"));
}

#[test]
fn styler_receives_unstyled_tag_and_severity() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = {
        let seen = Arc::clone(&seen);
        move |tag: &str, severity: Severity| {
            seen.lock().unwrap().push((tag.to_owned(), severity));
            format!("<{tag}>")
        }
    };
    let mut logger = capture(4).styled_with(recorder);
    logger.warning("careful").unwrap();
    logger.debug("detail").unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            ("WARNING:".to_owned(), Severity::Warning),
            ("DEBUG:".to_owned(), Severity::Debug),
        ]
    );
    assert_eq!(standard(&logger), "<WARNING:> careful\n<DEBUG:> detail\n");
}

#[test]
fn styler_is_not_called_for_suppressed_messages() {
    let calls = Arc::new(Mutex::new(0_usize));
    let counter = {
        let calls = Arc::clone(&calls);
        move |tag: &str, _: Severity| {
            *calls.lock().unwrap() += 1;
            tag.to_owned()
        }
    };
    let mut logger = capture(1).styled_with(counter);
    logger.debug("hidden").unwrap();
    logger.error("shown").unwrap();
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn io_failures_are_surfaced() {
    #[derive(Debug)]
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut logger = ConsoleLogger::with_streams(4, StreamPair::new(Vec::new(), Broken)).unwrap();
    logger.info("fine").unwrap();
    let error = logger.error("lost").unwrap_err();
    assert!(matches!(error, LogError::Io(ref inner) if inner.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn instances_do_not_share_state() {
    let mut first = capture(4);
    let mut second = capture(1);

    first.info("one").unwrap();
    assert_eq!(second.last_kind(), None);
    second.same("nothing").unwrap();
    assert!(standard(&second).is_empty());

    second.set_level(0).unwrap();
    assert_eq!(first.level(), LogLevel::Debug);
}

#[test]
fn debug_output_names_state() {
    let mut logger = capture(3);
    logger.info("x").unwrap();
    let rendered = format!("{logger:?}");
    assert!(rendered.contains("ConsoleLogger"));
    assert!(rendered.contains("Info"));
}
