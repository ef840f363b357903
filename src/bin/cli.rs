//! Command-line front end: feeds `KIND MESSAGE` pairs to a console logger.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use logging::{
    ColorChoice, ConfigError, ConsoleLogger, InvalidColorChoice, InvalidLevelError, LogError,
    LogLevel, LoggerConfig, Severity,
};
use logging_sink::{LineMode, StreamPair};

const PROGRAM_NAME: &str = "logtoconsole";

/// Exit status for usage and configuration errors.
const USAGE_EXIT: u8 = 1;
/// Exit status for failures writing to the output streams.
const IO_EXIT: u8 = 2;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Level(#[from] InvalidLevelError),
    #[error(transparent)]
    Color(#[from] InvalidColorChoice),
    #[error("unknown message kind \"{0}\", expected debug, info, warning, error or same")]
    UnknownKind(String),
    #[error("message kind \"{0}\" is missing its message")]
    MissingMessage(String),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("failed to flush output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    const fn exit_code(&self) -> u8 {
        match self {
            Self::Log(LogError::Io(_)) | Self::Io(_) => IO_EXIT,
            _ => USAGE_EXIT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Log(Severity),
    Same,
}

impl Kind {
    fn parse(text: &str) -> Result<Self, CliError> {
        if text == "same" {
            return Ok(Self::Same);
        }
        Severity::ALL
            .into_iter()
            .find(|severity| severity.name() == text)
            .map(Self::Log)
            .ok_or_else(|| CliError::UnknownKind(text.to_owned()))
    }
}

#[derive(Debug)]
struct ParsedArgs {
    level: Option<String>,
    color: Option<String>,
    no_newline: bool,
    entries: Vec<(Kind, String)>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write leveled, tagged messages to the console.")
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Filter level: 0-4 or none, error, warning, info, debug.")
                .num_args(1)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("Style the tags: auto, always or never.")
                .num_args(1)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-newline")
                .long("no-newline")
                .short('n')
                .help("Do not terminate written lines with a newline.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("entries")
                .value_name("KIND MESSAGE")
                .help("Pairs of message kind (debug, info, warning, error, same) and message.")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let level = matches.remove_one::<String>("level");
    let color = matches.remove_one::<String>("color");
    let no_newline = matches.get_flag("no-newline");

    let mut raw = matches
        .remove_many::<String>("entries")
        .map(|values| values.collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter();
    let mut entries = Vec::new();
    while let Some(kind) = raw.next() {
        let parsed = Kind::parse(&kind)?;
        let message = raw.next().ok_or(CliError::MissingMessage(kind))?;
        entries.push((parsed, message));
    }

    Ok(ParsedArgs {
        level,
        color,
        no_newline,
        entries,
    })
}

fn resolve_config<F>(parsed: &ParsedArgs, lookup: F) -> Result<LoggerConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = LoggerConfig::from_lookup(lookup)?;
    if let Some(level) = &parsed.level {
        config.level = level.parse::<LogLevel>()?;
    }
    if let Some(color) = &parsed.color {
        config.color = color.parse::<ColorChoice>()?;
    }
    if parsed.no_newline {
        config.line_mode = LineMode::WithoutNewline;
    }
    Ok(config)
}

fn execute<I, S, Out, Err, F>(
    arguments: I,
    stdout: &mut Out,
    stderr: &mut Err,
    lookup: F,
) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
    F: Fn(&str) -> Option<String>,
{
    let parsed = parse_args(arguments)?;
    let config = resolve_config(&parsed, lookup)?;

    let streams = StreamPair::with_line_mode(&mut *stdout, &mut *stderr, config.line_mode);
    let mut logger = ConsoleLogger::with_parts(config.level, streams, config.color.styler());

    for (kind, message) in &parsed.entries {
        match kind {
            Kind::Log(severity) => logger.log(*severity, message.as_str(), &[])?,
            Kind::Same => logger.same(message.as_str())?,
        };
    }

    logger.into_streams().flush()?;
    Ok(())
}

fn run<I, S, Out, Err, F>(arguments: I, stdout: &mut Out, stderr: &mut Err, lookup: F) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
    F: Fn(&str) -> Option<String>,
{
    match execute(arguments, stdout, stderr, lookup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(error))
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = write!(stdout, "{error}");
            ExitCode::SUCCESS
        }
        Err(CliError::Usage(error)) => {
            let _ = write!(stderr, "{error}");
            ExitCode::from(USAGE_EXIT)
        }
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

/// Parses `args`, reads the environment configuration and logs each pair.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run(args, stdout, stderr, |name| std::env::var(name).ok())
}
