//! Logging infrastructure for the libris library.
//!
//! Two [`EventSink`] implementations live here: [`Logger`], a stderr logger
//! with configurable verbosity, and [`FileLogger`], which appends one
//! timestamped line per event to a log file. [`tail_log`] reads that file
//! back.

use std::env;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::environment::LOG_MODE_VAR;
use crate::error::Result;
use crate::events::{CatalogEvent, EventSink, Outcome};

/// Verbosity of the stderr logger, ordered from quietest to chattiest.
///
/// ```
/// use libris::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Default,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Nothing on stderr.
    Quiet,
    /// Rejected operations and storage failures.
    #[default]
    Normal,
    /// Every event, including successes.
    Verbose,
}

impl LogLevel {
    const ALL: [Self; 3] = [Self::Quiet, Self::Normal, Self::Verbose];

    /// Lowercase name, as accepted by [`LogLevel::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// Parses a level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error naming the value if it is not a known level.
    ///
    /// ```
    /// use libris::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid log level: {s}"))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity label for an outcome.
const fn severity(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => "INFO",
        Outcome::Failed => "ERROR",
        _ => "WARN",
    }
}

/// The quietest level at which an outcome is still shown on stderr.
const fn threshold(outcome: Outcome) -> LogLevel {
    match outcome {
        Outcome::Success => LogLevel::Verbose,
        _ => LogLevel::Normal,
    }
}

/// Writes events to stderr as `<LEVEL>: <event>`.
///
/// Successes need [`LogLevel::Verbose`]; rejections (`WARN`) and storage
/// failures (`ERROR`) show at [`LogLevel::Normal`].
///
/// ```
/// use libris::events::{CatalogEvent, EventSink, Operation, Outcome};
/// use libris::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(!logger.shows(Outcome::Success));
/// logger.record(&CatalogEvent::new(Operation::AddBook, "title='Dune'", Outcome::Duplicate));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a stderr logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured verbosity.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether events with this outcome reach stderr.
    #[must_use]
    pub fn shows(&self, outcome: Outcome) -> bool {
        self.level >= threshold(outcome)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl EventSink for Logger {
    fn record(&self, event: &CatalogEvent) {
        if self.shows(event.outcome) {
            eprintln!("{}: {event}", severity(event.outcome));
        }
    }
}

/// Appends one line per event to a log file.
///
/// Each line has the form `<RFC 3339 timestamp> <LEVEL> <event>`. The parent
/// directory is created on first write. Write failures are reported through
/// the `log` facade and otherwise ignored.
///
/// # Examples
///
/// ```no_run
/// use libris::logging::FileLogger;
///
/// let logger = FileLogger::new("/tmp/libris/logs/libris.log");
/// ```
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    /// Creates a file logger writing to `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The log file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl EventSink for FileLogger {
    fn record(&self, event: &CatalogEvent) {
        let timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
        let line = format!("{timestamp} {} {event}", severity(event.outcome));
        if let Err(e) = self.append(&line) {
            log::warn!("failed to write log file {}: {e}", self.path.display());
        }
    }
}

/// How much of a log file to read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailLines {
    /// The last `n` lines.
    Last(usize),
    /// Every line.
    All,
}

impl TailLines {
    /// Default number of lines shown by the `logs` command.
    pub const DEFAULT: Self = Self::Last(200);

    /// Parses `"all"` or a line count.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither `all` nor a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use libris::logging::TailLines;
    ///
    /// assert_eq!(TailLines::parse("ALL").unwrap(), TailLines::All);
    /// assert_eq!(TailLines::parse("50").unwrap(), TailLines::Last(50));
    /// assert!(TailLines::parse("lots").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<usize>()
            .map(Self::Last)
            .map_err(|_| format!("expected a line count or 'all', got '{s}'"))
    }
}

/// Reads the tail of a log file.
///
/// Returns `Ok(None)` if the file does not exist yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn tail_log(path: &Path, lines: TailLines) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let all: Vec<String> = contents.lines().map(str::to_string).collect();
    let selected = match lines {
        TailLines::All => all,
        TailLines::Last(n) => {
            let start = all.len().saturating_sub(n);
            all[start..].to_vec()
        }
    };
    Ok(Some(selected))
}

/// Builds the stderr logger for a run.
///
/// `verbose` wins over `quiet`. With neither flag the level comes from
/// `LIBRIS_LOG_MODE`; an unset or unrecognised value means `Normal`.
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = match (verbose, quiet) {
        (true, _) => LogLevel::Verbose,
        (false, true) => LogLevel::Quiet,
        (false, false) => env::var(LOG_MODE_VAR)
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or_default(),
    };
    Logger::new(level)
}
