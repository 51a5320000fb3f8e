//! Minimum-level gate in front of another handler

use crate::core::{LogHandler, LogLevel, LogRecord, LoggerError, Result};
use parking_lot::RwLock;
use std::env;

/// Conventional variable name to pass to [`LevelFilter::from_env`]
pub const LEVEL_ENV_VAR: &str = "RLOG_LEVEL";

/// Wraps a handler and disables every level below a minimum.
///
/// The inner handler is still consulted for levels at or above the minimum,
/// so both gates must agree before a record is built.
///
/// # Example
///
/// ```
/// use rlog::handlers::LevelFilter;
/// use rlog::{LogHandler, LogLevel, LogRecord};
///
/// struct Sink;
/// impl LogHandler for Sink {
///     fn enabled(&self, _: LogLevel) -> bool { true }
///     fn handle(&self, _: LogRecord) {}
/// }
///
/// let filter = LevelFilter::new(LogLevel::Warn, Sink);
/// assert!(!filter.enabled(LogLevel::Info));
/// assert!(filter.enabled(LogLevel::Error));
/// ```
pub struct LevelFilter<H> {
    min_level: RwLock<LogLevel>,
    inner: H,
}

impl<H: LogHandler> LevelFilter<H> {
    pub fn new(min_level: LogLevel, inner: H) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            inner,
        }
    }

    /// Read the minimum level from the environment variable `var`.
    ///
    /// An unset variable yields the default level; an unparsable one is an
    /// [`LoggerError::InvalidConfiguration`].
    pub fn from_env(var: &str, inner: H) -> Result<Self> {
        let level = match env::var(var) {
            Ok(value) => Self::parse_level(var, &value)?,
            Err(env::VarError::NotPresent) => LogLevel::default(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(LoggerError::config(var, "value is not valid unicode"));
            }
        };
        Ok(Self::new(level, inner))
    }

    fn parse_level(var: &str, value: &str) -> Result<LogLevel> {
        value
            .parse()
            .map_err(|e: LoggerError| LoggerError::config(var, e.to_string()))
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: LogHandler> LogHandler for LevelFilter<H> {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read() && self.inner.enabled(level)
    }

    fn handle(&self, record: LogRecord) {
        self.inner.handle(record);
    }
}
