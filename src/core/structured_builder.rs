//! Structured log builder for fluent record construction
//!
//! Provides a builder pattern for emitting records attribute by attribute.

use super::log_attr::{AttrValue, LogAttr};
use super::log_level::LogLevel;
use super::logger::Logger;

/// Builder for structured log records
///
/// The handler is asked once, when the builder is created, whether the level
/// is enabled. A disabled builder ignores every attribute without converting it.
///
/// # Example
///
/// ```
/// use rlog::prelude::*;
/// use std::sync::Arc;
///
/// # struct Sink;
/// # impl LogHandler for Sink {
/// #     fn enabled(&self, _: LogLevel) -> bool { true }
/// #     fn handle(&self, _: LogRecord) {}
/// # }
/// let logger = Logger::new("http", Arc::new(Sink));
///
/// logger.info_builder()
///     .message("Request processed")
///     .attr("user_id", 12345)
///     .attr("latency_ms", 42.5)
///     .attr("status", 200)
///     .log();
/// ```
#[must_use = "a builder does nothing until `log()` is called"]
pub struct StructuredLogBuilder<'a> {
    logger: &'a Logger,
    level: LogLevel,
    enabled: bool,
    message: String,
    attrs: Vec<LogAttr>,
}

impl<'a> StructuredLogBuilder<'a> {
    /// Create a new structured log builder
    pub fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            enabled: logger.enabled(level),
            message: String::new(),
            attrs: Vec::new(),
        }
    }

    /// Whether `log()` will reach the handler
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the log message
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        if self.enabled {
            self.message = msg.into();
        }
        self
    }

    /// Append one attribute
    pub fn attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        if self.enabled {
            self.attrs.push(LogAttr::new(key, value));
        }
        self
    }

    /// Append several attributes in order
    pub fn attrs<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = LogAttr>,
    {
        if self.enabled {
            self.attrs.extend(attrs);
        }
        self
    }

    /// Build and send the record
    ///
    /// This consumes the builder.
    pub fn log(self) {
        if self.enabled {
            self.logger.__dispatch(self.level, self.message, self.attrs);
        }
    }
}

impl Logger {
    pub fn debug_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Debug)
    }

    pub fn info_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Info)
    }

    pub fn warn_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Warn)
    }

    pub fn error_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Error)
    }
}
