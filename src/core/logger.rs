//! Module-tagged logger front object

use super::{
    handler::LogHandler,
    log_attr::LogAttr,
    log_level::LogLevel,
    log_record::{LogRecord, ATTR_KEY_MODULE},
};
use std::fmt;
use std::sync::Arc;

/// Module name used by the default logger
pub const DEFAULT_MODULE_NAME: &str = "default";

/// Leveled front end bound to one handler and tagged with a module name.
///
/// Every record a logger emits ends with a `module` attribute, so records from
/// extensions linked into the same binary can still be told apart.
/// Cloning is cheap and a logger is never mutated after creation.
#[derive(Clone)]
pub struct Logger {
    module: Arc<str>,
    handler: Arc<dyn LogHandler>,
}

impl Logger {
    /// Bind a logger directly to `handler`, bypassing the process-wide slot
    pub fn new(module: impl Into<Arc<str>>, handler: Arc<dyn LogHandler>) -> Self {
        Self {
            module: module.into(),
            handler,
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn handler(&self) -> &Arc<dyn LogHandler> {
        &self.handler
    }

    /// A logger for another module sharing this logger's handler
    #[must_use]
    pub fn with_module(&self, module: impl Into<Arc<str>>) -> Self {
        Self {
            module: module.into(),
            handler: Arc::clone(&self.handler),
        }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// Emit a record at `level`.
    ///
    /// `attrs` is only iterated when the handler accepts `level`; otherwise the
    /// call returns before anything is allocated.
    pub fn log<I>(&self, level: LogLevel, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = LogAttr>,
    {
        if !self.handler.enabled(level) {
            return;
        }
        self.__dispatch(level, message.into(), attrs);
    }

    /// Build and forward a record without consulting `enabled`.
    ///
    /// Not public API: the logging macros expand to this after their own
    /// [`enabled`](Self::enabled) check. Use [`log`](Self::log) instead.
    #[doc(hidden)]
    pub fn __dispatch<I>(&self, level: LogLevel, message: String, attrs: I)
    where
        I: IntoIterator<Item = LogAttr>,
    {
        let attrs = attrs.into_iter();
        let mut collected = Vec::with_capacity(attrs.size_hint().0 + 1);
        collected.extend(attrs);
        collected.push(LogAttr::new(ATTR_KEY_MODULE, &*self.module));

        self.handler.handle(LogRecord::new(level, message, collected));
    }

    #[inline]
    pub fn debug<I>(&self, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = LogAttr>,
    {
        self.log(LogLevel::Debug, message, attrs);
    }

    #[inline]
    pub fn info<I>(&self, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = LogAttr>,
    {
        self.log(LogLevel::Info, message, attrs);
    }

    #[inline]
    pub fn warn<I>(&self, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = LogAttr>,
    {
        self.log(LogLevel::Warn, message, attrs);
    }

    #[inline]
    pub fn error<I>(&self, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = LogAttr>,
    {
        self.log(LogLevel::Error, message, attrs);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}
