//! Logging macros for ergonomic record construction.
//!
//! The macros check the handler before evaluating anything else, so neither
//! the message format arguments nor the attribute expressions are computed
//! for a disabled level. Attributes follow the message after a `;` as
//! `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use rlog::prelude::*;
//! use rlog::{info, warn};
//! use std::sync::Arc;
//!
//! # struct Sink;
//! # impl LogHandler for Sink {
//! #     fn enabled(&self, _: LogLevel) -> bool { true }
//! #     fn handle(&self, _: LogRecord) {}
//! # }
//! let logger = Logger::new("server", Arc::new(Sink));
//!
//! // Message only
//! info!(logger, "Server started");
//!
//! // With attributes
//! info!(logger, "Server started"; "port" => 8080, "tls" => false);
//!
//! // With format arguments and attributes
//! let retries = 3;
//! warn!(logger, "Retry {} of {}", retries, 5; "peer" => "10.0.0.7");
//! ```

/// Build a `Vec<LogAttr>` from `key => value` pairs.
///
/// ```
/// let attrs = rlog::attrs!("port" => 8080, "host" => "localhost");
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs[0].key, "port");
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::LogAttr>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogAttr::new($key, $value)),+]
    };
}

/// Log at an explicit level.
///
/// ```
/// # use rlog::prelude::*;
/// # use std::sync::Arc;
/// # struct Sink;
/// # impl LogHandler for Sink {
/// #     fn enabled(&self, _: LogLevel) -> bool { true }
/// #     fn handle(&self, _: LogRecord) {}
/// # }
/// # let logger = Logger::new("doc", Arc::new(Sink));
/// use rlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500; "retryable" => false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {{
        let __logger = &$logger;
        let __level = $level;
        if __logger.enabled(__level) {
            __logger.__dispatch(
                __level,
                ::std::format!($fmt $(, $arg)*),
                [$($crate::LogAttr::new($key, $value)),+],
            );
        }
    }};
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)*) => {{
        let __logger = &$logger;
        let __level = $level;
        if __logger.enabled(__level) {
            __logger.__dispatch(
                __level,
                ::std::format!($fmt $(, $arg)*),
                ::std::iter::empty::<$crate::LogAttr>(),
            );
        }
    }};
}

/// Log a debug-level record.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level record.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level record.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level record.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
