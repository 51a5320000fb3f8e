//! Process-wide handler slot
//!
//! Extensions compiled into one executable share a single backend: the
//! embedding application installs it once at startup, before any logger is
//! retrieved. The slot is set-once; the handler cannot be replaced afterwards.
//!
//! # Example
//!
//! ```no_run
//! use rlog::{LogHandler, LogLevel, LogRecord};
//!
//! struct Stderr;
//!
//! impl LogHandler for Stderr {
//!     fn enabled(&self, level: LogLevel) -> bool {
//!         level >= LogLevel::Info
//!     }
//!
//!     fn handle(&self, record: LogRecord) {
//!         eprintln!("[{}] {} {}", record.level, record.message, record.format_attrs());
//!     }
//! }
//!
//! rlog::set_default_handler(Stderr).expect("handler installed once");
//!
//! let logger = rlog::get_logger("my_extension");
//! logger.info("extension loaded", [rlog::LogAttr::new("version", "1.0")]);
//! ```

use super::{
    error::{LoggerError, Result},
    handler::LogHandler,
    logger::{Logger, DEFAULT_MODULE_NAME},
};
use std::fmt;
use std::sync::{Arc, OnceLock};

const HANDLER_NOT_SET: &str =
    "rlog: handler not set; call set_default_handler() before retrieving a logger";

/// Set-once holder for a log handler.
///
/// The global functions in this module operate on one static instance; a
/// `HandlerSlot` can also be owned and passed to subsystems explicitly.
pub struct HandlerSlot {
    handler: OnceLock<Arc<dyn LogHandler>>,
}

impl HandlerSlot {
    pub const fn new() -> Self {
        Self {
            handler: OnceLock::new(),
        }
    }

    /// Install `handler`; fails if a handler is already present.
    ///
    /// Concurrent callers race on the same cell and exactly one of them wins.
    pub fn set<H: LogHandler + 'static>(&self, handler: H) -> Result<()> {
        self.set_shared(Arc::new(handler))
    }

    /// Install an already shared handler
    pub fn set_shared(&self, handler: Arc<dyn LogHandler>) -> Result<()> {
        self.handler
            .set(handler)
            .map_err(|_| LoggerError::HandlerAlreadySet)
    }

    pub fn is_set(&self) -> bool {
        self.handler.get().is_some()
    }

    pub fn handler(&self) -> Option<&Arc<dyn LogHandler>> {
        self.handler.get()
    }

    /// Logger tagged with `module`.
    ///
    /// # Panics
    ///
    /// Panics if no handler has been installed.
    pub fn logger(&self, module: impl Into<Arc<str>>) -> Logger {
        match self.handler.get() {
            Some(handler) => Logger::new(module, Arc::clone(handler)),
            None => panic!("{}", HANDLER_NOT_SET),
        }
    }

    /// Logger tagged with [`DEFAULT_MODULE_NAME`].
    ///
    /// # Panics
    ///
    /// Panics if no handler has been installed.
    pub fn default_logger(&self) -> Logger {
        self.logger(DEFAULT_MODULE_NAME)
    }
}

impl Default for HandlerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}

static GLOBAL_SLOT: HandlerSlot = HandlerSlot::new();

/// Install the process-wide handler.
///
/// Call this once from `main()` before starting anything that logs. A second
/// call returns [`LoggerError::HandlerAlreadySet`] and keeps the first handler.
pub fn set_default_handler<H: LogHandler + 'static>(handler: H) -> Result<()> {
    GLOBAL_SLOT.set(handler)
}

/// Install an already shared process-wide handler
pub fn set_default_handler_shared(handler: Arc<dyn LogHandler>) -> Result<()> {
    GLOBAL_SLOT.set_shared(handler)
}

pub fn is_initialized() -> bool {
    GLOBAL_SLOT.is_set()
}

/// Logger for the `default` module.
///
/// # Panics
///
/// Panics if [`set_default_handler`] has not been called.
pub fn default_logger() -> Logger {
    GLOBAL_SLOT.default_logger()
}

/// Logger whose records carry `module` as their `module` attribute.
///
/// Extensions pass their own name here since the call stack cannot tell
/// them apart inside one executable.
///
/// # Panics
///
/// Panics if [`set_default_handler`] has not been called.
pub fn get_logger(module: impl Into<Arc<str>>) -> Logger {
    GLOBAL_SLOT.logger(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logger::tests::Capture;
    use crate::core::LogLevel;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_second_set_is_rejected() {
        let slot = HandlerSlot::new();
        let first = Capture::new(LogLevel::Debug);
        let second = Capture::new(LogLevel::Debug);

        assert!(slot.set(first.clone()).is_ok());
        assert!(matches!(
            slot.set(second.clone()),
            Err(LoggerError::HandlerAlreadySet)
        ));

        slot.default_logger().info("kept", []);
        assert_eq!(first.take().len(), 1);
        assert!(second.take().is_empty());
    }

    #[test]
    #[should_panic(expected = "handler not set")]
    fn test_logger_without_handler_panics() {
        let slot = HandlerSlot::new();
        let _ = slot.logger("orphan");
    }

    #[test]
    fn test_default_logger_is_idempotent() {
        let slot = HandlerSlot::new();
        let capture = Capture::new(LogLevel::Debug);
        slot.set(capture.clone()).unwrap();

        let a = slot.default_logger();
        let b = slot.default_logger();
        assert_eq!(a.module(), b.module());
        assert!(Arc::ptr_eq(a.handler(), b.handler()));

        a.info("same", [crate::core::LogAttr::new("n", 1)]);
        b.info("same", [crate::core::LogAttr::new("n", 1)]);
        let records = capture.take();
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn test_concurrent_set_single_winner() {
        const THREADS: usize = 8;
        let slot = Arc::new(HandlerSlot::new());
        let barrier = Arc::new(Barrier::new(THREADS));
        let captures: Vec<_> = (0..THREADS).map(|_| Capture::new(LogLevel::Debug)).collect();

        let handles: Vec<_> = captures
            .iter()
            .cloned()
            .map(|capture| {
                let slot = Arc::clone(&slot);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    slot.set(capture).is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);

        for i in 0..THREADS {
            slot.logger(format!("m{}", i)).warn("probe", []);
        }
        let delivered: Vec<_> = captures.iter().map(|c| c.take().len()).collect();
        assert_eq!(delivered.iter().filter(|n| **n == THREADS).count(), 1);
        assert_eq!(delivered.iter().sum::<usize>(), THREADS);
    }
}
