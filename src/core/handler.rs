//! Handler trait for log delivery backends

use super::{log_level::LogLevel, log_record::LogRecord};
use std::sync::Arc;

/// Backend capability that decides which levels are active and delivers records.
///
/// Console writers, file appenders, exporters and test spies all implement
/// this trait; the facade only holds a shared reference to one of them.
/// Delivery is fire-and-forget: any failure inside [`handle`](Self::handle)
/// is the handler's own concern.
pub trait LogHandler: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;
    fn handle(&self, record: LogRecord);
}

impl<H: LogHandler + ?Sized> LogHandler for Arc<H> {
    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    #[inline]
    fn handle(&self, record: LogRecord) {
        (**self).handle(record)
    }
}

impl<H: LogHandler + ?Sized> LogHandler for Box<H> {
    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    #[inline]
    fn handle(&self, record: LogRecord) {
        (**self).handle(record)
    }
}
