//! Shared capture handler for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use rlog::{LogHandler, LogLevel, LogRecord};
use std::sync::{Arc, OnceLock};

/// Handler that stores every delivered record and rejects levels below `min`
pub struct CaptureHandler {
    min: LogLevel,
    records: Mutex<Vec<LogRecord>>,
}

impl CaptureHandler {
    pub fn new(min: LogLevel) -> Self {
        Self {
            min,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Records whose `module` attribute equals `module`
    pub fn records_for(&self, module: &str) -> Vec<LogRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.module() == Some(module))
            .cloned()
            .collect()
    }
}

impl LogHandler for CaptureHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min
    }

    fn handle(&self, record: LogRecord) {
        self.records.lock().push(record);
    }
}

/// Install one capture handler as the process-wide handler, enabled from Info up.
///
/// Tests in one binary run concurrently and share it, so each test uses its own
/// module name and filters with [`CaptureHandler::records_for`].
pub fn install_global() -> Arc<CaptureHandler> {
    static CAPTURE: OnceLock<Arc<CaptureHandler>> = OnceLock::new();

    CAPTURE
        .get_or_init(|| {
            let capture = Arc::new(CaptureHandler::new(LogLevel::Info));
            rlog::set_default_handler_shared(capture.clone())
                .expect("no other test installs a handler");
            capture
        })
        .clone()
}
