//! # rlog
//!
//! A minimal structured-logging facade. Code that emits logs, including
//! extensions compiled into the same executable, talks to one process-wide
//! [`LogHandler`] installed by the embedding application.
//!
//! ## Features
//!
//! - **Pluggable backend**: any type implementing the two-method [`LogHandler`] trait
//! - **Module tagging**: every record carries a trailing `module` attribute
//! - **Cheap when disabled**: no record is built for a level the handler rejects
//! - **Set once**: the handler slot cannot be overwritten after startup
//!
//! ## Example
//!
//! ```
//! use rlog::prelude::*;
//!
//! struct Stdout;
//!
//! impl LogHandler for Stdout {
//!     fn enabled(&self, level: LogLevel) -> bool {
//!         level >= LogLevel::Info
//!     }
//!
//!     fn handle(&self, record: LogRecord) {
//!         println!("{} {} {}", record.level, record.message, record.format_attrs());
//!     }
//! }
//!
//! rlog::set_default_handler(Stdout).unwrap();
//!
//! let logger = rlog::get_logger("http");
//! logger.info("started", [LogAttr::new("port", 8080)]);
//! rlog::info!(logger, "listening"; "addr" => "0.0.0.0");
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        AttrValue, HandlerSlot, LogAttr, LogHandler, LogLevel, LogRecord, Logger, LoggerError,
        Result, StructuredLogBuilder, ATTR_KEY_MODULE, DEFAULT_MODULE_NAME,
    };
    pub use crate::handlers::LevelFilter;
}

pub use crate::core::{
    default_logger, get_logger, is_initialized, set_default_handler, set_default_handler_shared,
    AttrValue, HandlerSlot, LogAttr, LogHandler, LogLevel, LogRecord, Logger, LoggerError, Result,
    StructuredLogBuilder, ATTR_KEY_MODULE, DEFAULT_MODULE_NAME,
};
pub use crate::handlers::{LevelFilter, LEVEL_ENV_VAR};
