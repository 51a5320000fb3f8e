//! Core facade types and traits

pub mod error;
pub mod handler;
pub mod log_attr;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod registry;
pub mod structured_builder;

pub use error::{LoggerError, Result};
pub use handler::LogHandler;
pub use log_attr::{AttrValue, LogAttr};
pub use log_level::LogLevel;
pub use log_record::{LogRecord, ATTR_KEY_MODULE};
pub use logger::{Logger, DEFAULT_MODULE_NAME};
pub use registry::{
    default_logger, get_logger, is_initialized, set_default_handler, set_default_handler_shared,
    HandlerSlot,
};
pub use structured_builder::StructuredLogBuilder;
