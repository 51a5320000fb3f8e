//! Extension modules sharing one handler
//!
//! Demonstrates installing a handler once in `main()` and letting each
//! extension retrieve its own module-tagged logger.
//!
//! Run with: RLOG_LEVEL=debug cargo run --example extension_modules

use rlog::prelude::*;
use rlog::{info, warn, LEVEL_ENV_VAR};

/// Writes one line per record to stderr
struct StderrHandler;

impl LogHandler for StderrHandler {
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn handle(&self, record: LogRecord) {
        eprintln!("[{:5}] {} {}", record.level, record.message, record.format_attrs());
    }
}

mod cache_extension {
    pub fn start() {
        let logger = rlog::get_logger("cache");
        logger.info("cache ready", [rlog::LogAttr::new("capacity", 1024)]);
        logger.debug("warming entries", []);
    }
}

mod http_extension {
    pub fn start(port: u16) {
        let logger = rlog::get_logger("http");
        rlog::info!(logger, "listening on port {}", port; "port" => port);
        logger
            .warn_builder()
            .message("tls disabled")
            .attr("reason", "no certificate configured")
            .log();
    }
}

fn main() -> Result<()> {
    rlog::set_default_handler(LevelFilter::from_env(LEVEL_ENV_VAR, StderrHandler)?)?;

    let logger = rlog::default_logger();
    info!(logger, "starting extensions");

    cache_extension::start();
    http_extension::start(8080);

    warn!(logger, "shutting down"; "uptime_s" => 0);
    Ok(())
}
