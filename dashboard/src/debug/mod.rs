//! # Logging
//!
//! File-based structured logging for the dashboard.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `lp_dashboard=info,lib_core=info,warn`)
//! - `DASHBOARD_LOG_DIR`: Log directory (default `logs`)
//! - `DASHBOARD_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup, before anything logs.
pub fn init() {
    init_logger();
}
