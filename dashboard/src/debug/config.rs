//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_FILTER: &str = "lp_dashboard=info,lib_core=info,warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log file path (daily rotation adds a date suffix)
    pub log_file: PathBuf,
    /// Log level filter (e.g., "lp_dashboard=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        let log_dir = PathBuf::from("logs");
        Self {
            log_file: log_dir.join("lp-dashboard.log"),
            log_level: DEFAULT_FILTER.to_string(),
            log_dir,
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("DASHBOARD_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            log_file: log_dir.join("lp-dashboard.log"),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            log_dir,
            log_to_stderr: std::env::var("DASHBOARD_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.is_trace_enabled()
    }

    /// Check if trace logging is enabled
    pub fn is_trace_enabled(&self) -> bool {
        self.log_level.contains("trace")
    }
}
