//! # Common Error Types
//!
//! Error handling for the dashboard binary.
//!
//! ## Error Categories
//!
//! - **Feed**: A provider feed could not be read or decoded
//! - **Config**: Startup configuration is missing or malformed
//! - **Core**: Anything raised by `lib-core` (schema violations, config
//!   validation)
//!
//! Feed errors never reach the tables. The fetch task logs them and the
//! affected table stays in its Loading state.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use lp_dashboard::core::error::{AppError, Result};
//!
//! fn provider_arg(raw: &str) -> Result<String> {
//!     if raw.trim().is_empty() {
//!         return Err(AppError::Config("provider name cannot be empty".to_string()));
//!     }
//!     Ok(raw.trim().to_string())
//! }
//! ```

use thiserror::Error;

/// Dashboard error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Feed read or decode failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lp_dashboard::core::error::AppError;
    ///
    /// let err = AppError::Feed("snapshot not found: data/snapshot.json".to_string());
    /// assert_eq!(err.to_string(), "Feed error: snapshot not found: data/snapshot.json");
    /// ```
    #[error("Feed error: {0}")]
    Feed(String),

    /// Startup configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by the table core.
    #[error(transparent)]
    Core(#[from] lib_core::AppError),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Feed(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Feed(format!("JSON error: {}", err))
    }
}
