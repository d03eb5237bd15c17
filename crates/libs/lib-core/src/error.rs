//! # Centralized Error Handling
//!
//! Two kinds of failure live here:
//!
//! - [`AppError`] is a real error. It comes from loading configuration, decoding
//!   feed payloads, or a caller handing the controller something that does not
//!   fit the table schema. These propagate with `?`.
//! - [`Degradation`] is not an error from the user's point of view. A table
//!   whose data has not arrived, or arrived empty, or whose records lack the
//!   active sort field, still renders; it just renders a loading indicator,
//!   an empty-state message, or a tail of unsorted-looking rows.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn page_size(raw: usize) -> Result<usize> {
//!     if raw == 0 {
//!         return Err(AppError::Config("page size must be at least 1".to_string()));
//!     }
//!     Ok(raw)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures that stop an operation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller passed something outside the table schema (unknown field,
    /// field from another table kind, unknown table name).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Feed payload could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

/// Convert env-var read failures to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{} must be set in environment", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid value", name))
            }
        }
    }
}

/// Non-fatal table conditions. Each one maps to a UI state, never to an error
/// surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Degradation {
    /// Collection not fetched yet, or the fetch failed. Rendered as Loading.
    #[error("data unavailable")]
    DataUnavailable,

    /// Collection fetched and empty. Rendered as the empty-state message.
    #[error("collection is empty")]
    EmptyCollection,

    /// Some records lack the active sort field. They sort as the minimum value.
    #[error("{count} record(s) missing sort field `{field}`")]
    MissingFieldValue { field: String, count: usize },
}
