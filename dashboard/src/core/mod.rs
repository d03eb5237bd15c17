//! # Core Abstractions
//!
//! Error types for the dashboard binary.
//!
//! - **[`error`]**: `AppError`, `Result<T>`

pub mod error;

pub use error::{AppError, Result};
