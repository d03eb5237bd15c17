//! # Utilities Library
//!
//! Shared utility functions for environment variables and time parsing.

pub mod envs;
pub mod time;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use time::{format_time, parse_date_like, parse_utc};
