//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the liquidity provider service and
//! the dashboard. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the provider service feeds
//!   - **[`dto::provider`]**: Provider directory (addresses, balances, pairs)
//!   - **[`dto::reward`]**: Reward history
//!   - **[`dto::transaction`]**: Swap transaction history
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::ProvidersResponse;
//!
//! let providers: ProvidersResponse = serde_json::from_str(
//!     r#"{ "alpha": { "balances": { "BTC": { "address": "bc1q", "balance": "2" } } } }"#,
//! ).unwrap();
//!
//! assert_eq!(providers["alpha"].balances["BTC"].balance.value(), Some(2.0));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
