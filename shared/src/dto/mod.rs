//! # Data Transfer Objects (DTOs)
//!
//! Structures for the provider service's JSON feeds.
//!
//! ## Module Organization
//!
//! - [`amount`] - Numeric values that may arrive as numbers or strings
//! - [`provider`] - Provider directory: addresses, balances, pairs
//! - [`reward`] - Reward history feed
//! - [`transaction`] - Swap transaction history feed
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the feeds (`outputNetwork`), upper-case on
//!   pair entries (`FEE`, `PRICE`)
//! - **Maps**: `BTreeMap`, so iteration order is by key
//! - **Optional fields**: Omitted when `None`
//! - **Sortable fields**: Default to empty when absent or `null`, so one sparse
//!   row never fails the whole feed
//!
//! Token prices are a plain `symbol -> usd` map, see [`PricesResponse`].

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

pub mod amount;
pub mod provider;
pub mod reward;
pub mod transaction;

pub use amount::*;
pub use provider::*;
pub use reward::*;
pub use transaction::*;

/// Current USD price per asset symbol.
pub type PricesResponse = BTreeMap<String, f64>;

/// Decode `null` as the field type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
