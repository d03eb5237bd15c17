//! # Provider DTOs
//!
//! Shape of `GET /api/v1/info/get`: a map of provider name to the provider's
//! addresses, balances and supported pairs.
//!
//! ```json
//! {
//!   "alpha": {
//!     "addresses": { "BTC": "bc1qxy2k...", "ETH": "0x3f5ce5..." },
//!     "balances": {
//!       "BTC": { "address": "bc1qxy2k...", "balance": "1.25" },
//!       "ETH": { "address": "0x3f5ce5...", "balance": 40 }
//!     },
//!     "pairs": { "BTC-ETH": { "FEE": 0.3, "PRICE": "32.1" } }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Amount;

/// All providers keyed by name.
pub type ProvidersResponse = BTreeMap<String, ProviderDto>;

/// One liquidity provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderDto {
    /// Asset symbol to the provider's receiving address on that network.
    #[serde(default)]
    pub addresses: BTreeMap<String, String>,

    /// Asset symbol to the provider's balance on that network.
    #[serde(default)]
    pub balances: BTreeMap<String, BalanceDto>,

    /// Pair symbol (`"BTC-ETH"`) to the pair's fee and quoted price.
    #[serde(default)]
    pub pairs: BTreeMap<String, PairDto>,
}

impl ProviderDto {
    /// Address the provider uses for `asset`, if any.
    pub fn address_for(&self, asset: &str) -> Option<&str> {
        self.addresses.get(asset).map(String::as_str)
    }
}

/// Balance held on one network.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BalanceDto {
    #[serde(default)]
    pub address: String,
    pub balance: Amount,
}

/// Fee and price for one supported pair.
///
/// The service sends these keys upper-cased.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PairDto {
    #[serde(rename = "FEE")]
    pub fee: Amount,
    #[serde(rename = "PRICE")]
    pub price: Amount,
}
