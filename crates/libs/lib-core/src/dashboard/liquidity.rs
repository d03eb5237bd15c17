//! # Provided Liquidity
//!
//! Sum of `balance × price` over every asset a provider holds.

use std::collections::{BTreeMap, HashMap};

use shared::dto::ProviderDto;

/// Current USD price by asset symbol.
pub trait PriceLookup {
    fn price(&self, asset: &str) -> Option<f64>;
}

impl PriceLookup for BTreeMap<String, f64> {
    fn price(&self, asset: &str) -> Option<f64> {
        self.get(asset).copied()
    }
}

impl PriceLookup for HashMap<String, f64> {
    fn price(&self, asset: &str) -> Option<f64> {
        self.get(asset).copied()
    }
}

/// Total USD value of the provider's balances.
///
/// A balance that is not a number, or an asset without a known price, adds 0.
pub fn total_provided_liquidity(provider: &ProviderDto, prices: &impl PriceLookup) -> f64 {
    provider
        .balances
        .iter()
        .map(|(asset, held)| {
            let Some(balance) = held.balance.value() else {
                tracing::debug!(asset = %asset, raw = %held.balance, "balance is not numeric, counting 0");
                return 0.0;
            };
            match prices.price(asset).filter(|p| p.is_finite()) {
                Some(price) => balance * price,
                None => {
                    tracing::debug!(asset = %asset, "no price for asset, counting 0");
                    0.0
                }
            }
        })
        .sum()
}
