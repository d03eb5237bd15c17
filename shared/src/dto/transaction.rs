//! # Swap Transaction DTOs
//!
//! Flat swap history feed. A swap moves `inputAmountNum` of `network` from
//! `sender` to a provider's `receiver` address, and the provider pays out
//! `outputAmountNum` of `outputNetwork` to `outputAddress`.

use serde::{Deserialize, Serialize};

use super::Amount;

/// One cross-network swap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactionDto {
    pub transaction_hash: String,
    pub network: String,
    pub output_network: String,
    #[serde(default)]
    pub status: Amount,
    #[serde(default)]
    pub block_number: Amount,
    /// Unix seconds.
    #[serde(default)]
    pub expiration: Amount,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sender: String,
    /// Provider address that received the input side.
    #[serde(default)]
    pub receiver: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub output_address: String,
    #[serde(default)]
    pub input_amount_num: Amount,
    #[serde(default)]
    pub output_amount_num: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completeness_transaction_hash: Option<String>,
}

impl SwapTransactionDto {
    /// Pair symbol in the same form the provider's pair map uses.
    pub fn pair(&self) -> String {
        format!("{}-{}", self.network, self.output_network)
    }
}
