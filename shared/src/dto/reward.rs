//! # Reward DTOs
//!
//! Flat reward history feed. Each entry names the provider that earned it.

use serde::{Deserialize, Serialize};

use super::Amount;

/// Reward paid to a provider for filling a swap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardDto {
    /// Provider name.
    pub name: String,
    /// Liquidity provided, in USD.
    #[serde(default)]
    pub usd: Amount,
    /// Network the liquidity was provided on.
    #[serde(default)]
    pub network: String,
    /// Reward amount, denominated in `output_network`.
    #[serde(default)]
    pub reward: Amount,
    #[serde(default)]
    pub output_network: String,
    /// Timestamp of the reward, RFC 3339 or `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reward_camel_case() {
        let raw = r#"{
            "name": "alpha",
            "usd": 120.5,
            "network": "BTC",
            "reward": "0.002",
            "outputNetwork": "ETH",
            "date": "2024-01-02"
        }"#;

        let reward: RewardDto = serde_json::from_str(raw).unwrap();
        assert_eq!(reward.name, "alpha");
        assert_eq!(reward.output_network, "ETH");
        assert_eq!(reward.reward.value(), Some(0.002));
    }

    #[test]
    fn test_sparse_rows_still_decode() {
        let raw = r#"[
            { "name": "alpha", "reward": 1, "date": "2024-01-02" },
            { "name": "alpha", "usd": null, "reward": null, "date": null },
            { "name": "alpha", "usd": 5, "reward": 2, "date": "2024-01-03" }
        ]"#;

        let rewards: Vec<RewardDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(rewards.len(), 3);
        assert_eq!(rewards[0].usd.value(), None);
        assert_eq!(rewards[1].reward.value(), None);
        assert!(rewards[1].date.is_empty());
        assert_eq!(rewards[2].usd.value(), Some(5.0));
    }
}
