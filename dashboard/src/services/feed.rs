//! # Feed Service
//!
//! The provider service's four feeds behind one trait, so the app can run
//! against a live client or a local snapshot.
//!
//! [`SnapshotFeed`] reads a JSON file shaped like
//!
//! ```json
//! {
//!   "providers": { "alpha": { "addresses": {}, "balances": {}, "pairs": {} } },
//!   "rewards": [],
//!   "transactions": [],
//!   "prices": { "BTC": 64250.0 }
//! }
//! ```
//!
//! Missing sections decode as empty. The file is re-read on every call, so
//! editing it while the app runs shows up on the next poll.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lib_core::FeedUpdate;
use serde::Deserialize;
use shared::dto::{PricesResponse, ProvidersResponse, RewardDto, SwapTransactionDto};

use crate::core::error::{AppError, Result};

const DEFAULT_SNAPSHOT: &str = "data/snapshot.json";

/// One of the provider service's feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Providers,
    Rewards,
    Transactions,
    Prices,
}

impl FeedKind {
    pub const ALL: [FeedKind; 4] = [
        FeedKind::Providers,
        FeedKind::Rewards,
        FeedKind::Transactions,
        FeedKind::Prices,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FeedKind::Providers => "providers",
            FeedKind::Rewards => "rewards",
            FeedKind::Transactions => "transactions",
            FeedKind::Prices => "prices",
        }
    }
}

/// Source of provider data.
#[async_trait]
pub trait FeedService: Send + Sync {
    /// Provider directory keyed by name
    async fn providers(&self) -> Result<ProvidersResponse>;

    /// Reward history for all providers
    async fn rewards(&self) -> Result<Vec<RewardDto>>;

    /// Swap history for all providers
    async fn transactions(&self) -> Result<Vec<SwapTransactionDto>>;

    /// Current USD price per asset
    async fn prices(&self) -> Result<PricesResponse>;

    /// Fetch one feed as a controller update.
    async fn fetch(&self, kind: FeedKind) -> Result<FeedUpdate> {
        Ok(match kind {
            FeedKind::Providers => FeedUpdate::Providers(self.providers().await?),
            FeedKind::Rewards => FeedUpdate::Rewards(self.rewards().await?),
            FeedKind::Transactions => FeedUpdate::Transactions(self.transactions().await?),
            FeedKind::Prices => FeedUpdate::Prices(self.prices().await?),
        })
    }
}

/// On-disk snapshot of all four feeds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub providers: ProvidersResponse,
    #[serde(default)]
    pub rewards: Vec<RewardDto>,
    #[serde(default)]
    pub transactions: Vec<SwapTransactionDto>,
    #[serde(default)]
    pub prices: PricesResponse,
}

/// Feed service backed by a snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    path: PathBuf,
}

impl SnapshotFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from `DASHBOARD_SNAPSHOT`, or `data/snapshot.json`.
    pub fn from_env() -> Self {
        Self::new(lib_utils::envs::get_env_or("DASHBOARD_SNAPSHOT", DEFAULT_SNAPSHOT))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Snapshot> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Feed(format!("{}: {}", self.path.display(), e)))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl FeedService for SnapshotFeed {
    async fn providers(&self) -> Result<ProvidersResponse> {
        Ok(self.load().await?.providers)
    }

    async fn rewards(&self) -> Result<Vec<RewardDto>> {
        Ok(self.load().await?.rewards)
    }

    async fn transactions(&self) -> Result<Vec<SwapTransactionDto>> {
        Ok(self.load().await?.transactions)
    }

    async fn prices(&self) -> Result<PricesResponse> {
        Ok(self.load().await?.prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_snapshot(name: &str, body: &serde_json::Value) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lp-dashboard-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, body.to_string()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_snapshot_feed_loads_sections() {
        let path = write_snapshot(
            "sections",
            &json!({
                "providers": {
                    "alpha": {
                        "addresses": { "BTC": "bc1qalpha" },
                        "balances": { "BTC": { "address": "bc1qalpha", "balance": "1.5" } },
                        "pairs": { "BTC-ETH": { "FEE": 0.3, "PRICE": 32.1 } }
                    }
                },
                "rewards": [
                    { "name": "alpha", "usd": 10, "reward": "0.1", "date": "2024-01-01" }
                ],
                "prices": { "BTC": 64250.0 }
            }),
        );
        let feed = SnapshotFeed::new(&path);

        assert_eq!(feed.providers().await.unwrap().len(), 1);
        assert_eq!(feed.rewards().await.unwrap().len(), 1);
        assert!(feed.transactions().await.unwrap().is_empty());
        assert_eq!(feed.prices().await.unwrap().get("BTC"), Some(&64250.0));

        let update = feed.fetch(FeedKind::Rewards).await.unwrap();
        assert!(matches!(update, FeedUpdate::Rewards(r) if r.len() == 1));

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_feed_error() {
        let feed = SnapshotFeed::new(std::env::temp_dir().join("lp-dashboard-does-not-exist.json"));
        assert!(matches!(feed.providers().await, Err(AppError::Feed(_))));
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_feed_error() {
        let path = std::env::temp_dir().join(format!("lp-dashboard-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let feed = SnapshotFeed::new(&path);
        assert!(matches!(feed.prices().await, Err(AppError::Feed(msg)) if msg.starts_with("JSON error")));

        std::fs::remove_file(path).ok();
    }
}
