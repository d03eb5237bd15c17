//! # Application
//!
//! Event loop around the [`DashboardController`].
//!
//! ## Event Flow
//!
//! ```text
//! refresh() ──spawn──▶ fetch task ──AppEvent──▶ event channel
//!                                                   │
//!                       on_tick() / run() ◀─────────┘
//!                             │
//!                             ▼
//!               controller.apply(ticket, update)
//! ```
//!
//! Only this loop touches the controller. Fetch tasks never see it; they only
//! carry the ticket that was current when they were spawned, and the
//! controller drops anything whose ticket has gone stale.

pub mod events;
pub(crate) mod tasks;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver, Sender};
use lib_core::{Applied, Breakpoints, Config, DashboardController, FeedUpdate, TableKind};

use crate::core::error::Result;
use crate::services::FeedService;
use crate::ui::TextRenderer;

pub use events::AppEvent;

/// Dashboard application state.
pub struct App {
    controller: DashboardController,
    feed: Arc<dyn FeedService>,

    /// Channel receiver for fetch results, drained in `on_tick()`.
    event_rx: Receiver<AppEvent>,
    /// Cloned into every fetch task.
    event_tx: Sender<AppEvent>,

    /// Provider asked for on the command line. Falls back to the first known
    /// provider once the directory loads.
    requested: Option<String>,
    poll_interval: Duration,
    renderer: TextRenderer,
}

impl App {
    pub fn new(config: &Config, feed: Arc<dyn FeedService>, requested: Option<String>) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            requested = ?requested,
            poll_secs = config.poll_interval_secs,
            "App initialized"
        );

        Self {
            controller: DashboardController::new(config),
            feed,
            event_rx,
            event_tx,
            requested,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            renderer: TextRenderer::new(config),
        }
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    /// Fetch every feed under the current selection.
    pub fn refresh(&self) {
        tasks::fetch_feeds(
            Arc::clone(&self.feed),
            self.controller.ticket(),
            self.event_tx.clone(),
        );
    }

    /// Switch provider and refetch. Results still in flight for the previous
    /// provider will be dropped when they arrive.
    pub fn select_provider(&mut self, name: impl Into<String>) {
        self.controller.select_provider(name);
        self.refresh();
    }

    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.controller.set_breakpoints(breakpoints);
    }

    /// Apply a header click by table and field name.
    pub fn on_header_click(&mut self, kind: TableKind, field: &str) -> Result<()> {
        let field = kind.field(field)?;
        self.controller.on_header_click(kind, field)?;
        Ok(())
    }

    pub fn on_page_change(&mut self, kind: TableKind, page: usize) -> usize {
        self.controller.on_page_change(kind, page)
    }

    /// Process every pending event without waiting. Returns how many changed
    /// the dashboard.
    pub fn on_tick(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            if self.handle_event(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Current dashboard as text.
    pub fn render(&self) -> String {
        self.renderer.render(&self.controller.view())
    }

    /// Poll the feeds until interrupted, printing the dashboard whenever it
    /// changes.
    pub async fn run(mut self) -> Result<()> {
        self.refresh();

        let mut interval = tokio::time::interval(self.poll_interval);
        // First tick fires immediately; the initial fetch already went out.
        interval.tick().await;

        loop {
            tokio::select! {
                event = self.event_rx.recv() => {
                    let Ok(event) = event else { break };
                    let changed = usize::from(self.handle_event(event)) + self.on_tick();
                    if changed > 0 {
                        println!("{}", self.render());
                    }
                }
                _ = interval.tick() => {
                    tracing::debug!(ticket = self.controller.ticket().generation(), "polling feeds");
                    self.refresh();
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, shutting down");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Apply one event. Returns true when the dashboard changed.
    fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::FeedLoaded { ticket, update } => {
                let is_directory = matches!(update, FeedUpdate::Providers(_));
                if self.controller.apply(ticket, update) == Applied::Stale {
                    return false;
                }
                if is_directory && self.controller.provider().is_none() {
                    self.select_initial_provider();
                }
                true
            }
            AppEvent::FeedFailed { ticket, feed, error } => {
                // Already logged by the task. The table keeps what it had.
                tracing::debug!(
                    feed = feed.name(),
                    ticket = ticket.generation(),
                    error = %error,
                    "feed failure received"
                );
                false
            }
        }
    }

    fn select_initial_provider(&mut self) {
        let name = match self.requested.take() {
            Some(name) => name,
            None => match self.controller.provider_names().first() {
                Some(first) => first.to_string(),
                None => {
                    tracing::warn!("provider directory is empty, nothing to select");
                    return;
                }
            },
        };
        self.select_provider(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use async_trait::async_trait;
    use lib_core::table::TableStatus;
    use serde_json::json;
    use shared::dto::{PricesResponse, ProvidersResponse, RewardDto, SwapTransactionDto};

    struct FixedFeed;

    #[async_trait]
    impl FeedService for FixedFeed {
        async fn providers(&self) -> Result<ProvidersResponse> {
            Ok(serde_json::from_value(json!({
                "alpha": {
                    "addresses": { "A": "a-alpha" },
                    "balances": { "A": { "address": "a-alpha", "balance": 10 } },
                    "pairs": { "A-B": { "FEE": 0.3, "PRICE": 2 } }
                },
                "beta": { "balances": { "A": { "balance": 1 } } }
            }))?)
        }

        async fn rewards(&self) -> Result<Vec<RewardDto>> {
            Ok(serde_json::from_value(json!([
                { "name": "alpha", "usd": 10, "reward": 1, "date": "2024-01-01" },
                { "name": "beta", "usd": 20, "reward": 2, "date": "2024-01-02" }
            ]))?)
        }

        async fn transactions(&self) -> Result<Vec<SwapTransactionDto>> {
            Err(AppError::Feed("history endpoint unavailable".to_string()))
        }

        async fn prices(&self) -> Result<PricesResponse> {
            Ok([("A".to_string(), 2.0)].into_iter().collect())
        }
    }

    /// Drain events until `done` holds or the channel goes quiet.
    async fn settle(app: &mut App, done: impl Fn(&App) -> bool) {
        for _ in 0..50 {
            app.on_tick();
            if done(app) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_first_provider_selected_after_directory_loads() {
        let mut app = App::new(&Config::default(), Arc::new(FixedFeed), None);
        app.refresh();
        settle(&mut app, |a| {
            a.controller().view().rewards.status == TableStatus::Populated
                && a.controller().view().total_liquidity.is_some()
        })
        .await;

        let view = app.controller().view();
        assert_eq!(view.provider, Some("alpha"));
        assert_eq!(view.rewards.total_rows, 1);
        assert_eq!(view.balances.total_rows, 1);
        assert_eq!(view.total_liquidity, Some(20.0));
    }

    #[tokio::test]
    async fn test_requested_provider_wins() {
        let mut app = App::new(&Config::default(), Arc::new(FixedFeed), Some("beta".to_string()));
        app.refresh();
        settle(&mut app, |a| a.controller().view().rewards.status == TableStatus::Populated).await;

        assert_eq!(app.controller().provider(), Some("beta"));
    }

    #[tokio::test]
    async fn test_failed_feed_stays_loading() {
        let mut app = App::new(&Config::default(), Arc::new(FixedFeed), None);
        app.refresh();
        settle(&mut app, |a| a.controller().view().balances.status == TableStatus::Populated).await;

        assert_eq!(app.controller().view().transactions.status, TableStatus::Loading);
    }

    #[tokio::test]
    async fn test_stale_event_ignored() {
        let mut app = App::new(&Config::default(), Arc::new(FixedFeed), None);
        let old = app.controller().ticket();
        app.select_provider("alpha");

        let stale = AppEvent::FeedLoaded {
            ticket: old,
            update: FeedUpdate::Rewards(Vec::new()),
        };
        assert!(!app.handle_event(stale));
    }

    #[tokio::test]
    async fn test_header_click_by_name() {
        let mut app = App::new(&Config::default(), Arc::new(FixedFeed), None);
        assert!(app.on_header_click(TableKind::Rewards, "usd").is_ok());
        assert!(app.on_header_click(TableKind::Rewards, "price").is_err());
    }
}
