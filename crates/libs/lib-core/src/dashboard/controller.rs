//! # Dashboard Controller
//!
//! Owns the four table view models for the selected provider and keeps their
//! source collections in step with the feeds.
//!
//! Feeds arrive asynchronously. Every fetch is tagged with the
//! [`SelectionTicket`] that was current when it started, and
//! [`DashboardController::apply`] drops results whose ticket is no longer
//! current, so a slow response for a previous provider never lands on the
//! new one.

use std::sync::Arc;

use shared::dto::{PricesResponse, ProviderDto, ProvidersResponse, RewardDto, SwapTransactionDto};

use crate::config::Config;
use crate::error::Result;
use crate::model::derive::{balance_records, pair_records, reward_records, transaction_records};
use crate::model::{collection, Collection, Record};
use crate::table::{Breakpoints, Field, SortChange, TableKind, TableView, TableViewModel};

use super::liquidity::{total_provided_liquidity, PriceLookup};

/// Selection generation a fetch was started under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionTicket(u64);

impl SelectionTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// One feed result.
#[derive(Debug, Clone)]
pub enum FeedUpdate {
    Providers(ProvidersResponse),
    Rewards(Vec<RewardDto>),
    Transactions(Vec<SwapTransactionDto>),
    Prices(PricesResponse),
}

impl FeedUpdate {
    /// Feed name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            FeedUpdate::Providers(_) => "providers",
            FeedUpdate::Rewards(_) => "rewards",
            FeedUpdate::Transactions(_) => "transactions",
            FeedUpdate::Prices(_) => "prices",
        }
    }
}

/// Outcome of [`DashboardController::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    Stale,
}

/// Render snapshot of the whole dashboard.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub provider: Option<&'a str>,
    pub total_liquidity: Option<f64>,
    pub rewards: TableView<'a>,
    pub transactions: TableView<'a>,
    pub balances: TableView<'a>,
    pub pairs: TableView<'a>,
}

impl<'a> DashboardView<'a> {
    /// Tables in display order.
    pub fn tables(&self) -> [&TableView<'a>; 4] {
        [&self.rewards, &self.transactions, &self.balances, &self.pairs]
    }

    pub fn table(&self, kind: TableKind) -> &TableView<'a> {
        match kind {
            TableKind::Rewards => &self.rewards,
            TableKind::Transactions => &self.transactions,
            TableKind::Balances => &self.balances,
            TableKind::Pairs => &self.pairs,
        }
    }
}

/// Table state for one selected provider.
#[derive(Debug)]
pub struct DashboardController {
    generation: u64,
    provider: Option<String>,
    tables: [TableViewModel; 4],

    providers: Option<ProvidersResponse>,
    rewards: Option<Vec<RewardDto>>,
    transactions: Option<Vec<SwapTransactionDto>>,
    prices: Option<PricesResponse>,
}

impl DashboardController {
    pub fn new(config: &Config) -> Self {
        let breakpoints = Breakpoints::from_width(config.viewport_px);
        let tables = TableKind::ALL.map(|kind| {
            let mut table = TableViewModel::new(
                kind,
                config.page_size(kind),
                Arc::clone(&config.date_fields),
                kind.default_empty_message(),
            );
            table.set_breakpoints(breakpoints);
            table
        });

        Self {
            generation: 0,
            provider: None,
            tables,
            providers: None,
            rewards: None,
            transactions: None,
            prices: None,
        }
    }

    /// Ticket for fetches started now.
    pub fn ticket(&self) -> SelectionTicket {
        SelectionTicket(self.generation)
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn provider_record(&self) -> Option<&ProviderDto> {
        let name = self.provider.as_deref()?;
        self.providers.as_ref()?.get(name)
    }

    /// Known provider names, sorted.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers
            .as_ref()
            .map(|p| p.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Switch to `name`. Every ticket handed out before this call goes stale,
    /// and all four tables are re-derived and reset to their defaults.
    pub fn select_provider(&mut self, name: impl Into<String>) -> SelectionTicket {
        let name = name.into();
        self.generation += 1;

        let known = self
            .providers
            .as_ref()
            .map(|p| p.contains_key(&name));
        tracing::info!(
            provider = %name,
            generation = self.generation,
            known = ?known,
            "provider selected"
        );

        self.provider = Some(name);
        for kind in TableKind::ALL {
            self.rederive(kind);
            self.table_mut(kind).reset();
        }

        self.ticket()
    }

    /// Apply a feed result fetched under `ticket`.
    pub fn apply(&mut self, ticket: SelectionTicket, update: FeedUpdate) -> Applied {
        if ticket.0 != self.generation {
            tracing::debug!(
                feed = update.name(),
                ticket = ticket.0,
                current = self.generation,
                "dropping stale feed result"
            );
            return Applied::Stale;
        }

        let affected: &[TableKind] = match update {
            FeedUpdate::Providers(p) => {
                tracing::info!(providers = p.len(), "provider directory loaded");
                self.providers = Some(p);
                &[TableKind::Transactions, TableKind::Balances, TableKind::Pairs]
            }
            FeedUpdate::Rewards(r) => {
                tracing::info!(rewards = r.len(), "reward feed loaded");
                self.rewards = Some(r);
                &[TableKind::Rewards]
            }
            FeedUpdate::Transactions(t) => {
                tracing::info!(transactions = t.len(), "transaction feed loaded");
                self.transactions = Some(t);
                &[TableKind::Transactions]
            }
            FeedUpdate::Prices(p) => {
                tracing::info!(assets = p.len(), "token prices loaded");
                self.prices = Some(p);
                &[]
            }
        };

        for kind in affected {
            self.rederive(*kind);
        }
        Applied::Applied
    }

    /// Total USD value of the selected provider's balances, or `None` while
    /// the provider record is unknown.
    pub fn total_provided_liquidity(&self, prices: &impl PriceLookup) -> Option<f64> {
        self.provider_record()
            .map(|p| total_provided_liquidity(p, prices))
    }

    pub fn on_header_click(&mut self, kind: TableKind, field: Field) -> Result<SortChange> {
        self.table_mut(kind).on_header_click(field)
    }

    pub fn on_page_change(&mut self, kind: TableKind, page: usize) -> usize {
        self.table_mut(kind).on_page_change(page)
    }

    pub fn next_page(&mut self, kind: TableKind) -> bool {
        self.table_mut(kind).next_page()
    }

    pub fn prev_page(&mut self, kind: TableKind) -> bool {
        self.table_mut(kind).prev_page()
    }

    /// Breakpoints apply to every table.
    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        for table in &mut self.tables {
            table.set_breakpoints(breakpoints);
        }
    }

    pub fn table(&self, kind: TableKind) -> &TableViewModel {
        &self.tables[kind.index()]
    }

    pub fn view(&self) -> DashboardView<'_> {
        let [rewards, transactions, balances, pairs] = &self.tables;
        DashboardView {
            provider: self.provider.as_deref(),
            total_liquidity: self
                .prices
                .as_ref()
                .and_then(|p| self.total_provided_liquidity(p)),
            rewards: rewards.view(),
            transactions: transactions.view(),
            balances: balances.view(),
            pairs: pairs.view(),
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut TableViewModel {
        &mut self.tables[kind.index()]
    }

    /// Rebuild one table's source from the stored feeds.
    fn rederive(&mut self, kind: TableKind) {
        let records = match kind {
            TableKind::Rewards => match (&self.rewards, &self.provider) {
                (Some(feed), Some(name)) => Some(reward_records(feed, name)),
                _ => None,
            },
            TableKind::Transactions => match (&self.transactions, self.provider_record()) {
                (Some(feed), Some(p)) => Some(transaction_records(feed, p)),
                _ => None,
            },
            TableKind::Balances => self.provider_record().map(balance_records),
            TableKind::Pairs => self.provider_record().map(pair_records),
        };

        let table = self.table_mut(kind);
        match records {
            Some(records) if same_content(table.source(), &records) => {}
            Some(records) => {
                tracing::debug!(table = %kind, rows = records.len(), "table source replaced");
                table.set_collection(Some(collection(records)));
            }
            None => {
                table.set_collection(None);
            }
        }
    }
}

fn same_content(current: Option<&Collection>, records: &[Record]) -> bool {
    current.is_some_and(|c| c[..] == *records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{SortDirection, SortSpec, TableStatus};
    use serde_json::json;

    fn providers() -> ProvidersResponse {
        serde_json::from_value(json!({
            "alpha": {
                "addresses": { "A": "a-alpha", "B": "b-alpha" },
                "balances": {
                    "A": { "address": "a-alpha", "balance": 10 },
                    "B": { "address": "b-alpha", "balance": "5" }
                },
                "pairs": { "A-B": { "FEE": 0.3, "PRICE": 2 } }
            },
            "beta": {
                "addresses": { "A": "a-beta" },
                "balances": { "A": { "address": "a-beta", "balance": 1 } },
                "pairs": {}
            }
        }))
        .unwrap()
    }

    fn rewards(n: usize) -> Vec<RewardDto> {
        (0..n)
            .map(|i| {
                serde_json::from_value(json!({
                    "name": if i % 2 == 0 { "alpha" } else { "beta" },
                    "usd": i,
                    "reward": 1,
                    "date": format!("2024-02-{:02}", (i % 28) + 1)
                }))
                .unwrap()
            })
            .collect()
    }

    fn prices() -> PricesResponse {
        [("A".to_string(), 2.0), ("B".to_string(), 4.0)].into_iter().collect()
    }

    fn loaded() -> DashboardController {
        let mut c = DashboardController::new(&Config::default());
        let t = c.ticket();
        c.apply(t, FeedUpdate::Providers(providers()));
        c.apply(t, FeedUpdate::Rewards(rewards(50)));
        c.apply(t, FeedUpdate::Transactions(Vec::new()));
        c.apply(t, FeedUpdate::Prices(prices()));
        c.select_provider("alpha");
        c
    }

    #[test]
    fn test_tables_loading_before_selection() {
        let c = DashboardController::new(&Config::default());
        let view = c.view();
        for table in view.tables() {
            assert_eq!(table.status, TableStatus::Loading);
        }
        assert!(view.total_liquidity.is_none());
    }

    #[test]
    fn test_select_derives_all_tables() {
        let c = loaded();
        let view = c.view();

        assert_eq!(view.provider, Some("alpha"));
        assert_eq!(view.rewards.total_rows, 25);
        assert_eq!(view.rewards.max_page, 3);
        assert_eq!(view.transactions.status, TableStatus::Empty);
        assert_eq!(view.transactions.empty_message, Some("No recent transactions found."));
        assert_eq!(view.balances.total_rows, 2);
        assert_eq!(view.pairs.total_rows, 1);
        assert_eq!(view.total_liquidity, Some(40.0));
    }

    #[test]
    fn test_provider_names_sorted() {
        let c = loaded();
        assert_eq!(c.provider_names(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_stale_ticket_discarded() {
        let mut c = loaded();
        let old = c.ticket();
        c.select_provider("beta");

        assert_eq!(c.apply(old, FeedUpdate::Rewards(Vec::new())), Applied::Stale);
        assert_eq!(c.view().rewards.total_rows, 25);

        let current = c.ticket();
        assert_eq!(c.apply(current, FeedUpdate::Rewards(Vec::new())), Applied::Applied);
        assert_eq!(c.view().rewards.status, TableStatus::Empty);
    }

    #[test]
    fn test_equal_poll_keeps_sort_and_page() {
        let mut c = loaded();
        let usd = TableKind::Rewards.field("usd").unwrap();
        c.on_header_click(TableKind::Rewards, usd).unwrap();
        c.on_page_change(TableKind::Rewards, 2);

        let t = c.ticket();
        c.apply(t, FeedUpdate::Rewards(rewards(50)));

        let view = c.view();
        assert_eq!(view.rewards.page, 2);
        assert_eq!(view.rewards.sort_spec.field, Some(usd));
        assert_eq!(view.rewards.sort_spec.direction, SortDirection::Asc);
    }

    #[test]
    fn test_changed_poll_resets_table() {
        let mut c = loaded();
        let usd = TableKind::Rewards.field("usd").unwrap();
        c.on_header_click(TableKind::Rewards, usd).unwrap();
        c.on_page_change(TableKind::Rewards, 2);

        let t = c.ticket();
        c.apply(t, FeedUpdate::Rewards(rewards(52)));

        let view = c.view();
        assert_eq!(view.rewards.page, 1);
        assert_eq!(view.rewards.sort_spec, SortSpec::default());
    }

    #[test]
    fn test_reselect_resets_every_table() {
        let mut c = loaded();
        let usd = TableKind::Rewards.field("usd").unwrap();
        c.on_header_click(TableKind::Rewards, usd).unwrap();
        c.on_page_change(TableKind::Rewards, 2);

        c.select_provider("alpha");
        let view = c.view();
        assert_eq!(view.rewards.page, 1);
        assert!(view.rewards.sort_indicator.is_none());
    }

    #[test]
    fn test_unknown_provider_stays_loading() {
        let mut c = loaded();
        c.select_provider("gamma");

        let view = c.view();
        assert_eq!(view.balances.status, TableStatus::Loading);
        assert_eq!(view.pairs.status, TableStatus::Loading);
        assert_eq!(view.rewards.status, TableStatus::Empty);
        assert!(view.total_liquidity.is_none());
    }

    #[test]
    fn test_tables_are_independent() {
        let mut c = loaded();
        let asset = TableKind::Balances.field("asset").unwrap();
        c.on_header_click(TableKind::Balances, asset).unwrap();
        c.on_page_change(TableKind::Rewards, 3);

        let view = c.view();
        assert_eq!(view.rewards.page, 3);
        assert!(view.rewards.sort_indicator.is_none());
        assert_eq!(view.balances.page, 1);
        assert_eq!(view.balances.sort_indicator.map(|i| i.field), Some(asset));
    }

    #[test]
    fn test_breakpoints_reach_all_tables() {
        let mut c = loaded();
        c.set_breakpoints(Breakpoints::new(true, true));

        let view = c.view();
        assert_eq!(view.transactions.columns.len(), 3);
        assert_eq!(view.balances.columns.len(), 2);
        assert_eq!(view.pairs.columns.len(), 2);
    }

    #[test]
    fn test_configured_viewport_sets_initial_layout() {
        let config = Config { viewport_px: 700, ..Config::default() };
        let c = DashboardController::new(&config);

        let view = c.view();
        assert_eq!(view.transactions.class, crate::table::ResponsiveClass::Narrow);
        assert_eq!(view.transactions.columns.len(), 3);
        assert_eq!(c.table(TableKind::Rewards).breakpoints(), Breakpoints::new(true, true));
    }

    #[test]
    fn test_header_click_routed_by_kind() {
        let mut c = loaded();
        let price = TableKind::Pairs.field("price").unwrap();
        assert!(c.on_header_click(TableKind::Rewards, price).is_err());
        assert!(c.on_header_click(TableKind::Pairs, price).is_ok());
    }
}
