//! # Dashboard Configuration
//!
//! Page sizes, date-valued field names, the poll interval and the starting
//! viewport width, loaded from
//! environment variables and validated on startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `DASHBOARD_PAGE_SIZE` | `10` |
//! | `DASHBOARD_REWARDS_PAGE_SIZE` | `DASHBOARD_PAGE_SIZE` |
//! | `DASHBOARD_TRANSACTIONS_PAGE_SIZE` | `DASHBOARD_PAGE_SIZE` |
//! | `DASHBOARD_BALANCES_PAGE_SIZE` | `DASHBOARD_PAGE_SIZE` |
//! | `DASHBOARD_PAIRS_PAGE_SIZE` | `DASHBOARD_PAGE_SIZE` |
//! | `DASHBOARD_DATE_FIELDS` | `date,expiration` |
//! | `DASHBOARD_POLL_SECS` | `60` |
//! | `DASHBOARD_VIEWPORT_PX` | `1440` |
//!
//! ## Global Config Access
//!
//! Binaries call [`init_config()`] once and read it back with [`core_config()`].
//! Library code never reaches for the global: the controller takes `&Config`.
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().unwrap();
//! let poll = core_config().poll_interval_secs;
//! ```

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::error::{AppError, Result};
use crate::table::TableKind;

/// Field names whose values are compared as timestamps.
pub type DateFields = Arc<BTreeSet<String>>;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_DATE_FIELDS: &str = "date,expiration";
const DEFAULT_POLL_SECS: u64 = 60;
const DEFAULT_VIEWPORT_PX: u32 = 1440;

/// Dashboard configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub rewards_page_size: usize,
    pub transactions_page_size: usize,
    pub balances_page_size: usize,
    pub pairs_page_size: usize,

    /// Field names compared as timestamps.
    pub date_fields: DateFields,

    /// How often the app re-polls the provider feeds.
    pub poll_interval_secs: u64,

    /// Viewport width the tables are first laid out for.
    pub viewport_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rewards_page_size: DEFAULT_PAGE_SIZE,
            transactions_page_size: DEFAULT_PAGE_SIZE,
            balances_page_size: DEFAULT_PAGE_SIZE,
            pairs_page_size: DEFAULT_PAGE_SIZE,
            date_fields: parse_field_list(DEFAULT_DATE_FIELDS),
            poll_interval_secs: DEFAULT_POLL_SECS,
            viewport_px: DEFAULT_VIEWPORT_PX,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let page_size = get_env_parse_or("DASHBOARD_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;

        Ok(Self {
            rewards_page_size: get_env_parse_or("DASHBOARD_REWARDS_PAGE_SIZE", page_size)?,
            transactions_page_size: get_env_parse_or("DASHBOARD_TRANSACTIONS_PAGE_SIZE", page_size)?,
            balances_page_size: get_env_parse_or("DASHBOARD_BALANCES_PAGE_SIZE", page_size)?,
            pairs_page_size: get_env_parse_or("DASHBOARD_PAIRS_PAGE_SIZE", page_size)?,
            date_fields: parse_field_list(&get_env_or("DASHBOARD_DATE_FIELDS", DEFAULT_DATE_FIELDS)),
            poll_interval_secs: get_env_parse_or("DASHBOARD_POLL_SECS", DEFAULT_POLL_SECS)?,
            viewport_px: get_env_parse_or("DASHBOARD_VIEWPORT_PX", DEFAULT_VIEWPORT_PX)?,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for kind in TableKind::ALL {
            if self.page_size(kind) == 0 {
                return Err(AppError::Config(format!(
                    "page size for {} must be at least 1",
                    kind.name()
                )));
            }
        }

        if self.poll_interval_secs == 0 {
            return Err(AppError::Config("DASHBOARD_POLL_SECS must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Page size for one table.
    pub fn page_size(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::Rewards => self.rewards_page_size,
            TableKind::Transactions => self.transactions_page_size,
            TableKind::Balances => self.balances_page_size,
            TableKind::Pairs => self.pairs_page_size,
        }
    }
}

/// Split a comma list into a set of trimmed, non-empty names.
pub fn parse_field_list(raw: &str) -> DateFields {
    Arc::new(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are malformed
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}
