//! # Core Library
//!
//! Table state for the liquidity-provider dashboard: per-table sort,
//! pagination and responsive layout, and the controller that keeps four such
//! tables in step with the selected provider.
//!
//! ## Modules
//!
//! - [`table`] - Schema, sort, pagination, layout and the per-table view model
//! - [`model`] - Records, collections and their derivation from the feeds
//! - [`dashboard`] - The four-table controller and the liquidity total
//! - [`config`] - Page sizes, date fields and poll interval
//! - [`error`] - `AppError` and the non-fatal `Degradation` states

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod table;

// Re-export commonly used types
pub use config::Config;
pub use dashboard::{Applied, DashboardController, DashboardView, FeedUpdate, PriceLookup, SelectionTicket};
pub use error::{AppError, Degradation, Result};
pub use model::{Collection, FieldValue, Record};
pub use table::{Breakpoints, Field, TableKind, TableView, TableViewModel};
