//! # Liquidity-Provider Dashboard
//!
//! Headless dashboard over a liquidity provider's data: reward history, swap
//! transactions, balances and supported pairs, each as a sortable, paginated
//! table whose columns follow the viewport width.
//!
//! ## Architecture
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (event loop, selection, polling)
//!   │   ├── services::feed (FeedService, SnapshotFeed)
//!   │   └── lib_core::DashboardController (table state)
//!   │
//!   └── ui::text (plain-text rendering)
//! ```
//!
//! Fetches run as tokio tasks and report back through an `async-channel`.
//! Only the main loop touches the controller.
//!
//! ## Modules
//!
//! - **app**: `App`, `AppEvent`, fetch tasks
//! - **core**: `AppError`, `Result`
//! - **debug**: logging setup
//! - **services**: feed sources
//! - **ui**: text renderer

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use app::{App, AppEvent};
pub use core::{AppError, Result};
