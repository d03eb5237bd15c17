//! Provider-scoped dashboard state.

pub mod controller;
pub mod liquidity;

pub use controller::{Applied, DashboardController, DashboardView, FeedUpdate, SelectionTicket};
pub use liquidity::{total_provided_liquidity, PriceLookup};
