//! # Application Events
//!
//! Results sent from fetch tasks back to the main loop. Every result carries
//! the selection ticket its fetch was started under.

use lib_core::{FeedUpdate, SelectionTicket};

use crate::services::FeedKind;

/// Async task results sent to the main loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A feed arrived
    FeedLoaded {
        ticket: SelectionTicket,
        update: FeedUpdate,
    },
    /// A feed could not be fetched
    FeedFailed {
        ticket: SelectionTicket,
        feed: FeedKind,
        error: String,
    },
}

impl AppEvent {
    pub fn ticket(&self) -> SelectionTicket {
        match self {
            AppEvent::FeedLoaded { ticket, .. } | AppEvent::FeedFailed { ticket, .. } => *ticket,
        }
    }
}
