//! # Fetch Tasks
//!
//! One spawned task per feed. Results go back over the event channel; the
//! main loop decides whether they are still current.

use std::sync::Arc;

use async_channel::Sender;
use lib_core::SelectionTicket;
use tokio::spawn;
use tracing::{debug, error};

use crate::app::events::AppEvent;
use crate::services::{FeedKind, FeedService};

/// Fetch every feed under `ticket`.
pub(crate) fn fetch_feeds(
    feed: Arc<dyn FeedService>,
    ticket: SelectionTicket,
    event_tx: Sender<AppEvent>,
) {
    for kind in FeedKind::ALL {
        fetch_feed(Arc::clone(&feed), kind, ticket, event_tx.clone());
    }
}

/// Fetch one feed under `ticket`.
pub(crate) fn fetch_feed(
    feed: Arc<dyn FeedService>,
    kind: FeedKind,
    ticket: SelectionTicket,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let event = match feed.fetch(kind).await {
            Ok(update) => {
                debug!(feed = kind.name(), ticket = ticket.generation(), "feed fetched");
                AppEvent::FeedLoaded { ticket, update }
            }
            Err(e) => {
                error!(feed = kind.name(), ticket = ticket.generation(), error = %e, "feed fetch failed");
                AppEvent::FeedFailed {
                    ticket,
                    feed: kind,
                    error: e.to_string(),
                }
            }
        };

        if event_tx.send(event).await.is_err() {
            debug!(feed = kind.name(), "event channel closed, dropping result");
        }
    });
}
