//! # Services
//!
//! External data sources.
//!
//! - [`feed`]: the `FeedService` trait and the snapshot-file implementation

pub mod feed;

pub use feed::{FeedKind, FeedService, Snapshot, SnapshotFeed};
