//! # Model
//!
//! Table records and their derivation from the provider feeds.

// region: --- Modules
pub mod derive;
pub mod record;
// endregion: --- Modules

// region: --- Re-exports
pub use record::{collection, Collection, FieldValue, Record};
// endregion: --- Re-exports
