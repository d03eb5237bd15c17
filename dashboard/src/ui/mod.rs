//! # Presentation
//!
//! - [`text`]: plain-text rendering of the dashboard view

pub mod text;

pub use text::TextRenderer;
