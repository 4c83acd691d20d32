//! TVmaze Search Widget Core Library
//!
//! This crate provides the core functionality of a show-search widget
//! backed by the public TVmaze API (https://api.tvmaze.com).
//!
//! # Features
//! - Search for TV shows by term
//! - List all episodes of a show
//! - Render shows and episodes into bootstrap-style DOM markup
//! - Resolve delegated "Episodes" clicks back to a show id

pub mod catalog;
pub mod client;
pub mod controller;
pub mod dom;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;

// Re-export main types for convenience
pub use catalog::TvmazeCatalog;
pub use client::{ClientConfig, TvmazeClient, TVMAZE_BASE_URL};
pub use controller::SearchWidget;
pub use error::{CatalogError, Result};
pub use parser::MISSING_IMAGE_URL;
pub use render::Container;
pub use types::{Episode, Show};
