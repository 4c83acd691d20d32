//! JSON response parsers for the TVmaze API
//!
//! This module contains parsers for normalizing TVmaze response bodies:
//! - `search`: Parse the show-search response
//! - `episodes`: Parse the per-show episodes response

pub mod episodes;
pub mod search;

// Re-export main parsing functions
pub use episodes::parse_episodes;
pub use search::{parse_search_results, MISSING_IMAGE_URL};
