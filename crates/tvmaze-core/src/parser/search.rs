//! Search response parser for the TVmaze API
//!
//! Normalizes the `/search/shows` response into `Show` records. The API
//! returns a sequence of scored wrapper objects, each holding a nested
//! show object; the wrapper is discarded and the show is reduced to the
//! four fields the widget renders.

use serde::Deserialize;

use crate::error::Result;
use crate::types::Show;

/// Placeholder image URL used when the API provides no image for a show
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/missing-tv";

/// One element of the search response: a relevance-scored show wrapper
#[derive(Debug, Deserialize)]
struct ShowWrapper {
    show: RawShow,
}

/// Show object as returned by the API, before normalization
#[derive(Debug, Deserialize)]
struct RawShow {
    id: u64,
    name: String,
    /// May be null for shows without a synopsis
    summary: Option<String>,
    /// May be null for shows without artwork
    image: Option<RawImage>,
}

/// Image URL pair attached to a show
#[derive(Debug, Deserialize)]
struct RawImage {
    medium: String,
}

/// Parse the show-search response body.
///
/// Result ordering follows the API response order (presumed relevance
/// order). Exactly one `Show` is produced per wrapper object; a missing
/// image is replaced with `MISSING_IMAGE_URL`, a null summary becomes
/// the empty string.
///
/// # Arguments
/// * `json` - Raw response body of `/search/shows?q={term}`
///
/// # Errors
/// `CatalogError::DecodeError` if the body is not the expected shape.
pub fn parse_search_results(json: &str) -> Result<Vec<Show>> {
    let wrappers: Vec<ShowWrapper> = serde_json::from_str(json)?;

    let shows = wrappers
        .into_iter()
        .map(|wrapper| {
            let raw = wrapper.show;
            Show {
                id: raw.id,
                name: raw.name,
                summary: raw.summary.unwrap_or_default(),
                image: raw
                    .image
                    .map(|image| image.medium)
                    .unwrap_or_else(|| MISSING_IMAGE_URL.to_string()),
            }
        })
        .collect();

    Ok(shows)
}
