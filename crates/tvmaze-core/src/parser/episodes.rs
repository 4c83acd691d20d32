//! Episodes response parser for the TVmaze API
//!
//! Normalizes the `/shows/{id}/episodes` response into `Episode` records.
//! Unlike the search response there is no wrapper object and no
//! defaulting: season and number are copied verbatim.

use serde::Deserialize;

use crate::error::Result;
use crate::types::Episode;

/// Episode object as returned by the API
///
/// The API attaches many more fields (airdate, runtime, summary, links);
/// the widget only keeps the four it formats.
#[derive(Debug, Deserialize)]
struct RawEpisode {
    id: u64,
    name: String,
    season: u32,
    number: u32,
}

/// Parse the per-show episodes response body.
///
/// Exactly one `Episode` is produced per response element, in response
/// order.
///
/// # Arguments
/// * `json` - Raw response body of `/shows/{id}/episodes`
///
/// # Errors
/// `CatalogError::DecodeError` if the body is not the expected shape,
/// including episodes with a missing season or number.
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>> {
    let raw: Vec<RawEpisode> = serde_json::from_str(json)?;

    let episodes = raw
        .into_iter()
        .map(|episode| Episode {
            id: episode.id,
            name: episode.name,
            season: episode.season,
            number: episode.number,
        })
        .collect();

    Ok(episodes)
}
