//! Data types for the TVmaze search widget
//!
//! This module contains the normalized record shapes produced by the
//! catalog client. All types implement Serialize and Deserialize for
//! JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

/// A TV show normalized from the TVmaze search response
///
/// Exists only for the duration of one render cycle; nothing is
/// persisted between searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Unique TVmaze identifier
    pub id: u64,
    /// Display name of the show
    pub name: String,
    /// Summary text, may contain inline HTML markup from the source API
    pub summary: String,
    /// Medium image URL, or the placeholder URL when the source has none
    pub image: String,
}

/// An episode normalized from the TVmaze episodes response
///
/// Identity is `id`, scoped to the parent show it was fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique TVmaze identifier
    pub id: u64,
    /// Display name of the episode
    pub name: String,
    /// Season number as reported by the API
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_serialization_round_trip() {
        let show = Show {
            id: 1767,
            name: "The Bletchley Circle".to_string(),
            summary: "<p>Codebreakers turned detectives.</p>".to_string(),
            image: "https://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg"
                .to_string(),
        };

        let json = serde_json::to_string(&show).unwrap();
        let deserialized: Show = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, show);
    }

    #[test]
    fn test_episode_serialization_round_trip() {
        let episode = Episode {
            id: 9,
            name: "Pilot".to_string(),
            season: 1,
            number: 1,
        };

        let json = serde_json::to_string(&episode).unwrap();
        let deserialized: Episode = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, episode);
    }

    #[test]
    fn test_show_summary_markup_is_preserved() {
        let show = Show {
            id: 2,
            name: "Test".to_string(),
            summary: "<b>bold</b> &amp; plain".to_string(),
            image: "https://tinyurl.com/missing-tv".to_string(),
        };

        let json = serde_json::to_string(&show).unwrap();
        let deserialized: Show = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.summary, "<b>bold</b> &amp; plain");
    }
}
