//! Catalog client API for the TVmaze widget
//!
//! This module provides the high-level read-only API against the show
//! catalog. It combines the HTTP client with the response parsers to
//! expose the two queries the widget needs: search shows by term, list
//! episodes by show id. Both are single request/normalize pipelines
//! with no retry and no partial results.

use crate::client::TvmazeClient;
use crate::error::Result;
use crate::parser::{parse_episodes, parse_search_results};
use crate::types::{Episode, Show};

/// Read-only client for the TVmaze catalog
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvmazeCatalog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = TvmazeCatalog::new()?;
///
///     let shows = catalog.search_shows("bletchley").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvmazeCatalog {
    client: TvmazeClient,
}

impl TvmazeCatalog {
    /// Create a new catalog client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = TvmazeClient::new()?;
        Ok(Self { client })
    }

    /// Create a catalog client over a pre-configured HTTP client.
    ///
    /// This is useful for testing or when you need a custom base URL
    /// or timeout.
    pub fn with_client(client: TvmazeClient) -> Self {
        Self { client }
    }

    /// Search for shows matching a term.
    ///
    /// Results follow the API's relevance order. An empty term is not
    /// special-cased; whatever the upstream API returns for an empty
    /// query is what the caller gets.
    ///
    /// # Arguments
    /// * `term` - Search term, sent URL-encoded as the `q` parameter
    ///
    /// # Errors
    /// Network failure, non-success status, or an unexpected response
    /// shape propagate as `CatalogError`.
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvmazeCatalog;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::CatalogError> {
    /// let catalog = TvmazeCatalog::new()?;
    /// for show in catalog.search_shows("girls").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let encoded_term = urlencoding::encode(term);
        let path = format!("/search/shows?q={}", encoded_term);

        let body = self.client.fetch(&path).await?;
        parse_search_results(&body)
    }

    /// List all episodes of a show.
    ///
    /// # Arguments
    /// * `show_id` - TVmaze id of the show
    ///
    /// # Errors
    /// `CatalogError::NotFound` for an unknown show id; network failure,
    /// other non-success status, or an unexpected response shape
    /// propagate as `CatalogError`.
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvmazeCatalog;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::CatalogError> {
    /// let catalog = TvmazeCatalog::new()?;
    /// for episode in catalog.list_episodes(1767).await? {
    ///     println!("S{:02}E{:02} {}", episode.season, episode.number, episode.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_episodes(&self, show_id: u64) -> Result<Vec<Episode>> {
        let path = format!("/shows/{}/episodes", show_id);

        let body = self.client.fetch(&path).await?;
        parse_episodes(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = TvmazeCatalog::new();
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_search_term_is_url_encoded() {
        // The path building is exercised end to end in the wiremock
        // integration tests; here we only pin the encoding helper.
        assert_eq!(urlencoding::encode("doctor who"), "doctor%20who");
        assert_eq!(urlencoding::encode("m*a*s*h & co"), "m%2Aa%2As%2Ah%20%26%20co");
    }
}
