//! Interaction controller for the search widget
//!
//! Wires the two user triggers to the catalog client and the renderers:
//! a search submission repaints the show list and hides the episode
//! panel, a delegated click on an "Episodes" trigger fetches and reveals
//! that show's episodes. Fetches happen before any container is touched,
//! so a failed request leaves the visible state exactly as it was.

use crate::catalog::TvmazeCatalog;
use crate::dom;
use crate::error::Result;
use crate::render::{render_episodes, render_shows, Container};

/// The show-search widget: catalog client plus the two containers it
/// paints into
///
/// The show list starts empty and visible; the episode panel starts
/// empty and hidden, and is only revealed by an episode render.
pub struct SearchWidget {
    catalog: TvmazeCatalog,
    shows: Container,
    episodes: Container,
}

impl SearchWidget {
    /// Create a widget backed by the live TVmaze catalog.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(TvmazeCatalog::new()?))
    }

    /// Create a widget over a pre-configured catalog client.
    pub fn with_catalog(catalog: TvmazeCatalog) -> Self {
        Self {
            catalog,
            shows: Container::new(),
            episodes: Container::hidden(),
        }
    }

    /// Handle a search form submission.
    ///
    /// Awaits the catalog search, hides the episode panel (it only
    /// reappears when episodes are requested), then repaints the show
    /// list. On a failed fetch the error propagates and both containers
    /// keep their prior content.
    pub async fn submit_search(&mut self, term: &str) -> Result<()> {
        let shows = self.catalog.search_shows(term).await?;

        self.episodes.hide();
        render_shows(&mut self.shows, &shows);
        Ok(())
    }

    /// Handle a delegated click inside the show list.
    ///
    /// `target` is a CSS selector describing the clicked element. Clicks
    /// that do not hit an "Episodes" trigger are ignored and return
    /// `Ok(false)` without any fetch. A trigger click resolves the show
    /// id from the clicked block, fetches its episodes, repaints and
    /// reveals the episode panel, and returns `Ok(true)`. On a failed
    /// fetch the error propagates and the episode panel is untouched.
    pub async fn click_show_list(&mut self, target: &str) -> Result<bool> {
        if !dom::is_episodes_trigger(self.shows.inner_html(), target)? {
            return Ok(false);
        }

        let show_id = dom::closest_show_id(self.shows.inner_html(), target)?;
        let episodes = self.catalog.list_episodes(show_id).await?;

        render_episodes(&mut self.episodes, &episodes);
        Ok(true)
    }

    /// The show list container.
    pub fn shows(&self) -> &Container {
        &self.shows
    }

    /// The episode panel container.
    pub fn episodes(&self) -> &Container {
        &self.episodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_initial_state() {
        let widget = SearchWidget::new().unwrap();
        assert_eq!(widget.shows().inner_html(), "");
        assert!(!widget.shows().is_hidden());
        assert_eq!(widget.episodes().inner_html(), "");
        assert!(widget.episodes().is_hidden());
    }

    #[tokio::test]
    async fn test_click_before_any_search_is_an_error() {
        // The results container is empty, so the forwarded click target
        // cannot be located.
        let mut widget = SearchWidget::new().unwrap();
        let result = widget.click_show_list("button").await;
        assert!(matches!(result, Err(CatalogError::TargetNotFound(_))));
        assert!(widget.episodes().is_hidden());
    }
}
