//! TVmaze Search Widget Tauri Integration
//!
//! This crate exposes the search widget's two triggers as Tauri 2.0
//! commands. The webview is a thin shell: it forwards the raw DOM
//! events (the submitted search term, a CSS path to a click target
//! inside the results container) and paints back the `WidgetView`
//! snapshot each command returns.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tauri::Manager;
//! use tvmaze_tauri::WidgetState;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(WidgetState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             tvmaze_tauri::commands::current_view,
//!             tvmaze_tauri::commands::submit_search,
//!             tvmaze_tauri::commands::click_show_list,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `current_view` - Snapshot of both containers for the initial paint
//! - `submit_search` - Search form submission
//! - `click_show_list` - Delegated click inside the results container

pub mod commands;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use tvmaze_core::SearchWidget;

/// Thread-safe wrapper for SearchWidget.
///
/// This state is managed by Tauri and provides safe exclusive access to
/// the widget from the command handlers. Commands lock the widget for
/// their whole duration, so overlapping events from the webview
/// serialize in arrival order.
pub struct WidgetState {
    widget: Arc<Mutex<SearchWidget>>,
}

impl WidgetState {
    /// Create a new WidgetState backed by the live TVmaze catalog.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new() -> Result<Self, String> {
        let widget = SearchWidget::new().map_err(|e| e.to_string())?;
        Ok(Self {
            widget: Arc::new(Mutex::new(widget)),
        })
    }

    /// Get a reference to the inner widget.
    pub fn widget(&self) -> &Arc<Mutex<SearchWidget>> {
        &self.widget
    }
}

/// Snapshot of both widget containers, returned by every command
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    /// Inner HTML of the results container
    pub shows_html: String,
    /// Inner HTML of the episode panel
    pub episodes_html: String,
    /// Whether the episode panel is currently hidden
    pub episodes_hidden: bool,
}

impl WidgetView {
    /// Capture the widget's current visible state.
    pub fn snapshot(widget: &SearchWidget) -> Self {
        Self {
            shows_html: widget.shows().inner_html().to_string(),
            episodes_html: widget.episodes().inner_html().to_string(),
            episodes_hidden: widget.episodes().is_hidden(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = WidgetState::new();
        assert!(state.is_ok());
    }

    #[tokio::test]
    async fn test_initial_snapshot() {
        let state = WidgetState::new().unwrap();
        let widget = state.widget().lock().await;
        let view = WidgetView::snapshot(&widget);

        assert_eq!(view.shows_html, "");
        assert_eq!(view.episodes_html, "");
        assert!(view.episodes_hidden);
    }

    #[tokio::test]
    async fn test_view_serializes_for_the_webview() {
        let state = WidgetState::new().unwrap();
        let widget = state.widget().lock().await;
        let view = WidgetView::snapshot(&widget);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["episodes_hidden"], true);
        assert_eq!(json["shows_html"], "");
    }
}
