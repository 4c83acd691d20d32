//! Tauri commands for the TVmaze search widget
//!
//! This module contains all Tauri commands that can be invoked from the
//! frontend. Every command returns a fresh `WidgetView` so the webview
//! can repaint both containers after each event; on error the containers
//! keep their prior content and the webview surfaces nothing.

use tauri::State;

use crate::{WidgetState, WidgetView};

/// Snapshot of both containers for the initial paint.
///
/// # Returns
/// * `Ok(WidgetView)` - empty show list, hidden episode panel on startup
#[tauri::command]
pub async fn current_view(state: State<'_, WidgetState>) -> Result<WidgetView, String> {
    let widget = state.widget().lock().await;
    Ok(WidgetView::snapshot(&widget))
}

/// Handle a search form submission.
///
/// # Arguments
/// * `term` - Current value of the search-term input
///
/// # Returns
/// * `Ok(WidgetView)` with the repainted show list and a hidden episode panel
/// * `Err(String)` with an error message if the fetch fails
#[tauri::command]
pub async fn submit_search(
    state: State<'_, WidgetState>,
    term: String,
) -> Result<WidgetView, String> {
    let mut widget = state.widget().lock().await;
    widget
        .submit_search(&term)
        .await
        .map_err(|e| e.to_string())?;
    Ok(WidgetView::snapshot(&widget))
}

/// Handle a delegated click inside the results container.
///
/// Clicks that do not hit an "Episodes" trigger are a no-op and return
/// the unchanged view.
///
/// # Arguments
/// * `target` - CSS selector describing the clicked element
///
/// # Returns
/// * `Ok(WidgetView)` with the episode panel repainted and revealed when
///   the click hit a trigger
/// * `Err(String)` with an error message if resolution or the fetch fails
#[tauri::command]
pub async fn click_show_list(
    state: State<'_, WidgetState>,
    target: String,
) -> Result<WidgetView, String> {
    let mut widget = state.widget().lock().await;
    widget
        .click_show_list(&target)
        .await
        .map_err(|e| e.to_string())?;
    Ok(WidgetView::snapshot(&widget))
}
