//! Delegated click resolution over rendered fragments
//!
//! The host shell forwards a click inside the results container as a CSS
//! selector describing the click target. Because show blocks are created
//! dynamically on every search, the trigger match is delegated: the click
//! counts as an "Episodes" request when the target or any of its
//! ancestors carries the trigger class, and the show id is resolved from
//! the nearest ancestor carrying the id attribute, regardless of which
//! descendant element inside the block was actually clicked.

use scraper::{ElementRef, Html, Selector};

use crate::error::{CatalogError, Result};
use crate::render::{EPISODES_TRIGGER_CLASS, SHOW_ID_ATTR};

/// Locate the click target inside the container markup.
fn find_target<'a>(document: &'a Html, target: &str) -> Result<ElementRef<'a>> {
    let selector = Selector::parse(target)
        .map_err(|_| CatalogError::InvalidSelector(target.to_string()))?;

    document
        .select(&selector)
        .next()
        .ok_or_else(|| CatalogError::TargetNotFound(target.to_string()))
}

/// The element itself, then its ancestors from nearest to root.
fn self_and_ancestors(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    std::iter::once(element).chain(element.ancestors().filter_map(ElementRef::wrap))
}

/// Check whether a click within the results container hits an
/// "Episodes" trigger.
///
/// # Arguments
/// * `container_html` - Current inner HTML of the results container
/// * `target` - CSS selector describing the click target
///
/// # Errors
/// - `CatalogError::InvalidSelector` if `target` is not a valid selector
/// - `CatalogError::TargetNotFound` if `target` matches nothing
pub fn is_episodes_trigger(container_html: &str, target: &str) -> Result<bool> {
    let document = Html::parse_fragment(container_html);
    let element = find_target(&document, target)?;

    let matched = self_and_ancestors(element)
        .any(|el| el.value().classes().any(|class| class == EPISODES_TRIGGER_CLASS));
    Ok(matched)
}

/// Resolve the show id a click belongs to.
///
/// Walks from the click target up through its ancestors and returns the
/// id stored on the nearest show block.
///
/// # Arguments
/// * `container_html` - Current inner HTML of the results container
/// * `target` - CSS selector describing the click target
///
/// # Errors
/// - `CatalogError::InvalidSelector` if `target` is not a valid selector
/// - `CatalogError::TargetNotFound` if `target` matches nothing
/// - `CatalogError::MissingShowId` if no ancestor carries a usable id
pub fn closest_show_id(container_html: &str, target: &str) -> Result<u64> {
    let document = Html::parse_fragment(container_html);
    let element = find_target(&document, target)?;

    let id = self_and_ancestors(element)
        .find_map(|el| el.value().attr(SHOW_ID_ATTR))
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| CatalogError::MissingShowId(target.to_string()));
    id
}
