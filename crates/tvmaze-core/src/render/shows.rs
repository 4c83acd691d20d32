//! Show list renderer
//!
//! Turns normalized `Show` records into bootstrap-style show blocks.
//! Each block carries the show's id as a data attribute so a later
//! click anywhere inside the block can be resolved back to the show,
//! and contains exactly one "Episodes" trigger button.

use super::Container;
use crate::types::Show;

/// Class of the per-show "Episodes" trigger button
pub const EPISODES_TRIGGER_CLASS: &str = "Show-getEpisodes";

/// Attribute carrying the show id on each show block
pub const SHOW_ID_ATTR: &str = "data-show-id";

/// Replace the container content with one show block per show.
///
/// The summary is inserted as provided; the source API delivers inline
/// HTML markup there and the widget renders it verbatim. An empty show
/// list produces an empty container; there is no separate empty-state
/// message.
pub fn render_shows(container: &mut Container, shows: &[Show]) {
    container.clear();

    for show in shows {
        let block = format!(
            r#"<div {id_attr}="{id}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{image}" alt="{name}" class="w-25 mr-3">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>{summary}</small></div>
      <button class="btn btn-outline-light btn-sm {trigger}">
        Episodes
      </button>
    </div>
  </div>
</div>
"#,
            id_attr = SHOW_ID_ATTR,
            id = show.id,
            image = show.image,
            name = show.name,
            summary = show.summary,
            trigger = EPISODES_TRIGGER_CLASS,
        );

        container.append(&block);
    }
}
