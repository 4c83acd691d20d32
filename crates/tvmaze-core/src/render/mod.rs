//! DOM-fragment renderers for the widget
//!
//! The widget paints into two containers: the show list and the episode
//! panel. `Container` is an owned stand-in for a DOM container node, so
//! renderers are pure functions of (container handle, data) and can be
//! tested without a live document. The host shell paints a container's
//! inner HTML and visibility back into the real page after each event.

pub mod episodes;
pub mod shows;

pub use episodes::render_episodes;
pub use shows::{render_shows, EPISODES_TRIGGER_CLASS, SHOW_ID_ATTR};

/// An owned DOM container: inner HTML plus a visibility flag
///
/// Render operations fully replace the content; there is no diffing and
/// no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    html: String,
    hidden: bool,
}

impl Container {
    /// Create an empty, visible container.
    pub fn new() -> Self {
        Self {
            html: String::new(),
            hidden: false,
        }
    }

    /// Create an empty container that starts hidden.
    ///
    /// The episode panel starts this way; it is only revealed once
    /// episodes are rendered into it.
    pub fn hidden() -> Self {
        Self {
            html: String::new(),
            hidden: true,
        }
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.html.clear();
    }

    /// Append a markup fragment after the current content.
    pub fn append(&mut self, fragment: &str) {
        self.html.push_str(fragment);
    }

    /// Hide the container, keeping its content.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Make the container visible.
    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Current inner HTML.
    pub fn inner_html(&self) -> &str {
        &self.html
    }

    /// Whether the container is currently hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
