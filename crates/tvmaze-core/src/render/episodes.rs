//! Episode list renderer
//!
//! Turns normalized `Episode` records into list items and reveals the
//! episode panel, which stays hidden until the first episode render.

use super::Container;
use crate::types::Episode;

/// Replace the container content with one list item per episode, then
/// make the container visible.
///
/// Each line is formatted as `"{name} (season {season}, number {number})"`.
/// There is no empty-state handling; an empty episode list still reveals
/// an empty container.
pub fn render_episodes(container: &mut Container, episodes: &[Episode]) {
    container.clear();

    for episode in episodes {
        container.append(&format!(
            "<li>{} (season {}, number {})</li>\n",
            episode.name, episode.season, episode.number
        ));
    }

    container.show();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pilot() -> Episode {
        Episode {
            id: 9,
            name: "Pilot".to_string(),
            season: 1,
            number: 1,
        }
    }

    #[test]
    fn test_line_format() {
        let mut container = Container::hidden();
        render_episodes(&mut container, &[pilot()]);

        assert!(container
            .inner_html()
            .contains("<li>Pilot (season 1, number 1)</li>"));
    }

    #[test]
    fn test_one_item_per_episode() {
        let episodes = vec![
            pilot(),
            Episode {
                id: 10,
                name: "The Fire".to_string(),
                season: 1,
                number: 2,
            },
        ];

        let mut container = Container::hidden();
        render_episodes(&mut container, &episodes);

        assert_eq!(container.inner_html().matches("<li>").count(), 2);
    }

    #[test]
    fn test_render_reveals_container() {
        let mut container = Container::hidden();
        assert!(container.is_hidden());

        render_episodes(&mut container, &[pilot()]);
        assert!(!container.is_hidden());
    }

    #[test]
    fn test_prior_content_is_replaced() {
        let mut container = Container::hidden();
        render_episodes(&mut container, &[pilot()]);
        render_episodes(
            &mut container,
            &[Episode {
                id: 20,
                name: "Homecoming".to_string(),
                season: 2,
                number: 5,
            }],
        );

        let html = container.inner_html();
        assert!(!html.contains("Pilot"));
        assert!(html.contains("<li>Homecoming (season 2, number 5)</li>"));
    }
}
