//! Everything the screen shows, computed from the gallery state alone.
//!
//! The egui layer only paints what is in [`GalleryView`]; it never reads the
//! cursor itself.

use crate::core::assets::ImageRef;
use crate::core::gallery_state::GalleryState;
use crate::i18n::en::{BTN_NEXT, BTN_PREV};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRegion {
    pub image: ImageRef,
    /// Accessible description of the artwork.
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRegion {
    pub title: &'static str,
    pub artist: &'static str,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub label: &'static str,
    pub enabled: bool,
    pub intent: NavIntent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRegion {
    pub previous: NavButton,
    pub next: NavButton,
}

impl NavigationRegion {
    /// Returns `intent` if its button is enabled.
    pub fn allow(&self, intent: NavIntent) -> Option<NavIntent> {
        let button = match intent {
            NavIntent::Previous => &self.previous,
            NavIntent::Next => &self.next,
        };
        button.enabled.then_some(intent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub image: ImageRegion,
    pub info: InfoRegion,
    pub navigation: NavigationRegion,
}

impl GalleryView {
    pub fn from_state(state: &GalleryState) -> Self {
        let artwork = state.current();
        Self {
            image: ImageRegion {
                image: artwork.image,
                description: artwork.title,
            },
            info: InfoRegion {
                title: artwork.title,
                artist: artwork.artist,
                position: format!("{} / {}", state.cursor() + 1, state.len()),
            },
            navigation: NavigationRegion {
                previous: NavButton {
                    label: BTN_PREV,
                    enabled: state.can_go_previous(),
                    intent: NavIntent::Previous,
                },
                next: NavButton {
                    label: BTN_NEXT,
                    enabled: state.can_go_next(),
                    intent: NavIntent::Next,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artwork::ARTWORKS;
    use crate::core::assets::{ART_PIECE_1, ART_PIECE_3};

    fn state_at(cursor: usize) -> GalleryState {
        let mut state = GalleryState::new(&ARTWORKS).expect("bundled artworks");
        for _ in 0..cursor {
            state.next();
        }
        state
    }

    #[test]
    fn first_artwork_disables_previous() {
        let view = GalleryView::from_state(&state_at(0));

        assert_eq!(view.image.image, ART_PIECE_1);
        assert_eq!(view.image.description, "Sagas");
        assert_eq!(view.info.title, "Sagas");
        assert_eq!(view.info.artist, "Equilibrium");
        assert_eq!(view.info.position, "1 / 3");

        assert_eq!(view.navigation.previous.label, "Previous");
        assert!(!view.navigation.previous.enabled);
        assert_eq!(view.navigation.next.label, "Next");
        assert!(view.navigation.next.enabled);
    }

    #[test]
    fn middle_artwork_enables_both() {
        let view = GalleryView::from_state(&state_at(1));

        assert_eq!(view.info.title, "Twilight of the Thunder God");
        assert_eq!(view.info.artist, "Amon Amarth");
        assert!(view.navigation.previous.enabled);
        assert!(view.navigation.next.enabled);
    }

    #[test]
    fn last_artwork_disables_next() {
        let view = GalleryView::from_state(&state_at(2));

        assert_eq!(view.image.image, ART_PIECE_3);
        assert_eq!(view.info.title, "Voimasta ja Kunniasta");
        assert_eq!(view.info.artist, "Moonsorrow");
        assert_eq!(view.info.position, "3 / 3");
        assert!(view.navigation.previous.enabled);
        assert!(!view.navigation.next.enabled);
    }

    #[test]
    fn disabled_buttons_swallow_intents() {
        let view = GalleryView::from_state(&state_at(0));
        assert_eq!(view.navigation.allow(NavIntent::Previous), None);
        assert_eq!(view.navigation.allow(NavIntent::Next), Some(NavIntent::Next));
    }
}
