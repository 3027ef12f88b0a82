use crate::core::gallery_state::GalleryState;
use crate::ui::gallery_view::{GalleryView, NavIntent};

/// Owns the gallery state and the view last computed from it.
///
/// The view is recomputed exactly once per transition that moves the cursor.
pub struct GalleryController {
    state: GalleryState,
    view: GalleryView,
}

impl GalleryController {
    pub fn new(state: GalleryState) -> Self {
        let view = GalleryView::from_state(&state);
        Self { state, view }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    /// Applies `intent`. Returns the new view, or `None` when the cursor sat on a
    /// boundary and nothing changed.
    pub fn dispatch(&mut self, intent: NavIntent) -> Option<&GalleryView> {
        let moved = match intent {
            NavIntent::Previous => self.state.previous(),
            NavIntent::Next => self.state.next(),
        };
        if !moved {
            log::debug!("{:?} ignored at position {}", intent, self.state.cursor());
            return None;
        }

        log::debug!(
            "{:?} -> {} ({})",
            intent,
            self.state.cursor(),
            self.state.current().title
        );
        self.view = GalleryView::from_state(&self.state);
        Some(&self.view)
    }
}
