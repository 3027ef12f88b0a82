use crate::core::artwork::ArtworkRecord;
use crate::error::{Error, Result};

/// Cursor over a fixed, non-empty set of artworks.
///
/// Both ends are reflecting: moving past them is a no-op.
#[derive(Debug, Clone)]
pub struct GalleryState {
    artworks: &'static [ArtworkRecord],
    current_index: usize,
}

impl GalleryState {
    pub fn new(artworks: &'static [ArtworkRecord]) -> Result<Self> {
        if artworks.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self {
            artworks,
            current_index: 0,
        })
    }

    pub fn current(&self) -> &'static ArtworkRecord {
        &self.artworks[self.current_index]
    }

    /// Returns `true` if the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.artworks.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.artworks.len()
    }

    pub fn cursor(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn artworks(&self) -> &'static [ArtworkRecord] {
        self.artworks
    }
}
