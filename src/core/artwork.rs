use crate::core::assets::{self, ImageRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub image: ImageRef,
    pub title: &'static str,
    pub artist: &'static str,
}

pub const ARTWORK_COUNT: usize = 3;

pub static ARTWORKS: [ArtworkRecord; ARTWORK_COUNT] = [
    ArtworkRecord {
        image: assets::ART_PIECE_1,
        title: "Sagas",
        artist: "Equilibrium",
    },
    ArtworkRecord {
        image: assets::ART_PIECE_2,
        title: "Twilight of the Thunder God",
        artist: "Amon Amarth",
    },
    ArtworkRecord {
        image: assets::ART_PIECE_3,
        title: "Voimasta ja Kunniasta",
        artist: "Moonsorrow",
    },
];

const _: () = assert!(ARTWORK_COUNT > 0);
