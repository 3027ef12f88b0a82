pub mod artwork;
pub mod assets;
pub mod gallery_state;
pub mod preloader;
pub mod texture_store;
