pub const APP_NAME: &str = "Art Space";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WINDOW_SIZE: [f32; 2] = [480.0, 760.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [320.0, 480.0];

// Layout, in points
pub const SCREEN_PADDING: f32 = 16.0;
pub const CARD_PADDING: i8 = 16;
pub const SECTION_SPACING: f32 = 16.0;

pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const ARTIST_FONT_SIZE: f32 = 18.0;

/// Decoded artworks wider or taller than this are shrunk before upload.
pub const MAX_TEXTURE_SIDE: u32 = 2048;

pub const DEFAULT_LOG_FILTER: &str = "info";
