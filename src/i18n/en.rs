pub const BTN_PREV: &str = "Previous";
pub const BTN_NEXT: &str = "Next";

pub const TEXT_LOADINGIMG: &str = "Loading artwork...";
pub const ERROR_ARTWORK: &str = "Artwork unavailable";
