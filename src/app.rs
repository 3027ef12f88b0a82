use crate::config::config::*;
use crate::core::artwork::ARTWORKS;
use crate::core::gallery_state::GalleryState;
use crate::error::{Error, Result};
use crate::ui::viewer::ArtSpaceApp;

pub fn run() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    log::info!("starting {} v{}", APP_NAME, APP_VERSION);
    let state = GalleryState::new(&ARTWORKS)?;
    log::info!("showing {} artworks", state.len());

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(ArtSpaceApp::new(&cc.egui_ctx, state)))),
    )
    .map_err(|e| Error::Ui(e.to_string()))
}
