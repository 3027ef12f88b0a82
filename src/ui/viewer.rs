use crate::config::config::*;
use crate::core::gallery_state::GalleryState;
use crate::core::preloader::Preloader;
use crate::core::texture_store::{TextureState, TextureStore};
use crate::i18n::en::*;
use crate::ui::gallery_controller::GalleryController;
use crate::ui::gallery_view::{ImageRegion, InfoRegion, NavButton, NavIntent, NavigationRegion};
use eframe::egui;
use egui::{Margin, RichText, TextureHandle};

pub struct ArtSpaceApp {
    controller: GalleryController,
    textures: TextureStore,
    preloader: Preloader,
}

impl ArtSpaceApp {
    pub fn new(ctx: &egui::Context, state: GalleryState) -> Self {
        let preloader = Preloader::spawn(state.artworks(), ctx.clone());
        Self {
            controller: GalleryController::new(state),
            textures: TextureStore::new(),
            preloader,
        }
    }

    fn process_loaded_artworks(&mut self, ctx: &egui::Context) {
        let deliveries = self.preloader.drain();
        if deliveries.is_empty() {
            return;
        }

        for (image, decoded) in deliveries {
            match decoded {
                Ok(color_image) => self.textures.upload(ctx, image, color_image),
                Err(e) => {
                    log::error!("{}", e);
                    self.textures.fail(image, e.to_string());
                }
            }
        }
        log::debug!(
            "{} of {} artworks loaded",
            self.textures.len(),
            self.controller.state().len()
        );
    }

    fn handle_keyboard_input(&self, ctx: &egui::Context) -> Option<NavIntent> {
        let pressed = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) {
                Some(NavIntent::Next)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(NavIntent::Previous)
            } else {
                None
            }
        })?;

        let allowed = self.controller.view().navigation.allow(pressed);
        if allowed.is_none() {
            log::debug!("{:?} key ignored, button is disabled", pressed);
        }
        allowed
    }

    fn show_details_panel(&self, ctx: &egui::Context) -> Option<NavIntent> {
        let view = self.controller.view();
        egui::TopBottomPanel::bottom("details")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(SCREEN_PADDING);
                let intent = ui
                    .vertical_centered(|ui| {
                        Self::show_info(ui, &view.info);
                        ui.add_space(SECTION_SPACING);
                        Self::show_navigation_controls(ui, &view.navigation)
                    })
                    .inner;
                ui.add_space(SCREEN_PADDING);
                intent
            })
            .inner
    }

    fn show_info(ui: &mut egui::Ui, info: &InfoRegion) {
        egui::Frame::popup(ui.style())
            .inner_margin(Margin::same(CARD_PADDING))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(info.title).size(TITLE_FONT_SIZE).strong());
                    ui.label(RichText::new(info.artist).size(ARTIST_FONT_SIZE).weak());
                    ui.label(RichText::new(&info.position).small().weak());
                });
            });
    }

    fn show_navigation_controls(
        ui: &mut egui::Ui,
        navigation: &NavigationRegion,
    ) -> Option<NavIntent> {
        ui.columns(2, |columns| {
            let previous = Self::show_nav_button(&mut columns[0], &navigation.previous);
            let next = Self::show_nav_button(&mut columns[1], &navigation.next);
            previous.or(next)
        })
    }

    fn show_nav_button(ui: &mut egui::Ui, button: &NavButton) -> Option<NavIntent> {
        ui.vertical_centered(|ui| {
            ui.add_enabled(button.enabled, egui::Button::new(button.label))
                .clicked()
        })
        .inner
        .then_some(button.intent)
    }

    fn show_main_content(&self, ctx: &egui::Context) {
        let region = &self.controller.view().image;
        egui::CentralPanel::default().show(ctx, |ui| match self.textures.get(region.image) {
            Some(TextureState::Ready(texture)) => Self::render_image(ui, texture, region),
            Some(TextureState::Failed(reason)) => Self::show_placeholder_text(ui, Some(reason)),
            None => Self::show_placeholder_text(ui, None),
        });
    }

    fn render_image(ui: &mut egui::Ui, texture: &TextureHandle, region: &ImageRegion) {
        let padding = 2.0 * f32::from(CARD_PADDING);
        let available = ui.available_size() - egui::vec2(padding, padding);
        let image_size = texture.size_vec2();

        let scale = (available.x / image_size.x)
            .min(available.y / image_size.y)
            .clamp(0.0, 1.0);
        let scaled_size = image_size * scale;

        ui.add_space(((ui.available_height() - scaled_size.y - padding) / 2.0).max(0.0));
        ui.vertical_centered(|ui| {
            egui::Frame::window(ui.style())
                .inner_margin(Margin::same(CARD_PADDING))
                .show(ui, |ui| {
                    let response = ui.add(
                        egui::Image::from_texture(texture).fit_to_exact_size(scaled_size),
                    );
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Image, true, region.description)
                    });
                });
        });
    }

    fn show_placeholder_text(ui: &mut egui::Ui, failure: Option<&String>) {
        ui.add_space((ui.available_height() / 2.0 - SECTION_SPACING).max(0.0));
        ui.vertical_centered(|ui| match failure {
            Some(reason) => {
                ui.label(ERROR_ARTWORK);
                ui.label(RichText::new(reason).small().weak());
            }
            None => {
                ui.spinner();
                ui.label(TEXT_LOADINGIMG);
            }
        });
    }

    /// Draws one frame. A navigation intent is applied only after every region has
    /// been laid out, and the repaint it requests renders the post-transition view.
    fn draw_frame(&mut self, ctx: &egui::Context) {
        self.process_loaded_artworks(ctx);

        let key_intent = self.handle_keyboard_input(ctx);
        let click_intent = self.show_details_panel(ctx);
        self.show_main_content(ctx);

        if let Some(intent) = click_intent.or(key_intent) {
            if self.controller.dispatch(intent).is_some() {
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for ArtSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_frame(ctx);
    }
}
