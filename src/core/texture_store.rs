use crate::core::assets::ImageRef;
use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use std::collections::HashMap;

pub enum TextureState {
    Ready(TextureHandle),
    Failed(String),
}

/// Uploaded artwork textures. A missing entry means the decode is still pending.
#[derive(Default)]
pub struct TextureStore {
    textures: HashMap<ImageRef, TextureState>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, image: ImageRef) -> Option<&TextureState> {
        self.textures.get(&image)
    }

    pub fn upload(&mut self, ctx: &Context, image: ImageRef, color_image: ColorImage) {
        let texture = ctx.load_texture(
            format!("artwork_{}", image.name()),
            color_image,
            TextureOptions::LINEAR,
        );
        log::debug!("uploaded texture for {}", image.name());
        self.textures.insert(image, TextureState::Ready(texture));
    }

    pub fn fail(&mut self, image: ImageRef, reason: String) {
        self.textures.insert(image, TextureState::Failed(reason));
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}
