use crate::core::artwork::ArtworkRecord;
use crate::core::assets::{self, ImageRef};
use crate::error::Result;
use egui::{ColorImage, Context};
use rayon::prelude::*;
use std::sync::mpsc;
use std::thread;

pub type Delivery = (ImageRef, Result<ColorImage>);

/// Decodes every artwork once, off the UI thread.
pub struct Preloader {
    receiver: mpsc::Receiver<Delivery>,
}

impl Preloader {
    pub fn spawn(artworks: &'static [ArtworkRecord], ctx: Context) -> Self {
        let (sender, receiver) = mpsc::channel();
        let workers = num_cpus::get().clamp(1, artworks.len().max(1));

        thread::spawn(move || {
            match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => pool.install(|| decode_all(artworks, sender, &ctx)),
                Err(e) => {
                    log::warn!("could not build decoder pool, using the global one: {}", e);
                    decode_all(artworks, sender, &ctx);
                }
            }
        });

        log::debug!("decoding {} artworks on {} workers", artworks.len(), workers);
        Self { receiver }
    }

    pub fn drain(&self) -> Vec<Delivery> {
        self.receiver.try_iter().collect()
    }
}

fn decode_all(artworks: &[ArtworkRecord], sender: mpsc::Sender<Delivery>, ctx: &Context) {
    artworks.par_iter().for_each_with(sender, |sender, artwork| {
        let decoded = assets::decode(artwork.image);
        if sender.send((artwork.image, decoded)).is_err() {
            return; // viewer is gone
        }
        ctx.request_repaint();
    });
}
