use crate::config::config::MAX_TEXTURE_SIDE;
use crate::error::{Error, Result};
use egui::ColorImage;

/// Opaque handle to a bundled bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

pub const ART_PIECE_1: ImageRef = ImageRef::new("art_piece_1");
pub const ART_PIECE_2: ImageRef = ImageRef::new("art_piece_2");
pub const ART_PIECE_3: ImageRef = ImageRef::new("art_piece_3");

const BUNDLED: &[(ImageRef, &[u8])] = &[
    (ART_PIECE_1, include_bytes!("../../assets/art/art_piece_1.png")),
    (ART_PIECE_2, include_bytes!("../../assets/art/art_piece_2.png")),
    (ART_PIECE_3, include_bytes!("../../assets/art/art_piece_3.png")),
];

pub fn resolve(image: ImageRef) -> Result<&'static [u8]> {
    BUNDLED
        .iter()
        .find(|(key, _)| *key == image)
        .map(|(_, bytes)| *bytes)
        .ok_or(Error::MissingAsset(image.name()))
}

pub fn decode(image: ImageRef) -> Result<ColorImage> {
    decode_bytes(image.name(), resolve(image)?)
}

pub fn decode_bytes(asset: &'static str, bytes: &[u8]) -> Result<ColorImage> {
    let img = image::load_from_memory(bytes).map_err(|source| Error::Decode { asset, source })?;

    let img = if img.width() > MAX_TEXTURE_SIDE || img.height() > MAX_TEXTURE_SIDE {
        img.resize(
            MAX_TEXTURE_SIDE,
            MAX_TEXTURE_SIDE,
            image::imageops::FilterType::Triangle,
        )
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_asset_decodes() {
        for (image, _) in BUNDLED {
            let decoded = decode(*image).expect("bundled asset should decode");
            assert_eq!(decoded.size, [320, 320]);
        }
    }

    #[test]
    fn unknown_reference_is_missing() {
        let err = resolve(ImageRef::new("nope")).unwrap_err();
        assert!(matches!(err, Error::MissingAsset("nope")));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_bytes("garbage", b"definitely not a png").unwrap_err();
        assert!(matches!(err, Error::Decode { asset: "garbage", .. }));
        assert!(err.to_string().starts_with("failed to decode `garbage`"));
    }

    #[test]
    fn oversized_images_are_shrunk() {
        let side = MAX_TEXTURE_SIDE + 2;
        let img = image::RgbaImage::from_pixel(side, side / 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png)
            .expect("encode test image");

        let decoded = decode_bytes("big", bytes.get_ref()).expect("decode test image");
        assert_eq!(
            decoded.size,
            [MAX_TEXTURE_SIDE as usize, MAX_TEXTURE_SIDE as usize / 2]
        );
    }
}
