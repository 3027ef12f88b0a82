use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("gallery must contain at least one artwork")]
    EmptyGallery,

    #[error("no bundled asset named `{0}`")]
    MissingAsset(&'static str),

    #[error("failed to decode `{asset}`: {source}")]
    Decode {
        asset: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to start the window: {0}")]
    Ui(String),
}
