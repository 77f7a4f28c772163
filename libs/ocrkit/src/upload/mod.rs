mod scratch;
pub use scratch::ScratchImage;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;

const DEFAULT_EXTENSION: &str = "png";

/// Image bytes decoded from a request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Drops a `data:<mime>;base64,` style prefix: everything up to and including
/// the first comma. Input without a comma is returned unchanged.
pub fn strip_data_uri(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, data)) => data,
        None => payload,
    }
}

pub fn decode_image_payload(payload: &str) -> Result<DecodedImage, base64::DecodeError> {
    let bytes = STANDARD.decode(strip_data_uri(payload).trim())?;
    let extension = guess_extension(&bytes);
    Ok(DecodedImage { bytes, extension })
}

/// File extension matching the bytes' magic number, `png` when unknown.
pub fn guess_extension(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "png",
        Ok(ImageFormat::Jpeg) => "jpg",
        Ok(ImageFormat::Gif) => "gif",
        Ok(ImageFormat::WebP) => "webp",
        Ok(ImageFormat::Bmp) => "bmp",
        Ok(ImageFormat::Tiff) => "tiff",
        Ok(ImageFormat::Pnm) => "pnm",
        _ => DEFAULT_EXTENSION,
    }
}
