// Embedded placeholder images backing the image fallback policy

use base64::Engine;
use image::RgbaImage;

use crate::AssetError;

/// 1x1 fully transparent PNG, the fallback for optional images with no locator
pub const BLANK_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAC0lEQVR42mNgAAIAAAUAAen63NgAAAAASUVORK5CYII=";

/// 8x8 magenta/black checkerboard PNG marking a missing or unloadable image
pub const MISSING_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAgAAAAICAYAAADED76LAAAAIUlEQVR42mP4z/D/PwgzMDCAMTqfgaACXBJIfAIKBoEbAIMXf4GabqYgAAAAAElFTkSuQmCC";

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Decode a base64 PNG data URI into a ready-to-use image
pub fn decode_data_uri(uri: &str) -> Result<RgbaImage, AssetError> {
    let encoded = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| AssetError::Placeholder("not a base64 PNG data URI".to_string()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| AssetError::Placeholder(format!("invalid base64 payload: {e}")))?;

    let image = image::load_from_memory(&bytes)
        .map_err(|e| AssetError::Placeholder(format!("invalid image payload: {e}")))?;

    Ok(image.to_rgba8())
}

/// The two fallback images, decoded once at loader construction
///
/// Injected into [`AssetLoader`](crate::AssetLoader) rather than decoded per
/// load, so a fallback never costs a decode at resolution time.
#[derive(Debug, Clone)]
pub struct Placeholders {
    /// Fallback for optional images with an empty locator
    pub blank: RgbaImage,
    /// Fallback for failed or missing images
    pub missing: RgbaImage,
}

impl Placeholders {
    /// Decode both embedded placeholders
    pub fn decode() -> Result<Self, AssetError> {
        Ok(Self {
            blank: decode_data_uri(BLANK_IMAGE)?,
            missing: decode_data_uri(MISSING_IMAGE)?,
        })
    }
}
