// Single-resource loaders producing uniform Asset records
//
// Each loader resolves with a deterministic fallback for every recoverable
// failure; the only rejection is a missing key, which is caller misuse.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use futures::future::BoxFuture;
use image::RgbaImage;
use log::warn;

use crate::asset::{Asset, AudioBuffer};
use crate::placeholder::Placeholders;
use crate::source::{
    FileSource, FontSource, FontStatus, ImageSource, SoundSource, StaticFontSource,
};
use crate::AssetError;

/// Font family used when no usable family or fallback is given
pub const DEFAULT_FONT: &str = "Arial";

/// A pending single-resource load, ready to hand to [`load_list`](crate::load_list)
pub type AssetFuture = BoxFuture<'static, Result<Asset, AssetError>>;

/// Options for [`AssetLoader::load_image`]
#[derive(Debug, Default, Clone)]
pub struct ImageOptions {
    /// An optional image with an empty locator resolves with the blank
    /// placeholder instead of the missing-image checker, without a warning
    pub optional: bool,
    /// Query string appended to the locator
    pub params: Option<String>,
}

/// Options for [`AssetLoader::load_font`]
#[derive(Debug, Default, Clone)]
pub struct FontOptions {
    /// Family used when the requested one cannot be activated; Arial if unset
    pub fallback: Option<String>,
}

/// Loads individual assets through injected facilities
///
/// Runtime failures (unreachable locator, undecodable payload, inactive font)
/// never reject: they log one warning and resolve with the fallback value for
/// the kind. A batch of dozens of assets should not fail wholesale because
/// one image 404s.
pub struct AssetLoader {
    images: Arc<dyn ImageSource>,
    sounds: Arc<dyn SoundSource>,
    fonts: Arc<dyn FontSource>,
    placeholders: Placeholders,
}

impl AssetLoader {
    /// Create a loader over the given facilities
    ///
    /// Decodes the embedded placeholder images once so fallback resolution
    /// never pays a decode.
    pub fn new(
        images: Arc<dyn ImageSource>,
        sounds: Arc<dyn SoundSource>,
        fonts: Arc<dyn FontSource>,
    ) -> Result<Self, AssetError> {
        Ok(Self {
            images,
            sounds,
            fonts,
            placeholders: Placeholders::decode()?,
        })
    }

    /// Convenience constructor: file-backed images and sounds, no known fonts
    pub fn from_dir<P: AsRef<Path>>(base: P) -> Result<Self, AssetError> {
        let files = Arc::new(FileSource::new(base));
        Self::new(
            files.clone(),
            files,
            Arc::new(StaticFontSource::default()),
        )
    }

    /// The decoded placeholder images
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Load and pre-decode an image
    ///
    /// Resolves with the decoded image on success, the blank placeholder for
    /// an optional image with an empty locator, and the missing-image
    /// placeholder for every other failure. Rejects only for an empty `key`.
    pub fn load_image(&self, key: &str, url: &str, opts: ImageOptions) -> AssetFuture {
        let key = key.to_string();
        let locator = join_locator(url, opts.params.as_deref());
        let optional = opts.optional;
        let images = Arc::clone(&self.images);
        let placeholders = self.placeholders.clone();

        Box::pin(async move {
            if key.is_empty() {
                return Err(AssetError::KeyRequired);
            }

            // An empty locator never hits the facility: resolve straight to
            // the fallback, blank for optional images.
            if locator.is_empty() {
                if optional {
                    return Ok(Asset::image(key, placeholders.blank));
                }
                warn!("could not load image '{key}': no locator, resolving with fallback");
                return Ok(Asset::image(key, placeholders.missing));
            }

            let decoded = match images.fetch(&locator).await {
                Ok(bytes) => predecode(bytes).await,
                Err(err) => Err(err),
            };

            match decoded {
                Ok(image) => Ok(Asset::image(key, image)),
                Err(err) => {
                    warn!("could not load image '{key}' from '{locator}': {err:#}, resolving with fallback");
                    Ok(Asset::image(key, placeholders.missing))
                }
            }
        })
    }

    /// Load and decode a sound
    ///
    /// Resolves with the decoded buffer on success and the fixed silent
    /// buffer (one frame, one channel, 22050 Hz) on any failure. Rejects only
    /// for an empty `key`.
    pub fn load_sound(&self, key: &str, url: &str) -> AssetFuture {
        let key = key.to_string();
        let locator = url.to_string();
        let sounds = Arc::clone(&self.sounds);

        Box::pin(async move {
            if key.is_empty() {
                return Err(AssetError::KeyRequired);
            }

            let decoded = if locator.is_empty() {
                Err(anyhow::anyhow!("no locator"))
            } else {
                sounds.decode(&locator).await
            };

            match decoded {
                Ok(buffer) => Ok(Asset::sound(key, buffer)),
                Err(err) => {
                    warn!("could not load sound '{key}' from '{locator}': {err:#}, resolving with fallback");
                    Ok(Asset::sound(key, AudioBuffer::silent()))
                }
            }
        })
    }

    /// Activate a font family
    ///
    /// Resolves with the activated family name on success, and with
    /// `fallback` (or Arial) when the family is empty, inactive, or the
    /// facility fails. Rejects only for an empty `key`.
    pub fn load_font(&self, key: &str, family: &str, opts: FontOptions) -> AssetFuture {
        let key = key.to_string();
        let family = family.to_string();
        let fallback = opts.fallback.unwrap_or_else(|| DEFAULT_FONT.to_string());
        let fonts = Arc::clone(&self.fonts);

        Box::pin(async move {
            if key.is_empty() {
                return Err(AssetError::KeyRequired);
            }

            // No family requested: the fallback is the answer, skip the
            // facility entirely.
            if family.is_empty() {
                return Ok(Asset::font(key, fallback));
            }

            match fonts.activate(&family).await {
                Ok(FontStatus::Active(name)) => Ok(Asset::font(key, name)),
                Ok(FontStatus::Inactive) => {
                    warn!("could not activate font '{key}' family '{family}', resolving with fallback '{fallback}'");
                    Ok(Asset::font(key, fallback))
                }
                Err(err) => {
                    warn!("could not activate font '{key}' family '{family}': {err:#}, resolving with fallback '{fallback}'");
                    Ok(Asset::font(key, fallback))
                }
            }
        })
    }
}

/// Join a url and optional query params into one locator
fn join_locator(url: &str, params: Option<&str>) -> String {
    match params {
        Some(params) if !url.is_empty() && !params.is_empty() => format!("{url}?{params}"),
        _ => url.to_string(),
    }
}

/// Decode fetched bytes ahead of use, off the async worker threads
///
/// Consumers get a fully decoded image, so later synchronous use never incurs
/// decode latency.
async fn predecode(bytes: Vec<u8>) -> anyhow::Result<RgbaImage> {
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| anyhow::anyhow!("decode task failed: {e}"))?
        .context("failed to decode image")?;
    Ok(image.to_rgba8())
}
