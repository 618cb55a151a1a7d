// External decoding facilities consumed by the loaders
//
// The core never talks to the platform directly: images, sounds, and fonts
// come from injected trait objects, and every facility error is treated as a
// recoverable failure by the loader on top of it.

mod file;
mod font;

pub use file::FileSource;
pub use font::StaticFontSource;

use anyhow::Result;
use async_trait::async_trait;

use crate::asset::AudioBuffer;

/// Outcome of a font activation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontStatus {
    /// The family activated; carries the resolved family name
    Active(String),
    /// The family is unknown or failed to activate
    Inactive,
}

/// Yields encoded image bytes for a locator
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>>;
}

/// Yields a decoded audio buffer for a locator
#[async_trait]
pub trait SoundSource: Send + Sync {
    async fn decode(&self, locator: &str) -> Result<AudioBuffer>;
}

/// Reports whether a font family can be activated
#[async_trait]
pub trait FontSource: Send + Sync {
    async fn activate(&self, family: &str) -> Result<FontStatus>;
}
