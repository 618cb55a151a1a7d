//! Asynchronous asset loading with deterministic fallbacks
//!
//! Loads images, sounds, and fonts through injected facilities, normalizes
//! every result into a uniform [`Asset`] record, and aggregates a batch of
//! mixed loads into one [`AssetCollection`] with monotonic progress
//! reporting. Runtime failures never reject: a failed image resolves with a
//! placeholder, a failed sound with a silent buffer, a failed font with a
//! fallback family, each with one logged warning. Only caller misuse (a
//! missing key) propagates as an error.
//!
//! ```no_run
//! use game_asset_loader::{load_list, AssetLoader, FontOptions, ImageOptions};
//!
//! # async fn run() -> Result<(), game_asset_loader::AssetError> {
//! let loader = AssetLoader::from_dir("assets")?;
//!
//! let assets = load_list(
//!     vec![
//!         loader.load_image("hero", "images/hero.png", ImageOptions::default()),
//!         loader.load_sound("theme", "sounds/theme.wav"),
//!         loader.load_font("title", "Lobster", FontOptions::default()),
//!     ],
//!     |progress| println!("{}%", progress.percent),
//! )
//! .await?;
//!
//! let hero = assets.image("hero");
//! # Ok(())
//! # }
//! ```

mod asset;
mod batch;
mod loader;
mod placeholder;
mod source;

pub use asset::{Asset, AssetCollection, AssetKind, AssetValue, AudioBuffer, SILENT_SAMPLE_RATE};
pub use batch::{load_list, LoadedAsset, Progress};
pub use loader::{AssetFuture, AssetLoader, FontOptions, ImageOptions, DEFAULT_FONT};
pub use placeholder::{decode_data_uri, Placeholders, BLANK_IMAGE, MISSING_IMAGE};
pub use source::{
    FileSource, FontSource, FontStatus, ImageSource, SoundSource, StaticFontSource,
};

/// Asset loading errors
///
/// Recoverable failures are masked by fallback values inside the loaders;
/// these variants cover the cases that do propagate.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// A loader was called without a key
    #[error("key required")]
    KeyRequired,

    /// An embedded placeholder image failed to decode
    #[error("invalid placeholder image: {0}")]
    Placeholder(String),
}
