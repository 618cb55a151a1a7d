// Uniform asset records and the aggregated collection

use std::collections::HashMap;
use std::fmt;

use image::RgbaImage;

/// Sample rate of the silent fallback buffer.
///
/// 22050 Hz is the most widely accepted rate across audio backends; some
/// reject zero-length or nonstandard-rate buffers outright.
pub const SILENT_SAMPLE_RATE: u32 = 22050;

/// Supported asset kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Sound,
    Font,
}

impl AssetKind {
    /// Get the tag used in logs and progress reports
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Sound => "sound",
            AssetKind::Font => "font",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded audio buffer with interleaved f32 samples
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a buffer from interleaved samples
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Self {
        Self {
            samples,
            channels,
            sample_rate,
        }
    }

    /// The fixed fallback buffer: one silent frame, one channel, 22050 Hz
    pub fn silent() -> Self {
        Self::new(vec![0.0], 1, SILENT_SAMPLE_RATE)
    }

    /// Number of frames per channel
    pub fn length(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.length() as f64 / self.sample_rate as f64
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Interleaved sample data
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// Kind-dependent payload of an [`Asset`]
#[derive(Debug, Clone, PartialEq)]
pub enum AssetValue {
    /// A decoded image, ready for synchronous use
    Image(RgbaImage),
    /// A decoded audio buffer
    Sound(AudioBuffer),
    /// A resolved font family name
    Font(String),
}

impl AssetValue {
    /// The kind tag implied by this payload
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetValue::Image(_) => AssetKind::Image,
            AssetValue::Sound(_) => AssetKind::Sound,
            AssetValue::Font(_) => AssetKind::Font,
        }
    }
}

/// The uniform result record every single-resource loader produces
///
/// The kind tag always matches the payload variant; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    key: String,
    value: AssetValue,
}

impl Asset {
    /// Create an image asset
    pub fn image(key: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            key: key.into(),
            value: AssetValue::Image(image),
        }
    }

    /// Create a sound asset
    pub fn sound(key: impl Into<String>, buffer: AudioBuffer) -> Self {
        Self {
            key: key.into(),
            value: AssetValue::Sound(buffer),
        }
    }

    /// Create a font asset
    pub fn font(key: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: AssetValue::Font(family.into()),
        }
    }

    /// The asset kind
    pub fn kind(&self) -> AssetKind {
        self.value.kind()
    }

    /// The caller-supplied key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The loaded payload
    pub fn value(&self) -> &AssetValue {
        &self.value
    }

    /// Split into key and payload
    pub fn into_parts(self) -> (String, AssetValue) {
        (self.key, self.value)
    }
}

/// All loaded assets keyed by kind, then by key
///
/// Built once by [`load_list`](crate::load_list) after every input has
/// settled; duplicate keys within a kind are overwritten (last settled wins).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AssetCollection {
    images: HashMap<String, RgbaImage>,
    sounds: HashMap<String, AudioBuffer>,
    fonts: HashMap<String, String>,
}

impl AssetCollection {
    /// Fold one settled asset into the collection
    pub(crate) fn insert(&mut self, asset: Asset) {
        let (key, value) = asset.into_parts();
        match value {
            AssetValue::Image(image) => {
                self.images.insert(key, image);
            }
            AssetValue::Sound(buffer) => {
                self.sounds.insert(key, buffer);
            }
            AssetValue::Font(family) => {
                self.fonts.insert(key, family);
            }
        }
    }

    /// Get a loaded image by key
    pub fn image(&self, key: &str) -> Option<&RgbaImage> {
        self.images.get(key)
    }

    /// Get a loaded sound by key
    pub fn sound(&self, key: &str) -> Option<&AudioBuffer> {
        self.sounds.get(key)
    }

    /// Get a resolved font family by key
    pub fn font(&self, key: &str) -> Option<&str> {
        self.fonts.get(key).map(String::as_str)
    }

    /// All loaded images
    pub fn images(&self) -> &HashMap<String, RgbaImage> {
        &self.images
    }

    /// All loaded sounds
    pub fn sounds(&self) -> &HashMap<String, AudioBuffer> {
        &self.sounds
    }

    /// All resolved fonts
    pub fn fonts(&self) -> &HashMap<String, String> {
        &self.fonts
    }

    /// Number of entries of a given kind
    pub fn count(&self, kind: AssetKind) -> usize {
        match kind {
            AssetKind::Image => self.images.len(),
            AssetKind::Sound => self.sounds.len(),
            AssetKind::Font => self.fonts.len(),
        }
    }

    /// Total number of entries across all kinds
    pub fn len(&self) -> usize {
        self.images.len() + self.sounds.len() + self.fonts.len()
    }

    /// True if no assets were loaded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
