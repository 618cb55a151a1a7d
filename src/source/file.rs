// Filesystem-backed image and sound facilities

use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

use super::{ImageSource, SoundSource};
use crate::asset::AudioBuffer;

/// Serves image bytes and WAV audio from a base directory
///
/// The filesystem counterpart of a network fetch facility: locators are paths
/// relative to the base directory, and any query-string suffix a caller
/// appended for cache busting is ignored when resolving the file.
pub struct FileSource {
    base: PathBuf,
}

impl FileSource {
    /// Create a source rooted at the given directory
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// The base directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve a locator to a path, dropping any query-string suffix
    fn resolve(&self, locator: &str) -> PathBuf {
        let path = locator.split_once('?').map_or(locator, |(path, _)| path);
        self.base.join(path)
    }

    async fn read(&self, locator: &str) -> Result<Vec<u8>> {
        let path = self.resolve(locator);
        tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

#[async_trait]
impl ImageSource for FileSource {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>> {
        self.read(locator).await
    }
}

#[async_trait]
impl SoundSource for FileSource {
    async fn decode(&self, locator: &str) -> Result<AudioBuffer> {
        let bytes = self.read(locator).await?;
        tokio::task::spawn_blocking(move || decode_wav(&bytes))
            .await
            .map_err(|e| anyhow!("wav decode task failed: {e}"))?
    }
}

/// Decode a WAV blob into an interleaved f32 buffer
fn decode_wav(bytes: &[u8]) -> Result<AudioBuffer> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    let samples: Result<Vec<f32>, _> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect(),
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|s| s as f32 / max_value))
                .collect()
        }
    };

    let samples = samples.context("failed to parse WAV samples")?;
    Ok(AudioBuffer::new(samples, spec.channels, spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    // A WAV file: 16-bit, mono, 8000 Hz, 4 samples (0.5, -0.5, 0.25, -0.25).
    const TEST_WAV_BYTES: &[u8] = &[
        82, 73, 70, 70, 44, 0, 0, 0, 87, 65, 86, 69, 102, 109, 116, 32, 16, 0, 0, 0, 1, 0, 1, 0,
        64, 31, 0, 0, 128, 62, 0, 0, 2, 0, 16, 0, 100, 97, 116, 97, 8, 0, 0, 0, 0, 64, 0, 192, 0,
        32, 0, 224,
    ];

    #[test]
    fn test_decode_wav_normalizes_int_samples() {
        let buffer = decode_wav(TEST_WAV_BYTES).unwrap();
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.sample_rate(), 8000);
        assert_eq!(buffer.length(), 4);
        assert_eq!(buffer.samples(), &[0.5, -0.5, 0.25, -0.25]);
    }

    #[test]
    fn test_decode_wav_rejects_garbage() {
        assert!(decode_wav(&[0, 1, 2, 3]).is_err());
    }

    #[test]
    fn test_resolve_strips_query_suffix() {
        let source = FileSource::new("/assets");
        assert_eq!(
            source.resolve("images/player.png?v=3"),
            PathBuf::from("/assets/images/player.png")
        );
        assert_eq!(
            source.resolve("sounds/theme.wav"),
            PathBuf::from("/assets/sounds/theme.wav")
        );
    }

    #[tokio::test]
    async fn test_fetch_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert!(source.fetch("nope.png").await.is_err());
    }

    #[tokio::test]
    async fn test_decode_wav_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blip.wav"), TEST_WAV_BYTES).unwrap();

        let source = FileSource::new(dir.path());
        let buffer = source.decode("blip.wav?cache=no").await.unwrap();
        assert_eq!(buffer.length(), 4);
    }
}
