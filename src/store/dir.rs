//! Directory-backed audio store.

use std::path::PathBuf;

use thiserror::Error;

use super::AudioStore;

/// Errors that can occur when reading or writing stored audio.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid item name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Stores one MP3 per text item in a single output directory.
///
/// The exact text is used verbatim as the file stem, so the target
/// filesystem must accept UTF-8 filenames.
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory itself is created lazily on first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the output directory path.
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Validate a text item as a file stem.
    fn validate_name(text: &str) -> Result<(), StoreError> {
        if text.is_empty() {
            return Err(StoreError::InvalidName("Name cannot be empty".to_string()));
        }

        // Prevent path traversal
        if text.contains('/') || text.contains('\\') || text.contains("..") {
            return Err(StoreError::InvalidName(
                "Name cannot contain path separators".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the audio file path for a text item.
    fn audio_path(&self, text: &str) -> PathBuf {
        self.dir.join(format!("{text}.mp3"))
    }
}

impl AudioStore for DirStore {
    fn exists(&self, text: &str) -> bool {
        self.audio_path(text).exists()
    }

    fn write(&self, text: &str, audio: &[u8]) -> Result<(), StoreError> {
        Self::validate_name(text)?;

        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.audio_path(text), audio)?;

        Ok(())
    }

    fn audio_count(&self) -> Result<usize, StoreError> {
        if !self.dir.exists() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "mp3") {
                count += 1;
            }
        }

        Ok(count)
    }
}
