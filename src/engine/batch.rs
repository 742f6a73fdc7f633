//! Batch synthesizer implementation.

use log::warn;
use thiserror::Error;

use crate::backend::{Backend, BackendError, SynthesizeRequest};
use crate::store::{AudioStore, StoreError};

/// Errors that can occur while generating one item.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of processing one text item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// A fresh audio file was created.
    Generated,
    /// An existing audio file was overwritten in force mode.
    Regenerated,
    /// The audio file already existed; no network call was made.
    Skipped,
    /// Synthesis or storage failed; the message describes why.
    Failed(String),
}

/// Tally of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    /// Fresh and force-regenerated files combined.
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Audio files actually present in the store after the run.
    pub files_present: usize,
}

/// Sequentially synthesizes audio for a list of text items.
pub struct BatchSynthesizer<B: Backend, S: AudioStore> {
    backend: B,
    store: S,
    voice: String,
}

impl<B: Backend, S: AudioStore> BatchSynthesizer<B, S> {
    /// Create a new batch synthesizer using the given voice.
    pub fn new(backend: B, store: S, voice: impl Into<String>) -> Self {
        Self {
            backend,
            store,
            voice: voice.into(),
        }
    }

    /// Process one text item.
    ///
    /// An already-stored item is skipped unless `force` is set. Backend and
    /// store failures are caught here and reported as `Failed`; they never
    /// propagate.
    pub fn synthesize_item(&self, text: &str, force: bool) -> ItemStatus {
        let existed = self.store.exists(text);

        if existed && !force {
            return ItemStatus::Skipped;
        }

        match self.generate(text) {
            Ok(()) if existed => ItemStatus::Regenerated,
            Ok(()) => ItemStatus::Generated,
            Err(e) => {
                warn!("synthesis failed for {text}: {e}");
                ItemStatus::Failed(e.to_string())
            }
        }
    }

    fn generate(&self, text: &str) -> Result<(), SynthesisError> {
        let request = SynthesizeRequest::new(text).with_voice(&self.voice);
        let audio = self.backend.synthesize(&request)?;
        self.store.write(text, &audio)?;
        Ok(())
    }

    /// Process every item in order, reporting each outcome through
    /// `progress` with 1-based numbering.
    ///
    /// A failure on one item never affects the others; the run always
    /// completes and covers every item.
    pub fn run<F>(&self, items: &[&str], force: bool, mut progress: F) -> RunSummary
    where
        F: FnMut(usize, &str, &ItemStatus),
    {
        let mut generated = 0;
        let mut skipped = 0;
        let mut failed = 0;

        for (i, &text) in items.iter().enumerate() {
            let status = self.synthesize_item(text, force);

            match status {
                ItemStatus::Generated | ItemStatus::Regenerated => generated += 1,
                ItemStatus::Skipped => skipped += 1,
                ItemStatus::Failed(_) => failed += 1,
            }

            progress(i + 1, text, &status);
        }

        RunSummary {
            total: items.len(),
            generated,
            skipped,
            failed,
            files_present: self.store.audio_count().unwrap_or(0),
        }
    }
}
