//! Batch synthesizer.
//!
//! Coordinates the speech backend and the audio store: one sequential
//! network call per missing item, with per-item failure containment.

mod batch;

pub use batch::{BatchSynthesizer, ItemStatus, RunSummary, SynthesisError};
