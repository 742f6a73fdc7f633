//! CLI argument parsing and defaults.

mod args;

pub use args::{Args, DEFAULT_ENDPOINT, DEFAULT_OUTPUT_DIR, DEFAULT_VOICE};
