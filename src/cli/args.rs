//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Default output directory for generated audio files.
pub const DEFAULT_OUTPUT_DIR: &str = "korean_audio_assets";

/// Default Korean neural voice.
pub const DEFAULT_VOICE: &str = "ko-KR-SunHiNeural";

/// Default speech service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://eastus.tts.speech.microsoft.com";

/// Batch generator for Korean learning-app audio clips.
#[derive(Parser, Debug)]
#[command(name = "korean-audio-gen")]
#[command(about = "Generate MP3 audio for Korean learning items via a neural TTS service")]
#[command(version)]
pub struct Args {
    /// Force regeneration of all audio files (even if they exist)
    #[arg(short, long)]
    pub force: bool,

    /// Output directory for generated MP3 files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Neural voice identifier used for synthesis
    #[arg(long, default_value = DEFAULT_VOICE)]
    pub voice: String,

    /// Speech service base URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Speech service subscription key (falls back to the SPEECH_KEY env var)
    #[arg(long)]
    pub api_key: Option<String>,

    /// List the service voices for the configured locale and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
