//! Backend request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MP3 output format requested from the speech service.
pub const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Errors that can occur when communicating with the speech service.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unauthorized: check the subscription key")]
    Unauthorized,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A voice as reported by the service's voice-list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoiceInfo {
    pub short_name: String,
    pub display_name: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_type: Option<String>,
}

/// Request for speech synthesis.
#[derive(Debug, Clone)]
pub struct SynthesizeRequest {
    pub text: String,
    pub voice: String,
}

impl SynthesizeRequest {
    /// Create a new synthesis request with the default voice.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: crate::cli::DEFAULT_VOICE.to_string(),
        }
    }

    /// Set the voice identifier.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Render the request as the SSML document the service expects.
    pub fn to_ssml(&self) -> String {
        format!(
            "<speak version='1.0' xml:lang='{lang}'>\
             <voice name='{voice}'>{text}</voice>\
             </speak>",
            lang = locale_of(&self.voice),
            voice = self.voice,
            text = escape_xml(&self.text),
        )
    }
}

/// Derive the locale from a voice identifier ("ko-KR-SunHiNeural" -> "ko-KR").
pub fn locale_of(voice: &str) -> String {
    let mut parts = voice.splitn(3, '-');
    match (parts.next(), parts.next()) {
        (Some(lang), Some(region)) => format!("{lang}-{region}"),
        _ => voice.to_string(),
    }
}

/// Escape XML metacharacters in text content.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
