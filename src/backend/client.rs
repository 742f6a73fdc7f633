//! HTTP client for the speech service.

use log::debug;

use super::Backend;
use super::types::{BackendError, OUTPUT_FORMAT, SynthesizeRequest, VoiceInfo};

/// HTTP-based speech service client.
pub struct HttpBackend {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new client for the given service endpoint.
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Backend for HttpBackend {
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/cognitiveservices/v1", self.base_url);
        debug!("POST {url} voice={}", request.voice);

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header("User-Agent", "korean-audio-gen")
            .body(request.to_ssml())
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if response.status().as_u16() == 401 {
            return Err(BackendError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let audio = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        debug!("received {} bytes", audio.len());
        Ok(audio)
    }

    fn list_voices(&self) -> Result<Vec<VoiceInfo>, BackendError> {
        let url = format!("{}/cognitiveservices/voices/list", self.base_url);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if response.status().as_u16() == 401 {
            return Err(BackendError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
