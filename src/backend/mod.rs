//! Communication with the remote speech-synthesis service.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{BackendError, OUTPUT_FORMAT, SynthesizeRequest, VoiceInfo, locale_of};

/// Trait for speech service communication.
///
/// Abstracts the HTTP calls to the TTS service, allowing for mock
/// implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Synthesize speech from text.
    ///
    /// # Returns
    /// Raw MP3 audio data.
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError>;

    /// List the voices offered by the service.
    fn list_voices(&self) -> Result<Vec<VoiceInfo>, BackendError>;
}

/// Create a backend for the given endpoint and subscription key.
pub fn create_backend(endpoint: &str, api_key: &str) -> HttpBackend {
    HttpBackend::new(endpoint, api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Backend trait tests with mocks
    // ===========================================

    #[test]
    fn test_mock_backend_synthesize() {
        let mut mock = MockBackend::new();

        mock.expect_synthesize()
            .withf(|req| req.text == "가" && req.voice == "ko-KR-SunHiNeural")
            .times(1)
            .returning(|_| Ok(b"ID3\x04fake mp3 frames".to_vec()));

        let request = SynthesizeRequest::new("가");
        let result = mock.synthesize(&request);

        assert!(result.is_ok());
        assert!(result.unwrap().starts_with(b"ID3"));
    }

    #[test]
    fn test_mock_backend_synthesize_connection_failure() {
        let mut mock = MockBackend::new();

        mock.expect_synthesize().times(1).returning(|_| {
            Err(BackendError::ConnectionFailed(
                "Connection refused".to_string(),
            ))
        });

        let result = mock.synthesize(&SynthesizeRequest::new("나"));
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            BackendError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_mock_backend_list_voices() {
        let mut mock = MockBackend::new();

        mock.expect_list_voices().times(1).returning(|| {
            Ok(vec![
                VoiceInfo {
                    short_name: "ko-KR-SunHiNeural".to_string(),
                    display_name: "SunHi".to_string(),
                    locale: "ko-KR".to_string(),
                    gender: Some("Female".to_string()),
                    voice_type: Some("Neural".to_string()),
                },
                VoiceInfo {
                    short_name: "en-US-JennyNeural".to_string(),
                    display_name: "Jenny".to_string(),
                    locale: "en-US".to_string(),
                    gender: Some("Female".to_string()),
                    voice_type: Some("Neural".to_string()),
                },
            ])
        });

        let voices = mock.list_voices().unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].short_name, "ko-KR-SunHiNeural");
    }

    #[test]
    fn test_create_backend_base_url() {
        let backend = create_backend("https://eastus.tts.speech.microsoft.com", "key");
        assert_eq!(
            backend.base_url(),
            "https://eastus.tts.speech.microsoft.com"
        );
    }

    #[test]
    fn test_create_backend_trims_trailing_slash() {
        let backend = create_backend("https://eastus.tts.speech.microsoft.com/", "key");
        assert_eq!(
            backend.base_url(),
            "https://eastus.tts.speech.microsoft.com"
        );
    }
}
