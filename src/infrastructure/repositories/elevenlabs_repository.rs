use super::synthesis_repository::SynthesisRepository;
use crate::domain::synthesis::{SynthesisError, SynthesisRequest, SynthesisResult, VoiceSettings};
use async_trait::async_trait;
use base64::Engine as _;
use serde::Serialize;
use serde_json::Value;

const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";
const API_KEY_HEADER: &str = "xi-api-key";

/// Request body for the ElevenLabs text-to-speech endpoints. The voice id
/// travels in the URL and the output format as a query parameter.
#[derive(Serialize)]
struct SynthesisPayload<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

/// ElevenLabs implementation of the synthesis repository.
///
/// The API key is held privately, sent only in the `xi-api-key` header and
/// never logged.
pub struct ElevenLabsRepository {
    http_client: reqwest::Client,
    api_key: String,
}

impl ElevenLabsRepository {
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
        }
    }

    fn endpoint(voice_id: &str, want_metadata: bool) -> String {
        if want_metadata {
            format!("{ELEVENLABS_TTS_URL}/{voice_id}/with-timestamps")
        } else {
            format!("{ELEVENLABS_TTS_URL}/{voice_id}")
        }
    }

    async fn send(
        &self,
        request: &SynthesisRequest,
        want_metadata: bool,
    ) -> Result<reqwest::Response, SynthesisError> {
        let payload = SynthesisPayload {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: &request.voice_settings,
        };

        let response = self
            .http_client
            .post(Self::endpoint(&request.voice_id, want_metadata))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("output_format", request.output_format.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| SynthesisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(
                status = status.as_u16(),
                voice_id = %request.voice_id,
                "ElevenLabs rejected synthesis request"
            );
            return Err(SynthesisError::ProviderRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl SynthesisRepository for ElevenLabsRepository {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        want_metadata: bool,
    ) -> Result<SynthesisResult, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            output_format = %request.output_format,
            text_length = request.text.len(),
            with_metadata = want_metadata,
            "Calling ElevenLabs TTS API"
        );

        let response = self.send(request, want_metadata).await?;

        let result = if want_metadata {
            let mut payload: Value = response
                .json()
                .await
                .map_err(|e| SynthesisError::Transport(e.to_string()))?;
            let audio = extract_audio(&mut payload)?;
            SynthesisResult {
                audio,
                metadata: Some(payload),
            }
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| SynthesisError::Transport(e.to_string()))?;
            SynthesisResult {
                audio: bytes.to_vec(),
                metadata: None,
            }
        };

        tracing::info!(
            provider = "elevenlabs",
            latency_ms = start_time.elapsed().as_millis() as u64,
            audio_size_bytes = result.audio.len(),
            "TTS synthesis completed"
        );

        Ok(result)
    }
}

/// Pull the base64 audio out of a with-timestamps payload, leaving the
/// timing metadata behind for the sidecar file. The provider has shipped
/// the audio under a couple of different keys across API revisions.
fn extract_audio(payload: &mut Value) -> Result<Vec<u8>, SynthesisError> {
    let Some(object) = payload.as_object_mut() else {
        return Err(SynthesisError::MalformedResponse);
    };

    for key in ["audio_base64", "audio_base_64", "audio"] {
        let Some(value) = object.remove(key) else {
            continue;
        };
        if let Value::String(encoded) = value {
            if let Ok(bytes) = base64::engine::general_purpose::STANDARD.decode(encoded.as_bytes())
            {
                return Ok(bytes);
            }
        }
    }

    Err(SynthesisError::MalformedResponse)
}
