use crate::domain::profile::VoiceProfile;
use serde::Serialize;

pub const DEFAULT_OUTPUT_FORMAT: &str = "pcm_16000";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("Utterance text is empty after trimming")]
    EmptyUtterance,

    #[error("Profile '{0}' still has the placeholder voice id; set a real ElevenLabs voiceId first")]
    PlaceholderVoiceId(String),
}

/// Voice rendering parameters, serialized the way the ElevenLabs API
/// expects them in the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub speed: f32,
}

/// One outbound synthesis request. Built per utterance and dropped after
/// the call; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    pub output_format: String,
}

impl SynthesisRequest {
    /// Merge a resolved profile, one utterance and the runtime output
    /// format into a request payload.
    ///
    /// The output format comes from the caller, never from the profile.
    /// A placeholder voice id fails here rather than burning a paid call
    /// the provider would reject anyway.
    pub fn build(
        profile: &VoiceProfile,
        text: &str,
        output_format: &str,
    ) -> Result<Self, BuildError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(BuildError::EmptyUtterance);
        }
        if profile.has_placeholder_voice() {
            return Err(BuildError::PlaceholderVoiceId(profile.profile_id.clone()));
        }

        Ok(Self {
            text: trimmed.to_string(),
            voice_id: profile.voice_id.clone(),
            model_id: profile.model_id.clone(),
            voice_settings: VoiceSettings {
                stability: profile.stability,
                similarity_boost: profile.similarity_boost,
                style: profile.style_exaggeration,
                speed: profile.speed,
            },
            output_format: output_format.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::PLACEHOLDER_VOICE_ID;
    use pretty_assertions::assert_eq;

    fn profile() -> VoiceProfile {
        VoiceProfile {
            profile_id: "sim2".to_string(),
            voice_id: "V1".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            stability: 0.4,
            similarity_boost: 0.7,
            style_exaggeration: 0.2,
            speed: 1.1,
        }
    }

    #[test]
    fn it_should_reject_empty_text() {
        let err = SynthesisRequest::build(&profile(), "", DEFAULT_OUTPUT_FORMAT).unwrap_err();
        assert_eq!(err, BuildError::EmptyUtterance);
    }

    #[test]
    fn it_should_reject_whitespace_only_text() {
        let err = SynthesisRequest::build(&profile(), "   ", DEFAULT_OUTPUT_FORMAT).unwrap_err();
        assert_eq!(err, BuildError::EmptyUtterance);
    }

    #[test]
    fn it_should_reject_a_placeholder_voice_id_before_any_network_call() {
        let mut profile = profile();
        profile.voice_id = PLACEHOLDER_VOICE_ID.to_string();
        let err = SynthesisRequest::build(&profile, "Hi", DEFAULT_OUTPUT_FORMAT).unwrap_err();
        assert_eq!(err, BuildError::PlaceholderVoiceId("sim2".to_string()));
    }

    #[test]
    fn it_should_copy_voice_settings_verbatim_and_trim_text() {
        let request =
            SynthesisRequest::build(&profile(), "  Hello there  ", "mp3_22050_32").unwrap();

        assert_eq!(request.text, "Hello there");
        assert_eq!(request.voice_id, "V1");
        assert_eq!(request.model_id, "eleven_multilingual_v2");
        assert_eq!(request.output_format, "mp3_22050_32");
        assert_eq!(
            request.voice_settings,
            VoiceSettings {
                stability: 0.4,
                similarity_boost: 0.7,
                style: 0.2,
                speed: 1.1,
            }
        );
    }

    #[test]
    fn it_should_serialize_voice_settings_with_provider_field_names() {
        let request = SynthesisRequest::build(&profile(), "Hi", DEFAULT_OUTPUT_FORMAT).unwrap();
        let json = serde_json::to_value(&request.voice_settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stability": 0.4_f32,
                "similarity_boost": 0.7_f32,
                "style": 0.2_f32,
                "speed": 1.1_f32,
            })
        );
    }
}
