use serde::{Deserialize, Serialize};

/// Sentinel voice id used by profiles that have not been wired to a real
/// ElevenLabs voice yet.
pub const PLACEHOLDER_VOICE_ID: &str = "REPLACE_WITH_ELEVENLABS_VOICE_ID";

/// One named synthesis configuration, parsed from a JSON file in the
/// profiles directory. Immutable after load; the catalog key it is stored
/// under must equal `profile_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfile {
    pub profile_id: String,
    pub voice_id: String,
    pub model_id: String,
    #[serde(default = "default_stability")]
    pub stability: f32,
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,
    #[serde(default)]
    pub style_exaggeration: f32,
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_stability() -> f32 {
    0.5
}

fn default_similarity_boost() -> f32 {
    0.5
}

fn default_speed() -> f32 {
    1.0
}

impl VoiceProfile {
    pub fn has_placeholder_voice(&self) -> bool {
        self.voice_id == PLACEHOLDER_VOICE_ID
    }
}
