use crate::error::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// ElevenLabs credential. Optional here so profile listing works
    /// without one; callers must go through `require_api_key` before
    /// constructing the synthesis client.
    pub api_key: Option<String>,
    pub config_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            api_key: env::var("ELEVENLABS_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            config_dir: env::var("VOICELAB_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config/voices")),
            output_dir: env::var("VOICELAB_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("outputs")),
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Config("ELEVENLABS_API_KEY is not set. Add it to .env.".to_string())
        })
    }
}
