use crate::domain::synthesis::DEFAULT_OUTPUT_FORMAT;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "voicelab",
    version,
    about = "Generate TTS audio using per-patient ElevenLabs voice profiles"
)]
pub struct Cli {
    /// Path to the voice profiles directory
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Profile name from the catalog; omitted uses the default profile
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<String>,

    /// Text to synthesize
    #[arg(
        short = 't',
        long = "text",
        default_value = "Hello, this is a test line for our virtual patient."
    )]
    pub text: String,

    /// Batch mode: text file with one utterance per line (# starts a comment)
    #[arg(long = "input-file")]
    pub input_file: Option<PathBuf>,

    /// Directory for generated audio files
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Output format (for example pcm_16000, mp3_22050_32)
    #[arg(short = 'f', long = "format", default_value = DEFAULT_OUTPUT_FORMAT)]
    pub format: String,

    /// Optional output filename prefix (without extension)
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Disable writing the provider metadata JSON sidecar
    #[arg(long = "no-metadata", action = ArgAction::SetTrue)]
    pub no_metadata: bool,

    /// Play the generated audio after synthesis (first item in batch mode)
    #[arg(long = "play", action = ArgAction::SetTrue)]
    pub play: bool,

    /// List available profiles and exit
    #[arg(long = "list", action = ArgAction::SetTrue)]
    pub list: bool,
}
