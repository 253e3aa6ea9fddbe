pub mod batch;
pub mod error;
pub mod request;
pub mod service;

pub use batch::{filter_lines, read_batch_file, BatchError, BatchItem};
pub use error::SynthesisError;
pub use request::{BuildError, SynthesisRequest, VoiceSettings, DEFAULT_OUTPUT_FORMAT};
pub use service::{BatchOutcome, BatchSummary, SynthesisService};

/// Audio payload plus optional provider metadata for one utterance.
/// Owned by the caller until flushed to disk, then dropped.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio: Vec<u8>,
    pub metadata: Option<serde_json::Value>,
}
