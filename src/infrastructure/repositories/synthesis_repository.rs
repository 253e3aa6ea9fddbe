use crate::domain::synthesis::{SynthesisError, SynthesisRequest, SynthesisResult};
use async_trait::async_trait;

/// Repository for speech synthesis operations.
/// Abstracts the underlying TTS provider so the batch pipeline and its
/// error handling can be tested against a fake implementation without
/// performing real network calls.
#[async_trait]
pub trait SynthesisRepository: Send + Sync {
    /// Synthesize one utterance.
    ///
    /// Performs exactly one outbound call per invocation; no retry, no
    /// backoff. When `want_metadata` is false no metadata is requested
    /// and the result carries `metadata = None`.
    ///
    /// # Errors
    /// Returns `Transport` for network failures and `ProviderRejected`
    /// (with status and body preserved) for non-success responses.
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        want_metadata: bool,
    ) -> Result<SynthesisResult, SynthesisError>;
}
