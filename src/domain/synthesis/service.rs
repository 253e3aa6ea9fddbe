use super::batch::BatchItem;
use super::request::SynthesisRequest;
use crate::domain::profile::VoiceProfile;
use crate::error::{AppError, AppResult};
use crate::infrastructure::output::{OutputWriter, PersistedPaths};
use crate::infrastructure::repositories::SynthesisRepository;
use std::path::PathBuf;
use std::sync::Arc;

/// Outcome of one batch line, in input order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub index: usize,
    pub result: Result<PersistedPaths, AppError>,
}

/// Collected results of a batch run. Per-item failures are recorded here
/// instead of aborting the run, so a single bad line does not discard the
/// audio already generated.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.succeeded() == 0
    }

    pub fn first_success(&self) -> Option<&PersistedPaths> {
        self.outcomes
            .iter()
            .find_map(|o| o.result.as_ref().ok())
    }
}

/// Orchestrates the per-utterance cycle: build the request, call the
/// provider, persist the output. Strictly sequential; each utterance
/// completes before the next begins.
pub struct SynthesisService {
    repository: Arc<dyn SynthesisRepository>,
    writer: OutputWriter,
    output_format: String,
    want_metadata: bool,
}

impl SynthesisService {
    pub fn new(
        repository: Arc<dyn SynthesisRepository>,
        output_dir: PathBuf,
        output_format: String,
        want_metadata: bool,
    ) -> Self {
        let writer = OutputWriter::new(output_dir, &output_format);
        Self {
            repository,
            writer,
            output_format,
            want_metadata,
        }
    }

    /// Full cycle for a single utterance.
    pub async fn synthesize_one(
        &self,
        profile: &VoiceProfile,
        text: &str,
        base_name: Option<&str>,
        sequence_index: Option<usize>,
    ) -> AppResult<PersistedPaths> {
        let request = SynthesisRequest::build(profile, text, &self.output_format)?;

        tracing::info!(
            profile = %profile.profile_id,
            voice_id = %request.voice_id,
            text_length = request.text.len(),
            with_metadata = self.want_metadata,
            "Starting synthesis"
        );

        let mut result = self
            .repository
            .synthesize(&request, self.want_metadata)
            .await?;

        if let Some(response) = result.metadata.take() {
            result.metadata = Some(self.metadata_document(profile, &request.text, response));
        }

        let paths = self.writer.persist(&result, base_name, sequence_index)?;

        tracing::info!(
            audio_path = %paths.audio.display(),
            audio_size_bytes = result.audio.len(),
            "Synthesis persisted"
        );

        Ok(paths)
    }

    /// Sequential batch run with a collect-and-continue policy: every item
    /// is attempted and failures land in the summary.
    pub async fn synthesize_batch(
        &self,
        profile: &VoiceProfile,
        items: &[BatchItem],
        base_name: Option<&str>,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for item in items {
            tracing::info!(
                index = item.index,
                total = items.len(),
                text_length = item.text.len(),
                "Synthesizing batch item"
            );

            let result = self
                .synthesize_one(profile, &item.text, base_name, Some(item.index))
                .await;

            if let Err(err) = &result {
                tracing::error!(index = item.index, error = %err, "Batch item failed");
            }

            summary.outcomes.push(BatchOutcome {
                index: item.index,
                result,
            });
        }

        tracing::info!(
            total = summary.outcomes.len(),
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "Batch run completed"
        );

        summary
    }

    /// Sidecar document written next to the audio when metadata is on:
    /// the profile snapshot and input alongside the provider's timing
    /// payload (audio fields already stripped by the repository).
    fn metadata_document(
        &self,
        profile: &VoiceProfile,
        text: &str,
        response: serde_json::Value,
    ) -> serde_json::Value {
        serde_json::json!({
            "provider": "elevenlabs",
            "profile_name": profile.profile_id,
            "voiceProfile": profile,
            "output_format": self.output_format,
            "text": text,
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "response": response,
        })
    }
}
