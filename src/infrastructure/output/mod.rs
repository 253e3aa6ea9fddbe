use crate::domain::synthesis::SynthesisResult;
use std::path::{Path, PathBuf};

const PCM_16K_FORMAT: &str = "pcm_16000";

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode WAV container for {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

/// Paths produced by persisting one synthesis result.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedPaths {
    pub audio: PathBuf,
    pub metadata: Option<PathBuf>,
}

/// Persists synthesis results under a target directory with deterministic
/// names. Existing files at the target path are overwritten; last write
/// wins, and callers wanting collision avoidance pick distinct base names.
pub struct OutputWriter {
    directory: PathBuf,
    output_format: String,
}

impl OutputWriter {
    pub fn new(directory: PathBuf, output_format: &str) -> Self {
        Self {
            directory,
            output_format: output_format.to_string(),
        }
    }

    /// Write the audio file and, when metadata is present, its JSON
    /// sidecar. Creates the output directory if absent.
    pub fn persist(
        &self,
        result: &SynthesisResult,
        base_name: Option<&str>,
        sequence_index: Option<usize>,
    ) -> Result<PersistedPaths, WriteError> {
        std::fs::create_dir_all(&self.directory).map_err(|source| WriteError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let stem = file_stem(base_name, sequence_index);
        let extension = extension_for_format(&self.output_format);
        let audio_path = self.directory.join(format!("{stem}.{extension}"));

        write_audio(&audio_path, &self.output_format, &result.audio)?;

        let metadata = match &result.metadata {
            Some(document) => {
                let metadata_path = self.directory.join(format!("{stem}.json"));
                let contents = serde_json::to_string_pretty(document)
                    .unwrap_or_else(|_| "{}".to_string());
                std::fs::write(&metadata_path, contents).map_err(|source| WriteError::Io {
                    path: metadata_path.clone(),
                    source,
                })?;
                Some(metadata_path)
            }
            None => None,
        };

        Ok(PersistedPaths {
            audio: audio_path,
            metadata,
        })
    }
}

/// Derive the filename stem for one output.
///
/// Batch items get a zero-padded 1-based index suffix; a single item with
/// no explicit name falls back to a random id so repeated ad-hoc runs do
/// not clobber each other.
fn file_stem(base_name: Option<&str>, sequence_index: Option<usize>) -> String {
    match (base_name, sequence_index) {
        (Some(base), Some(index)) => format!("{base}_{index:03}"),
        (None, Some(index)) => format!("{index:03}"),
        (Some(base), None) => base.to_string(),
        (None, None) => uuid::Uuid::new_v4().to_string(),
    }
}

/// File extension for a provider output format code: `pcm_16000` becomes a
/// `.wav` container, anything else keeps the prefix before the first `_`
/// (`mp3_22050_32` -> `mp3`).
fn extension_for_format(output_format: &str) -> &str {
    if output_format == PCM_16K_FORMAT {
        return "wav";
    }
    output_format.split('_').next().unwrap_or(output_format)
}

fn write_audio(path: &Path, output_format: &str, audio: &[u8]) -> Result<(), WriteError> {
    if output_format == PCM_16K_FORMAT {
        return write_pcm_wav(path, audio);
    }
    std::fs::write(path, audio).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Wrap raw 16 kHz mono 16-bit PCM in a WAV container.
fn write_pcm_wav(path: &Path, pcm: &[u8]) -> Result<(), WriteError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let wav_error = |source: hound::Error| WriteError::Wav {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(wav_error)?;
    for sample in pcm.chunks_exact(2) {
        writer
            .write_sample(i16::from_le_bytes([sample[0], sample[1]]))
            .map_err(wav_error)?;
    }
    writer.finalize().map_err(wav_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(audio: &[u8], metadata: Option<serde_json::Value>) -> SynthesisResult {
        SynthesisResult {
            audio: audio.to_vec(),
            metadata,
        }
    }

    #[test]
    fn test_file_stem_for_batch_items_is_zero_padded() {
        assert_eq!(file_stem(Some("sim2_batch"), Some(1)), "sim2_batch_001");
        assert_eq!(file_stem(Some("sim2_batch"), Some(42)), "sim2_batch_042");
    }

    #[test]
    fn test_file_stem_for_unnamed_batch_items_is_the_bare_index() {
        assert_eq!(file_stem(None, Some(7)), "007");
    }

    #[test]
    fn test_file_stem_for_named_single_item() {
        assert_eq!(file_stem(Some("take1"), None), "take1");
    }

    #[test]
    fn test_file_stem_for_unnamed_single_item_is_random() {
        let a = file_stem(None, None);
        let b = file_stem(None, None);
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for_format("pcm_16000"), "wav");
        assert_eq!(extension_for_format("mp3_22050_32"), "mp3");
        assert_eq!(extension_for_format("opus_48000_64"), "opus");
    }

    #[test]
    fn it_should_wrap_pcm_output_in_a_wav_container() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path().to_path_buf(), "pcm_16000");

        let pcm: Vec<u8> = (0u8..16).collect();
        let paths = writer.persist(&result(&pcm, None), Some("clip"), None).unwrap();

        assert_eq!(paths.audio.file_name().unwrap(), "clip.wav");
        let written = std::fs::read(&paths.audio).unwrap();
        assert_eq!(&written[..4], b"RIFF");
        assert_eq!(&written[8..12], b"WAVE");
        // Data chunk carries the PCM payload untouched.
        assert!(written
            .windows(pcm.len())
            .any(|window| window == pcm.as_slice()));
    }

    #[test]
    fn it_should_write_non_pcm_formats_as_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path().to_path_buf(), "mp3_22050_32");

        let paths = writer
            .persist(&result(b"mp3-bytes", None), Some("clip"), None)
            .unwrap();

        assert_eq!(paths.audio.file_name().unwrap(), "clip.mp3");
        assert_eq!(std::fs::read(&paths.audio).unwrap(), b"mp3-bytes");
    }

    #[test]
    fn it_should_write_a_metadata_sidecar_only_when_metadata_is_present() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path().to_path_buf(), "pcm_16000");

        let without = writer
            .persist(&result(&[0, 0], None), Some("plain"), None)
            .unwrap();
        assert_eq!(without.metadata, None);
        assert!(!dir.path().join("plain.json").exists());

        let with = writer
            .persist(
                &result(&[0, 0], Some(serde_json::json!({"provider": "elevenlabs"}))),
                Some("annotated"),
                None,
            )
            .unwrap();
        let sidecar = with.metadata.unwrap();
        assert_eq!(sidecar.file_name().unwrap(), "annotated.json");
        let document: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(sidecar).unwrap()).unwrap();
        assert_eq!(document["provider"], "elevenlabs");
    }

    #[test]
    fn it_should_overwrite_an_existing_file_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path().to_path_buf(), "mp3_22050_32");

        writer
            .persist(&result(b"first", None), Some("run"), Some(1))
            .unwrap();
        let paths = writer
            .persist(&result(b"second", None), Some("run"), Some(1))
            .unwrap();

        assert_eq!(paths.audio.file_name().unwrap(), "run_001.mp3");
        assert_eq!(std::fs::read(&paths.audio).unwrap(), b"second");
    }

    #[test]
    fn it_should_create_the_output_directory_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let writer = OutputWriter::new(nested.clone(), "mp3_22050_32");

        writer
            .persist(&result(b"x", None), Some("clip"), None)
            .unwrap();
        assert!(nested.join("clip.mp3").exists());
    }
}
