use crate::domain::profile::ProfileError;
use crate::domain::synthesis::{BatchError, BuildError, SynthesisError};
use crate::infrastructure::output::WriteError;

/// Main application error type.
///
/// Profile and configuration errors abort the whole run before any network
/// call; per-utterance errors in batch mode are collected into the batch
/// summary instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Batch input error: {0}")]
    BatchInput(#[from] BatchError),

    #[error("Request build error: {0}")]
    Build(#[from] BuildError),

    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("All {0} batch items failed")]
    BatchFailed(usize),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
