use std::path::PathBuf;

/// Errors from loading the profile catalog or resolving a profile name.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No profile JSON files found in {0}")]
    NoProfiles(PathBuf),

    #[error("Invalid profile file {path}: {source}")]
    InvalidProfileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile id mismatch in {file}: profileId '{declared}' must match filename '{expected}'")]
    IdentityMismatch {
        file: PathBuf,
        declared: String,
        expected: String,
    },

    #[error("Unknown profile '{requested}'. Valid profiles: {available}")]
    NotFound {
        requested: String,
        available: String,
    },

    #[error("No profile requested and no default profile configured")]
    NoDefault,
}
