use crate::domain::profile::{ProfileCatalog, ProfileError, VoiceProfile};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_POINTER_FILE: &str = "default_profile.txt";
const PROFILE_EXTENSION: &str = "json";

/// Load every profile JSON file in `dir` into a catalog.
///
/// Each file's name without extension is its catalog key, and the embedded
/// `profileId` must match it. Any malformed or inconsistent file is fatal;
/// a partial catalog would only produce a confusing error later.
pub fn load_all(dir: &Path) -> Result<ProfileCatalog, ProfileError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ProfileError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .map(|ext| ext == PROFILE_EXTENSION)
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ProfileError::NoProfiles(dir.to_path_buf()));
    }

    let mut profiles = BTreeMap::new();
    for path in files {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let contents = std::fs::read_to_string(&path).map_err(|source| ProfileError::Io {
            path: path.clone(),
            source,
        })?;

        let profile: VoiceProfile = serde_json::from_str(&contents).map_err(|source| {
            ProfileError::InvalidProfileFormat {
                path: path.clone(),
                source,
            }
        })?;

        if profile.profile_id != stem {
            return Err(ProfileError::IdentityMismatch {
                file: path,
                declared: profile.profile_id,
                expected: stem,
            });
        }

        profiles.insert(stem, profile);
    }

    let default_profile = read_default_pointer(dir)?;

    tracing::debug!(
        profile_count = profiles.len(),
        default = ?default_profile,
        "Voice profile catalog loaded"
    );

    Ok(ProfileCatalog::new(profiles, default_profile))
}

/// Read the optional default-profile pointer file. A missing or empty file
/// means "no default", which is a valid state.
fn read_default_pointer(dir: &Path) -> Result<Option<String>, ProfileError> {
    let path = dir.join(DEFAULT_POINTER_FILE);
    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            let name = contents.trim();
            Ok((!name.is_empty()).then(|| name.to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ProfileError::Io { path, source }),
    }
}
