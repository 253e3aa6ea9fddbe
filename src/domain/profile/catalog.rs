use super::error::ProfileError;
use super::model::VoiceProfile;
use std::collections::BTreeMap;

/// All loaded voice profiles plus the configured default profile name.
///
/// Invariant: every key equals the `profile_id` of its value; the store
/// enforces this at load time. A default name pointing at a missing key is
/// surfaced as a resolution error, never silently repaired.
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    profiles: BTreeMap<String, VoiceProfile>,
    default_profile: Option<String>,
}

impl ProfileCatalog {
    pub fn new(profiles: BTreeMap<String, VoiceProfile>, default_profile: Option<String>) -> Self {
        Self {
            profiles,
            default_profile,
        }
    }

    /// Resolve a requested profile name, falling back to the default
    /// profile when no name is given.
    pub fn resolve(&self, requested: Option<&str>) -> Result<&VoiceProfile, ProfileError> {
        let name = match requested {
            Some(name) => name,
            None => self
                .default_profile
                .as_deref()
                .ok_or(ProfileError::NoDefault)?,
        };

        self.profiles
            .get(name)
            .ok_or_else(|| ProfileError::NotFound {
                requested: name.to_string(),
                available: self.list_names().join(", "),
            })
    }

    /// Profile names in lexicographic order.
    pub fn list_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn default_profile(&self) -> Option<&str> {
        self.default_profile.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VoiceProfile)> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(id: &str) -> VoiceProfile {
        VoiceProfile {
            profile_id: id.to_string(),
            voice_id: format!("voice-{id}"),
            model_id: "eleven_multilingual_v2".to_string(),
            stability: 0.5,
            similarity_boost: 0.5,
            style_exaggeration: 0.0,
            speed: 1.0,
        }
    }

    fn catalog(names: &[&str], default_profile: Option<&str>) -> ProfileCatalog {
        let profiles = names
            .iter()
            .map(|name| (name.to_string(), profile(name)))
            .collect();
        ProfileCatalog::new(profiles, default_profile.map(String::from))
    }

    #[test]
    fn it_should_resolve_an_explicitly_requested_profile() {
        let catalog = catalog(&["sim1", "sim2"], None);
        let resolved = catalog.resolve(Some("sim2")).unwrap();
        assert_eq!(resolved.profile_id, "sim2");
    }

    #[test]
    fn it_should_fail_for_an_unknown_profile_listing_valid_names() {
        let catalog = catalog(&["sim1", "sim2"], None);
        let err = catalog.resolve(Some("missing")).unwrap_err();
        match err {
            ProfileError::NotFound {
                requested,
                available,
            } => {
                assert_eq!(requested, "missing");
                assert_eq!(available, "sim1, sim2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn it_should_resolve_the_default_profile_when_no_name_given() {
        let catalog = catalog(&["sim1", "sim2"], Some("sim1"));
        let resolved = catalog.resolve(None).unwrap();
        assert_eq!(resolved.profile_id, "sim1");
    }

    #[test]
    fn it_should_fail_when_no_default_is_configured() {
        let catalog = catalog(&["sim1"], None);
        let err = catalog.resolve(None).unwrap_err();
        assert!(matches!(err, ProfileError::NoDefault));
    }

    #[test]
    fn it_should_surface_a_default_pointing_at_a_missing_profile() {
        let catalog = catalog(&["sim1"], Some("gone"));
        let err = catalog.resolve(None).unwrap_err();
        assert!(matches!(err, ProfileError::NotFound { .. }));
    }

    #[test]
    fn it_should_list_names_in_lexicographic_order() {
        let catalog = catalog(&["zeta", "alpha", "mid"], None);
        assert_eq!(catalog.list_names(), vec!["alpha", "mid", "zeta"]);
    }
}
