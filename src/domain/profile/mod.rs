pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::ProfileCatalog;
pub use error::ProfileError;
pub use model::{VoiceProfile, PLACEHOLDER_VOICE_ID};
