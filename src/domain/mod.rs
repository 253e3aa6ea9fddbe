pub mod profile;
pub mod synthesis;
