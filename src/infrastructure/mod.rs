pub mod config;
pub mod output;
pub mod playback;
pub mod repositories;
pub mod store;
