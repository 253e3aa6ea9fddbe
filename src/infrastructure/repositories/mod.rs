pub mod elevenlabs_repository;
pub mod synthesis_repository;

pub use elevenlabs_repository::ElevenLabsRepository;
pub use synthesis_repository::SynthesisRepository;
