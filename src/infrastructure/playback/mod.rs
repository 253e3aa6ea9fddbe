use std::path::Path;
use std::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("No supported audio player found (tried afplay, ffplay, aplay, paplay)")]
    NoPlayerAvailable,

    #[error("Audio player '{player}' exited with {status}")]
    PlayerFailed {
        player: String,
        status: std::process::ExitStatus,
    },

    #[error("Failed to run audio player '{player}': {source}")]
    Io {
        player: String,
        #[source]
        source: std::io::Error,
    },
}

const PLAYERS: [(&str, &[&str]); 4] = [
    ("afplay", &[]),
    ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "error"]),
    ("aplay", &[]),
    ("paplay", &[]),
];

/// Play an audio file with the first available OS player, blocking until
/// playback finishes. Callers treat any error here as a warning; playback
/// is a convenience on top of the synthesis pipeline, not part of it.
pub fn play_file(path: &Path) -> Result<(), PlaybackError> {
    for (player, args) in PLAYERS {
        match Command::new(player).args(args).arg(path).status() {
            Ok(status) if status.success() => {
                tracing::debug!(player, path = %path.display(), "Playback completed");
                return Ok(());
            }
            Ok(status) => {
                return Err(PlaybackError::PlayerFailed {
                    player: player.to_string(),
                    status,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(PlaybackError::Io {
                    player: player.to_string(),
                    source,
                })
            }
        }
    }
    Err(PlaybackError::NoPlayerAvailable)
}
