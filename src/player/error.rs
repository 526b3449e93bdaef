//! Error types for player operations

use thiserror::Error;

use crate::audio::EngineError;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// The music directory had no playable files.
    #[error("No audio files found in the directory.")]
    EmptyCatalog,

    /// Stop or pause without an active session.
    #[error("No track currently playing.")]
    NotPlaying,

    #[error("Audio engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
