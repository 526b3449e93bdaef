//! Audio-related small types.
//!
//! This module defines the enums and error type shared by every
//! `AudioEngine` implementation.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// How many times a started track is played.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Repeat {
    /// Play to the end once.
    Once,
    /// Restart from the beginning forever.
    Forever,
}

impl Repeat {
    pub fn from_looping(looping: bool) -> Self {
        if looping { Self::Forever } else { Self::Once }
    }

    /// Offset into the track after `elapsed` of playback.
    ///
    /// A looping track wraps every `length`; a zero `length` means unknown
    /// and leaves `elapsed` untouched.
    pub fn position_within(self, elapsed: Duration, length: Duration) -> Duration {
        match self {
            Self::Forever if !length.is_zero() => {
                Duration::from_nanos((elapsed.as_nanos() % length.as_nanos()) as u64)
            }
            _ => elapsed,
        }
    }
}

/// Notifications produced by the engine, each reported exactly once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The current track reached its natural end.
    TrackEnded,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("seek failed: {0}")]
    Seek(String),

    #[error("no track loaded")]
    NothingLoaded,
}
