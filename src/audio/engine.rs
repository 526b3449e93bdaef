use std::path::Path;
use std::time::Duration;

use super::types::{EngineError, EngineEvent, Repeat};

/// Capabilities the playback state machine needs from an audio backend.
///
/// Implementations only report "busy", position and end-of-track; all the
/// transport bookkeeping lives in `player::Player`.
pub trait AudioEngine {
    /// Prepare `path` for playback. Loading the track that is already
    /// playing keeps the running session.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Start the loaded track at `start`.
    fn play(&mut self, start: Duration, repeat: Repeat) -> Result<(), EngineError>;

    fn pause(&mut self);

    fn resume(&mut self);

    fn stop(&mut self);

    /// `volume` is in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f32);

    fn seek(&mut self, position: Duration) -> Result<(), EngineError>;

    /// Whether a session is active, paused sessions included.
    fn is_busy(&self) -> bool;

    /// Whether a track has been loaded since the engine was created.
    fn is_initialized(&self) -> bool;

    fn position(&self) -> Duration;

    /// Next pending notification, if any.
    fn poll_event(&mut self) -> Option<EngineEvent>;

    /// Length of the file at `path`, or zero when unknown.
    fn duration_of(&self, path: &Path) -> Duration;
}
