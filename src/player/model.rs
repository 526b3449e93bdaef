//! Player model types: transport mode, suppression flag and the state
//! owned by `Player`.

use std::time::Duration;

/// Coarse playback state tracked by the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransportMode {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// One-shot guard layered on top of the transport mode.
///
/// At most one suppression is pending at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PendingSuppression {
    #[default]
    None,
    /// The track was just restarted after ending on its own. Pausing is
    /// ignored until the next poller tick.
    SuppressEndEvent,
    /// The user released the seek slider. The next poller tick must not
    /// overwrite the slider, and end-of-track is not acted on until then.
    SuppressPollerUpdate,
}

#[derive(Debug, Clone)]
pub struct PlaybackState {
    pub current_index: usize,
    pub transport: TransportMode,
    pub looping: bool,
    pub suppression: PendingSuppression,
    /// Last known offset, polled or set by a user seek.
    pub position: Duration,
    /// `[0.0, 1.0]`
    pub volume: f32,
    pub current_duration: Duration,
    pub slider_percent: u8,
    pub status: String,
}

impl PlaybackState {
    pub fn new(volume: f32) -> Self {
        Self {
            current_index: 0,
            transport: TransportMode::Stopped,
            looping: false,
            suppression: PendingSuppression::None,
            position: Duration::ZERO,
            volume: volume.clamp(0.0, 1.0),
            current_duration: Duration::ZERO,
            slider_percent: 0,
            status: "No file selected".to_string(),
        }
    }
}

/// Read-only projection rendered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub status_text: String,
    pub slider_percent: u8,
    pub loop_enabled: bool,
    pub volume_percent: u8,
    pub transport: TransportMode,
    pub track_name: Option<String>,
    pub position: Duration,
    pub duration: Duration,
}
