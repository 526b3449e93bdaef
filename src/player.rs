//! Playback state machine.
//!
//! `Player` reconciles user intent with what the audio engine reports
//! (busy, position, end of track). The UI reads a `Snapshot` and calls the
//! operations; nothing else mutates playback state.

mod error;
mod machine;
mod model;

pub use error::PlayerError;
pub use machine::Player;
pub use model::{PendingSuppression, PlaybackState, Snapshot, TransportMode};
