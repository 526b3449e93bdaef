//! Recording engine used by unit tests.
//!
//! Mirrors the rodio adapter's observable behavior (busy while a session is
//! playing or paused, position jumps on seek) without touching a device.

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::engine::AudioEngine;
use super::types::{EngineError, EngineEvent, Repeat};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(PathBuf),
    Play(Duration, Repeat),
    Pause,
    Resume,
    Stop,
    SetVolume(f32),
    Seek(Duration),
}

#[derive(Debug, Default)]
pub struct MockEngine {
    pub calls: Vec<Call>,
    pub busy: bool,
    pub initialized: bool,
    /// Playback time since the last play or seek, as a sink reports it.
    pub position: Duration,
    pub loaded: Option<PathBuf>,
    pub repeat: Option<Repeat>,
    pub durations: HashMap<PathBuf, Duration>,
    pub events: VecDeque<EngineEvent>,
    pub fail_load: bool,
    pub probes: Cell<usize>,
}

impl MockEngine {
    pub fn with_durations(entries: &[(&str, Duration)]) -> Self {
        Self {
            durations: entries
                .iter()
                .map(|(p, d)| (PathBuf::from(p), *d))
                .collect(),
            ..Self::default()
        }
    }

    pub fn plays(&self) -> Vec<(Duration, Repeat)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Play(start, repeat) => Some((*start, *repeat)),
                _ => None,
            })
            .collect()
    }

    /// Simulate the track running out: the session ends and one notification is queued.
    pub fn finish_track(&mut self) {
        self.busy = false;
        self.events.push_back(EngineEvent::TrackEnded);
    }
}

impl AudioEngine for MockEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        if self.fail_load {
            return Err(EngineError::Decode {
                path: path.to_path_buf(),
                reason: "unsupported codec".into(),
            });
        }
        self.calls.push(Call::Load(path.to_path_buf()));
        self.loaded = Some(path.to_path_buf());
        self.initialized = true;
        Ok(())
    }

    fn play(&mut self, start: Duration, repeat: Repeat) -> Result<(), EngineError> {
        self.calls.push(Call::Play(start, repeat));
        self.busy = true;
        self.position = start;
        self.repeat = Some(repeat);
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn resume(&mut self) {
        self.calls.push(Call::Resume);
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        self.busy = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::SetVolume(volume));
    }

    fn seek(&mut self, position: Duration) -> Result<(), EngineError> {
        self.calls.push(Call::Seek(position));
        self.position = position;
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn position(&self) -> Duration {
        let length = self
            .loaded
            .as_ref()
            .and_then(|p| self.durations.get(p).copied())
            .unwrap_or_default();
        self.repeat
            .unwrap_or(Repeat::Once)
            .position_within(self.position, length)
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }

    fn duration_of(&self, path: &Path) -> Duration {
        self.probes.set(self.probes.get() + 1);
        self.durations.get(path).copied().unwrap_or(Duration::ZERO)
    }
}
