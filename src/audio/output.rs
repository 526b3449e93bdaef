use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::library::probe_duration;

use super::engine::AudioEngine;
use super::sink::{create_sink, ensure_readable};
use super::types::{EngineError, EngineEvent, Repeat};

/// Lifecycle of the current sink as seen by the adapter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Session {
    Idle,
    Playing,
    Paused,
    /// Ran out of samples; the end notification has been handed out.
    Ended,
}

impl Session {
    pub(super) fn is_busy(self, sink_empty: bool) -> bool {
        matches!(self, Session::Playing | Session::Paused) && !sink_empty
    }

    /// A playing session whose sink drained on its own.
    pub(super) fn just_finished(self, sink_empty: bool) -> bool {
        self == Session::Playing && sink_empty
    }
}

/// `AudioEngine` backed by the default `rodio` output device.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
    session: Session,
    volume: f32,
    repeat: Repeat,
    /// Loop length of the current sink; zero when not looping or unknown.
    loop_len: Duration,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::NoOutputDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            session: Session::Idle,
            volume: 1.0,
            repeat: Repeat::Once,
            loop_len: Duration::ZERO,
        })
    }

    fn sink_empty(&self) -> bool {
        self.sink.as_ref().is_none_or(Sink::empty)
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        if self.loaded.as_deref() == Some(path) && self.is_busy() {
            debug!(path = %path.display(), "track already active, keeping session");
            return Ok(());
        }

        ensure_readable(path)?;
        self.drop_sink();
        self.loaded = Some(path.to_path_buf());
        self.session = Session::Idle;
        debug!(path = %path.display(), "track loaded");
        Ok(())
    }

    fn play(&mut self, start: Duration, repeat: Repeat) -> Result<(), EngineError> {
        let path = self.loaded.clone().ok_or(EngineError::NothingLoaded)?;
        self.drop_sink();

        let sink = create_sink(&self.stream, &path, repeat)?;
        sink.set_volume(self.volume);
        sink.play();
        if !start.is_zero() {
            if let Err(err) = sink.try_seek(start) {
                warn!(path = %path.display(), ?start, error = %err, "start offset not applied");
            }
        }

        // `get_pos` keeps counting across `repeat_infinite` wraps.
        self.loop_len = match repeat {
            Repeat::Forever => probe_duration(&path).unwrap_or_default(),
            Repeat::Once => Duration::ZERO,
        };
        self.repeat = repeat;
        self.sink = Some(sink);
        self.session = Session::Playing;
        debug!(path = %path.display(), ?start, ?repeat, "playback started");
        Ok(())
    }

    fn pause(&mut self) {
        if let (Some(s), Session::Playing) = (self.sink.as_ref(), self.session) {
            s.pause();
            self.session = Session::Paused;
        }
    }

    fn resume(&mut self) {
        if let (Some(s), Session::Paused) = (self.sink.as_ref(), self.session) {
            s.play();
            self.session = Session::Playing;
        }
    }

    fn stop(&mut self) {
        self.drop_sink();
        self.session = Session::Idle;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(self.volume);
        }
    }

    fn seek(&mut self, position: Duration) -> Result<(), EngineError> {
        let sink = self.sink.as_ref().ok_or(EngineError::NothingLoaded)?;
        sink.try_seek(position)
            .map_err(|e| EngineError::Seek(e.to_string()))
    }

    fn is_busy(&self) -> bool {
        self.session.is_busy(self.sink_empty())
    }

    fn is_initialized(&self) -> bool {
        self.loaded.is_some()
    }

    fn position(&self) -> Duration {
        let elapsed = self.sink.as_ref().map_or(Duration::ZERO, Sink::get_pos);
        self.repeat.position_within(elapsed, self.loop_len)
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        if self.session.just_finished(self.sink_empty()) {
            self.session = Session::Ended;
            return Some(EngineEvent::TrackEnded);
        }
        None
    }

    fn duration_of(&self, path: &Path) -> Duration {
        probe_duration(path).unwrap_or_else(|| {
            warn!(path = %path.display(), "unknown track duration");
            Duration::ZERO
        })
    }
}
