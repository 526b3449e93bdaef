use std::time::Duration;

use tracing::{debug, info, warn};

use crate::audio::{AudioEngine, EngineEvent, Repeat};
use crate::library::Catalog;

use super::error::{PlayerError, Result};
use super::model::{PendingSuppression, PlaybackState, Snapshot, TransportMode};

fn loop_status(looping: bool) -> &'static str {
    if looping { "Loop enabled" } else { "Loop disabled" }
}

/// Slider value for `position` within a track of length `duration`.
///
/// `None` when the duration is unknown.
pub(crate) fn progress_percent(position: Duration, duration: Duration) -> Option<u8> {
    if duration.is_zero() {
        return None;
    }
    let percent = (position.as_millis() * 100 / duration.as_millis()).min(100);
    Some(percent as u8)
}

/// Offset reached by releasing the slider at `percent`.
pub(crate) fn seek_target(duration: Duration, percent: u8) -> Duration {
    let ms = duration.as_millis() * u128::from(percent.min(100)) / 100;
    Duration::from_millis(ms as u64)
}

/// Playback state machine.
///
/// Owns the catalog, the engine and the `PlaybackState`; every mutation goes
/// through the methods below, one event at a time.
pub struct Player<E: AudioEngine> {
    engine: E,
    catalog: Catalog,
    state: PlaybackState,
}

impl<E: AudioEngine> Player<E> {
    /// `volume_percent` is clamped to 100 and sent to the engine right away.
    pub fn new(engine: E, catalog: Catalog, volume_percent: u8) -> Self {
        let volume = f32::from(volume_percent.min(100)) / 100.0;
        let mut player = Self {
            engine,
            catalog,
            state: PlaybackState::new(volume),
        };
        player.engine.set_volume(player.state.volume);
        player
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status_text: self.state.status.clone(),
            slider_percent: self.state.slider_percent,
            loop_enabled: self.state.looping,
            volume_percent: (self.state.volume * 100.0).round() as u8,
            transport: self.state.transport,
            track_name: self.catalog.get(self.state.current_index).map(|t| t.name()),
            position: self.state.position,
            duration: self.state.current_duration,
        }
    }

    fn current_name(&self) -> String {
        self.catalog
            .get(self.state.current_index)
            .map(|t| t.name())
            .unwrap_or_default()
    }

    /// Load the current track into the engine and refresh its cached duration.
    fn load_current(&mut self) -> Result<()> {
        let index = self.state.current_index;
        let Some(track) = self.catalog.get(index) else {
            return Err(PlayerError::EmptyCatalog);
        };
        let path = track.path.clone();
        self.engine.load(&path)?;

        let engine = &self.engine;
        self.state.current_duration = self
            .catalog
            .resolve_duration(index, |p| engine.duration_of(p))
            .unwrap_or_default();
        Ok(())
    }

    fn clear_end_suppression(&mut self) {
        if self.state.suppression == PendingSuppression::SuppressEndEvent {
            self.state.suppression = PendingSuppression::None;
        }
    }

    /// The overloaded "play" control.
    ///
    /// An idle engine starts from the remembered position. A busy engine is
    /// either resumed (when paused) or restarted at the remembered position;
    /// that path leaves the loop state as the status line.
    pub fn play_or_toggle(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            warn!("play requested with an empty catalog");
            return Err(PlayerError::EmptyCatalog);
        }

        self.load_current()?;
        let name = self.current_name();

        if !self.engine.is_busy() {
            self.engine.play(self.state.position, Repeat::Once)?;
            self.state.transport = TransportMode::Playing;
            self.clear_end_suppression();
            self.state.status = format!("Playing: {name}");
            debug!(track = %name, start = ?self.state.position, "fresh start");
            return Ok(());
        }

        if self.state.transport == TransportMode::Paused {
            self.engine.resume();
            debug!(track = %name, "resumed");
        } else {
            self.engine.seek(self.state.position)?;
            self.engine.play(self.state.position, Repeat::Once)?;
            debug!(track = %name, start = ?self.state.position, "restarted in place");
        }
        self.state.transport = TransportMode::Playing;
        self.clear_end_suppression();
        self.state.status = loop_status(self.state.looping).to_string();
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        if !self.engine.is_busy() {
            return Err(PlayerError::NotPlaying);
        }
        if self.state.transport != TransportMode::Playing {
            return Ok(());
        }
        if self.state.suppression == PendingSuppression::SuppressEndEvent {
            debug!("pause ignored: track restarted this cycle");
            return Ok(());
        }

        self.engine.pause();
        self.state.transport = TransportMode::Paused;
        self.state.status = "Paused".to_string();
        debug!(position = ?self.engine.position(), "paused");
        Ok(())
    }

    /// Stop playback. The remembered position is kept for the next play.
    pub fn stop(&mut self) -> Result<()> {
        if !(self.engine.is_initialized() && self.engine.is_busy()) {
            return Err(PlayerError::NotPlaying);
        }
        self.engine.stop();
        self.state.transport = TransportMode::Stopped;
        self.state.status = "Stopped".to_string();
        debug!(position = ?self.state.position, "stopped");
        Ok(())
    }

    /// Advance circularly and start the next track from its beginning.
    pub fn next_track(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(PlayerError::EmptyCatalog);
        }
        self.state.current_index = (self.state.current_index + 1) % self.catalog.len();
        if self.engine.is_busy() {
            self.engine.stop();
        }

        self.load_current()?;
        self.engine
            .play(Duration::ZERO, Repeat::from_looping(self.state.looping))?;

        let name = self.current_name();
        self.state.transport = TransportMode::Playing;
        self.state.position = Duration::ZERO;
        self.state.slider_percent = 0;
        self.state.status = format!("New track selected: {name}");
        info!(index = self.state.current_index, track = %name, "track changed");
        Ok(())
    }

    pub fn toggle_loop(&mut self) {
        self.state.looping = !self.state.looping;
        self.state.status = loop_status(self.state.looping).to_string();
        debug!(looping = self.state.looping, "loop toggled");
    }

    /// `percent` above 100 is treated as 100.
    pub fn set_volume(&mut self, percent: u8) {
        self.state.volume = f32::from(percent.min(100)) / 100.0;
        self.engine.set_volume(self.state.volume);
    }

    /// React to the engine's end-of-track notification by restarting the track.
    pub fn on_track_ended(&mut self) -> Result<()> {
        if self.state.suppression == PendingSuppression::SuppressPollerUpdate {
            debug!("track ended during a user seek; not restarting");
            return Ok(());
        }

        self.engine
            .play(Duration::ZERO, Repeat::from_looping(self.state.looping))?;
        self.state.suppression = PendingSuppression::SuppressEndEvent;
        self.state.transport = TransportMode::Playing;
        self.state.position = Duration::ZERO;
        self.state.slider_percent = 0;
        debug!(looping = self.state.looping, "track ended, restarted");
        Ok(())
    }

    /// Seek to `percent` of the current track. Ignored when nothing is playing.
    pub fn on_seek_released(&mut self, percent: u8) -> Result<()> {
        if !self.engine.is_busy() {
            return Ok(());
        }
        let percent = percent.min(100);
        let target = seek_target(self.state.current_duration, percent);
        self.engine.seek(target)?;

        self.state.position = target;
        self.state.slider_percent = percent;
        self.state.suppression = PendingSuppression::SuppressPollerUpdate;
        debug!(?target, percent, "user seek");
        Ok(())
    }

    /// Dispatch every pending engine notification.
    pub fn drain_engine_events(&mut self) -> Result<()> {
        while let Some(event) = self.engine.poll_event() {
            match event {
                EngineEvent::TrackEnded => self.on_track_ended()?,
            }
        }
        Ok(())
    }

    /// Progress poller tick: refresh position and slider from the engine.
    pub fn tick(&mut self) {
        if !self.engine.is_busy() {
            return;
        }

        match self.state.suppression {
            PendingSuppression::SuppressPollerUpdate => {
                self.state.suppression = PendingSuppression::None;
                return;
            }
            PendingSuppression::SuppressEndEvent => {
                self.state.suppression = PendingSuppression::None;
            }
            PendingSuppression::None => {}
        }

        self.state.position = self.engine.position();
        if let Some(percent) = progress_percent(self.state.position, self.state.current_duration) {
            self.state.slider_percent = percent;
        }
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
