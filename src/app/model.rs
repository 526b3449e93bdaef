//! Application model types: `App` and `Action`.
//!
//! `App` is the presentation-side wrapper around the `Player`: it turns key
//! presses into player operations and keeps the one-shot notice popup.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::audio::AudioEngine;
use crate::config::ControlsSettings;
use crate::player::{Player, PlayerError, Snapshot};

/// Everything a key press can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    PlayOrToggle,
    Pause,
    Stop,
    NextTrack,
    ToggleLoop,
    VolumeUp,
    VolumeDown,
    SeekBackward,
    SeekForward,
    /// Seek to the given percentage.
    SeekTo(u8),
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('p') | KeyCode::Enter => Some(Self::PlayOrToggle),
            KeyCode::Char(' ') => Some(Self::Pause),
            KeyCode::Char('s') => Some(Self::Stop),
            KeyCode::Char('n') => Some(Self::NextTrack),
            KeyCode::Char('r') => Some(Self::ToggleLoop),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(Self::VolumeUp),
            KeyCode::Char('-') | KeyCode::Down => Some(Self::VolumeDown),
            KeyCode::Char('h') | KeyCode::Left => Some(Self::SeekBackward),
            KeyCode::Char('l') | KeyCode::Right => Some(Self::SeekForward),
            KeyCode::Char(c @ '0'..='9') => c
                .to_digit(10)
                .map(|d| Self::SeekTo((d * 10) as u8)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The main application model.
pub struct App<E: AudioEngine> {
    pub player: Player<E>,
    pub controls: ControlsSettings,
    pub current_dir: String,
    /// Blocking message shown until the next key press.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl<E: AudioEngine> App<E> {
    pub fn new(player: Player<E>, controls: ControlsSettings, current_dir: String) -> Self {
        let mut app = Self {
            player,
            controls,
            current_dir,
            notice: None,
            should_quit: false,
        };
        if app.player.catalog().is_empty() {
            app.report(PlayerError::EmptyCatalog);
        }
        app
    }

    pub fn snapshot(&self) -> Snapshot {
        self.player.snapshot()
    }

    fn report(&mut self, err: PlayerError) {
        info!(error = %err, "notice");
        self.notice = Some(err.to_string());
    }

    /// Handle one key press. While a notice is open the key only dismisses it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.notice.take().is_some() {
            return;
        }
        if let Some(action) = Action::from_key(key) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        let snap = self.player.snapshot();
        let seek_step = self.controls.seek_step_percent;
        let volume_step = self.controls.volume_step;

        let result = match action {
            Action::PlayOrToggle => self.player.play_or_toggle(),
            Action::Pause => self.player.pause(),
            Action::Stop => self.player.stop(),
            Action::NextTrack => self.player.next_track(),
            Action::ToggleLoop => {
                self.player.toggle_loop();
                Ok(())
            }
            Action::VolumeUp => {
                self.player
                    .set_volume(snap.volume_percent.saturating_add(volume_step).min(100));
                Ok(())
            }
            Action::VolumeDown => {
                self.player
                    .set_volume(snap.volume_percent.saturating_sub(volume_step));
                Ok(())
            }
            Action::SeekBackward => self
                .player
                .on_seek_released(snap.slider_percent.saturating_sub(seek_step)),
            Action::SeekForward => self
                .player
                .on_seek_released(snap.slider_percent.saturating_add(seek_step).min(100)),
            Action::SeekTo(percent) => self.player.on_seek_released(percent),
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
        };

        if let Err(err) = result {
            self.report(err);
        }
    }

    /// Engine notifications and the poller tick, in that order.
    pub fn on_tick(&mut self, poll_due: bool) {
        if let Err(err) = self.player.drain_engine_events() {
            self.report(err);
        }
        if poll_due {
            self.player.tick();
        }
    }
}
