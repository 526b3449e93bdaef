use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::audio::mock::{Call, MockEngine};
use crate::config::ControlsSettings;
use crate::library::{Catalog, Track};
use crate::player::{Player, TransportMode};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(n: usize) -> App<MockEngine> {
    let tracks = (0..n)
        .map(|i| Track::new(format!("/music/{i}.mp3")))
        .collect();
    let mut engine = MockEngine::default();
    for i in 0..n {
        engine
            .durations
            .insert(format!("/music/{i}.mp3").into(), Duration::from_secs(100));
    }
    let player = Player::new(engine, Catalog::new(tracks), 50);
    App::new(player, ControlsSettings::default(), "/music".into())
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(Action::from_key(key(KeyCode::Char('p'))), Some(Action::PlayOrToggle));
    assert_eq!(Action::from_key(key(KeyCode::Char(' '))), Some(Action::Pause));
    assert_eq!(Action::from_key(key(KeyCode::Char('s'))), Some(Action::Stop));
    assert_eq!(Action::from_key(key(KeyCode::Char('n'))), Some(Action::NextTrack));
    assert_eq!(Action::from_key(key(KeyCode::Char('r'))), Some(Action::ToggleLoop));
    assert_eq!(Action::from_key(key(KeyCode::Char('+'))), Some(Action::VolumeUp));
    assert_eq!(Action::from_key(key(KeyCode::Char('-'))), Some(Action::VolumeDown));
    assert_eq!(Action::from_key(key(KeyCode::Char('h'))), Some(Action::SeekBackward));
    assert_eq!(Action::from_key(key(KeyCode::Char('l'))), Some(Action::SeekForward));
    assert_eq!(Action::from_key(key(KeyCode::Char('7'))), Some(Action::SeekTo(70)));
    assert_eq!(Action::from_key(key(KeyCode::Char('q'))), Some(Action::Quit));
    assert_eq!(
        Action::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
    assert_eq!(Action::from_key(key(KeyCode::Char('x'))), None);
}

#[test]
fn empty_directory_opens_a_notice_at_startup() {
    let app = app_with(0);
    assert_eq!(
        app.notice.as_deref(),
        Some("No audio files found in the directory.")
    );
}

#[test]
fn notice_swallows_the_dismissing_key() {
    let mut app = app_with(1);
    app.handle_key(key(KeyCode::Char('s')));
    assert_eq!(app.notice.as_deref(), Some("No track currently playing."));

    // This `p` only closes the popup.
    app.handle_key(key(KeyCode::Char('p')));
    assert!(app.notice.is_none());
    assert_eq!(app.snapshot().transport, TransportMode::Stopped);

    app.handle_key(key(KeyCode::Char('p')));
    assert_eq!(app.snapshot().transport, TransportMode::Playing);
}

#[test]
fn volume_keys_step_and_clamp() {
    let mut app = app_with(1);
    app.apply(Action::VolumeUp);
    assert_eq!(app.snapshot().volume_percent, 55);

    for _ in 0..20 {
        app.apply(Action::VolumeUp);
    }
    assert_eq!(app.snapshot().volume_percent, 100);

    for _ in 0..30 {
        app.apply(Action::VolumeDown);
    }
    assert_eq!(app.snapshot().volume_percent, 0);
}

#[test]
fn seek_keys_move_from_the_displayed_slider() {
    let mut app = app_with(1);
    app.apply(Action::PlayOrToggle);
    app.apply(Action::SeekTo(40));
    assert_eq!(app.snapshot().slider_percent, 40);

    app.apply(Action::SeekForward);
    assert_eq!(app.snapshot().slider_percent, 45);
    assert_eq!(
        app.player.engine().calls.last(),
        Some(&Call::Seek(Duration::from_secs(45)))
    );

    app.apply(Action::SeekTo(0));
    app.apply(Action::SeekBackward);
    assert_eq!(app.snapshot().slider_percent, 0);
}

#[test]
fn on_tick_dispatches_track_end_before_polling() {
    let mut app = app_with(1);
    app.apply(Action::PlayOrToggle);
    app.player.engine_mut().finish_track();

    app.on_tick(true);
    // Restarted, and the end-of-track guard already expired with this tick.
    assert_eq!(app.player.engine().plays().len(), 2);
    assert_eq!(app.snapshot().transport, TransportMode::Playing);
}

#[test]
fn quit_sets_flag() {
    let mut app = app_with(1);
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
