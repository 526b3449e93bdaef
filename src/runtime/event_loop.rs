use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config;
use crate::poller::Poller;
use crate::ui;

/// Upper bound on input waits, so engine notifications are noticed promptly
/// even with a slow poller.
const ENGINE_CHECK: Duration = Duration::from_millis(100);

/// Main terminal event loop: dispatches engine notifications, poller ticks and
/// key presses one at a time, then redraws. Returns `Ok(())` when quit is requested.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut poller = Poller::new(
        Duration::from_millis(settings.poller.interval_ms),
        Instant::now(),
    );
    debug!(interval = ?poller.interval(), "progress poller started");

    while !app.should_quit {
        let due = poller.due(Instant::now());
        app.on_tick(due);

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        let timeout = poller.time_until_due(Instant::now()).min(ENGINE_CHECK);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
