use std::env;
use std::io::Stdout;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::RodioEngine;
use crate::library::scan;
use crate::player::Player;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();
    let log_path = logging::init(&settings.log);
    if let Some(problem) = config_problem {
        if log_path.is_some() {
            warn!("{problem}; using defaults");
        } else {
            eprintln!("reprise: {problem}; using defaults");
        }
    }
    info!(log = ?log_path, "reprise starting");

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| ".".to_string())
    });

    let catalog = scan(Path::new(&dir), &settings.library);
    let engine = RodioEngine::new()?;
    let player = Player::new(engine, catalog, settings.audio.initial_volume);
    let mut app = App::new(player, settings.controls.clone(), dir);

    enable_raw_mode()?;
    let mut terminal = enter_terminal().inspect_err(|_| {
        let _ = disable_raw_mode();
    })?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("reprise exiting");
    run_result
}

/// Switch to the alternate screen and build the terminal. Raw mode must
/// already be on.
fn enter_terminal() -> std::io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    })
}
