//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{Snapshot, TransportMode};

/// Render the controls help text, incorporating the configured steps.
fn controls_text(controls: &ControlsSettings) -> String {
    [
        "[p/enter] play".to_string(),
        "[space] pause".to_string(),
        "[s] stop".to_string(),
        "[n] next".to_string(),
        "[r] loop".to_string(),
        format!("[h/l] seek -/+{}%", controls.seek_step_percent),
        "[0-9] seek to 0-90%".to_string(),
        format!("[+/-] volume {}%", controls.volume_step),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn transport_label(t: TransportMode) -> &'static str {
    match t {
        TransportMode::Stopped => "Stopped",
        TransportMode::Playing => "Playing",
        TransportMode::Paused => "Paused",
    }
}

/// Status line: status text, transport, loop flag and directory.
fn status_text(snap: &Snapshot, dir: &str) -> String {
    let loop_text = if snap.loop_enabled { "LOOP: on" } else { "LOOP: off" };
    [
        format!(" {}", snap.status_text),
        transport_label(snap.transport).to_string(),
        loop_text.to_string(),
        format!("Dir: {dir}"),
    ]
    .join(" • ")
}

fn progress_label(snap: &Snapshot) -> String {
    if snap.duration.is_zero() {
        format!("{} / --:--", format_mmss(snap.position))
    } else {
        format!(
            "{} / {} ({}%)",
            format_mmss(snap.position),
            format_mmss(snap.duration),
            snap.slider_percent
        )
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<E: AudioEngine>(frame: &mut Frame, app: &App<E>, ui_settings: &UiSettings) {
    let snap = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" reprise ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(&snap, &app.current_dir))
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Track list, highlighting the current track.
    {
        let catalog = app.player.catalog();
        let items: Vec<ListItem> = catalog.iter().map(|t| ListItem::new(t.name())).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !catalog.is_empty() {
            state.select(Some(app.player.state().current_index));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    let position_title = match &snap.track_name {
        Some(name) => format!(" {name} "),
        None => " position ".to_string(),
    };
    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(position_title))
        .percent(u16::from(snap.slider_percent.min(100)))
        .label(progress_label(&snap));
    frame.render_widget(progress, chunks[3]);

    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" volume "))
        .percent(u16::from(snap.volume_percent.min(100)))
        .label(format!("{}%", snap.volume_percent));
    frame.render_widget(volume, chunks[4]);

    let footer = Paragraph::new(controls_text(&app.controls))
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    if let Some(message) = &app.notice {
        let popup_area = centered_rect_sized(60, 5, frame.area());
        frame.render_widget(Clear, popup_area);
        let popup = Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .block(padded(" warning (any key closes) "))
            .wrap(Wrap { trim: true });
        frame.render_widget(popup, popup_area);
    }
}
