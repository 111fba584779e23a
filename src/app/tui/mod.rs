mod actions;
mod render;
mod session;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::TableState;
use tracing::info;

use super::controller::Controller;
use super::playback::Playback;

use self::actions::{
    load_selected, pump_player_events, select_at_cursor, skip_to_next, status_info,
};
use self::render::draw_tui;
use self::session::TuiSession;

const SEEK_STEP_SECS: f64 = 10.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(200);

pub(crate) fn run_tui(controller: &mut Controller, rate: f64) -> Result<()> {
    let mut session = TuiSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to initialize terminal backend")?;
    terminal.clear()?;

    let mut table_state = TableState::default();
    table_state.select(Some(controller.selected().index()));
    let mut playback = Playback::new(rate);
    load_selected(controller, &mut playback);
    let mut status = status_info("Ready.");
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        playback.tick(now.duration_since(last_tick));
        last_tick = now;
        if let Some(message) = pump_player_events(controller, &mut playback) {
            table_state.select(Some(controller.selected().index()));
            status = message;
        }

        terminal.draw(|frame| draw_tui(frame, controller, &playback, &mut table_state, &status))?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Up => {
                if let Some(cursor) = table_state.selected() {
                    table_state.select(Some(cursor.saturating_sub(1)));
                }
            }
            KeyCode::Down => {
                if let Some(cursor) = table_state.selected() {
                    let last = controller.state().videos().len().saturating_sub(1);
                    table_state.select(Some((cursor + 1).min(last)));
                }
            }
            KeyCode::Enter => {
                status = select_at_cursor(controller, &mut playback, &table_state);
            }
            KeyCode::Char(' ') => {
                playback.toggle_pause();
                status = if playback.is_paused() {
                    status_info("Paused.")
                } else {
                    status_info("Playing.")
                };
            }
            KeyCode::Left => playback.seek_by(-SEEK_STEP_SECS),
            KeyCode::Right => playback.seek_by(SEEK_STEP_SECS),
            KeyCode::Char('n') => {
                status = skip_to_next(controller, &mut playback);
                table_state.select(Some(controller.selected().index()));
            }
            _ => {}
        }
    }

    info!(
        watched = controller.state().completed_count(),
        total = controller.state().videos().len(),
        "closing player"
    );
    terminal.show_cursor()?;
    session.leave()?;
    Ok(())
}
