use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table, TableState, Wrap,
};

use super::super::controller::Controller;
use super::super::format::{build_position_gauge, truncate};
use super::super::playback::Playback;

const ACCENT: Color = Color::Rgb(110, 170, 255);
const MUTED: Color = Color::Rgb(185, 195, 210);
const DONE: Color = Color::Rgb(140, 210, 150);

pub(super) fn draw_tui(
    frame: &mut Frame,
    controller: &Controller,
    playback: &Playback,
    table_state: &mut TableState,
    status: &str,
) {
    let bg = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let state = controller.state();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WALKTHROUGH",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("Total: {}", controller.total_time_text()),
            Style::default().fg(MUTED),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!(
                "{}/{} watched",
                state.completed_count(),
                state.videos().len()
            ),
            Style::default().fg(MUTED),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(panel_block("Walkthrough"));
    frame.render_widget(header, chunks[0]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);
    let player_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(body_chunks[1]);

    let rows: Vec<Row> = controller
        .rows()
        .into_iter()
        .map(|row| {
            let marker = if row.selected { "▶" } else { " " };
            let style = if row.selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else if row.complete {
                Style::default().fg(DONE)
            } else {
                Style::default().fg(Color::Rgb(230, 230, 230))
            };
            Row::new(vec![
                Cell::from(format!("{marker} {}", row.order)),
                Cell::from(row.title),
                Cell::from(row.progress),
                Cell::from(row.duration),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["#", "Title", "Seen", "Length"])
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
    )
    .block(panel_block("Videos"))
    .row_highlight_style(Style::default().bg(Color::Rgb(50, 60, 78)))
    .highlight_symbol("› ");
    frame.render_stateful_widget(table, body_chunks[0], table_state);

    let video = controller.selected();
    let player_state = if playback.is_ended() {
        "ENDED"
    } else if playback.is_paused() {
        "PAUSED"
    } else {
        "PLAYING"
    };
    let player_text = format!(
        "Title\n{}\n\nSource\n{}\n\nPoster\n{}\n\nWatched\n{}%\n\nState\n{}",
        truncate(video.title(), 40),
        truncate(playback.source().unwrap_or("-"), 40),
        truncate(if video.thumb().is_empty() { "-" } else { video.thumb() }, 40),
        video.progress_percent(),
        player_state,
    );
    let player = Paragraph::new(player_text)
        .style(Style::default().fg(Color::Rgb(230, 230, 230)))
        .wrap(Wrap { trim: true })
        .block(panel_block("Now Playing"));
    frame.render_widget(player, player_chunks[0]);

    let (ratio, label) = build_position_gauge(playback.position(), playback.duration());
    let position = Gauge::default()
        .block(panel_block("Position"))
        .gauge_style(
            Style::default()
                .fg(Color::Rgb(130, 190, 255))
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .label(label)
        .ratio(ratio);
    frame.render_widget(position, player_chunks[1]);

    let controls = Paragraph::new(Line::from(vec![Span::styled(
        "↑/↓ move  Enter play  Space pause  ←/→ seek 10s  n next unfinished  q quit",
        Style::default().fg(MUTED),
    )]))
    .alignment(Alignment::Center)
    .block(panel_block("Controls"));
    frame.render_widget(controls, chunks[2]);

    let status_widget = Paragraph::new(status.to_string())
        .style(status_style(status))
        .block(panel_block("Status"));
    frame.render_widget(status_widget, chunks[3]);
}

fn panel_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(125, 135, 150)))
        .title(title)
}

fn status_style(status: &str) -> Style {
    if status.starts_with("ERROR:") {
        Style::default()
            .fg(Color::Rgb(255, 145, 120))
            .add_modifier(Modifier::BOLD)
    } else if status.starts_with("INFO:") {
        Style::default().fg(Color::Rgb(205, 165, 255))
    } else {
        Style::default().fg(Color::Rgb(230, 235, 242))
    }
}
