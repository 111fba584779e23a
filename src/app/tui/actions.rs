use ratatui::widgets::TableState;
use tracing::debug;

use super::super::controller::{Controller, PlayerCommand};
use super::super::playback::{PlayerEvent, Playback};

pub(super) fn status_info(msg: &str) -> String {
    format!("INFO: {msg}")
}

pub(super) fn status_error(msg: &str) -> String {
    format!("ERROR: {msg}")
}

/// Points the media element at the selected video.
pub(super) fn load_selected(controller: &Controller, playback: &mut Playback) {
    let video = controller.selected();
    playback.load(video.url(), video.total_seconds());
}

/// Routes queued media events through the controller until the element is
/// quiet, reloading whenever an ended event moved the selection. Returns a
/// status message when something worth reporting happened.
pub(super) fn pump_player_events(
    controller: &mut Controller,
    playback: &mut Playback,
) -> Option<String> {
    let mut status = None;
    loop {
        let events = playback.drain_events();
        if events.is_empty() {
            break;
        }
        for event in events {
            let before = controller.selected().index();
            if let Some(PlayerCommand::Seek(seconds)) = controller.handle(event) {
                debug!(seconds, "restoring saved position");
                playback.seek(seconds);
            }
            if !matches!(event, PlayerEvent::Ended) {
                continue;
            }
            if controller.selected().index() != before {
                status = Some(status_info(&format!(
                    "Up next: {}",
                    controller.selected().title()
                )));
                load_selected(controller, playback);
                break;
            }
            status = Some(status_info("All videos watched."));
        }
    }
    status
}

/// Selects the video under the list cursor.
pub(super) fn select_at_cursor(
    controller: &mut Controller,
    playback: &mut Playback,
    table_state: &TableState,
) -> String {
    let Some(cursor) = table_state.selected() else {
        return status_error("No video under the cursor.");
    };
    let Some(url) = controller
        .state()
        .videos()
        .get(cursor)
        .map(|video| video.url().to_string())
    else {
        return status_error("Invalid selection.");
    };

    if controller.click(&url) {
        load_selected(controller, playback);
        status_info(&format!("Playing: {}", controller.selected().title()))
    } else {
        status_info("Already playing this video.")
    }
}

pub(super) fn skip_to_next(controller: &mut Controller, playback: &mut Playback) -> String {
    if controller.on_ended() {
        load_selected(controller, playback);
        status_info(&format!("Skipped to: {}", controller.selected().title()))
    } else {
        status_info("No other unfinished video.")
    }
}
