//! Binds media-element events and list clicks to the store and derives the
//! view model the list and player panels render.

use tracing::{debug, info};

use super::format::{format_progress, format_time, order_label};
use super::playback::PlayerEvent;
use super::state::{Action, State, Video, reduce};

/// Instructions for the media element produced in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlayerCommand {
    Seek(f64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VideoRow {
    pub(crate) order: String,
    pub(crate) title: String,
    pub(crate) progress: String,
    pub(crate) duration: String,
    pub(crate) complete: bool,
    pub(crate) selected: bool,
}

#[derive(Debug)]
pub(crate) struct Controller {
    state: State,
}

impl Controller {
    pub(crate) fn new(state: State) -> Self {
        Self { state }
    }

    pub(crate) fn state(&self) -> &State {
        &self.state
    }

    pub(crate) fn selected(&self) -> &Video {
        self.state.selected()
    }

    fn dispatch(&mut self, action: &Action) {
        self.state = reduce(&self.state, action);
    }

    /// Selects the video with `url`. Returns whether the selection changed.
    pub(crate) fn click(&mut self, url: &str) -> bool {
        let before = self.state.selected().index();
        self.dispatch(&Action::SelectVideo {
            url: url.to_string(),
        });
        let changed = self.state.selected().index() != before;
        if changed {
            info!(url, "selected video");
        }
        changed
    }

    pub(crate) fn on_loaded_data(&self) -> PlayerCommand {
        PlayerCommand::Seek(self.state.selected().seconds_watched())
    }

    pub(crate) fn on_time_update(&mut self, current_time: f64) {
        let action = Action::set_seconds_watched(self.state.selected(), current_time);
        self.dispatch(&action);
    }

    /// Advances to the next incomplete video. Returns whether the selection changed.
    pub(crate) fn on_ended(&mut self) -> bool {
        let Some(next) = self.state.next_incomplete() else {
            debug!(url = self.state.selected().url(), "ended with nothing left to watch");
            return false;
        };
        let action = Action::select(next);
        let url = next.url().to_string();
        self.dispatch(&action);
        info!(%url, "auto-advanced to next incomplete video");
        true
    }

    /// Feeds one media event into the store. Returns a command for the
    /// media element when the event calls for one.
    pub(crate) fn handle(&mut self, event: PlayerEvent) -> Option<PlayerCommand> {
        match event {
            PlayerEvent::LoadedData => Some(self.on_loaded_data()),
            PlayerEvent::TimeUpdate(current_time) => {
                self.on_time_update(current_time);
                None
            }
            PlayerEvent::Ended => {
                self.on_ended();
                None
            }
        }
    }

    pub(crate) fn rows(&self) -> Vec<VideoRow> {
        let selected_url = self.state.selected().url();
        self.state
            .videos()
            .iter()
            .map(|video| VideoRow {
                order: order_label(video.index()),
                title: video.title().to_string(),
                progress: format_progress(video),
                duration: format_time(u64::from(video.total_seconds())),
                complete: video.is_complete(),
                selected: video.url() == selected_url,
            })
            .collect()
    }

    pub(crate) fn total_time_text(&self) -> String {
        format_time(self.state.total_seconds())
    }
}
