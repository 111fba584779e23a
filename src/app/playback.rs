use std::collections::VecDeque;
use std::time::Duration;

use tracing::trace;

/// Events a media element reports while it plays a source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PlayerEvent {
    LoadedData,
    TimeUpdate(f64),
    Ended,
}

/// Simulated media element: a clock over one loaded source that autoplays,
/// pauses, seeks, and queues the events a real player would fire.
#[derive(Debug, Clone)]
pub(crate) struct Playback {
    source: Option<String>,
    duration: f64,
    position: f64,
    paused: bool,
    ended: bool,
    rate: f64,
    pending: VecDeque<PlayerEvent>,
}

impl Playback {
    pub(crate) fn new(rate: f64) -> Self {
        Self {
            source: None,
            duration: 0.0,
            position: 0.0,
            paused: true,
            ended: false,
            rate,
            pending: VecDeque::new(),
        }
    }

    pub(crate) fn load(&mut self, url: &str, duration_secs: u32) {
        trace!(url, duration_secs, "loading source");
        self.source = Some(url.to_string());
        self.duration = f64::from(duration_secs);
        self.position = 0.0;
        self.paused = false;
        self.ended = false;
        self.pending.clear();
        self.pending.push_back(PlayerEvent::LoadedData);
    }

    pub(crate) fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub(crate) fn position(&self) -> f64 {
        self.position
    }

    pub(crate) fn duration(&self) -> f64 {
        self.duration
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn is_ended(&self) -> bool {
        self.ended
    }

    pub(crate) fn tick(&mut self, elapsed: Duration) {
        if self.source.is_none() || self.paused || self.ended {
            return;
        }
        self.position = (self.position + elapsed.as_secs_f64() * self.rate).min(self.duration);
        self.pending.push_back(PlayerEvent::TimeUpdate(self.position));
        self.finish_if_at_end();
    }

    pub(crate) fn seek(&mut self, seconds: f64) {
        if self.source.is_none() || !seconds.is_finite() {
            return;
        }
        self.position = seconds.clamp(0.0, self.duration);
        self.ended = false;
        self.pending.push_back(PlayerEvent::TimeUpdate(self.position));
        self.finish_if_at_end();
    }

    pub(crate) fn seek_by(&mut self, delta: f64) {
        self.seek(self.position + delta);
    }

    /// Resuming an ended source restarts it from the beginning.
    pub(crate) fn toggle_pause(&mut self) {
        if self.source.is_none() {
            return;
        }
        if self.ended {
            self.ended = false;
            self.paused = false;
            self.position = 0.0;
            self.pending.push_back(PlayerEvent::TimeUpdate(0.0));
            return;
        }
        self.paused = !self.paused;
    }

    pub(crate) fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.pending.drain(..).collect()
    }

    fn finish_if_at_end(&mut self) {
        if !self.paused && !self.ended && self.position >= self.duration {
            self.ended = true;
            self.pending.push_back(PlayerEvent::Ended);
        }
    }
}
