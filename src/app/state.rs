//! Playback state store: the ordered video list, the selected video, and the
//! reducer that applies [`Action`]s to produce the next [`State`].

use tracing::debug;

use crate::catalog::{CatalogError, SourceVideo, validate_catalog};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Video {
    url: String,
    title: String,
    thumb: String,
    total_seconds: u32,
    seconds_watched: f64,
    index: usize,
}

impl Video {
    fn from_source(source: &SourceVideo, index: usize) -> Self {
        Self {
            url: source.url.clone(),
            title: source.title.clone(),
            thumb: source.thumb.clone(),
            total_seconds: source
                .minutes
                .saturating_mul(60)
                .saturating_add(source.seconds),
            seconds_watched: 0.0,
            index,
        }
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn thumb(&self) -> &str {
        &self.thumb
    }

    pub(crate) fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub(crate) fn seconds_watched(&self) -> f64 {
        self.seconds_watched
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Zero-length videos count as complete.
    pub(crate) fn is_complete(&self) -> bool {
        self.seconds_watched >= f64::from(self.total_seconds)
    }

    /// Display-only percentage in `0..=100`. Zero-length videos read 100.
    pub(crate) fn progress_percent(&self) -> u32 {
        if self.total_seconds == 0 {
            return 100;
        }
        let percent = (self.seconds_watched / f64::from(self.total_seconds) * 100.0).round();
        percent.clamp(0.0, 100.0) as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    SelectVideo { url: String },
    SetSecondsWatched { url: String, seconds: f64 },
}

impl Action {
    pub(crate) fn select(video: &Video) -> Self {
        Self::SelectVideo {
            url: video.url.clone(),
        }
    }

    pub(crate) fn set_seconds_watched(video: &Video, seconds: f64) -> Self {
        Self::SetSecondsWatched {
            url: video.url.clone(),
            seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct State {
    videos: Vec<Video>,
    selected: usize,
}

impl State {
    /// Builds the initial state with nothing watched and the first video selected.
    pub(crate) fn new(sources: &[SourceVideo]) -> Result<Self, CatalogError> {
        validate_catalog(sources)?;
        let videos = sources
            .iter()
            .enumerate()
            .map(|(index, source)| Video::from_source(source, index))
            .collect();
        Ok(Self {
            videos,
            selected: 0,
        })
    }

    pub(crate) fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub(crate) fn selected(&self) -> &Video {
        &self.videos[self.selected]
    }

    fn position(&self, url: &str) -> Option<usize> {
        self.videos.iter().position(|video| video.url == url)
    }

    pub(crate) fn total_seconds(&self) -> u64 {
        self.videos
            .iter()
            .map(|video| u64::from(video.total_seconds))
            .sum()
    }

    pub(crate) fn completed_count(&self) -> usize {
        self.videos.iter().filter(|video| video.is_complete()).count()
    }

    /// First incomplete video after the selected one in list order, wrapping
    /// around and never returning the selected video itself.
    pub(crate) fn next_incomplete(&self) -> Option<&Video> {
        let len = self.videos.len();
        (1..len)
            .map(|offset| &self.videos[(self.selected + offset) % len])
            .find(|video| !video.is_complete())
    }
}

pub(crate) fn reduce(state: &State, action: &Action) -> State {
    match action {
        Action::SelectVideo { url } => match state.position(url) {
            Some(idx) if idx == state.selected => state.clone(),
            Some(idx) => State {
                selected: idx,
                ..state.clone()
            },
            None => {
                debug!(%url, "ignoring selection of unknown video");
                state.clone()
            }
        },
        Action::SetSecondsWatched { url, seconds } => {
            if !seconds.is_finite() {
                debug!(%url, seconds, "ignoring non-finite watch time");
                return state.clone();
            }
            if state.position(url).is_none() {
                debug!(%url, "ignoring watch time for unknown video");
                return state.clone();
            }
            State {
                videos: state
                    .videos
                    .iter()
                    .map(|video| {
                        if video.url != *url {
                            return video.clone();
                        }
                        Video {
                            seconds_watched: video.seconds_watched.max(*seconds),
                            ..video.clone()
                        }
                    })
                    .collect(),
                selected: state.selected,
            }
        }
    }
}
