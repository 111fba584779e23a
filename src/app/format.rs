use super::state::Video;

/// Formats a duration the way the list header shows it: `"2m 30 s"`.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds - minutes * 60;
    format!("{minutes}m {seconds} s")
}

/// Player clock, `m:ss`.
pub(crate) fn format_clock(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", whole / 60, whole % 60)
}

pub(crate) fn order_label(index: usize) -> String {
    format!("{:02}.", index + 1)
}

pub(crate) fn format_progress(video: &Video) -> String {
    format!("{}%", video.progress_percent())
}

pub(crate) fn build_position_gauge(position: f64, duration: f64) -> (f64, String) {
    let ratio = if duration > 0.0 {
        (position / duration).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (
        ratio,
        format!("{} / {}", format_clock(position), format_clock(duration)),
    )
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    let mut out = s.to_string();
    if out.chars().count() > max {
        out = out.chars().take(max.saturating_sub(3)).collect::<String>() + "...";
    }
    out
}
