//! Frame progress display.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::export::label;
use crate::gaps::Frame;

/// Progress bar advanced once per produced frame.
pub struct FrameProgress {
    bar: ProgressBar,
    total: u64,
    start_time: Instant,
}

impl FrameProgress {
    /// Create a progress display for `total` frames.
    pub fn new(total: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.magenta} [{bar:30.magenta/dim}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );

        Self {
            bar,
            total,
            start_time: Instant::now(),
        }
    }

    /// Create without a visible bar (for quiet mode).
    pub fn hidden(total: u64) -> Self {
        Self::new(total, false)
    }

    /// Record that `frame` has been produced.
    pub fn frame_done(&self, frame: &Frame) {
        let percent = label::progress_percent(frame.index, self.total);
        debug!("{}%", percent);
        self.bar.set_message(format!(
            "{} ({:.0}%)",
            label::frame_title(frame.prefix_len),
            percent
        ));
        self.bar.inc(1);
    }

    /// Frames recorded so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar after a complete run.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Leave the bar where it stopped after a failed run.
    pub fn abandon(&self) {
        self.bar.abandon();
    }

    /// Get elapsed duration.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}
