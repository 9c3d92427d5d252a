//! The frame run.
//!
//! Drives a [`GapSeries`](crate::gaps::GapSeries) for the configured number
//! of frames, reports progress, and exports the frames once every one of
//! them has been computed. A failed run writes nothing.

use std::io::Write;

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::Result;
use crate::gaps::{CancelToken, GapHistogramEngine};
use crate::primes::SieveSource;
use crate::ui::{format_duration, FrameProgress, Output};

/// Result of a run.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the run succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,

    /// Frames produced.
    pub frames: u64,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success(frames: u64) -> Self {
        Self {
            success: true,
            exit_code: 0,
            frames,
        }
    }
}

/// Computes and exports the frames described by a [`RunConfig`].
pub struct RunCommand {
    config: RunConfig,
    cancel: CancelToken,
}

impl RunCommand {
    /// Create a run for `config`, stopping early if `cancel` trips.
    pub fn new(config: RunConfig, cancel: CancelToken) -> Self {
        Self { config, cancel }
    }

    /// Execute the run.
    pub fn execute(&self, output: &Output) -> Result<CommandResult> {
        let config = &self.config;
        config.validate()?;

        let reachable = config.reachable_frames();
        if reachable < config.frames {
            output.warning(&format!(
                "Only {} of {} frames fit below max n {}",
                reachable, config.frames, config.max_n
            ));
        }
        debug!(
            ?config,
            last_prefix_len = ?config.last_prefix_len(),
            "starting run"
        );

        let max_prime = config.max_prime;
        let engine = GapHistogramEngine::new(move || SieveSource::bounded(max_prime))
            .with_cancel(self.cancel.clone());
        let series = engine.series(config.step, config.max_n)?;

        let progress = FrameProgress::new(reachable, output.mode().shows_progress());
        let mut formatter = config.format.formatter();
        let mut buffer = Vec::new();
        formatter.begin(config, &mut buffer)?;

        let limit = usize::try_from(config.frames).unwrap_or(usize::MAX);
        for frame in series.take(limit) {
            let frame = match frame {
                Ok(frame) => frame,
                Err(err) => {
                    progress.abandon();
                    return Err(err);
                }
            };
            formatter.frame(&frame, &mut buffer)?;
            progress.frame_done(&frame);
        }
        formatter.finish(&mut buffer)?;
        progress.finish();

        let frames = progress.position();
        match config.output_path() {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, &buffer)?;
                info!(path = %path.display(), frames, "wrote frames");
                output.println(&format!("Wrote {} frames to {}", frames, path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&buffer)?;
                stdout.flush()?;
            }
        }

        output.success(&format!("done in {}", format_duration(progress.elapsed())));
        Ok(CommandResult::success(frames))
    }
}
