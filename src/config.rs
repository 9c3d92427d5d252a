//! Run configuration.
//!
//! [`RunConfig`] is the validated form of the command-line options: how
//! many frames to produce, the prefix step between them, and the ceilings
//! that bound the computation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{GapError, Result};
use crate::export::{label, ExportFormat};

/// Default number of frames.
pub const DEFAULT_FRAMES: u64 = 100;

/// Default prefix step between frames.
pub const DEFAULT_STEP: u64 = 1000;

/// Default ceiling on prefix length: as many gaps as is practical to count.
pub const DEFAULT_MAX_N: u64 = 1_000_000_000_000;

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    /// Number of frames to produce.
    pub frames: u64,
    /// Prefix length added per frame.
    pub step: u64,
    /// Upper bound on prefix length.
    pub max_n: u64,
    /// Upper bound on prime magnitude, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prime: Option<u64>,
    #[serde(skip)]
    pub format: ExportFormat,
    #[serde(skip)]
    pub output: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            step: DEFAULT_STEP,
            max_n: DEFAULT_MAX_N,
            max_prime: None,
            format: ExportFormat::default(),
            output: None,
        }
    }
}

impl RunConfig {
    /// Reject settings that cannot produce a run.
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(GapError::invalid("frames must be at least 1"));
        }
        if self.step == 0 {
            return Err(GapError::invalid("step must be at least 1"));
        }
        if let Some(max_prime) = self.max_prime {
            if max_prime < 2 {
                return Err(GapError::invalid(format!(
                    "max prime must be at least 2, got {}",
                    max_prime
                )));
            }
        }
        Ok(())
    }

    /// Prefix length of the last requested frame, if it fits in a `u64`.
    pub fn last_prefix_len(&self) -> Option<u64> {
        (self.frames - 1).checked_mul(self.step)
    }

    /// Frames that fit below `max_n`, at most `frames`.
    pub fn reachable_frames(&self) -> u64 {
        (self.max_n / self.step).saturating_add(1).min(self.frames)
    }

    /// Where the export is written, or `None` for stdout-only formats.
    pub fn output_path(&self) -> Option<PathBuf> {
        let extension = self.format.extension()?;
        Some(
            self.output
                .clone()
                .unwrap_or_else(|| label::output_file_name(self.frames, self.step, extension).into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RunConfig::default();
        assert_eq!(config.frames, 100);
        assert_eq!(config.step, 1000);
        assert_eq!(config.max_n, 1_000_000_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_frames_rejected() {
        let config = RunConfig {
            frames: 0,
            ..RunConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GapError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn zero_step_rejected() {
        let config = RunConfig {
            step: 0,
            ..RunConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("step"));
    }

    #[test]
    fn tiny_prime_ceiling_rejected() {
        let config = RunConfig {
            max_prime: Some(1),
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_output_path_encodes_frames_and_step() {
        let config = RunConfig {
            frames: 20,
            step: 50,
            ..RunConfig::default()
        };
        assert_eq!(
            config.output_path(),
            Some(PathBuf::from("gap_20frames_50i.json"))
        );
    }

    #[test]
    fn explicit_output_wins() {
        let config = RunConfig {
            output: Some(PathBuf::from("out/frames.json")),
            ..RunConfig::default()
        };
        assert_eq!(config.output_path(), Some(PathBuf::from("out/frames.json")));
    }

    #[test]
    fn human_format_has_no_file() {
        let config = RunConfig {
            format: ExportFormat::Human,
            ..RunConfig::default()
        };
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn reachable_frames_respects_max_n() {
        let config = RunConfig {
            frames: 10,
            step: 100,
            max_n: 450,
            ..RunConfig::default()
        };
        assert_eq!(config.reachable_frames(), 5);
        assert_eq!(config.last_prefix_len(), Some(900));
    }

    #[test]
    fn serializes_run_header() {
        let json = serde_json::to_value(RunConfig::default()).unwrap();
        assert_eq!(json["frames"], 100);
        assert_eq!(json["step"], 1000);
        assert!(json.get("max_prime").is_none());
        assert!(json.get("format").is_none());
    }
}
