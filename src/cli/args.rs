//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{RunConfig, DEFAULT_FRAMES, DEFAULT_MAX_N, DEFAULT_STEP};
use crate::error::Result;
use crate::export::ExportFormat;

/// Histograms of prime gaps over growing prefixes of the primes.
///
/// The number of gaps taken into account for frame k is k * i.
#[derive(Debug, Parser)]
#[command(name = "prime-gaps")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Number of frames to produce
    #[arg(long, default_value_t = DEFAULT_FRAMES, env = "PRIME_GAPS_FRAMES")]
    pub frames: u64,

    /// Prime iteration step: gaps added per frame
    #[arg(
        long = "i",
        visible_alias = "step",
        value_name = "STEP",
        default_value_t = DEFAULT_STEP,
        env = "PRIME_GAPS_STEP"
    )]
    pub step: u64,

    /// Upper bound on the number of gaps counted
    #[arg(long, default_value_t = DEFAULT_MAX_N, env = "PRIME_GAPS_MAX_N")]
    pub max_n: u64,

    /// Upper bound on the primes generated
    #[arg(long, env = "PRIME_GAPS_MAX_PRIME")]
    pub max_prime: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output file (defaults to gap_<frames>frames_<step>i.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validated run configuration for these arguments.
    pub fn run_config(&self) -> Result<RunConfig> {
        let config = RunConfig {
            frames: self.frames,
            step: self.step,
            max_n: self.max_n,
            max_prime: self.max_prime,
            format: self.format,
            output: self.output.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GapError;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["prime-gaps"]);
        assert_eq!(cli.frames, 100);
        assert_eq!(cli.step, 1000);
        assert_eq!(cli.max_n, 1_000_000_000_000);
        assert_eq!(cli.max_prime, None);
        assert_eq!(cli.format, ExportFormat::Json);
        assert!(!cli.quiet);
    }

    #[test]
    fn frames_and_i_flags() {
        let cli = Cli::parse_from(["prime-gaps", "--frames", "20", "--i", "50"]);
        assert_eq!(cli.frames, 20);
        assert_eq!(cli.step, 50);
    }

    #[test]
    fn step_alias() {
        let cli = Cli::parse_from(["prime-gaps", "--step", "7"]);
        assert_eq!(cli.step, 7);
    }

    #[test]
    fn format_and_output() {
        let cli = Cli::parse_from(["prime-gaps", "--format", "csv", "-o", "gaps.csv"]);
        assert_eq!(cli.format, ExportFormat::Csv);
        assert_eq!(cli.output, Some(PathBuf::from("gaps.csv")));
    }

    #[test]
    fn negative_frames_rejected_by_parser() {
        assert!(Cli::try_parse_from(["prime-gaps", "--frames", "-3"]).is_err());
    }

    #[test]
    fn run_config_carries_arguments() {
        let cli = Cli::parse_from([
            "prime-gaps",
            "--frames",
            "4",
            "--i",
            "10",
            "--max-n",
            "25",
            "--max-prime",
            "1000",
        ]);
        let config = cli.run_config().unwrap();
        assert_eq!(config.frames, 4);
        assert_eq!(config.step, 10);
        assert_eq!(config.max_n, 25);
        assert_eq!(config.max_prime, Some(1000));
    }

    #[test]
    fn run_config_rejects_zero_step() {
        let cli = Cli::parse_from(["prime-gaps", "--i", "0"]);
        assert!(matches!(
            cli.run_config(),
            Err(GapError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
