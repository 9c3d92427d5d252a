//! Frame export.
//!
//! Frames are written for a downstream renderer in one of several formats
//! (JSON, CSV, or a human-readable summary).

pub mod csv;
pub mod human;
pub mod json;
pub mod label;

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;

use crate::config::RunConfig;
use crate::gaps::Frame;

pub use csv::CsvFormatter;
pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for exported frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// One JSON document with a run header and all frames.
    #[default]
    Json,
    /// One row per (frame, gap) pair.
    Csv,
    /// Readable summary on stdout.
    Human,
}

impl ExportFormat {
    /// File extension, or `None` when the format is not written to a file.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Json => Some("json"),
            Self::Csv => Some("csv"),
            Self::Human => None,
        }
    }

    /// A fresh formatter for this format.
    pub fn formatter(&self) -> Box<dyn FrameFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter::new()),
            Self::Csv => Box::new(CsvFormatter::new()),
            Self::Human => Box::new(HumanFormatter::new()),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Human => "human",
        };
        f.write_str(name)
    }
}

/// Trait for writing a run's frames.
///
/// Calls arrive as `begin`, then `frame` once per frame in order, then
/// `finish`.
pub trait FrameFormatter {
    /// Write anything that precedes the frames.
    fn begin(&mut self, _run: &RunConfig, _writer: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Write (or buffer) one frame.
    fn frame(&mut self, frame: &Frame, writer: &mut dyn Write) -> io::Result<()>;

    /// Write anything that follows the frames.
    fn finish(&mut self, _writer: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
