//! CSV output formatter.

use std::io::{self, Write};

use super::FrameFormatter;
use crate::config::RunConfig;
use crate::gaps::Frame;

/// Formats frames as `frame,prefix_len,gap,count` rows.
///
/// Empty frames produce no rows.
#[derive(Debug, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl FrameFormatter for CsvFormatter {
    fn begin(&mut self, _run: &RunConfig, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "frame,prefix_len,gap,count")
    }

    fn frame(&mut self, frame: &Frame, writer: &mut dyn Write) -> io::Result<()> {
        for (gap, count) in frame.histogram.iter() {
            writeln!(writer, "{},{},{},{}", frame.index, frame.prefix_len, gap, count)?;
        }
        Ok(())
    }
}
