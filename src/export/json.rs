//! JSON output formatter.
//!
//! Produces one document: the run header followed by every frame, with the
//! label and title a renderer needs to draw it.

use std::io::{self, Write};

use serde::Serialize;

use super::{label, FrameFormatter};
use crate::config::RunConfig;
use crate::gaps::Frame;

/// Formats frames as a single JSON document.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    run: Option<RunConfig>,
    frames: Vec<JsonFrame>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<&'a RunConfig>,
    frames: &'a [JsonFrame],
}

#[derive(Debug, Serialize)]
struct JsonFrame {
    index: u64,
    prefix_len: u64,
    label: String,
    title: String,
    total: u64,
    histogram: Vec<JsonBucket>,
}

#[derive(Debug, Serialize)]
struct JsonBucket {
    gap: u64,
    count: u64,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameFormatter for JsonFormatter {
    fn begin(&mut self, run: &RunConfig, _writer: &mut dyn Write) -> io::Result<()> {
        self.run = Some(run.clone());
        Ok(())
    }

    fn frame(&mut self, frame: &Frame, _writer: &mut dyn Write) -> io::Result<()> {
        self.frames.push(JsonFrame {
            index: frame.index,
            prefix_len: frame.prefix_len,
            label: label::prime_count_label(frame.prefix_len),
            title: label::frame_title(frame.prefix_len),
            total: frame.histogram.total(),
            histogram: frame
                .histogram
                .iter()
                .map(|(gap, count)| JsonBucket { gap, count })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self, writer: &mut dyn Write) -> io::Result<()> {
        let output = JsonOutput {
            run: self.run.as_ref(),
            frames: &self.frames,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
