//! Human-readable output formatter.

use std::io::{self, Write};

use super::{label, FrameFormatter};
use crate::config::RunConfig;
use crate::gaps::Frame;

/// Widest histogram bar, in characters.
const BAR_WIDTH: u64 = 40;

/// Prints each frame as a title line followed by one bar per gap size.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl FrameFormatter for HumanFormatter {
    fn begin(&mut self, run: &RunConfig, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(
            writer,
            "{} frames, step {}, prefix ceiling {}",
            run.frames, run.step, run.max_n
        )
    }

    fn frame(&mut self, frame: &Frame, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "[{}] {}",
            frame.index,
            label::frame_title(frame.prefix_len)
        )?;
        if frame.histogram.is_empty() {
            return writeln!(writer, "  (no gaps)");
        }

        let widest = frame
            .histogram
            .most_common()
            .map(|(_, count)| count)
            .unwrap_or(1);
        for (gap, count) in frame.histogram.iter() {
            let bar = count.saturating_mul(BAR_WIDTH).div_ceil(widest).max(1) as usize;
            writeln!(writer, "  {:>5} {:>10} {}", gap, count, "#".repeat(bar))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaps::GapSeries;
    use crate::primes::ListedPrimes;

    fn render() -> String {
        let primes = ListedPrimes::from(vec![2, 3, 5, 7, 11, 13]);
        let mut formatter = HumanFormatter::new();
        let mut out = Vec::new();
        let run = RunConfig {
            frames: 3,
            step: 2,
            max_n: 4,
            ..RunConfig::default()
        };
        formatter.begin(&run, &mut out).unwrap();
        for frame in GapSeries::new(primes, 2, 4).unwrap() {
            formatter.frame(&frame.unwrap(), &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shows_header_and_titles() {
        let text = render();
        assert!(text.starts_with("3 frames, step 2, prefix ceiling 4"));
        assert!(text.contains("[0] prime gap line for 0 primes"));
        assert!(text.contains("[2] prime gap line for 4 primes"));
    }

    #[test]
    fn empty_frame_is_marked() {
        assert!(render().contains("(no gaps)"));
    }

    #[test]
    fn most_common_gap_gets_full_bar() {
        let text = render();
        let full = "#".repeat(BAR_WIDTH as usize);
        let last_frame = text.split("[2]").nth(1).unwrap();
        let line = last_frame
            .lines()
            .find(|line| line.trim_start().starts_with("2 "))
            .unwrap();
        assert!(line.ends_with(&full));
    }
}
