//! Terminal output.
//!
//! This module provides:
//! - [`Output`] and [`OutputMode`] for mode-aware status lines
//! - [`FrameProgress`] for the per-frame progress bar
//! - [`Theme`] for colored or plain styling

pub mod output;
pub mod progress;
pub mod theme;

pub use output::{Output, OutputMode};
pub use progress::{format_duration, FrameProgress};
pub use theme::{should_use_colors, Theme};
