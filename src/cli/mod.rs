//! Command-line interface.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - The frame run: compute, report progress, export
//! - [`interrupt`] - Ctrl-C wiring to the run's cancellation token

pub mod args;
pub mod interrupt;
pub mod run;

pub use args::Cli;
pub use interrupt::cancel_on_interrupt;
pub use run::{CommandResult, RunCommand};
