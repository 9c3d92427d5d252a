//! prime-gaps CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use prime_gaps::cli::{cancel_on_interrupt, Cli, RunCommand};
use prime_gaps::gaps::CancelToken;
use prime_gaps::ui::{Output, OutputMode, Theme};
use prime_gaps::GapError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("prime_gaps=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prime_gaps=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code_for(err: &GapError) -> ExitCode {
    match err {
        GapError::Cancelled { .. } => ExitCode::from(130),
        _ => ExitCode::from(1),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("prime-gaps starting with args: {:?}", cli);

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::detect()
    };
    let output = Output::new(mode, theme);

    let result = cli.run_config().and_then(|config| {
        let cancel = CancelToken::new();
        cancel_on_interrupt(&cancel);
        RunCommand::new(config, cancel).execute(&output)
    });

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            output.error(&format!("Error: {}", e));
            exit_code_for(&e)
        }
    }
}
