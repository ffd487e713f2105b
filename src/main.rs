//! envgen CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envgen::cli::{should_color_logs, Cli, GenerateCommand, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool, ansi: bool) {
    let filter = if debug {
        EnvFilter::new("envgen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envgen=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let theme = Theme::detect(cli.no_color);
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    init_tracing(cli.debug, should_color_logs(cli.no_color));

    tracing::debug!("envgen starting with args: {:?}", cli);

    let command = GenerateCommand::from_cli(cli);

    match command.execute(&theme) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
