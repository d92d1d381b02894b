//! motion-doctor CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use motion_doctor::cli::{Cli, CommandDispatcher, CommandResult};
use motion_doctor::config::{load_config, Settings};
use motion_doctor::report::DoctorTheme;
use motion_doctor::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("motion_doctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("motion_doctor=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<CommandResult> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, &cli.overrides());
    let theme = DoctorTheme::detect(cli.no_color);

    let dispatcher = CommandDispatcher::new(settings, theme);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatcher.dispatch(cli, &mut out)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("motion-doctor starting with args: {:?}", cli);

    match run(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
