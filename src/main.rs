//! clip-doctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use clip_doctor::cli::Cli;
use clip_doctor::doctor::Doctor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout is reserved for the test transcript.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("clip_doctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clip_doctor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("clip-doctor starting with args: {:?}", cli);

    let doctor = Doctor::new(&cli);

    // In JSON mode the transcript is discarded and the report is the output.
    let result = if cli.json {
        doctor.run(&mut std::io::sink())
    } else {
        doctor.run(&mut std::io::stdout().lock())
    };

    match result {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::from(1);
                    }
                }
            }
            if report.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
