//! pathkit - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pathkit::{
    cli::{execute, Args, Command},
    config::{validate_config, validate_substitute, Config},
    error::{exit_codes, Error, Result},
    output::{print_error, print_result, print_warning, set_color, Report},
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Encoding(_) | Error::LocationNotFound(_) => {
                    ExitCode::from(exit_codes::INPUT_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    set_color(config.output.color);

    if let Command::Trim {
        substitute: Some(substitute),
        ..
    } = &args.command
    {
        if let Err(e) = validate_substitute(substitute) {
            print_warning(&format!("{}; illegal characters will be dropped", e));
        }
    }

    let report = execute(&args.command, &config)?;
    print_result(&report.render(config.output.json)?);

    match report {
        Report::Flag(false) => Ok(exit_codes::FALSE),
        _ => Ok(exit_codes::SUCCESS),
    }
}
