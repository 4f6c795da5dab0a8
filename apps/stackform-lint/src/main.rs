//! Stackform Lint - validate and inspect CloudFormation documents.
//!
//! Reads CloudFormation operation input and output documents in the service's
//! JSON shape, checks inputs against the constraints CloudFormation enforces,
//! and prints the compact rendering of the parsed shapes.
//!
//! # Usage
//!
//! ```text
//! stackform-lint operations [--modeled]
//! stackform-lint validate <OPERATION> [FILE]
//! stackform-lint inspect <OPERATION> [FILE]
//! ```
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Document accepted |
//! | 1 | I/O, configuration, or unknown operation |
//! | 2 | Document malformed or invalid, or bad arguments |
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEFAULT_REGION` | `us-east-1` | Region attached to validated requests |
//! | `ACCOUNT_ID` | `000000000000` | Account owning the requests |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `LOG_FORMAT` | `text` | Log record format (`text` or `json`) |
//! | `STACKFORM_LOG_LEVEL` | *(unset)* | Same as `--log-level`, overrides `LOG_LEVEL` |
//! | `STACKFORM_LOG_FORMAT` | *(unset)* | Same as `--log-format`, overrides `LOG_FORMAT` |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides the log level) |

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use stackform_core::{LogFormat, StackformConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::Outcome;

/// Initialize the tracing subscriber on standard error.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the configured log level.
fn init_tracing(log_level: &str, format: LogFormat) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}

/// Load configuration from the environment and layer the CLI flags on top.
fn load_config(cli: &Cli) -> Result<StackformConfig> {
    let mut config = StackformConfig::from_env().context("invalid configuration")?;
    if let Some(level) = &cli.global.log_level {
        config.log_level.clone_from(level);
    }
    if let Some(format) = cli.global.log_format {
        config.log_format = format;
    }
    Ok(config)
}

fn run(cli: &Cli, config: &StackformConfig) -> Result<Outcome> {
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    match &cli.command {
        Command::Operations { modeled } => commands::operations(*modeled, &mut stdout),
        Command::Validate(args) => {
            let document = commands::read_document(args.file.as_deref())?;
            commands::validate(&args.operation, &document, config, &mut stdout, &mut stderr)
        }
        Command::Inspect(args) => {
            let document = commands::read_document(args.file.as_deref())?;
            commands::inspect(&args.operation, &document, &mut stdout, &mut stderr)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(1);
        }
    };
    if let Err(e) = init_tracing(&config.log_level, config.log_format) {
        eprintln!("error: {e:#}");
        return ExitCode::from(1);
    }
    debug!(
        region = %config.default_region,
        log_format = %config.log_format,
        "stackform-lint started"
    );

    match run(&cli, &config) {
        Ok(Outcome::Accepted) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
