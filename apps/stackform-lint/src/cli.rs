//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stackform_core::LogFormat;

/// Validate and inspect CloudFormation documents.
#[derive(Debug, Parser)]
#[command(
    name = "stackform-lint",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and inspect CloudFormation request and response documents",
    after_help = "EXAMPLES:\n\
        \x20 stackform-lint operations --modeled\n\
        \x20 stackform-lint validate CreateStack create-stack.json\n\
        \x20 cat out.json | stackform-lint inspect DescribeStacks",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Logging flags shared by all subcommands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level filter (overridden by `RUST_LOG`).
    #[arg(long, global = true, env = "STACKFORM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log record format: `text` or `json`.
    #[arg(long, global = true, env = "STACKFORM_LOG_FORMAT", value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,
}

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the CloudFormation operation catalog.
    Operations {
        /// Only list operations with input and output shapes.
        #[arg(long)]
        modeled: bool,
    },

    /// Validate an operation input document and print its rendering.
    Validate(DocumentArgs),

    /// Parse an operation output document and print its rendering.
    Inspect(DocumentArgs),
}

/// Operation name and document source.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Operation name, e.g. `CreateStack`.
    pub operation: String,

    /// JSON document to read; standard input when omitted or `-`.
    pub file: Option<PathBuf>,
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse().map_err(|e: stackform_core::StackformError| e.to_string())
}
