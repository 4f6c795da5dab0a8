//! Subcommand handlers.
//!
//! Handlers write their results to the given writer and report whether the
//! document was accepted. I/O failures and unusable arguments are returned as
//! errors.

use std::fmt::Display;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use stackform_cloudformation_model::input::{
    CreateChangeSetInput, CreateStackInput, CreateStackSetInput, DeleteStackInput,
    DescribeStackResourcesInput, DescribeStackSetInput, DescribeStackSetOperationInput,
    DescribeStacksInput, DescribeTypeInput, UpdateStackInput, UpdateStackSetInput,
};
use stackform_cloudformation_model::{CloudFormationOperation, CloudFormationRequest, OperationInput};
use stackform_core::StackformConfig;
use tracing::debug;

/// Result of checking a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The document was accepted.
    Accepted,
    /// The document is malformed or violates a constraint.
    Rejected,
}

/// Run `f::<Input>(args...)` for the input type bound to `$op`.
macro_rules! with_input_type {
    ($op:expr, $f:ident($($arg:expr),*)) => {
        match $op {
            CloudFormationOperation::CreateStack => $f::<CreateStackInput>($($arg),*),
            CloudFormationOperation::UpdateStack => $f::<UpdateStackInput>($($arg),*),
            CloudFormationOperation::DeleteStack => $f::<DeleteStackInput>($($arg),*),
            CloudFormationOperation::DescribeStacks => $f::<DescribeStacksInput>($($arg),*),
            CloudFormationOperation::DescribeStackResources => {
                $f::<DescribeStackResourcesInput>($($arg),*)
            }
            CloudFormationOperation::CreateStackSet => $f::<CreateStackSetInput>($($arg),*),
            CloudFormationOperation::UpdateStackSet => $f::<UpdateStackSetInput>($($arg),*),
            CloudFormationOperation::DescribeStackSet => $f::<DescribeStackSetInput>($($arg),*),
            CloudFormationOperation::DescribeStackSetOperation => {
                $f::<DescribeStackSetOperationInput>($($arg),*)
            }
            CloudFormationOperation::CreateChangeSet => $f::<CreateChangeSetInput>($($arg),*),
            CloudFormationOperation::DescribeType => $f::<DescribeTypeInput>($($arg),*),
            other => bail!("operation {other} has no modeled shapes"),
        }
    };
}

/// Print the operation catalog, one name per line.
pub fn operations(modeled_only: bool, out: &mut dyn Write) -> Result<Outcome> {
    for op in CloudFormationOperation::ALL
        .iter()
        .filter(|op| !modeled_only || op.is_modeled())
    {
        writeln!(out, "{op}")?;
    }
    Ok(Outcome::Accepted)
}

/// Validate an input document for `operation`.
pub fn validate(
    operation: &str,
    document: &str,
    config: &StackformConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let op = resolve(operation)?;
    with_input_type!(op, validate_as(document, config, out, err))
}

/// Parse an output document for `operation`.
pub fn inspect(
    operation: &str,
    document: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let op = resolve(operation)?;
    with_input_type!(op, inspect_as(document, out, err))
}

/// Read a document from `file`, or from standard input when absent or `-`.
pub fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn resolve(name: &str) -> Result<CloudFormationOperation> {
    CloudFormationOperation::from_name(name)
        .with_context(|| format!("unknown CloudFormation operation '{name}'"))
}

fn validate_as<T>(
    document: &str,
    config: &StackformConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome>
where
    T: OperationInput + DeserializeOwned + Display,
{
    let input: T = match serde_json::from_str(document) {
        Ok(input) => input,
        Err(e) => {
            writeln!(err, "malformed {} document: {e}", T::OPERATION)?;
            return Ok(Outcome::Rejected);
        }
    };

    match CloudFormationRequest::new(input) {
        Ok(request) => {
            let request = request.with_config(config);
            debug!(operation = %request.operation(), region = %request.region, "input is valid");
            writeln!(out, "{}", request.input())?;
            Ok(Outcome::Accepted)
        }
        Err(e) => {
            writeln!(err, "invalid {} input: {e}", T::OPERATION)?;
            Ok(Outcome::Rejected)
        }
    }
}

fn inspect_as<T>(document: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<Outcome>
where
    T: OperationInput,
    T::Output: DeserializeOwned + Display,
{
    match serde_json::from_str::<T::Output>(document) {
        Ok(output) => {
            debug!(operation = %T::OPERATION, "parsed output document");
            writeln!(out, "{output}")?;
            Ok(Outcome::Accepted)
        }
        Err(e) => {
            writeln!(err, "malformed {} output: {e}", T::OPERATION)?;
            Ok(Outcome::Rejected)
        }
    }
}
