//! Core types and configuration shared by the Stackform crates.
//!
//! This crate provides the AWS identifiers that CloudFormation shapes refer to
//! (account IDs and regions), the core error type, and the environment-driven
//! configuration used by the command-line tooling.

mod config;
mod error;
mod types;

pub use config::{LogFormat, StackformConfig};
pub use error::StackformError;
pub use types::{AccountId, AwsRegion};
