//! Cross-crate tests for the Stackform CloudFormation model.
//!
//! These tests drive the public API the way a client would: build or parse
//! documents in the service's JSON shape, validate them through the request
//! envelope, and check renderings and error conversions.
//!
//! Run them with:
//! ```text
//! cargo test -p stackform-integration
//! ```

use std::sync::Once;

use stackform_cloudformation_model::{CloudFormationRequest, OperationInput, ValidationError};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A minimal template declaring a single queue.
#[must_use]
pub fn queue_template() -> String {
    serde_json::json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Resources": {
            "Queue": { "Type": "AWS::SQS::Queue" }
        }
    })
    .to_string()
}

/// Parse an input document and wrap it in a validated request.
///
/// # Panics
///
/// Panics when the document is not valid JSON for `T`.
pub fn request_from_json<T>(
    document: serde_json::Value,
) -> Result<CloudFormationRequest<T>, ValidationError>
where
    T: OperationInput + serde::de::DeserializeOwned,
{
    init_tracing();
    let input: T = serde_json::from_value(document).expect("document matches the input shape");
    CloudFormationRequest::new(input)
}

mod test_change_set;
mod test_error;
mod test_registry;
mod test_stack;
mod test_stack_set;
