//! CloudFormation model types for Stackform.
//!
//! Hand-written shapes for the stack, stack set, change set, and registry
//! operations of the CloudFormation API, with serde derives using the service
//! member names, typed builders for every input, and client-side validation of
//! the constraints the service enforces.
// "CloudFormation" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

mod display;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod request;
pub mod types;
pub mod validation;

pub use error::{CloudFormationError, CloudFormationErrorCode};
pub use operations::{API_VERSION, CloudFormationOperation, OperationInput, SERVICE_NAME};
pub use request::{CloudFormationRequest, Credentials};
pub use validation::{Validate, ValidationError};
