//! CloudFormation error types.
//!
//! CloudFormation reports errors through the Query protocol as an
//! `ErrorResponse` document whose `Code` element carries one of the codes
//! below.

use std::fmt;

use crate::validation::ValidationError;

/// Well-known CloudFormation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CloudFormationErrorCode {
    /// A resource with the name already exists.
    AlreadyExistsException,
    /// An error occurred in the extension registry.
    CFNRegistryException,
    /// The change set does not exist.
    ChangeSetNotFound,
    /// A resource was created but later modified outside CloudFormation.
    CreatedButModifiedException,
    /// The template requires a capability that was not acknowledged.
    InsufficientCapabilitiesException,
    /// The change set cannot be used in its current state.
    InvalidChangeSetStatus,
    /// The operation is not allowed for the resource.
    InvalidOperationException,
    /// The requested state transition is not allowed.
    InvalidStateTransition,
    /// An account quota was exceeded.
    LimitExceededException,
    /// The stack set name is already taken.
    NameAlreadyExistsException,
    /// The operation ID was already used.
    OperationIdAlreadyExistsException,
    /// Another operation is running on the stack set.
    OperationInProgressException,
    /// The stack set operation does not exist.
    OperationNotFoundException,
    /// The handler progress update failed its status precondition.
    ConditionalCheckFailed,
    /// The stack instance does not exist.
    StackInstanceNotFoundException,
    /// The stack set still has stack instances.
    StackSetNotEmptyException,
    /// The stack set does not exist.
    StackSetNotFoundException,
    /// Another operation has been performed on the stack set since the
    /// request was issued.
    StaleRequestException,
    /// The client request token was already used for a different request.
    TokenAlreadyExistsException,
    /// The extension does not exist.
    TypeNotFoundException,
    /// The input failed validation.
    #[default]
    ValidationError,
    /// The request was throttled.
    Throttling,
    /// The service failed to process the request.
    InternalFailure,
}

impl CloudFormationErrorCode {
    /// Every known code.
    pub const ALL: &'static [Self] = &[
        Self::AlreadyExistsException,
        Self::CFNRegistryException,
        Self::ChangeSetNotFound,
        Self::CreatedButModifiedException,
        Self::InsufficientCapabilitiesException,
        Self::InvalidChangeSetStatus,
        Self::InvalidOperationException,
        Self::InvalidStateTransition,
        Self::LimitExceededException,
        Self::NameAlreadyExistsException,
        Self::OperationIdAlreadyExistsException,
        Self::OperationInProgressException,
        Self::OperationNotFoundException,
        Self::ConditionalCheckFailed,
        Self::StackInstanceNotFoundException,
        Self::StackSetNotEmptyException,
        Self::StackSetNotFoundException,
        Self::StaleRequestException,
        Self::TokenAlreadyExistsException,
        Self::TypeNotFoundException,
        Self::ValidationError,
        Self::Throttling,
        Self::InternalFailure,
    ];

    /// Returns the `Code` string of the error response.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyExistsException => "AlreadyExistsException",
            Self::CFNRegistryException => "CFNRegistryException",
            Self::ChangeSetNotFound => "ChangeSetNotFound",
            Self::CreatedButModifiedException => "CreatedButModifiedException",
            Self::InsufficientCapabilitiesException => "InsufficientCapabilitiesException",
            Self::InvalidChangeSetStatus => "InvalidChangeSetStatus",
            Self::InvalidOperationException => "InvalidOperationException",
            Self::InvalidStateTransition => "InvalidStateTransition",
            Self::LimitExceededException => "LimitExceededException",
            Self::NameAlreadyExistsException => "NameAlreadyExistsException",
            Self::OperationIdAlreadyExistsException => "OperationIdAlreadyExistsException",
            Self::OperationInProgressException => "OperationInProgressException",
            Self::OperationNotFoundException => "OperationNotFoundException",
            Self::ConditionalCheckFailed => "ConditionalCheckFailed",
            Self::StackInstanceNotFoundException => "StackInstanceNotFoundException",
            Self::StackSetNotEmptyException => "StackSetNotEmptyException",
            Self::StackSetNotFoundException => "StackSetNotFoundException",
            Self::StaleRequestException => "StaleRequestException",
            Self::TokenAlreadyExistsException => "TokenAlreadyExistsException",
            Self::TypeNotFoundException => "TypeNotFoundException",
            Self::ValidationError => "ValidationError",
            Self::Throttling => "Throttling",
            Self::InternalFailure => "InternalFailure",
        }
    }

    /// Parse an error response `Code`. Unknown codes yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == code)
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::ChangeSetNotFound
            | Self::OperationNotFoundException
            | Self::StackInstanceNotFoundException
            | Self::StackSetNotFoundException
            | Self::TypeNotFoundException => http::StatusCode::NOT_FOUND,
            Self::NameAlreadyExistsException
            | Self::OperationIdAlreadyExistsException
            | Self::OperationInProgressException
            | Self::StackSetNotEmptyException => http::StatusCode::CONFLICT,
            Self::InternalFailure => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }

    /// Whether a request failing with this code may succeed when retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Throttling | Self::InternalFailure)
    }
}

impl fmt::Display for CloudFormationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CloudFormation error response.
#[derive(Debug)]
pub struct CloudFormationError {
    /// The error code.
    pub code: CloudFormationErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CloudFormationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CloudFormationError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for CloudFormationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl CloudFormationError {
    /// Create a new `CloudFormationError` from an error code.
    #[must_use]
    pub fn new(code: CloudFormationErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `CloudFormationError` with a custom message.
    #[must_use]
    pub fn with_message(code: CloudFormationErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build an error from a raw response code, falling back to
    /// `InternalFailure` for codes this crate does not know.
    #[must_use]
    pub fn from_response(code: &str, message: impl Into<String>) -> Self {
        match CloudFormationErrorCode::from_code(code) {
            Some(known) => Self::with_message(known, message),
            None => {
                tracing::debug!(code, "unrecognized CloudFormation error code");
                Self::with_message(
                    CloudFormationErrorCode::InternalFailure,
                    format!("{code}: {}", message.into()),
                )
            }
        }
    }

    /// Whether the request may succeed when retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }

    // -- Convenience constructors --

    /// Input validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(CloudFormationErrorCode::ValidationError, message)
    }

    /// Resource already exists.
    #[must_use]
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::with_message(CloudFormationErrorCode::AlreadyExistsException, message)
    }

    /// Template needs an unacknowledged capability.
    #[must_use]
    pub fn insufficient_capabilities(message: impl Into<String>) -> Self {
        Self::with_message(
            CloudFormationErrorCode::InsufficientCapabilitiesException,
            message,
        )
    }

    /// Stack set not found.
    #[must_use]
    pub fn stack_set_not_found(name: &str) -> Self {
        Self::with_message(
            CloudFormationErrorCode::StackSetNotFoundException,
            format!("StackSet {name} not found"),
        )
    }

    /// Change set not found.
    #[must_use]
    pub fn change_set_not_found(name: &str) -> Self {
        Self::with_message(
            CloudFormationErrorCode::ChangeSetNotFound,
            format!("ChangeSet [{name}] does not exist"),
        )
    }

    /// Extension not found.
    #[must_use]
    pub fn type_not_found(type_name: &str) -> Self {
        Self::with_message(
            CloudFormationErrorCode::TypeNotFoundException,
            format!("The type '{type_name}' cannot be found."),
        )
    }

    /// Internal failure.
    #[must_use]
    pub fn internal_failure(message: impl Into<String>) -> Self {
        Self::with_message(CloudFormationErrorCode::InternalFailure, message)
    }
}

impl From<ValidationError> for CloudFormationError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.to_string()).with_source(err)
    }
}

/// Create a `CloudFormationError` from an error code.
///
/// # Examples
///
/// ```
/// use stackform_cloudformation_model::cloudformation_error;
/// use stackform_cloudformation_model::error::CloudFormationErrorCode;
///
/// let err = cloudformation_error!(ValidationError);
/// assert_eq!(err.code, CloudFormationErrorCode::ValidationError);
///
/// let err = cloudformation_error!(StackSetNotFoundException, "StackSet baseline not found");
/// assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
/// ```
#[macro_export]
macro_rules! cloudformation_error {
    ($code:ident) => {
        $crate::error::CloudFormationError::new($crate::error::CloudFormationErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::CloudFormationError::with_message(
            $crate::error::CloudFormationErrorCode::$code,
            $msg,
        )
    };
}
