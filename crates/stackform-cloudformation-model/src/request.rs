//! Request envelope carrying a validated input.

use stackform_core::{AwsRegion, StackformConfig};

use crate::operations::{CloudFormationOperation, OperationInput};
use crate::validation::ValidationError;

/// AWS credentials for request authentication.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The AWS access key ID.
    pub access_key_id: String,
    /// The AWS secret access key.
    pub secret_access_key: String,
    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Long-term credentials without a session token.
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// A CloudFormation request wrapping a validated input with credentials,
/// region, and extra headers.
///
/// The input is checked once in [`CloudFormationRequest::new`] and can only
/// be read afterwards.
#[derive(Debug, Clone)]
pub struct CloudFormationRequest<T> {
    input: T,
    /// Optional credentials for the request.
    pub credentials: Option<Credentials>,
    /// Region the request is addressed to.
    pub region: AwsRegion,
    /// Additional HTTP headers.
    pub headers: http::HeaderMap,
}

impl<T: OperationInput> CloudFormationRequest<T> {
    /// Validate `input` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint of the input.
    pub fn new(input: T) -> Result<Self, ValidationError> {
        if let Err(err) = input.validate() {
            tracing::debug!(
                operation = %T::OPERATION,
                field = err.field().unwrap_or("-"),
                error = %err,
                "rejected invalid input"
            );
            return Err(err);
        }
        tracing::trace!(operation = %T::OPERATION, "built request");
        Ok(Self {
            input,
            credentials: None,
            region: AwsRegion::default(),
            headers: http::HeaderMap::new(),
        })
    }

    /// The operation this request invokes.
    #[must_use]
    pub fn operation(&self) -> CloudFormationOperation {
        T::OPERATION
    }

    /// Fill an absent idempotency token with a fresh UUID.
    ///
    /// Inputs without a token slot, and inputs whose token is already set,
    /// are left untouched.
    #[must_use]
    pub fn with_generated_token(mut self) -> Self {
        if let Some(slot) = self.input.idempotency_token_mut() {
            slot.get_or_insert_with(|| uuid::Uuid::new_v4().to_string());
        }
        self
    }
}

impl<T> CloudFormationRequest<T> {
    /// The validated input.
    #[must_use]
    pub fn input(&self) -> &T {
        &self.input
    }

    /// Consume the request, returning the input.
    #[must_use]
    pub fn into_input(self) -> T {
        self.input
    }

    /// Set the credentials for this request.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the target region.
    #[must_use]
    pub fn with_region(mut self, region: AwsRegion) -> Self {
        self.region = region;
        self
    }

    /// Apply the region from the loaded configuration.
    #[must_use]
    pub fn with_config(self, config: &StackformConfig) -> Self {
        self.with_region(config.default_region.clone())
    }

    /// Add an HTTP header.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}
