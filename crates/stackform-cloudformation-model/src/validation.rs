//! Client-side validation of CloudFormation inputs.
//!
//! These are the constraints the service enforces on the wire: required
//! members, length and numeric bounds, naming patterns, collection limits,
//! and members that exclude or require each other. Checking them before a
//! request leaves the process turns a round trip into a typed error.

use std::sync::LazyLock;

use regex::Regex;
use stackform_core::{AccountId, AwsRegion};

use crate::input::{
    CreateChangeSetInput, CreateStackInput, CreateStackSetInput, DeleteStackInput,
    DescribeStackResourcesInput, DescribeStackSetInput, DescribeStackSetOperationInput,
    DescribeStacksInput, DescribeTypeInput, UpdateStackInput, UpdateStackSetInput,
};
use crate::types::{
    AutoDeployment, ChangeSetType, DeploymentTargets, LoggingConfig, Parameter, ResourceToImport,
    RollbackConfiguration, RollbackTrigger, StackSetOperationPreferences, Tag,
};

/// A violated input constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required member is absent or empty.
    #[error("missing required field '{field}'")]
    Missing {
        /// Offending field.
        field: &'static str,
    },
    /// A string or collection is shorter or longer than allowed.
    #[error("field '{field}' has length {actual}, expected {min} to {max}")]
    Length {
        /// Offending field.
        field: &'static str,
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
        /// Observed length.
        actual: usize,
    },
    /// A string does not match the required pattern.
    #[error("field '{field}' does not match pattern {pattern}")]
    Pattern {
        /// Offending field.
        field: &'static str,
        /// The expected pattern.
        pattern: &'static str,
    },
    /// A number is outside its allowed range.
    #[error("field '{field}' is {actual}, expected {min} to {max}")]
    Range {
        /// Offending field.
        field: &'static str,
        /// Minimum value.
        min: i32,
        /// Maximum value.
        max: i32,
        /// Observed value.
        actual: i32,
    },
    /// A collection holds more items than allowed.
    #[error("field '{field}' has {actual} items, at most {max} allowed")]
    TooMany {
        /// Offending field.
        field: &'static str,
        /// Maximum item count.
        max: usize,
        /// Observed item count.
        actual: usize,
    },
    /// Two members that cannot be combined are both set.
    #[error("fields '{first}' and '{second}' are mutually exclusive")]
    MutuallyExclusive {
        /// First member set.
        first: &'static str,
        /// Second member set.
        second: &'static str,
    },
    /// None of a group of alternative members is set.
    #[error("one of {} is required", .fields.join(", "))]
    OneOfRequired {
        /// The alternatives.
        fields: &'static [&'static str],
    },
    /// A member is set without the member it depends on.
    #[error("field '{field}' requires '{required}'")]
    CoRequired {
        /// Member that is set.
        field: &'static str,
        /// Member that must accompany it.
        required: &'static str,
    },
    /// A string is not one of the values of a closed enumeration.
    #[error("unknown {type_name} value '{value}'")]
    UnknownEnumValue {
        /// Name of the enumeration.
        type_name: &'static str,
        /// Rejected value.
        value: String,
    },
    /// An account ID is not a 12-digit string.
    #[error("field '{field}' contains invalid account id '{value}'")]
    InvalidAccountId {
        /// Offending field.
        field: &'static str,
        /// Rejected value.
        value: String,
    },
}

impl ValidationError {
    /// The field the error is about, when it concerns a single field.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing { field }
            | Self::Length { field, .. }
            | Self::Pattern { field, .. }
            | Self::Range { field, .. }
            | Self::TooMany { field, .. }
            | Self::CoRequired { field, .. }
            | Self::InvalidAccountId { field, .. } => Some(*field),
            Self::MutuallyExclusive { first, .. } => Some(*first),
            Self::OneOfRequired { fields } => fields.first().copied(),
            Self::UnknownEnumValue { .. } => None,
        }
    }
}

/// Client-side constraint check.
pub trait Validate {
    /// Check every constraint, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(&self) -> Result<(), ValidationError>;
}

// ---------------------------------------------------------------------------
// Patterns and limits
// ---------------------------------------------------------------------------

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("valid regex: ", $re)));
    };
}

pattern!(STACK_NAME, r"^[a-zA-Z][-a-zA-Z0-9]*$");
pattern!(
    STACK_NAME_OR_ID,
    r"^([a-zA-Z][-a-zA-Z0-9]*|arn:(aws|aws-us-gov|aws-cn):cloudformation:[-a-z0-9]+:[0-9]{12}:stack/[a-zA-Z][-a-zA-Z0-9]*/.+)$"
);
pattern!(STACK_SET_NAME, r"^[a-zA-Z][-a-zA-Z0-9]*$");
pattern!(STACK_SET_NAME_OR_ID, r"^[a-zA-Z][-a-zA-Z0-9]*(:[-a-zA-Z0-9]+)?$");
pattern!(CLIENT_TOKEN, r"^[a-zA-Z0-9][-a-zA-Z0-9]*$");
pattern!(EXECUTION_ROLE_NAME, r"^[a-zA-Z_0-9+=,.@-]+$");
pattern!(CHANGE_SET_NAME, r"^[a-zA-Z][-a-zA-Z0-9]*$");
pattern!(
    TYPE_NAME,
    r"^[A-Za-z0-9]{2,64}::[A-Za-z0-9]{2,64}::[A-Za-z0-9]{2,64}$"
);
pattern!(
    TYPE_ARN,
    r"^arn:aws[A-Za-z0-9-]{0,64}:cloudformation:[A-Za-z0-9-]{1,64}:([0-9]{12})?:type/.+$"
);
pattern!(TYPE_VERSION_ID, r"^[A-Za-z0-9-]+$");
pattern!(
    ORGANIZATIONAL_UNIT_ID,
    r"^(ou-[a-z0-9]{4,32}-[a-z0-9]{8,32}|r-[a-z0-9]{4,32})$"
);
pattern!(LOG_GROUP_NAME, r"^[\.\-_/#A-Za-z0-9]+$");

const MAX_TAGS: usize = 50;
const MAX_ROLLBACK_TRIGGERS: usize = 5;
const MAX_NOTIFICATION_ARNS: usize = 5;
const MAX_RESOURCE_IDENTIFIER_ENTRIES: usize = 256;
const MAX_RESOURCES_TO_IMPORT: usize = 200;
const MAX_TEMPLATE_BODY: usize = 51_200;

const RESERVED_TAG_PREFIX: &str = "aws:";

const TEMPLATE_SOURCES: &[&str] = &["TemplateBody", "TemplateURL"];
const TEMPLATE_SOURCES_OR_PREVIOUS: &[&str] = &["TemplateBody", "TemplateURL", "UsePreviousTemplate"];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

fn length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        let actual = value.chars().count();
        if actual < min || actual > max {
            return Err(ValidationError::Length {
                field,
                min,
                max,
                actual,
            });
        }
    }
    Ok(())
}

/// Like [`length`], but counts UTF-8 bytes instead of characters.
fn byte_length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    match value.map(str::len) {
        Some(actual) if actual < min || actual > max => Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        }),
        _ => Ok(()),
    }
}

fn matches(
    field: &'static str,
    value: Option<&str>,
    pattern: &'static Regex,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if !pattern.is_match(value) => Err(ValidationError::Pattern {
            field,
            pattern: pattern.as_str(),
        }),
        _ => Ok(()),
    }
}

fn range(field: &'static str, value: Option<i32>, min: i32, max: i32) -> Result<(), ValidationError> {
    match value {
        Some(actual) if actual < min || actual > max => Err(ValidationError::Range {
            field,
            min,
            max,
            actual,
        }),
        _ => Ok(()),
    }
}

fn at_most<T>(field: &'static str, items: Option<&[T]>, max: usize) -> Result<(), ValidationError> {
    match items {
        Some(items) if items.len() > max => Err(ValidationError::TooMany {
            field,
            max,
            actual: items.len(),
        }),
        _ => Ok(()),
    }
}

fn exclusive(
    first: &'static str,
    first_set: bool,
    second: &'static str,
    second_set: bool,
) -> Result<(), ValidationError> {
    if first_set && second_set {
        return Err(ValidationError::MutuallyExclusive { first, second });
    }
    Ok(())
}

fn each<T: Validate>(items: Option<&[T]>) -> Result<(), ValidationError> {
    items.unwrap_or_default().iter().try_for_each(Validate::validate)
}

fn nested<T: Validate>(value: Option<&T>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), Validate::validate)
}

fn regions(field: &'static str, names: Option<&[String]>) -> Result<(), ValidationError> {
    if names
        .unwrap_or_default()
        .iter()
        .any(|name| !AwsRegion::is_well_formed(name))
    {
        return Err(ValidationError::Pattern {
            field,
            pattern: "a region code such as us-east-1",
        });
    }
    Ok(())
}

fn accounts(field: &'static str, ids: Option<&[String]>) -> Result<(), ValidationError> {
    match ids.unwrap_or_default().iter().find(|id| !AccountId::is_valid(id)) {
        Some(id) => Err(ValidationError::InvalidAccountId {
            field,
            value: id.clone(),
        }),
        None => Ok(()),
    }
}

/// Exactly one template source must be set. `use_previous` only counts when
/// it is `Some(true)`.
fn template_source(
    body: Option<&str>,
    url: Option<&str>,
    use_previous: Option<bool>,
    fields: &'static [&'static str],
) -> Result<(), ValidationError> {
    let set: Vec<&'static str> = [
        ("TemplateBody", body.is_some()),
        ("TemplateURL", url.is_some()),
        ("UsePreviousTemplate", use_previous == Some(true)),
    ]
    .into_iter()
    .filter_map(|(name, present)| present.then_some(name))
    .collect();

    match set.as_slice() {
        [] => Err(ValidationError::OneOfRequired { fields }),
        [_] => {
            byte_length("TemplateBody", body, 1, MAX_TEMPLATE_BODY)?;
            length("TemplateURL", url, 1, 1024)
        }
        [first, second, ..] => Err(ValidationError::MutuallyExclusive {
            first: *first,
            second: *second,
        }),
    }
}

fn stack_name(field: &'static str, value: &str, allow_id: bool) -> Result<(), ValidationError> {
    require(field, value)?;
    if allow_id && value.starts_with("arn:") {
        return matches(field, Some(value), &STACK_NAME_OR_ID);
    }
    length(field, Some(value), 1, 128)?;
    let pattern: &'static Regex = if allow_id {
        &*STACK_NAME_OR_ID
    } else {
        &*STACK_NAME
    };
    matches(field, Some(value), pattern)
}

fn stack_set_name(value: &str, allow_id: bool) -> Result<(), ValidationError> {
    require("StackSetName", value)?;
    let pattern: &'static Regex = if allow_id {
        &*STACK_SET_NAME_OR_ID
    } else {
        length("StackSetName", Some(value), 1, 128)?;
        &*STACK_SET_NAME
    };
    matches("StackSetName", Some(value), pattern)
}

fn token(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    length(field, value, 1, 128)?;
    matches(field, value, &CLIENT_TOKEN)
}

fn role_arn(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    length(field, value, 20, 2048)
}

fn stack_policy(body: Option<&str>, url: Option<&str>) -> Result<(), ValidationError> {
    exclusive("StackPolicyBody", body.is_some(), "StackPolicyURL", url.is_some())?;
    length("StackPolicyBody", body, 1, 16_384)?;
    length("StackPolicyURL", url, 1, 1350)
}

fn tags(items: Option<&[Tag]>) -> Result<(), ValidationError> {
    at_most("Tags", items, MAX_TAGS)?;
    each(items)
}

fn execution_role_name(value: Option<&str>) -> Result<(), ValidationError> {
    length("ExecutionRoleName", value, 1, 64)?;
    matches("ExecutionRoleName", value, &EXECUTION_ROLE_NAME)
}

fn resource_types(items: Option<&[String]>) -> Result<(), ValidationError> {
    items
        .unwrap_or_default()
        .iter()
        .try_for_each(|t| length("ResourceTypes", Some(t.as_str()), 1, 256))
}

// ---------------------------------------------------------------------------
// Nested structures
// ---------------------------------------------------------------------------

impl Validate for Parameter {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.use_previous_value == Some(true) {
            exclusive(
                "UsePreviousValue",
                true,
                "ParameterValue",
                self.parameter_value.is_some(),
            )?;
        }
        Ok(())
    }
}

impl Validate for Tag {
    fn validate(&self) -> Result<(), ValidationError> {
        require("Key", &self.key)?;
        length("Key", Some(self.key.as_str()), 1, 128)?;
        if self.key.starts_with(RESERVED_TAG_PREFIX) {
            return Err(ValidationError::Pattern {
                field: "Key",
                pattern: "a key not prefixed with aws:",
            });
        }
        require("Value", &self.value)?;
        length("Value", Some(self.value.as_str()), 1, 256)
    }
}

impl Validate for RollbackTrigger {
    fn validate(&self) -> Result<(), ValidationError> {
        require("Arn", &self.arn)?;
        require("Type", &self.trigger_type)
    }
}

impl Validate for RollbackConfiguration {
    fn validate(&self) -> Result<(), ValidationError> {
        at_most(
            "RollbackTriggers",
            self.rollback_triggers.as_deref(),
            MAX_ROLLBACK_TRIGGERS,
        )?;
        each(self.rollback_triggers.as_deref())?;
        range(
            "MonitoringTimeInMinutes",
            self.monitoring_time_in_minutes,
            0,
            180,
        )
    }
}

impl Validate for AutoDeployment {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.retain_stacks_on_account_removal.is_some() && self.enabled != Some(true) {
            return Err(ValidationError::CoRequired {
                field: "RetainStacksOnAccountRemoval",
                required: "Enabled",
            });
        }
        Ok(())
    }
}

impl Validate for StackSetOperationPreferences {
    fn validate(&self) -> Result<(), ValidationError> {
        exclusive(
            "FailureToleranceCount",
            self.failure_tolerance_count.is_some(),
            "FailureTolerancePercentage",
            self.failure_tolerance_percentage.is_some(),
        )?;
        exclusive(
            "MaxConcurrentCount",
            self.max_concurrent_count.is_some(),
            "MaxConcurrentPercentage",
            self.max_concurrent_percentage.is_some(),
        )?;
        range("FailureToleranceCount", self.failure_tolerance_count, 0, i32::MAX)?;
        range(
            "FailureTolerancePercentage",
            self.failure_tolerance_percentage,
            0,
            100,
        )?;
        range("MaxConcurrentCount", self.max_concurrent_count, 1, i32::MAX)?;
        range("MaxConcurrentPercentage", self.max_concurrent_percentage, 1, 100)?;
        regions("RegionOrder", self.region_order.as_deref())
    }
}

impl Validate for DeploymentTargets {
    fn validate(&self) -> Result<(), ValidationError> {
        accounts("Accounts", self.accounts.as_deref())?;
        self.organizational_unit_ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .try_for_each(|id| matches("OrganizationalUnitIds", Some(id.as_str()), &ORGANIZATIONAL_UNIT_ID))
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        require("LogRoleArn", &self.log_role_arn)?;
        length("LogRoleArn", Some(self.log_role_arn.as_str()), 1, 256)?;
        require("LogGroupName", &self.log_group_name)?;
        length("LogGroupName", Some(self.log_group_name.as_str()), 1, 512)?;
        matches("LogGroupName", Some(self.log_group_name.as_str()), &LOG_GROUP_NAME)
    }
}

impl Validate for ResourceToImport {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ResourceType", &self.resource_type)?;
        length("ResourceType", Some(self.resource_type.as_str()), 1, 256)?;
        require("LogicalResourceId", &self.logical_resource_id)?;
        if self.resource_identifier.is_empty() {
            return Err(ValidationError::Missing {
                field: "ResourceIdentifier",
            });
        }
        if self.resource_identifier.len() > MAX_RESOURCE_IDENTIFIER_ENTRIES {
            return Err(ValidationError::TooMany {
                field: "ResourceIdentifier",
                max: MAX_RESOURCE_IDENTIFIER_ENTRIES,
                actual: self.resource_identifier.len(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Operation inputs
// ---------------------------------------------------------------------------

impl Validate for CreateStackInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_name("StackName", &self.stack_name, false)?;
        template_source(
            self.template_body.as_deref(),
            self.template_url.as_deref(),
            None,
            TEMPLATE_SOURCES,
        )?;
        each(self.parameters.as_deref())?;
        exclusive(
            "OnFailure",
            self.on_failure.is_some(),
            "DisableRollback",
            self.disable_rollback.is_some(),
        )?;
        nested(self.rollback_configuration.as_ref())?;
        range("TimeoutInMinutes", self.timeout_in_minutes, 1, i32::MAX)?;
        at_most(
            "NotificationARNs",
            self.notification_arns.as_deref(),
            MAX_NOTIFICATION_ARNS,
        )?;
        resource_types(self.resource_types.as_deref())?;
        role_arn("RoleARN", self.role_arn.as_deref())?;
        stack_policy(
            self.stack_policy_body.as_deref(),
            self.stack_policy_url.as_deref(),
        )?;
        tags(self.tags.as_deref())?;
        token("ClientRequestToken", self.client_request_token.as_deref())
    }
}

impl Validate for UpdateStackInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_name("StackName", &self.stack_name, true)?;
        template_source(
            self.template_body.as_deref(),
            self.template_url.as_deref(),
            self.use_previous_template,
            TEMPLATE_SOURCES_OR_PREVIOUS,
        )?;
        exclusive(
            "StackPolicyDuringUpdateBody",
            self.stack_policy_during_update_body.is_some(),
            "StackPolicyDuringUpdateURL",
            self.stack_policy_during_update_url.is_some(),
        )?;
        length(
            "StackPolicyDuringUpdateBody",
            self.stack_policy_during_update_body.as_deref(),
            1,
            16_384,
        )?;
        length(
            "StackPolicyDuringUpdateURL",
            self.stack_policy_during_update_url.as_deref(),
            1,
            1350,
        )?;
        each(self.parameters.as_deref())?;
        resource_types(self.resource_types.as_deref())?;
        role_arn("RoleARN", self.role_arn.as_deref())?;
        nested(self.rollback_configuration.as_ref())?;
        stack_policy(
            self.stack_policy_body.as_deref(),
            self.stack_policy_url.as_deref(),
        )?;
        at_most(
            "NotificationARNs",
            self.notification_arns.as_deref(),
            MAX_NOTIFICATION_ARNS,
        )?;
        tags(self.tags.as_deref())?;
        token("ClientRequestToken", self.client_request_token.as_deref())
    }
}

impl Validate for DeleteStackInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_name("StackName", &self.stack_name, true)?;
        role_arn("RoleARN", self.role_arn.as_deref())?;
        token("ClientRequestToken", self.client_request_token.as_deref())
    }
}

impl Validate for DescribeStacksInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.stack_name.as_deref() {
            stack_name("StackName", name, true)?;
        }
        length("NextToken", self.next_token.as_deref(), 1, 1024)
    }
}

impl Validate for DescribeStackResourcesInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.stack_name.is_none() && self.physical_resource_id.is_none() {
            return Err(ValidationError::OneOfRequired {
                fields: &["StackName", "PhysicalResourceId"],
            });
        }
        if let Some(name) = self.stack_name.as_deref() {
            stack_name("StackName", name, true)?;
        }
        Ok(())
    }
}

impl Validate for CreateStackSetInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_set_name(&self.stack_set_name, false)?;
        length("Description", self.description.as_deref(), 1, 1024)?;
        template_source(
            self.template_body.as_deref(),
            self.template_url.as_deref(),
            None,
            TEMPLATE_SOURCES,
        )?;
        each(self.parameters.as_deref())?;
        tags(self.tags.as_deref())?;
        role_arn("AdministrationRoleARN", self.administration_role_arn.as_deref())?;
        execution_role_name(self.execution_role_name.as_deref())?;
        nested(self.auto_deployment.as_ref())?;
        token("ClientRequestToken", self.client_request_token.as_deref())
    }
}

impl Validate for UpdateStackSetInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_set_name(&self.stack_set_name, true)?;
        length("Description", self.description.as_deref(), 1, 1024)?;
        template_source(
            self.template_body.as_deref(),
            self.template_url.as_deref(),
            self.use_previous_template,
            TEMPLATE_SOURCES_OR_PREVIOUS,
        )?;
        each(self.parameters.as_deref())?;
        tags(self.tags.as_deref())?;
        nested(self.operation_preferences.as_ref())?;
        role_arn("AdministrationRoleARN", self.administration_role_arn.as_deref())?;
        execution_role_name(self.execution_role_name.as_deref())?;
        nested(self.deployment_targets.as_ref())?;
        nested(self.auto_deployment.as_ref())?;
        token("OperationId", self.operation_id.as_deref())?;

        match (self.accounts.is_some(), self.regions.is_some()) {
            (true, false) => {
                return Err(ValidationError::CoRequired {
                    field: "Accounts",
                    required: "Regions",
                });
            }
            (false, true) => {
                return Err(ValidationError::CoRequired {
                    field: "Regions",
                    required: "Accounts",
                });
            }
            _ => {}
        }
        exclusive(
            "Accounts",
            self.accounts.is_some(),
            "DeploymentTargets",
            self.deployment_targets.is_some(),
        )?;
        accounts("Accounts", self.accounts.as_deref())?;
        regions("Regions", self.regions.as_deref())
    }
}

impl Validate for DescribeStackSetInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_set_name(&self.stack_set_name, true)
    }
}

impl Validate for DescribeStackSetOperationInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_set_name(&self.stack_set_name, true)?;
        require("OperationId", &self.operation_id)?;
        token("OperationId", Some(self.operation_id.as_str()))
    }
}

impl Validate for CreateChangeSetInput {
    fn validate(&self) -> Result<(), ValidationError> {
        stack_name("StackName", &self.stack_name, true)?;
        require("ChangeSetName", &self.change_set_name)?;
        length("ChangeSetName", Some(self.change_set_name.as_str()), 1, 128)?;
        matches("ChangeSetName", Some(self.change_set_name.as_str()), &CHANGE_SET_NAME)?;
        template_source(
            self.template_body.as_deref(),
            self.template_url.as_deref(),
            self.use_previous_template,
            TEMPLATE_SOURCES_OR_PREVIOUS,
        )?;
        each(self.parameters.as_deref())?;
        resource_types(self.resource_types.as_deref())?;
        role_arn("RoleARN", self.role_arn.as_deref())?;
        nested(self.rollback_configuration.as_ref())?;
        at_most(
            "NotificationARNs",
            self.notification_arns.as_deref(),
            MAX_NOTIFICATION_ARNS,
        )?;
        tags(self.tags.as_deref())?;
        token("ClientToken", self.client_token.as_deref())?;
        length("Description", self.description.as_deref(), 1, 1024)?;

        if self.change_set_type == Some(ChangeSetType::Import)
            && self.resources_to_import.as_deref().is_none_or(<[_]>::is_empty)
        {
            return Err(ValidationError::CoRequired {
                field: "ChangeSetType",
                required: "ResourcesToImport",
            });
        }
        at_most(
            "ResourcesToImport",
            self.resources_to_import.as_deref(),
            MAX_RESOURCES_TO_IMPORT,
        )?;
        each(self.resources_to_import.as_deref())
    }
}

impl Validate for DescribeTypeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        exclusive("Arn", self.arn.is_some(), "Type", self.registry_type.is_some())?;
        exclusive("Arn", self.arn.is_some(), "TypeName", self.type_name.is_some())?;
        if self.arn.is_none() && self.type_name.is_none() {
            return Err(ValidationError::OneOfRequired {
                fields: &["Arn", "TypeName"],
            });
        }
        if self.type_name.is_some() && self.registry_type.is_none() {
            return Err(ValidationError::CoRequired {
                field: "TypeName",
                required: "Type",
            });
        }
        length("Arn", self.arn.as_deref(), 1, 1024)?;
        matches("Arn", self.arn.as_deref(), &TYPE_ARN)?;
        length("TypeName", self.type_name.as_deref(), 10, 196)?;
        matches("TypeName", self.type_name.as_deref(), &TYPE_NAME)?;
        length("VersionId", self.version_id.as_deref(), 1, 128)?;
        matches("VersionId", self.version_id.as_deref(), &TYPE_VERSION_ID)
    }
}
