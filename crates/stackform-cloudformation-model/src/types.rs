//! Shared CloudFormation types: enumerations, nested structures, and the
//! resource entities returned by describe operations.
//!
//! All structs use the CloudFormation service field names in their serde
//! representation (`PascalCase`, with the service's own acronym spelling such
//! as `RoleARN` and `NotificationARNs`). Absent fields are `None` and are
//! omitted when serialized. Collections are `Option<Vec<T>>` so that an
//! explicitly empty list (which clears a value on update operations) stays
//! distinguishable from an omitted one.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::display::Fields;

/// Append `item` to an optional list, allocating the list when absent.
pub(crate) fn push_item<T>(list: &mut Option<Vec<T>>, item: T) {
    list.get_or_insert_with(Vec::new).push(item);
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Declares a closed enumeration backed by its service wire string.
///
/// Each generated enum gets `ALL`, `as_str`, `Display`, and a `FromStr` that
/// rejects values outside the allowed set.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in service model order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire-format string representation.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::validation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(crate::validation::ValidationError::UnknownEnumValue {
                        type_name: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Lifecycle status of a stack.
    pub enum StackStatus {
        CreateInProgress => "CREATE_IN_PROGRESS",
        CreateFailed => "CREATE_FAILED",
        CreateComplete => "CREATE_COMPLETE",
        RollbackInProgress => "ROLLBACK_IN_PROGRESS",
        RollbackFailed => "ROLLBACK_FAILED",
        RollbackComplete => "ROLLBACK_COMPLETE",
        DeleteInProgress => "DELETE_IN_PROGRESS",
        DeleteFailed => "DELETE_FAILED",
        DeleteComplete => "DELETE_COMPLETE",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        UpdateCompleteCleanupInProgress => "UPDATE_COMPLETE_CLEANUP_IN_PROGRESS",
        UpdateComplete => "UPDATE_COMPLETE",
        UpdateRollbackInProgress => "UPDATE_ROLLBACK_IN_PROGRESS",
        UpdateRollbackFailed => "UPDATE_ROLLBACK_FAILED",
        UpdateRollbackCompleteCleanupInProgress => "UPDATE_ROLLBACK_COMPLETE_CLEANUP_IN_PROGRESS",
        UpdateRollbackComplete => "UPDATE_ROLLBACK_COMPLETE",
        ReviewInProgress => "REVIEW_IN_PROGRESS",
        ImportInProgress => "IMPORT_IN_PROGRESS",
        ImportComplete => "IMPORT_COMPLETE",
        ImportRollbackInProgress => "IMPORT_ROLLBACK_IN_PROGRESS",
        ImportRollbackFailed => "IMPORT_ROLLBACK_FAILED",
        ImportRollbackComplete => "IMPORT_ROLLBACK_COMPLETE",
    }
}

impl StackStatus {
    /// Whether the stack is in the middle of an operation.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.as_str().ends_with("_IN_PROGRESS")
    }

    /// Whether the last operation on the stack failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.as_str().ends_with("_FAILED")
    }

    /// Whether the stack has settled and no operation is running.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }
}

wire_enum! {
    /// Status of a stack set.
    pub enum StackSetStatus {
        Active => "ACTIVE",
        Deleted => "DELETED",
    }
}

wire_enum! {
    /// How IAM roles for stack set operations are provisioned.
    pub enum PermissionModels {
        /// Roles are created by AWS Organizations on behalf of the caller.
        ServiceManaged => "SERVICE_MANAGED",
        /// The caller creates the administration and execution roles.
        SelfManaged => "SELF_MANAGED",
    }
}

wire_enum! {
    /// Capabilities that must be acknowledged before certain templates run.
    pub enum Capability {
        Iam => "CAPABILITY_IAM",
        NamedIam => "CAPABILITY_NAMED_IAM",
        AutoExpand => "CAPABILITY_AUTO_EXPAND",
    }
}

wire_enum! {
    /// Action taken when stack creation fails.
    pub enum OnFailure {
        DoNothing => "DO_NOTHING",
        Rollback => "ROLLBACK",
        Delete => "DELETE",
    }
}

wire_enum! {
    /// Kind of change set.
    pub enum ChangeSetType {
        Create => "CREATE",
        Update => "UPDATE",
        Import => "IMPORT",
    }
}

wire_enum! {
    /// Action performed by a stack set operation.
    pub enum StackSetOperationAction {
        Create => "CREATE",
        Update => "UPDATE",
        Delete => "DELETE",
        DetectDrift => "DETECT_DRIFT",
    }
}

wire_enum! {
    /// Status of a stack set operation.
    pub enum StackSetOperationStatus {
        Running => "RUNNING",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        Stopping => "STOPPING",
        Stopped => "STOPPED",
        Queued => "QUEUED",
    }
}

wire_enum! {
    /// Kind of registry extension.
    pub enum RegistryType {
        Resource => "RESOURCE",
    }
}

wire_enum! {
    /// Whether a registered type can be used in templates, and how.
    pub enum ProvisioningType {
        NonProvisionable => "NON_PROVISIONABLE",
        Immutable => "IMMUTABLE",
        FullyMutable => "FULLY_MUTABLE",
    }
}

wire_enum! {
    /// Deprecation status of a registered type.
    pub enum DeprecatedStatus {
        Live => "LIVE",
        Deprecated => "DEPRECATED",
    }
}

wire_enum! {
    /// Visibility of a registered type.
    pub enum Visibility {
        Public => "PUBLIC",
        Private => "PRIVATE",
    }
}

wire_enum! {
    /// Drift status of a stack.
    pub enum StackDriftStatus {
        Drifted => "DRIFTED",
        InSync => "IN_SYNC",
        Unknown => "UNKNOWN",
        NotChecked => "NOT_CHECKED",
    }
}

wire_enum! {
    /// Drift status of a stack set.
    pub enum StackSetDriftStatus {
        Drifted => "DRIFTED",
        InSync => "IN_SYNC",
        NotChecked => "NOT_CHECKED",
    }
}

wire_enum! {
    /// Status of a stack set drift detection operation.
    pub enum StackSetDriftDetectionStatus {
        Completed => "COMPLETED",
        Failed => "FAILED",
        PartialSuccess => "PARTIAL_SUCCESS",
        InProgress => "IN_PROGRESS",
        Stopped => "STOPPED",
    }
}

wire_enum! {
    /// Lifecycle status of a single stack resource.
    pub enum ResourceStatus {
        CreateInProgress => "CREATE_IN_PROGRESS",
        CreateFailed => "CREATE_FAILED",
        CreateComplete => "CREATE_COMPLETE",
        DeleteInProgress => "DELETE_IN_PROGRESS",
        DeleteFailed => "DELETE_FAILED",
        DeleteComplete => "DELETE_COMPLETE",
        DeleteSkipped => "DELETE_SKIPPED",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        UpdateFailed => "UPDATE_FAILED",
        UpdateComplete => "UPDATE_COMPLETE",
        ImportFailed => "IMPORT_FAILED",
        ImportComplete => "IMPORT_COMPLETE",
        ImportInProgress => "IMPORT_IN_PROGRESS",
        ImportRollbackInProgress => "IMPORT_ROLLBACK_IN_PROGRESS",
        ImportRollbackFailed => "IMPORT_ROLLBACK_FAILED",
        ImportRollbackComplete => "IMPORT_ROLLBACK_COMPLETE",
    }
}

wire_enum! {
    /// Drift status of a single stack resource.
    pub enum StackResourceDriftStatus {
        InSync => "IN_SYNC",
        Modified => "MODIFIED",
        Deleted => "DELETED",
        NotChecked => "NOT_CHECKED",
    }
}

// ---------------------------------------------------------------------------
// Structs - parameters, outputs, tags
// ---------------------------------------------------------------------------

/// An input parameter for a stack or stack set template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    /// The key of the parameter. Defaults to the template's default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_key: Option<String>,
    /// The input value of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    /// Reuse the value currently stored for this key on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_previous_value: Option<bool>,
    /// The value resolved from an SSM parameter type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<String>,
}

impl Parameter {
    /// A parameter with an explicit value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parameter_key: Some(key.into()),
            parameter_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A parameter that keeps its previously stored value.
    #[must_use]
    pub fn use_previous(key: impl Into<String>) -> Self {
        Self {
            parameter_key: Some(key.into()),
            use_previous_value: Some(true),
            ..Self::default()
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("ParameterKey", self.parameter_key.as_ref())
            .field("ParameterValue", self.parameter_value.as_ref())
            .field("UsePreviousValue", self.use_previous_value)
            .field("ResolvedValue", self.resolved_value.as_ref())
            .finish()
    }
}

/// A stack output value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_value: Option<String>,
    /// User-defined description of the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the cross-stack export, if the output is exported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("OutputKey", self.output_key.as_ref())
            .field("OutputValue", self.output_value.as_ref())
            .field("Description", self.description.as_ref())
            .field("ExportName", self.export_name.as_ref())
            .finish()
    }
}

/// A key-value tag propagated to stacks and their resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// The tag key (1 to 128 characters, must not start with `aws:`).
    pub key: String,
    /// The tag value (1 to 256 characters).
    pub value: String,
}

impl Tag {
    /// Create a new tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("Key", Some(&self.key))
            .field("Value", Some(&self.value))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Structs - rollback and drift
// ---------------------------------------------------------------------------

/// A CloudWatch alarm or composite alarm monitored during stack operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RollbackTrigger {
    /// ARN of the alarm.
    pub arn: String,
    /// Resource type of the alarm, e.g. `AWS::CloudWatch::Alarm`.
    #[serde(rename = "Type")]
    pub trigger_type: String,
}

impl RollbackTrigger {
    /// Resource type for a metric alarm trigger.
    pub const ALARM: &'static str = "AWS::CloudWatch::Alarm";

    /// Create a trigger for the given alarm.
    #[must_use]
    pub fn new(arn: impl Into<String>, trigger_type: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            trigger_type: trigger_type.into(),
        }
    }
}

impl fmt::Display for RollbackTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("Arn", Some(&self.arn))
            .field("Type", Some(&self.trigger_type))
            .finish()
    }
}

/// Rollback triggers monitored while creating and updating a stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct RollbackConfiguration {
    /// At most five triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub rollback_triggers: Option<Vec<RollbackTrigger>>,
    /// Minutes (0 to 180) to keep monitoring after resources are deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub monitoring_time_in_minutes: Option<i32>,
}

impl fmt::Display for RollbackConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .list("RollbackTriggers", self.rollback_triggers.as_deref())
            .field("MonitoringTimeInMinutes", self.monitoring_time_in_minutes)
            .finish()
    }
}

/// Drift status of a stack as of its last drift check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackDriftInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_drift_status: Option<StackDriftStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_check_timestamp: Option<DateTime<Utc>>,
}

impl fmt::Display for StackDriftInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackDriftStatus", self.stack_drift_status.as_ref())
            .field("LastCheckTimestamp", self.last_check_timestamp.as_ref())
            .finish()
    }
}

/// Drift status of a single stack resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackResourceDriftInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_resource_drift_status: Option<StackResourceDriftStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_check_timestamp: Option<DateTime<Utc>>,
}

impl fmt::Display for StackResourceDriftInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackResourceDriftStatus", self.stack_resource_drift_status.as_ref())
            .field("LastCheckTimestamp", self.last_check_timestamp.as_ref())
            .finish()
    }
}

/// Summary of the last drift detection run against a stack set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetDriftDetectionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_status: Option<StackSetDriftStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_detection_status: Option<StackSetDriftDetectionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_drift_check_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drifted_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_sync_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stack_instances_count: Option<i32>,
}

impl fmt::Display for StackSetDriftDetectionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("DriftStatus", self.drift_status.as_ref())
            .field("DriftDetectionStatus", self.drift_detection_status.as_ref())
            .field("LastDriftCheckTimestamp", self.last_drift_check_timestamp.as_ref())
            .field("TotalStackInstancesCount", self.total_stack_instances_count)
            .field("DriftedStackInstancesCount", self.drifted_stack_instances_count)
            .field("InSyncStackInstancesCount", self.in_sync_stack_instances_count)
            .field("InProgressStackInstancesCount", self.in_progress_stack_instances_count)
            .field("FailedStackInstancesCount", self.failed_stack_instances_count)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Structs - stack set deployment
// ---------------------------------------------------------------------------

/// Automatic deployment settings for service-managed stack sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct AutoDeployment {
    /// Deploy to accounts added to a target organizational unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub enabled: Option<bool>,
    /// Keep stack resources when an account leaves the target unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub retain_stacks_on_account_removal: Option<bool>,
}

impl fmt::Display for AutoDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("Enabled", self.enabled)
            .field("RetainStacksOnAccountRemoval", self.retain_stacks_on_account_removal)
            .finish()
    }
}

/// How a stack set operation is rolled out across accounts and regions.
///
/// A count and its matching percentage are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetOperationPreferences {
    /// Order in which regions are processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub region_order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub failure_tolerance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub failure_tolerance_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub max_concurrent_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub max_concurrent_percentage: Option<i32>,
}

impl fmt::Display for StackSetOperationPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .list("RegionOrder", self.region_order.as_deref())
            .field("FailureToleranceCount", self.failure_tolerance_count)
            .field("FailureTolerancePercentage", self.failure_tolerance_percentage)
            .field("MaxConcurrentCount", self.max_concurrent_count)
            .field("MaxConcurrentPercentage", self.max_concurrent_percentage)
            .finish()
    }
}

/// Accounts or organizational units targeted by a stack set operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentTargets {
    /// Twelve-digit account IDs (self-managed permissions).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub accounts: Option<Vec<String>>,
    /// Organization root or organizational unit IDs (service-managed permissions).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub organizational_unit_ids: Option<Vec<String>>,
}

impl fmt::Display for DeploymentTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .list("Accounts", self.accounts.as_deref())
            .list("OrganizationalUnitIds", self.organizational_unit_ids.as_deref())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Structs - registry and import
// ---------------------------------------------------------------------------

/// Where a registered type sends its handler logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingConfig {
    /// Role assumed to write to CloudWatch Logs.
    pub log_role_arn: String,
    /// CloudWatch log group receiving the handler logs.
    pub log_group_name: String,
}

impl fmt::Display for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("LogRoleArn", Some(&self.log_role_arn))
            .field("LogGroupName", Some(&self.log_group_name))
            .finish()
    }
}

/// An existing resource to bring under stack management through an import
/// change set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceToImport {
    /// Type of the resource, e.g. `AWS::S3::Bucket`.
    pub resource_type: String,
    /// Logical ID the resource takes in the template.
    pub logical_resource_id: String,
    /// Identifier properties of the live resource, e.g. `BucketName`.
    pub resource_identifier: BTreeMap<String, String>,
}

impl fmt::Display for ResourceToImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("ResourceType", Some(&self.resource_type))
            .field("LogicalResourceId", Some(&self.logical_resource_id))
            .map("ResourceIdentifier", Some(&self.resource_identifier))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Structs - resource entities
// ---------------------------------------------------------------------------

/// A stack as returned by `DescribeStacks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stack {
    /// Unique identifier (ARN) of the stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_name: Option<String>,
    /// The change set that created the stack, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_configuration: Option<RollbackConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_status: Option<StackStatus>,
    /// Success or failure message associated with the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_rollback: Option<bool>,
    /// SNS topic ARNs receiving stack events.
    #[serde(rename = "NotificationARNs", skip_serializing_if = "Option::is_none")]
    pub notification_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_in_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<Capability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
    /// Service role used for stack operations.
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_termination_protection: Option<bool>,
    /// Stack ID of the direct parent, for nested stacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Stack ID of the top-level stack, for nested stacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_information: Option<StackDriftInformation>,
}

impl Stack {
    /// Whether this stack is nested inside another stack.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Look up an output value by key.
    #[must_use]
    pub fn output_value(&self, key: &str) -> Option<&str> {
        self.outputs
            .as_deref()?
            .iter()
            .find(|o| o.output_key.as_deref() == Some(key))
            .and_then(|o| o.output_value.as_deref())
    }

    /// Append a parameter.
    pub fn push_parameter(&mut self, parameter: Parameter) -> &mut Self {
        push_item(&mut self.parameters, parameter);
        self
    }

    /// Append an output.
    pub fn push_output(&mut self, output: Output) -> &mut Self {
        push_item(&mut self.outputs, output);
        self
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: Tag) -> &mut Self {
        push_item(&mut self.tags, tag);
        self
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackId", self.stack_id.as_ref())
            .field("StackName", self.stack_name.as_ref())
            .field("ChangeSetId", self.change_set_id.as_ref())
            .field("Description", self.description.as_ref())
            .list("Parameters", self.parameters.as_deref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("DeletionTime", self.deletion_time.as_ref())
            .field("LastUpdatedTime", self.last_updated_time.as_ref())
            .field("RollbackConfiguration", self.rollback_configuration.as_ref())
            .field("StackStatus", self.stack_status.as_ref())
            .field("StackStatusReason", self.stack_status_reason.as_ref())
            .field("DisableRollback", self.disable_rollback)
            .list("NotificationARNs", self.notification_arns.as_deref())
            .field("TimeoutInMinutes", self.timeout_in_minutes)
            .list("Capabilities", self.capabilities.as_deref())
            .list("Outputs", self.outputs.as_deref())
            .field("RoleARN", self.role_arn.as_ref())
            .list("Tags", self.tags.as_deref())
            .field("EnableTerminationProtection", self.enable_termination_protection)
            .field("ParentId", self.parent_id.as_ref())
            .field("RootId", self.root_id.as_ref())
            .field("DriftInformation", self.drift_information.as_ref())
            .finish()
    }
}

/// A stack set as returned by `DescribeStackSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StackSetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<Capability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "StackSetARN", skip_serializing_if = "Option::is_none")]
    pub stack_set_arn: Option<String>,
    #[serde(rename = "AdministrationRoleARN", skip_serializing_if = "Option::is_none")]
    pub administration_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_drift_detection_details: Option<StackSetDriftDetectionDetails>,
    /// Only meaningful for service-managed stack sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_deployment: Option<AutoDeployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_model: Option<PermissionModels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit_ids: Option<Vec<String>>,
}

impl StackSet {
    /// Append a parameter.
    pub fn push_parameter(&mut self, parameter: Parameter) -> &mut Self {
        push_item(&mut self.parameters, parameter);
        self
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: Tag) -> &mut Self {
        push_item(&mut self.tags, tag);
        self
    }
}

impl fmt::Display for StackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSetName", self.stack_set_name.as_ref())
            .field("StackSetId", self.stack_set_id.as_ref())
            .field("Description", self.description.as_ref())
            .field("Status", self.status.as_ref())
            .field("TemplateBody", self.template_body.as_ref())
            .list("Parameters", self.parameters.as_deref())
            .list("Capabilities", self.capabilities.as_deref())
            .list("Tags", self.tags.as_deref())
            .field("StackSetARN", self.stack_set_arn.as_ref())
            .field("AdministrationRoleARN", self.administration_role_arn.as_ref())
            .field("ExecutionRoleName", self.execution_role_name.as_ref())
            .field(
                "StackSetDriftDetectionDetails",
                self.stack_set_drift_detection_details.as_ref(),
            )
            .field("AutoDeployment", self.auto_deployment.as_ref())
            .field("PermissionModel", self.permission_model.as_ref())
            .list("OrganizationalUnitIds", self.organizational_unit_ids.as_deref())
            .finish()
    }
}

/// A stack set operation as returned by `DescribeStackSetOperation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<StackSetOperationAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StackSetOperationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_preferences: Option<StackSetOperationPreferences>,
    /// For delete operations, whether stacks were kept after leaving the set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_stacks: Option<bool>,
    #[serde(rename = "AdministrationRoleARN", skip_serializing_if = "Option::is_none")]
    pub administration_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_targets: Option<DeploymentTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_drift_detection_details: Option<StackSetDriftDetectionDetails>,
}

impl StackSetOperation {
    /// Whether the operation has stopped making progress, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            Some(
                StackSetOperationStatus::Succeeded
                    | StackSetOperationStatus::Failed
                    | StackSetOperationStatus::Stopped
            )
        )
    }
}

impl fmt::Display for StackSetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("OperationId", self.operation_id.as_ref())
            .field("StackSetId", self.stack_set_id.as_ref())
            .field("Action", self.action.as_ref())
            .field("Status", self.status.as_ref())
            .field("OperationPreferences", self.operation_preferences.as_ref())
            .field("RetainStacks", self.retain_stacks)
            .field("AdministrationRoleARN", self.administration_role_arn.as_ref())
            .field("ExecutionRoleName", self.execution_role_name.as_ref())
            .field("CreationTimestamp", self.creation_timestamp.as_ref())
            .field("EndTimestamp", self.end_timestamp.as_ref())
            .field("DeploymentTargets", self.deployment_targets.as_ref())
            .field(
                "StackSetDriftDetectionDetails",
                self.stack_set_drift_detection_details.as_ref(),
            )
            .finish()
    }
}

/// A resource of a stack as returned by `DescribeStackResources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    /// Logical name of the resource in the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_resource_id: Option<String>,
    /// Name or unique identifier of the live resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Time the status was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_information: Option<StackResourceDriftInformation>,
}

impl fmt::Display for StackResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackName", self.stack_name.as_ref())
            .field("StackId", self.stack_id.as_ref())
            .field("LogicalResourceId", self.logical_resource_id.as_ref())
            .field("PhysicalResourceId", self.physical_resource_id.as_ref())
            .field("ResourceType", self.resource_type.as_ref())
            .field("Timestamp", self.timestamp.as_ref())
            .field("ResourceStatus", self.resource_status.as_ref())
            .field("ResourceStatusReason", self.resource_status_reason.as_ref())
            .field("Description", self.description.as_ref())
            .field("DriftInformation", self.drift_information.as_ref())
            .finish()
    }
}
