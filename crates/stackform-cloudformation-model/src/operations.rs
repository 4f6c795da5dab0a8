//! CloudFormation operation catalog.

use std::fmt;

use crate::validation::Validate;

/// API version of the Query protocol endpoint.
pub const API_VERSION: &str = "2010-05-15";

/// Service name used in signing scopes and endpoints.
pub const SERVICE_NAME: &str = "cloudformation";

/// All CloudFormation API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CloudFormationOperation {
    // Stacks
    /// Cancel an in-progress stack update.
    CancelUpdateStack,
    /// Continue rolling back a stack stuck in `UPDATE_ROLLBACK_FAILED`.
    ContinueUpdateRollback,
    /// Create a stack.
    CreateStack,
    /// Delete a stack.
    DeleteStack,
    /// Describe one or all stacks.
    DescribeStacks,
    /// List stack summaries.
    ListStacks,
    /// Update a stack.
    UpdateStack,
    /// Enable or disable termination protection.
    UpdateTerminationProtection,
    /// Describe the account's CloudFormation limits.
    DescribeAccountLimits,
    /// Describe stack events.
    DescribeStackEvents,
    /// Describe one stack resource.
    DescribeStackResource,
    /// Describe the resources of a stack.
    DescribeStackResources,
    /// List stack resource summaries.
    ListStackResources,
    /// Get a stack's policy.
    GetStackPolicy,
    /// Set a stack's policy.
    SetStackPolicy,
    /// Send a signal to a resource awaiting one.
    SignalResource,

    // Templates
    /// Estimate the monthly cost of a template.
    EstimateTemplateCost,
    /// Get a stack's template.
    GetTemplate,
    /// Summarize a template.
    GetTemplateSummary,
    /// Validate a template.
    ValidateTemplate,
    /// List exported output values.
    ListExports,
    /// List stacks importing an export.
    ListImports,

    // Change sets
    /// Create a change set.
    CreateChangeSet,
    /// Delete a change set.
    DeleteChangeSet,
    /// Describe a change set.
    DescribeChangeSet,
    /// Execute a change set.
    ExecuteChangeSet,
    /// List change sets of a stack.
    ListChangeSets,

    // Stack sets
    /// Create stack instances.
    CreateStackInstances,
    /// Create a stack set.
    CreateStackSet,
    /// Delete stack instances.
    DeleteStackInstances,
    /// Delete a stack set.
    DeleteStackSet,
    /// Describe a stack instance.
    DescribeStackInstance,
    /// Describe a stack set.
    DescribeStackSet,
    /// Describe a stack set operation.
    DescribeStackSetOperation,
    /// List stack instances.
    ListStackInstances,
    /// List results of a stack set operation.
    ListStackSetOperationResults,
    /// List stack set operations.
    ListStackSetOperations,
    /// List stack sets.
    ListStackSets,
    /// Stop a stack set operation.
    StopStackSetOperation,
    /// Update stack instances.
    UpdateStackInstances,
    /// Update a stack set.
    UpdateStackSet,

    // Drift
    /// Describe a stack drift detection run.
    DescribeStackDriftDetectionStatus,
    /// Describe drifted resources of a stack.
    DescribeStackResourceDrifts,
    /// Detect drift on a stack.
    DetectStackDrift,
    /// Detect drift on a single resource.
    DetectStackResourceDrift,
    /// Detect drift on a stack set.
    DetectStackSetDrift,

    // Registry
    /// Deregister a type or type version.
    DeregisterType,
    /// Describe a registered type.
    DescribeType,
    /// Describe a type registration request.
    DescribeTypeRegistration,
    /// List type registration requests.
    ListTypeRegistrations,
    /// List versions of a type.
    ListTypeVersions,
    /// List registered types.
    ListTypes,
    /// Report handler progress back to CloudFormation.
    RecordHandlerProgress,
    /// Register a type.
    RegisterType,
    /// Set the default version of a type.
    SetTypeDefaultVersion,
}

impl CloudFormationOperation {
    /// Every operation, grouped by resource family.
    pub const ALL: &'static [Self] = &[
        Self::CancelUpdateStack,
        Self::ContinueUpdateRollback,
        Self::CreateStack,
        Self::DeleteStack,
        Self::DescribeStacks,
        Self::ListStacks,
        Self::UpdateStack,
        Self::UpdateTerminationProtection,
        Self::DescribeAccountLimits,
        Self::DescribeStackEvents,
        Self::DescribeStackResource,
        Self::DescribeStackResources,
        Self::ListStackResources,
        Self::GetStackPolicy,
        Self::SetStackPolicy,
        Self::SignalResource,
        Self::EstimateTemplateCost,
        Self::GetTemplate,
        Self::GetTemplateSummary,
        Self::ValidateTemplate,
        Self::ListExports,
        Self::ListImports,
        Self::CreateChangeSet,
        Self::DeleteChangeSet,
        Self::DescribeChangeSet,
        Self::ExecuteChangeSet,
        Self::ListChangeSets,
        Self::CreateStackInstances,
        Self::CreateStackSet,
        Self::DeleteStackInstances,
        Self::DeleteStackSet,
        Self::DescribeStackInstance,
        Self::DescribeStackSet,
        Self::DescribeStackSetOperation,
        Self::ListStackInstances,
        Self::ListStackSetOperationResults,
        Self::ListStackSetOperations,
        Self::ListStackSets,
        Self::StopStackSetOperation,
        Self::UpdateStackInstances,
        Self::UpdateStackSet,
        Self::DescribeStackDriftDetectionStatus,
        Self::DescribeStackResourceDrifts,
        Self::DetectStackDrift,
        Self::DetectStackResourceDrift,
        Self::DetectStackSetDrift,
        Self::DeregisterType,
        Self::DescribeType,
        Self::DescribeTypeRegistration,
        Self::ListTypeRegistrations,
        Self::ListTypeVersions,
        Self::ListTypes,
        Self::RecordHandlerProgress,
        Self::RegisterType,
        Self::SetTypeDefaultVersion,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CancelUpdateStack => "CancelUpdateStack",
            Self::ContinueUpdateRollback => "ContinueUpdateRollback",
            Self::CreateStack => "CreateStack",
            Self::DeleteStack => "DeleteStack",
            Self::DescribeStacks => "DescribeStacks",
            Self::ListStacks => "ListStacks",
            Self::UpdateStack => "UpdateStack",
            Self::UpdateTerminationProtection => "UpdateTerminationProtection",
            Self::DescribeAccountLimits => "DescribeAccountLimits",
            Self::DescribeStackEvents => "DescribeStackEvents",
            Self::DescribeStackResource => "DescribeStackResource",
            Self::DescribeStackResources => "DescribeStackResources",
            Self::ListStackResources => "ListStackResources",
            Self::GetStackPolicy => "GetStackPolicy",
            Self::SetStackPolicy => "SetStackPolicy",
            Self::SignalResource => "SignalResource",
            Self::EstimateTemplateCost => "EstimateTemplateCost",
            Self::GetTemplate => "GetTemplate",
            Self::GetTemplateSummary => "GetTemplateSummary",
            Self::ValidateTemplate => "ValidateTemplate",
            Self::ListExports => "ListExports",
            Self::ListImports => "ListImports",
            Self::CreateChangeSet => "CreateChangeSet",
            Self::DeleteChangeSet => "DeleteChangeSet",
            Self::DescribeChangeSet => "DescribeChangeSet",
            Self::ExecuteChangeSet => "ExecuteChangeSet",
            Self::ListChangeSets => "ListChangeSets",
            Self::CreateStackInstances => "CreateStackInstances",
            Self::CreateStackSet => "CreateStackSet",
            Self::DeleteStackInstances => "DeleteStackInstances",
            Self::DeleteStackSet => "DeleteStackSet",
            Self::DescribeStackInstance => "DescribeStackInstance",
            Self::DescribeStackSet => "DescribeStackSet",
            Self::DescribeStackSetOperation => "DescribeStackSetOperation",
            Self::ListStackInstances => "ListStackInstances",
            Self::ListStackSetOperationResults => "ListStackSetOperationResults",
            Self::ListStackSetOperations => "ListStackSetOperations",
            Self::ListStackSets => "ListStackSets",
            Self::StopStackSetOperation => "StopStackSetOperation",
            Self::UpdateStackInstances => "UpdateStackInstances",
            Self::UpdateStackSet => "UpdateStackSet",
            Self::DescribeStackDriftDetectionStatus => "DescribeStackDriftDetectionStatus",
            Self::DescribeStackResourceDrifts => "DescribeStackResourceDrifts",
            Self::DetectStackDrift => "DetectStackDrift",
            Self::DetectStackResourceDrift => "DetectStackResourceDrift",
            Self::DetectStackSetDrift => "DetectStackSetDrift",
            Self::DeregisterType => "DeregisterType",
            Self::DescribeType => "DescribeType",
            Self::DescribeTypeRegistration => "DescribeTypeRegistration",
            Self::ListTypeRegistrations => "ListTypeRegistrations",
            Self::ListTypeVersions => "ListTypeVersions",
            Self::ListTypes => "ListTypes",
            Self::RecordHandlerProgress => "RecordHandlerProgress",
            Self::RegisterType => "RegisterType",
            Self::SetTypeDefaultVersion => "SetTypeDefaultVersion",
        }
    }

    /// Parse an operation name string into an operation enum.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Whether this crate carries input and output types for the operation.
    #[must_use]
    pub fn is_modeled(&self) -> bool {
        matches!(
            self,
            Self::CreateStack
                | Self::UpdateStack
                | Self::DeleteStack
                | Self::DescribeStacks
                | Self::DescribeStackResources
                | Self::CreateStackSet
                | Self::UpdateStackSet
                | Self::DescribeStackSet
                | Self::DescribeStackSetOperation
                | Self::CreateChangeSet
                | Self::DescribeType
        )
    }
}

impl fmt::Display for CloudFormationOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation input with a known operation and output shape.
pub trait OperationInput: Validate {
    /// Shape returned by the operation.
    type Output;

    /// The operation this input belongs to.
    const OPERATION: CloudFormationOperation;

    /// Slot holding the idempotency token, for inputs that carry one.
    fn idempotency_token_mut(&mut self) -> Option<&mut Option<String>> {
        None
    }
}
