//! CloudFormation operation input types.
//!
//! Every input derives a typed builder. Identifying names are plain `String`
//! fields that the builder requires; everything else is optional. Builder
//! setters for collections replace the stored list, while the `push_*`
//! helpers append to it.

use std::fmt;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::display::Fields;
use crate::operations::{CloudFormationOperation, OperationInput};
use crate::output::{
    CreateChangeSetOutput, CreateStackOutput, CreateStackSetOutput, DeleteStackOutput,
    DescribeStackResourcesOutput, DescribeStackSetOperationOutput, DescribeStackSetOutput,
    DescribeStacksOutput, DescribeTypeOutput, UpdateStackOutput, UpdateStackSetOutput,
};
use crate::types::{
    AutoDeployment, Capability, ChangeSetType, DeploymentTargets, OnFailure, Parameter,
    PermissionModels, RegistryType, ResourceToImport, RollbackConfiguration,
    StackSetOperationPreferences, Tag, push_item,
};

// ---------------------------------------------------------------------------
// Stacks
// ---------------------------------------------------------------------------

/// Input for the `CreateStack` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStackInput {
    /// Name of the new stack, unique within the region.
    #[builder(setter(into))]
    pub stack_name: String,
    /// Inline template document. Exclusive with `template_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_body: Option<String>,
    /// Location of the template in S3. Exclusive with `template_body`.
    #[serde(rename = "TemplateURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub parameters: Option<Vec<Parameter>>,
    /// Exclusive with `on_failure`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub disable_rollback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub rollback_configuration: Option<RollbackConfiguration>,
    /// Minutes before the stack creation times out.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub timeout_in_minutes: Option<i32>,
    #[serde(rename = "NotificationARNs", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub notification_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub capabilities: Option<Vec<Capability>>,
    /// Resource types the caller is allowed to work with, e.g. `AWS::EC2::*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub resource_types: Option<Vec<String>>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub on_failure: Option<OnFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_policy_body: Option<String>,
    #[serde(rename = "StackPolicyURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_policy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub enable_termination_protection: Option<bool>,
}

impl CreateStackInput {
    /// Append a parameter.
    pub fn push_parameter(&mut self, parameter: Parameter) -> &mut Self {
        push_item(&mut self.parameters, parameter);
        self
    }

    /// Append a capability acknowledgement.
    pub fn push_capability(&mut self, capability: Capability) -> &mut Self {
        push_item(&mut self.capabilities, capability);
        self
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: Tag) -> &mut Self {
        push_item(&mut self.tags, tag);
        self
    }

    /// Append an SNS topic ARN.
    pub fn push_notification_arn(&mut self, arn: impl Into<String>) -> &mut Self {
        push_item(&mut self.notification_arns, arn.into());
        self
    }
}

impl fmt::Display for CreateStackInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackName", Some(&self.stack_name))
            .field("TemplateBody", self.template_body.as_ref())
            .field("TemplateURL", self.template_url.as_ref())
            .list("Parameters", self.parameters.as_deref())
            .field("DisableRollback", self.disable_rollback)
            .field("RollbackConfiguration", self.rollback_configuration.as_ref())
            .field("TimeoutInMinutes", self.timeout_in_minutes)
            .list("NotificationARNs", self.notification_arns.as_deref())
            .list("Capabilities", self.capabilities.as_deref())
            .list("ResourceTypes", self.resource_types.as_deref())
            .field("RoleARN", self.role_arn.as_ref())
            .field("OnFailure", self.on_failure.as_ref())
            .field("StackPolicyBody", self.stack_policy_body.as_ref())
            .field("StackPolicyURL", self.stack_policy_url.as_ref())
            .list("Tags", self.tags.as_deref())
            .field("ClientRequestToken", self.client_request_token.as_ref())
            .field("EnableTerminationProtection", self.enable_termination_protection)
            .finish()
    }
}

/// Input for the `UpdateStack` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStackInput {
    /// Name or unique stack ID of the stack to update.
    #[builder(setter(into))]
    pub stack_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_body: Option<String>,
    #[serde(rename = "TemplateURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_url: Option<String>,
    /// Reuse the template currently associated with the stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub use_previous_template: Option<bool>,
    /// Temporary policy in effect only for this update.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_policy_during_update_body: Option<String>,
    #[serde(rename = "StackPolicyDuringUpdateURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_policy_during_update_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub capabilities: Option<Vec<Capability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub resource_types: Option<Vec<String>>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub rollback_configuration: Option<RollbackConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_policy_body: Option<String>,
    #[serde(rename = "StackPolicyURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_policy_url: Option<String>,
    /// An explicitly empty list removes every notification topic.
    #[serde(rename = "NotificationARNs", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub notification_arns: Option<Vec<String>>,
    /// An explicitly empty list removes every tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub client_request_token: Option<String>,
}

impl UpdateStackInput {
    /// Append a parameter.
    pub fn push_parameter(&mut self, parameter: Parameter) -> &mut Self {
        push_item(&mut self.parameters, parameter);
        self
    }

    /// Append a capability acknowledgement.
    pub fn push_capability(&mut self, capability: Capability) -> &mut Self {
        push_item(&mut self.capabilities, capability);
        self
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: Tag) -> &mut Self {
        push_item(&mut self.tags, tag);
        self
    }
}

impl fmt::Display for UpdateStackInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackName", Some(&self.stack_name))
            .field("TemplateBody", self.template_body.as_ref())
            .field("TemplateURL", self.template_url.as_ref())
            .field("UsePreviousTemplate", self.use_previous_template)
            .field(
                "StackPolicyDuringUpdateBody",
                self.stack_policy_during_update_body.as_ref(),
            )
            .field(
                "StackPolicyDuringUpdateURL",
                self.stack_policy_during_update_url.as_ref(),
            )
            .list("Parameters", self.parameters.as_deref())
            .list("Capabilities", self.capabilities.as_deref())
            .list("ResourceTypes", self.resource_types.as_deref())
            .field("RoleARN", self.role_arn.as_ref())
            .field("RollbackConfiguration", self.rollback_configuration.as_ref())
            .field("StackPolicyBody", self.stack_policy_body.as_ref())
            .field("StackPolicyURL", self.stack_policy_url.as_ref())
            .list("NotificationARNs", self.notification_arns.as_deref())
            .list("Tags", self.tags.as_deref())
            .field("ClientRequestToken", self.client_request_token.as_ref())
            .finish()
    }
}

/// Input for the `DeleteStack` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteStackInput {
    /// Name or unique stack ID of the stack to delete.
    #[builder(setter(into))]
    pub stack_name: String,
    /// Logical IDs of resources to keep. Only valid for stacks in
    /// `DELETE_FAILED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub retain_resources: Option<Vec<String>>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub client_request_token: Option<String>,
}

impl fmt::Display for DeleteStackInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackName", Some(&self.stack_name))
            .list("RetainResources", self.retain_resources.as_deref())
            .field("RoleARN", self.role_arn.as_ref())
            .field("ClientRequestToken", self.client_request_token.as_ref())
            .finish()
    }
}

/// Input for the `DescribeStacks` operation. Describes every stack when no
/// name is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStacksInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_name: Option<String>,
    /// Pagination token from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub next_token: Option<String>,
}

impl fmt::Display for DescribeStacksInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackName", self.stack_name.as_ref())
            .field("NextToken", self.next_token.as_ref())
            .finish()
    }
}

/// Input for the `DescribeStackResources` operation.
///
/// Either `stack_name` or `physical_resource_id` must be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackResourcesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub logical_resource_id: Option<String>,
    /// Returns the resources of the stack that owns this physical resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub physical_resource_id: Option<String>,
}

impl fmt::Display for DescribeStackResourcesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackName", self.stack_name.as_ref())
            .field("LogicalResourceId", self.logical_resource_id.as_ref())
            .field("PhysicalResourceId", self.physical_resource_id.as_ref())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Stack sets
// ---------------------------------------------------------------------------

/// Input for the `CreateStackSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStackSetInput {
    /// Name of the stack set, unique within the region.
    #[builder(setter(into))]
    pub stack_set_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_body: Option<String>,
    #[serde(rename = "TemplateURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub capabilities: Option<Vec<Capability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "AdministrationRoleARN", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub administration_role_arn: Option<String>,
    /// Name of the role assumed in target accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub execution_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub permission_model: Option<PermissionModels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub auto_deployment: Option<AutoDeployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub client_request_token: Option<String>,
}

impl CreateStackSetInput {
    /// Append a parameter.
    pub fn push_parameter(&mut self, parameter: Parameter) -> &mut Self {
        push_item(&mut self.parameters, parameter);
        self
    }

    /// Append a capability acknowledgement.
    pub fn push_capability(&mut self, capability: Capability) -> &mut Self {
        push_item(&mut self.capabilities, capability);
        self
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: Tag) -> &mut Self {
        push_item(&mut self.tags, tag);
        self
    }
}

impl fmt::Display for CreateStackSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSetName", Some(&self.stack_set_name))
            .field("Description", self.description.as_ref())
            .field("TemplateBody", self.template_body.as_ref())
            .field("TemplateURL", self.template_url.as_ref())
            .list("Parameters", self.parameters.as_deref())
            .list("Capabilities", self.capabilities.as_deref())
            .list("Tags", self.tags.as_deref())
            .field("AdministrationRoleARN", self.administration_role_arn.as_ref())
            .field("ExecutionRoleName", self.execution_role_name.as_ref())
            .field("PermissionModel", self.permission_model.as_ref())
            .field("AutoDeployment", self.auto_deployment.as_ref())
            .field("ClientRequestToken", self.client_request_token.as_ref())
            .finish()
    }
}

/// Input for the `UpdateStackSet` operation.
///
/// `accounts` and `regions` must be given together; they restrict the update
/// to specific stack instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStackSetInput {
    #[builder(setter(into))]
    pub stack_set_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_body: Option<String>,
    #[serde(rename = "TemplateURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub use_previous_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub capabilities: Option<Vec<Capability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub operation_preferences: Option<StackSetOperationPreferences>,
    #[serde(rename = "AdministrationRoleARN", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub administration_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub execution_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub deployment_targets: Option<DeploymentTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub permission_model: Option<PermissionModels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub auto_deployment: Option<AutoDeployment>,
    /// Unique ID for this operation, doubling as its idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub regions: Option<Vec<String>>,
}

impl UpdateStackSetInput {
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

    /// Append a target account.
    pub fn push_account(&mut self, account: impl Into<String>) -> &mut Self {
        push_item(&mut self.accounts, account.into());
        self
    }

    /// Append a target region.
    pub fn push_region(&mut self, region: impl Into<String>) -> &mut Self {
        push_item(&mut self.regions, region.into());
        self
    }
}

impl fmt::Display for UpdateStackSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSetName", Some(&self.stack_set_name))
            .field("Description", self.description.as_ref())
            .field("TemplateBody", self.template_body.as_ref())
            .field("TemplateURL", self.template_url.as_ref())
            .field("UsePreviousTemplate", self.use_previous_template)
            .list("Parameters", self.parameters.as_deref())
            .list("Capabilities", self.capabilities.as_deref())
            .list("Tags", self.tags.as_deref())
            .field("OperationPreferences", self.operation_preferences.as_ref())
            .field("AdministrationRoleARN", self.administration_role_arn.as_ref())
            .field("ExecutionRoleName", self.execution_role_name.as_ref())
            .field("DeploymentTargets", self.deployment_targets.as_ref())
            .field("PermissionModel", self.permission_model.as_ref())
            .field("AutoDeployment", self.auto_deployment.as_ref())
            .field("OperationId", self.operation_id.as_ref())
            .list("Accounts", self.accounts.as_deref())
            .list("Regions", self.regions.as_deref())
            .finish()
    }
}

/// Input for the `DescribeStackSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackSetInput {
    /// Name or unique ID of the stack set.
    #[builder(setter(into))]
    pub stack_set_name: String,
}

impl fmt::Display for DescribeStackSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSetName", Some(&self.stack_set_name))
            .finish()
    }
}

/// Input for the `DescribeStackSetOperation` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackSetOperationInput {
    #[builder(setter(into))]
    pub stack_set_name: String,
    #[builder(setter(into))]
    pub operation_id: String,
}

impl fmt::Display for DescribeStackSetOperationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSetName", Some(&self.stack_set_name))
            .field("OperationId", Some(&self.operation_id))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Change sets
// ---------------------------------------------------------------------------

/// Input for the `CreateChangeSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChangeSetInput {
    /// Stack the change set applies to. For `CREATE` change sets the stack
    /// does not exist yet.
    #[builder(setter(into))]
    pub stack_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_body: Option<String>,
    #[serde(rename = "TemplateURL", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub template_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub use_previous_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub capabilities: Option<Vec<Capability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub resource_types: Option<Vec<String>>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub rollback_configuration: Option<RollbackConfiguration>,
    #[serde(rename = "NotificationARNs", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub notification_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub tags: Option<Vec<Tag>>,
    /// Name of the change set, unique per stack.
    #[builder(setter(into))]
    pub change_set_name: String,
    /// Idempotency token for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    /// Defaults to `UPDATE` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub change_set_type: Option<ChangeSetType>,
    /// Required for `IMPORT` change sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub resources_to_import: Option<Vec<ResourceToImport>>,
}

impl CreateChangeSetInput {
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

    /// Append a resource to import.
    pub fn push_resource_to_import(&mut self, resource: ResourceToImport) -> &mut Self {
        push_item(&mut self.resources_to_import, resource);
        self
    }
}

impl fmt::Display for CreateChangeSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackName", Some(&self.stack_name))
            .field("TemplateBody", self.template_body.as_ref())
            .field("TemplateURL", self.template_url.as_ref())
            .field("UsePreviousTemplate", self.use_previous_template)
            .list("Parameters", self.parameters.as_deref())
            .list("Capabilities", self.capabilities.as_deref())
            .list("ResourceTypes", self.resource_types.as_deref())
            .field("RoleARN", self.role_arn.as_ref())
            .field("RollbackConfiguration", self.rollback_configuration.as_ref())
            .list("NotificationARNs", self.notification_arns.as_deref())
            .list("Tags", self.tags.as_deref())
            .field("ChangeSetName", Some(&self.change_set_name))
            .field("ClientToken", self.client_token.as_ref())
            .field("Description", self.description.as_ref())
            .field("ChangeSetType", self.change_set_type.as_ref())
            .list("ResourcesToImport", self.resources_to_import.as_deref())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Input for the `DescribeType` operation.
///
/// Identify the type either by `arn`, or by `registry_type` and `type_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTypeInput {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub registry_type: Option<RegistryType>,
    /// Name in `Organization::Service::Type` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub arn: Option<String>,
    /// Specific version to describe; the default version otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub version_id: Option<String>,
}

impl fmt::Display for DescribeTypeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("Type", self.registry_type.as_ref())
            .field("TypeName", self.type_name.as_ref())
            .field("Arn", self.arn.as_ref())
            .field("VersionId", self.version_id.as_ref())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Operation bindings
// ---------------------------------------------------------------------------

macro_rules! bind_operation {
    ($input:ty => $output:ty, $op:ident) => {
        impl OperationInput for $input {
            type Output = $output;
            const OPERATION: CloudFormationOperation = CloudFormationOperation::$op;
        }
    };
    ($input:ty => $output:ty, $op:ident, token = $token:ident) => {
        impl OperationInput for $input {
            type Output = $output;
            const OPERATION: CloudFormationOperation = CloudFormationOperation::$op;

            fn idempotency_token_mut(&mut self) -> Option<&mut Option<String>> {
                Some(&mut self.$token)
            }
        }
    };
}

bind_operation!(CreateStackInput => CreateStackOutput, CreateStack, token = client_request_token);
bind_operation!(UpdateStackInput => UpdateStackOutput, UpdateStack, token = client_request_token);
bind_operation!(DeleteStackInput => DeleteStackOutput, DeleteStack, token = client_request_token);
bind_operation!(DescribeStacksInput => DescribeStacksOutput, DescribeStacks);
bind_operation!(DescribeStackResourcesInput => DescribeStackResourcesOutput, DescribeStackResources);
bind_operation!(CreateStackSetInput => CreateStackSetOutput, CreateStackSet, token = client_request_token);
bind_operation!(UpdateStackSetInput => UpdateStackSetOutput, UpdateStackSet, token = operation_id);
bind_operation!(DescribeStackSetInput => DescribeStackSetOutput, DescribeStackSet);
bind_operation!(
    DescribeStackSetOperationInput => DescribeStackSetOperationOutput,
    DescribeStackSetOperation
);
bind_operation!(CreateChangeSetInput => CreateChangeSetOutput, CreateChangeSet, token = client_token);
bind_operation!(DescribeTypeInput => DescribeTypeOutput, DescribeType);
