//! CloudFormation operation output types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::Fields;
use crate::types::{
    DeprecatedStatus, LoggingConfig, ProvisioningType, RegistryType, Stack, StackResource,
    StackSet, StackSetOperation, Visibility,
};

/// Output for the `CreateStack` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStackOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
}

impl fmt::Display for CreateStackOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f).field("StackId", self.stack_id.as_ref()).finish()
    }
}

/// Output for the `UpdateStack` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStackOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
}

impl fmt::Display for UpdateStackOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f).field("StackId", self.stack_id.as_ref()).finish()
    }
}

/// Output for the `DeleteStack` operation (empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteStackOutput {}

impl fmt::Display for DeleteStackOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f).finish()
    }
}

/// Output for the `DescribeStacks` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStacksOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks: Option<Vec<Stack>>,
    /// Present when more stacks remain to be listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for DescribeStacksOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .list("Stacks", self.stacks.as_deref())
            .field("NextToken", self.next_token.as_ref())
            .finish()
    }
}

/// Output for the `DescribeStackResources` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackResourcesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_resources: Option<Vec<StackResource>>,
}

impl DescribeStackResourcesOutput {
    /// Find a resource by its logical ID.
    #[must_use]
    pub fn resource(&self, logical_id: &str) -> Option<&StackResource> {
        self.stack_resources
            .as_deref()?
            .iter()
            .find(|r| r.logical_resource_id.as_deref() == Some(logical_id))
    }
}

impl fmt::Display for DescribeStackResourcesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .list("StackResources", self.stack_resources.as_deref())
            .finish()
    }
}

/// Output for the `CreateStackSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStackSetOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_id: Option<String>,
}

impl fmt::Display for CreateStackSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSetId", self.stack_set_id.as_ref())
            .finish()
    }
}

/// Output for the `UpdateStackSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStackSetOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

impl fmt::Display for UpdateStackSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("OperationId", self.operation_id.as_ref())
            .finish()
    }
}

/// Output for the `DescribeStackSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackSetOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set: Option<StackSet>,
}

impl fmt::Display for DescribeStackSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSet", self.stack_set.as_ref())
            .finish()
    }
}

/// Output for the `DescribeStackSetOperation` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackSetOperationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_operation: Option<StackSetOperation>,
}

impl fmt::Display for DescribeStackSetOperationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("StackSetOperation", self.stack_set_operation.as_ref())
            .finish()
    }
}

/// Output for the `CreateChangeSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChangeSetOutput {
    /// ARN of the change set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
}

impl fmt::Display for CreateChangeSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("Id", self.id.as_ref())
            .field("StackId", self.stack_id.as_ref())
            .finish()
    }
}

/// Output for the `DescribeType` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTypeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub registry_type: Option<RegistryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON schema document describing the type's properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_type: Option<ProvisioningType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_status: Option<DeprecatedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_config: Option<LoggingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
}

impl DescribeTypeOutput {
    /// Parse the schema document.
    ///
    /// Returns `Ok(None)` when the response carries no schema.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the schema is not a valid JSON document.
    pub fn schema_json(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        self.schema.as_deref().map(serde_json::from_str).transpose()
    }
}

impl fmt::Display for DescribeTypeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)
            .field("Arn", self.arn.as_ref())
            .field("Type", self.registry_type.as_ref())
            .field("TypeName", self.type_name.as_ref())
            .field("DefaultVersionId", self.default_version_id.as_ref())
            .field("IsDefaultVersion", self.is_default_version)
            .field("Description", self.description.as_ref())
            .field("Schema", self.schema.as_ref())
            .field("ProvisioningType", self.provisioning_type.as_ref())
            .field("DeprecatedStatus", self.deprecated_status.as_ref())
            .field("LoggingConfig", self.logging_config.as_ref())
            .field("ExecutionRoleArn", self.execution_role_arn.as_ref())
            .field("Visibility", self.visibility.as_ref())
            .field("SourceUrl", self.source_url.as_ref())
            .field("DocumentationUrl", self.documentation_url.as_ref())
            .field("LastUpdated", self.last_updated.as_ref())
            .field("TimeCreated", self.time_created.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResourceStatus, StackStatus};

    #[test]
    fn test_should_deserialize_describe_stacks_output() {
        let json = r#"{
            "Stacks": [
                {"StackName": "a", "StackStatus": "CREATE_COMPLETE", "CreationTime": "2021-01-01T00:00:00Z"},
                {"StackName": "b", "StackStatus": "ROLLBACK_FAILED", "CreationTime": "2021-01-02T00:00:00Z"}
            ],
            "NextToken": "page-2"
        }"#;
        let output: DescribeStacksOutput = serde_json::from_str(json).expect("deserialize");
        let stacks = output.stacks.as_deref().unwrap();
        assert_eq!(stacks.len(), 2);
        assert_eq!(stacks[1].stack_status, Some(StackStatus::RollbackFailed));
        assert_eq!(output.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_should_find_stack_resource_by_logical_id() {
        let output = DescribeStackResourcesOutput {
            stack_resources: Some(vec![StackResource {
                logical_resource_id: Some("Queue".to_owned()),
                resource_type: Some("AWS::SQS::Queue".to_owned()),
                resource_status: Some(ResourceStatus::CreateComplete),
                ..Default::default()
            }]),
        };
        assert!(output.resource("Queue").is_some());
        assert!(output.resource("Topic").is_none());
        assert!(DescribeStackResourcesOutput::default().resource("Queue").is_none());
    }

    #[test]
    fn test_should_render_empty_delete_output() {
        assert_eq!(DeleteStackOutput {}.to_string(), "{}");
        let json = serde_json::to_string(&DeleteStackOutput {}).expect("serialize");
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_should_parse_type_schema() {
        let output = DescribeTypeOutput {
            type_name: Some("AWS::S3::Bucket".to_owned()),
            schema: Some(r#"{"typeName":"AWS::S3::Bucket","properties":{}}"#.to_owned()),
            ..Default::default()
        };
        let schema = output.schema_json().unwrap().unwrap();
        assert_eq!(schema["typeName"], "AWS::S3::Bucket");

        assert!(DescribeTypeOutput::default().schema_json().unwrap().is_none());

        let broken = DescribeTypeOutput {
            schema: Some("{not json".to_owned()),
            ..Default::default()
        };
        assert!(broken.schema_json().is_err());
    }

    #[test]
    fn test_should_deserialize_describe_type_output() {
        let json = r#"{
            "Arn": "arn:aws:cloudformation:us-east-1::type/resource/AWS-S3-Bucket",
            "Type": "RESOURCE",
            "TypeName": "AWS::S3::Bucket",
            "ProvisioningType": "FULLY_MUTABLE",
            "Visibility": "PUBLIC",
            "DeprecatedStatus": "LIVE",
            "LoggingConfig": {"LogRoleArn": "arn:aws:iam::123456789012:role/logs", "LogGroupName": "/cfn/types"},
            "TimeCreated": "2019-11-18T20:00:00Z"
        }"#;
        let output: DescribeTypeOutput = serde_json::from_str(json).expect("deserialize");
        assert_eq!(output.registry_type, Some(RegistryType::Resource));
        assert_eq!(output.provisioning_type, Some(ProvisioningType::FullyMutable));
        assert_eq!(
            output.logging_config.map(|c| c.log_group_name),
            Some("/cfn/types".to_owned())
        );
    }
}
