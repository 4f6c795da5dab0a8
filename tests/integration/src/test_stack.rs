//! Stack lifecycle documents: create, update, describe, delete.

#[cfg(test)]
mod tests {
    use stackform_cloudformation_model::input::{
        CreateStackInput, DeleteStackInput, DescribeStacksInput, UpdateStackInput,
    };
    use stackform_cloudformation_model::output::{
        DescribeStackResourcesOutput, DescribeStacksOutput,
    };
    use stackform_cloudformation_model::types::{
        Capability, OnFailure, Parameter, ResourceStatus, RollbackConfiguration, RollbackTrigger,
        StackStatus, Tag,
    };
    use stackform_cloudformation_model::{
        CloudFormationOperation, CloudFormationRequest, ValidationError,
    };

    use crate::{init_tracing, queue_template, request_from_json};

    #[test]
    fn test_should_build_and_serialize_create_stack_request() {
        init_tracing();
        let mut input = CreateStackInput::builder()
            .stack_name("orders")
            .template_body(queue_template())
            .on_failure(OnFailure::Delete)
            .rollback_configuration(
                RollbackConfiguration::builder()
                    .rollback_triggers(vec![RollbackTrigger::new(
                        "arn:aws:cloudwatch:us-east-1:123456789012:alarm:errors",
                        RollbackTrigger::ALARM,
                    )])
                    .monitoring_time_in_minutes(10)
                    .build(),
            )
            .build();
        input
            .push_parameter(Parameter::new("Environment", "prod"))
            .push_capability(Capability::Iam)
            .push_tag(Tag::new("team", "orders"));

        let request = CloudFormationRequest::new(input).unwrap();
        assert_eq!(request.operation(), CloudFormationOperation::CreateStack);

        let json = serde_json::to_value(request.input()).unwrap();
        assert_eq!(json["StackName"], "orders");
        assert_eq!(json["OnFailure"], "DELETE");
        assert_eq!(json["Capabilities"][0], "CAPABILITY_IAM");
        assert_eq!(json["Parameters"][0]["ParameterKey"], "Environment");
        assert_eq!(
            json["RollbackConfiguration"]["RollbackTriggers"][0]["Type"],
            "AWS::CloudWatch::Alarm"
        );
        assert!(json.get("TemplateURL").is_none());
        assert!(json.get("DisableRollback").is_none());
    }

    #[test]
    fn test_should_parse_create_stack_document_with_acronym_fields() {
        let request = request_from_json::<CreateStackInput>(serde_json::json!({
            "StackName": "web",
            "TemplateURL": "https://s3.amazonaws.com/templates/web.yaml",
            "RoleARN": "arn:aws:iam::123456789012:role/cfn",
            "NotificationARNs": ["arn:aws:sns:us-east-1:123456789012:events"],
        }))
        .unwrap();

        let input = request.input();
        assert_eq!(
            input.template_url.as_deref(),
            Some("https://s3.amazonaws.com/templates/web.yaml")
        );
        assert_eq!(
            input.role_arn.as_deref(),
            Some("arn:aws:iam::123456789012:role/cfn")
        );
        assert_eq!(input.notification_arns.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_should_reject_create_stack_without_template() {
        let err = request_from_json::<CreateStackInput>(serde_json::json!({
            "StackName": "web",
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "one of TemplateBody, TemplateURL is required"
        );
    }

    #[test]
    fn test_should_reject_stack_name_starting_with_digit() {
        let err = request_from_json::<CreateStackInput>(serde_json::json!({
            "StackName": "1web",
            "TemplateBody": "{}",
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Pattern {
                field: "StackName",
                ..
            }
        ));
    }

    #[test]
    fn test_should_reject_reserved_tag_prefix() {
        let err = request_from_json::<CreateStackInput>(serde_json::json!({
            "StackName": "web",
            "TemplateBody": "{}",
            "Tags": [{"Key": "aws:cloudformation:stack-name", "Value": "web"}],
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("Key"));
    }

    #[test]
    fn test_should_accept_update_with_previous_template() {
        let mut input = UpdateStackInput::builder()
            .stack_name("arn:aws:cloudformation:us-east-1:123456789012:stack/web/4f1b2c3d")
            .use_previous_template(true)
            .build();
        input.push_parameter(Parameter::use_previous("Environment"));

        let request = CloudFormationRequest::new(input).unwrap();
        let json = serde_json::to_value(request.input()).unwrap();
        assert_eq!(json["UsePreviousTemplate"], true);
        assert_eq!(json["Parameters"][0]["UsePreviousValue"], true);
        assert!(json["Parameters"][0].get("ParameterValue").is_none());
    }

    #[test]
    fn test_should_reject_update_with_two_template_sources() {
        let input = UpdateStackInput::builder()
            .stack_name("web")
            .template_body("{}")
            .use_previous_template(true)
            .build();
        let err = CloudFormationRequest::new(input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MutuallyExclusive {
                first: "TemplateBody",
                second: "UsePreviousTemplate",
            }
        );
    }

    #[test]
    fn test_should_treat_disabled_previous_template_as_absent() {
        let input = UpdateStackInput::builder()
            .stack_name("web")
            .template_body("{}")
            .use_previous_template(false)
            .build();
        assert!(CloudFormationRequest::new(input).is_ok());
    }

    #[test]
    fn test_should_delete_stack_retaining_resources() {
        let request = request_from_json::<DeleteStackInput>(serde_json::json!({
            "StackName": "web",
            "RetainResources": ["Bucket"],
        }))
        .unwrap()
        .with_generated_token();

        let input = request.input();
        assert_eq!(input.retain_resources.as_deref(), Some(&["Bucket".to_owned()][..]));
        assert!(input.client_request_token.is_some());
    }

    #[test]
    fn test_should_describe_all_stacks_without_name() {
        let request = CloudFormationRequest::new(DescribeStacksInput::default()).unwrap();
        assert_eq!(serde_json::to_string(request.input()).unwrap(), "{}");
        assert_eq!(request.input().to_string(), "{}");
    }

    #[test]
    fn test_should_parse_describe_stacks_response() {
        let output: DescribeStacksOutput = serde_json::from_value(serde_json::json!({
            "Stacks": [{
                "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/web/4f1b2c3d",
                "StackName": "web",
                "CreationTime": "2021-06-01T10:00:00Z",
                "StackStatus": "UPDATE_ROLLBACK_COMPLETE",
                "Capabilities": ["CAPABILITY_NAMED_IAM"],
                "Outputs": [{"OutputKey": "Url", "OutputValue": "https://web.example.com"}],
                "ParentId": "arn:aws:cloudformation:us-east-1:123456789012:stack/root/9a8b7c6d",
            }],
            "NextToken": "page-2",
        }))
        .unwrap();

        let stacks = output.stacks.as_deref().unwrap();
        let stack = &stacks[0];
        let status = stack.stack_status.unwrap();
        assert_eq!(status, StackStatus::UpdateRollbackComplete);
        assert!(status.is_terminal());
        assert!(!status.is_failed());
        assert!(stack.is_nested());
        assert_eq!(stack.output_value("Url"), Some("https://web.example.com"));
        assert_eq!(stack.output_value("Missing"), None);
        assert_eq!(
            stack.creation_time.map(|t| t.to_rfc3339()),
            Some("2021-06-01T10:00:00+00:00".to_owned())
        );
        assert_eq!(output.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_should_reject_unknown_stack_status_in_response() {
        let result = serde_json::from_value::<DescribeStacksOutput>(serde_json::json!({
            "Stacks": [{"StackName": "web", "StackStatus": "CREATE_DONE"}],
        }));
        assert!(result.unwrap_err().to_string().contains("CREATE_DONE"));
    }

    #[test]
    fn test_should_find_stack_resource_by_logical_id() {
        let output: DescribeStackResourcesOutput = serde_json::from_value(serde_json::json!({
            "StackResources": [
                {
                    "LogicalResourceId": "Queue",
                    "PhysicalResourceId": "https://sqs.us-east-1.amazonaws.com/123456789012/q",
                    "ResourceType": "AWS::SQS::Queue",
                    "ResourceStatus": "CREATE_COMPLETE",
                    "Timestamp": "2021-06-01T10:00:00Z",
                },
                {
                    "LogicalResourceId": "Topic",
                    "ResourceType": "AWS::SNS::Topic",
                    "ResourceStatus": "CREATE_FAILED",
                    "ResourceStatusReason": "Access denied",
                    "Timestamp": "2021-06-01T10:00:05Z",
                },
            ],
        }))
        .unwrap();

        let topic = output.resource("Topic").unwrap();
        assert_eq!(topic.resource_status, Some(ResourceStatus::CreateFailed));
        assert_eq!(topic.resource_status_reason.as_deref(), Some("Access denied"));
        assert!(output.resource("Bucket").is_none());
    }
}
