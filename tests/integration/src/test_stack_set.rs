//! Stack set documents and rollout preferences.

#[cfg(test)]
mod tests {
    use stackform_cloudformation_model::input::{
        CreateStackSetInput, DescribeStackSetInput, DescribeStackSetOperationInput,
        UpdateStackSetInput,
    };
    use stackform_cloudformation_model::output::{
        DescribeStackSetOperationOutput, DescribeStackSetOutput, UpdateStackSetOutput,
    };
    use stackform_cloudformation_model::types::{
        AutoDeployment, DeploymentTargets, PermissionModels, StackSetOperationAction,
        StackSetOperationPreferences, StackSetOperationStatus, StackSetStatus, Tag,
    };
    use stackform_cloudformation_model::{CloudFormationRequest, ValidationError};

    use crate::{init_tracing, queue_template, request_from_json};

    fn update(name: &str) -> UpdateStackSetInput {
        UpdateStackSetInput::builder()
            .stack_set_name(name)
            .use_previous_template(true)
            .build()
    }

    #[test]
    fn test_should_create_service_managed_stack_set() {
        init_tracing();
        let mut input = CreateStackSetInput::builder()
            .stack_set_name("baseline")
            .template_body(queue_template())
            .permission_model(PermissionModels::ServiceManaged)
            .auto_deployment(
                AutoDeployment::builder()
                    .enabled(true)
                    .retain_stacks_on_account_removal(false)
                    .build(),
            )
            .build();
        input.push_tag(Tag::new("owner", "platform"));

        let request = CloudFormationRequest::new(input)
            .unwrap()
            .with_generated_token();
        let json = serde_json::to_value(request.input()).unwrap();
        assert_eq!(json["PermissionModel"], "SERVICE_MANAGED");
        assert_eq!(json["AutoDeployment"]["Enabled"], true);
        assert!(json["ClientRequestToken"].is_string());
    }

    #[test]
    fn test_should_reject_retain_stacks_without_auto_deployment() {
        let err = request_from_json::<CreateStackSetInput>(serde_json::json!({
            "StackSetName": "baseline",
            "TemplateBody": "{}",
            "AutoDeployment": {"RetainStacksOnAccountRemoval": true},
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::CoRequired {
                field: "RetainStacksOnAccountRemoval",
                required: "Enabled",
            }
        );
    }

    #[test]
    fn test_should_reject_stack_set_id_on_create() {
        let err = request_from_json::<CreateStackSetInput>(serde_json::json!({
            "StackSetName": "baseline:5b6c7d8e-1111-2222-3333-444455556666",
            "TemplateBody": "{}",
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("StackSetName"));
    }

    #[test]
    fn test_should_update_stack_set_by_id_with_preferences() {
        let mut input = update("baseline:5b6c7d8e-1111-2222-3333-444455556666");
        input.operation_preferences = Some(
            StackSetOperationPreferences::builder()
                .region_order(vec!["us-east-1".to_owned(), "eu-west-1".to_owned()])
                .failure_tolerance_percentage(10)
                .max_concurrent_count(2)
                .build(),
        );
        input.push_account("123456789012").push_region("us-east-1");

        let request = CloudFormationRequest::new(input).unwrap();
        let json = serde_json::to_value(request.input()).unwrap();
        assert_eq!(json["OperationPreferences"]["FailureTolerancePercentage"], 10);
        assert_eq!(json["Accounts"][0], "123456789012");
        assert_eq!(json["Regions"][0], "us-east-1");
    }

    #[test]
    fn test_should_reject_conflicting_preferences() {
        let mut input = update("baseline");
        input.operation_preferences = Some(
            StackSetOperationPreferences::builder()
                .max_concurrent_count(2)
                .max_concurrent_percentage(50)
                .build(),
        );
        let err = CloudFormationRequest::new(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fields 'MaxConcurrentCount' and 'MaxConcurrentPercentage' are mutually exclusive"
        );
    }

    #[test]
    fn test_should_reject_out_of_range_tolerance() {
        let mut input = update("baseline");
        input.operation_preferences = Some(
            StackSetOperationPreferences::builder()
                .failure_tolerance_percentage(150)
                .build(),
        );
        let err = CloudFormationRequest::new(input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Range {
                field: "FailureTolerancePercentage",
                min: 0,
                max: 100,
                actual: 150,
            }
        );
    }

    #[test]
    fn test_should_require_regions_with_accounts() {
        let mut input = update("baseline");
        input.push_account("123456789012");
        let err = CloudFormationRequest::new(input).unwrap_err();
        assert_eq!(err.to_string(), "field 'Accounts' requires 'Regions'");
    }

    #[test]
    fn test_should_reject_malformed_account_id() {
        let mut input = update("baseline");
        input.push_account("12345").push_region("us-east-1");
        let err = CloudFormationRequest::new(input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAccountId {
                field: "Accounts",
                value: "12345".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_reject_accounts_alongside_deployment_targets() {
        let mut input = update("baseline");
        input.deployment_targets = Some(
            DeploymentTargets::builder()
                .organizational_unit_ids(vec!["ou-abcd-12345678".to_owned()])
                .build(),
        );
        input.push_account("123456789012").push_region("us-east-1");
        let err = CloudFormationRequest::new(input).unwrap_err();
        assert!(matches!(err, ValidationError::MutuallyExclusive { .. }));
    }

    #[test]
    fn test_should_parse_stack_set_description() {
        let request = request_from_json::<DescribeStackSetInput>(serde_json::json!({
            "StackSetName": "baseline",
        }))
        .unwrap();
        assert_eq!(request.input().to_string(), "{StackSetName: baseline}");

        let output: DescribeStackSetOutput = serde_json::from_value(serde_json::json!({
            "StackSet": {
                "StackSetName": "baseline",
                "StackSetId": "baseline:5b6c7d8e-1111-2222-3333-444455556666",
                "Status": "ACTIVE",
                "StackSetARN": "arn:aws:cloudformation:us-east-1:123456789012:stackset/baseline:5b6c7d8e",
                "AdministrationRoleARN": "arn:aws:iam::123456789012:role/AWSCloudFormationStackSetAdministrationRole",
                "PermissionModel": "SELF_MANAGED",
            },
        }))
        .unwrap();

        let stack_set = output.stack_set.unwrap();
        assert_eq!(stack_set.status, Some(StackSetStatus::Active));
        assert_eq!(stack_set.permission_model, Some(PermissionModels::SelfManaged));
        assert!(stack_set.stack_set_arn.unwrap().ends_with("baseline:5b6c7d8e"));
    }

    #[test]
    fn test_should_track_stack_set_operation() {
        let request = request_from_json::<DescribeStackSetOperationInput>(serde_json::json!({
            "StackSetName": "baseline",
            "OperationId": "op-1",
        }))
        .unwrap();
        assert_eq!(request.input().operation_id, "op-1");

        let running: DescribeStackSetOperationOutput = serde_json::from_value(serde_json::json!({
            "StackSetOperation": {
                "OperationId": "op-1",
                "Action": "UPDATE",
                "Status": "RUNNING",
                "CreationTimestamp": "2021-06-01T10:00:00Z",
            },
        }))
        .unwrap();
        let operation = running.stack_set_operation.unwrap();
        assert_eq!(operation.action, Some(StackSetOperationAction::Update));
        assert!(!operation.is_finished());

        let stopped: DescribeStackSetOperationOutput = serde_json::from_value(serde_json::json!({
            "StackSetOperation": {"OperationId": "op-1", "Status": "STOPPED"},
        }))
        .unwrap();
        let operation = stopped.stack_set_operation.unwrap();
        assert_eq!(operation.status, Some(StackSetOperationStatus::Stopped));
        assert!(operation.is_finished());
    }

    #[test]
    fn test_should_reject_empty_operation_id() {
        let err = request_from_json::<DescribeStackSetOperationInput>(serde_json::json!({
            "StackSetName": "baseline",
            "OperationId": "",
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "OperationId" });
    }

    #[test]
    fn test_should_render_update_output() {
        let output: UpdateStackSetOutput =
            serde_json::from_str(r#"{"OperationId": "op-2"}"#).unwrap();
        assert_eq!(output.to_string(), "{OperationId: op-2}");
    }
}
