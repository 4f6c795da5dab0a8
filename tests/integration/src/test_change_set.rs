//! Change set documents, including resource import.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use stackform_cloudformation_model::input::CreateChangeSetInput;
    use stackform_cloudformation_model::output::CreateChangeSetOutput;
    use stackform_cloudformation_model::types::{ChangeSetType, ResourceToImport};
    use stackform_cloudformation_model::{CloudFormationRequest, ValidationError};

    use crate::{init_tracing, queue_template, request_from_json};

    fn bucket_import() -> ResourceToImport {
        ResourceToImport {
            resource_type: "AWS::S3::Bucket".to_owned(),
            logical_resource_id: "Logs".to_owned(),
            resource_identifier: BTreeMap::from([(
                "BucketName".to_owned(),
                "acme-logs".to_owned(),
            )]),
        }
    }

    fn import_change_set() -> CreateChangeSetInput {
        CreateChangeSetInput::builder()
            .stack_name("storage")
            .change_set_name("import-logs")
            .template_body(queue_template())
            .change_set_type(ChangeSetType::Import)
            .build()
    }

    #[test]
    fn test_should_create_import_change_set() {
        init_tracing();
        let mut input = import_change_set();
        input.push_resource_to_import(bucket_import());

        let request = CloudFormationRequest::new(input)
            .unwrap()
            .with_generated_token();
        let input = request.input();
        let token = input.client_token.as_deref().unwrap();
        assert!(!token.is_empty());

        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["ChangeSetType"], "IMPORT");
        assert_eq!(
            json["ResourcesToImport"][0]["ResourceIdentifier"]["BucketName"],
            "acme-logs"
        );
    }

    #[test]
    fn test_should_require_resources_for_import() {
        let err = CloudFormationRequest::new(import_change_set()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CoRequired {
                field: "ChangeSetType",
                required: "ResourcesToImport",
            }
        );
    }

    #[test]
    fn test_should_keep_existing_client_token() {
        let request = request_from_json::<CreateChangeSetInput>(serde_json::json!({
            "StackName": "web",
            "ChangeSetName": "add-queue",
            "UsePreviousTemplate": true,
            "ClientToken": "retry-7",
        }))
        .unwrap()
        .with_generated_token();
        assert_eq!(request.input().client_token.as_deref(), Some("retry-7"));
    }

    #[test]
    fn test_should_reject_invalid_change_set_name() {
        let err = request_from_json::<CreateChangeSetInput>(serde_json::json!({
            "StackName": "web",
            "ChangeSetName": "add_queue",
            "TemplateBody": "{}",
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Pattern {
                field: "ChangeSetName",
                ..
            }
        ));
    }

    #[test]
    fn test_should_reject_import_entry_without_identifier() {
        let mut input = import_change_set();
        input.push_resource_to_import(ResourceToImport {
            resource_identifier: BTreeMap::new(),
            ..bucket_import()
        });
        let err = CloudFormationRequest::new(input).unwrap_err();
        assert_eq!(err.field(), Some("ResourceIdentifier"));
    }

    #[test]
    fn test_should_render_create_change_set_output() {
        let output: CreateChangeSetOutput = serde_json::from_value(serde_json::json!({
            "Id": "arn:aws:cloudformation:us-east-1:123456789012:changeSet/import-logs/1a2b",
            "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/storage/3c4d",
        }))
        .unwrap();
        assert_eq!(
            output.to_string(),
            "{Id: arn:aws:cloudformation:us-east-1:123456789012:changeSet/import-logs/1a2b, \
             StackId: arn:aws:cloudformation:us-east-1:123456789012:stack/storage/3c4d}"
        );
    }
}
