//! Registry extension lookups.

#[cfg(test)]
mod tests {
    use stackform_cloudformation_model::input::DescribeTypeInput;
    use stackform_cloudformation_model::output::DescribeTypeOutput;
    use stackform_cloudformation_model::types::{
        DeprecatedStatus, ProvisioningType, RegistryType, Visibility,
    };
    use stackform_cloudformation_model::{CloudFormationRequest, ValidationError};

    use crate::request_from_json;

    #[test]
    fn test_should_describe_type_by_name() {
        let input = DescribeTypeInput::builder()
            .registry_type(RegistryType::Resource)
            .type_name("AWS::S3::Bucket")
            .build();
        let request = CloudFormationRequest::new(input).unwrap();
        assert_eq!(
            serde_json::to_string(request.input()).unwrap(),
            r#"{"Type":"RESOURCE","TypeName":"AWS::S3::Bucket"}"#
        );
    }

    #[test]
    fn test_should_describe_type_by_arn() {
        let request = request_from_json::<DescribeTypeInput>(serde_json::json!({
            "Arn": "arn:aws:cloudformation:us-east-1:123456789012:type/resource/Acme-Widgets-Gadget",
        }))
        .unwrap();
        assert!(request.input().type_name.is_none());
    }

    #[test]
    fn test_should_require_name_or_arn() {
        let err = CloudFormationRequest::new(DescribeTypeInput::default()).unwrap_err();
        assert_eq!(err.to_string(), "one of Arn, TypeName is required");
    }

    #[test]
    fn test_should_require_type_with_type_name() {
        let err = request_from_json::<DescribeTypeInput>(serde_json::json!({
            "TypeName": "AWS::S3::Bucket",
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::CoRequired {
                field: "TypeName",
                required: "Type",
            }
        );
    }

    #[test]
    fn test_should_reject_arn_with_type_name() {
        let err = request_from_json::<DescribeTypeInput>(serde_json::json!({
            "Arn": "arn:aws:cloudformation:us-east-1:123456789012:type/resource/Acme-Widgets-Gadget",
            "TypeName": "Acme::Widgets::Gadget",
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::MutuallyExclusive { first: "Arn", .. }));
    }

    #[test]
    fn test_should_parse_type_description_and_schema() {
        let schema = serde_json::json!({
            "typeName": "Acme::Widgets::Gadget",
            "primaryIdentifier": ["/properties/Id"],
        });
        let output: DescribeTypeOutput = serde_json::from_value(serde_json::json!({
            "Arn": "arn:aws:cloudformation:us-east-1:123456789012:type/resource/Acme-Widgets-Gadget",
            "Type": "RESOURCE",
            "TypeName": "Acme::Widgets::Gadget",
            "DefaultVersionId": "00000002",
            "IsDefaultVersion": true,
            "Schema": schema.to_string(),
            "ProvisioningType": "FULLY_MUTABLE",
            "DeprecatedStatus": "LIVE",
            "Visibility": "PRIVATE",
            "LoggingConfig": {
                "LogRoleArn": "arn:aws:iam::123456789012:role/registry-logs",
                "LogGroupName": "/acme/gadget",
            },
            "TimeCreated": "2021-06-01T10:00:00Z",
        }))
        .unwrap();

        assert_eq!(output.registry_type, Some(RegistryType::Resource));
        assert_eq!(output.provisioning_type, Some(ProvisioningType::FullyMutable));
        assert_eq!(output.deprecated_status, Some(DeprecatedStatus::Live));
        assert_eq!(output.visibility, Some(Visibility::Private));
        assert_eq!(
            output.logging_config.as_ref().map(|c| c.log_group_name.as_str()),
            Some("/acme/gadget")
        );
        assert_eq!(output.schema_json().unwrap(), Some(schema));
    }

    #[test]
    fn test_should_report_malformed_schema() {
        let output = DescribeTypeOutput {
            schema: Some("{not json".to_owned()),
            ..DescribeTypeOutput::default()
        };
        assert!(output.schema_json().is_err());
        assert_eq!(DescribeTypeOutput::default().schema_json().unwrap(), None);
    }
}
