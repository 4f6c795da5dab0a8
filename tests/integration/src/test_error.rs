//! Error mapping and the request envelope.

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use stackform_cloudformation_model::cloudformation_error;
    use stackform_cloudformation_model::input::{DeleteStackInput, DescribeStacksInput};
    use stackform_cloudformation_model::{
        CloudFormationError, CloudFormationErrorCode, CloudFormationRequest, Credentials,
        ValidationError,
    };
    use stackform_core::{AwsRegion, StackformConfig};

    #[test]
    fn test_should_convert_validation_error_to_service_error() {
        let err = CloudFormationRequest::new(DeleteStackInput::builder().stack_name("").build())
            .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "StackName" });

        let service: CloudFormationError = err.into();
        assert_eq!(service.code, CloudFormationErrorCode::ValidationError);
        assert_eq!(service.status_code, http::StatusCode::BAD_REQUEST);
        assert_eq!(service.message, "missing required field 'StackName'");
        assert!(service.source().is_some());
        assert!(!service.is_retryable());
    }

    #[test]
    fn test_should_map_response_codes() {
        let err = CloudFormationError::from_response("StackSetNotFoundException", "gone");
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "CloudFormationError(StackSetNotFoundException): gone"
        );

        let err = CloudFormationError::from_response("NameExistsException", "taken");
        assert_eq!(err.code, CloudFormationErrorCode::InternalFailure);
        assert_eq!(err.message, "NameExistsException: taken");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_should_build_errors_with_macro() {
        let err = cloudformation_error!(Throttling, "Rate exceeded");
        assert_eq!(err.message, "Rate exceeded");
        assert!(err.is_retryable());

        let err = cloudformation_error!(NameAlreadyExistsException);
        assert_eq!(err.status_code, http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_should_round_trip_every_error_code_name() {
        for code in CloudFormationErrorCode::ALL {
            assert_eq!(CloudFormationErrorCode::from_code(code.as_str()), Some(*code));
        }
    }

    #[test]
    fn test_should_address_request_from_config() {
        let config = StackformConfig::from_lookup(|key| match key {
            "DEFAULT_REGION" => Some("eu-central-1".to_owned()),
            "ACCOUNT_ID" => Some("123456789012".to_owned()),
            _ => None,
        })
        .unwrap();

        let request = CloudFormationRequest::new(DescribeStacksInput::default())
            .unwrap()
            .with_config(&config)
            .with_credentials(Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI"))
            .with_header(
                http::HeaderName::from_static("x-amz-user-agent"),
                http::HeaderValue::from_static("stackform"),
            );

        assert_eq!(request.region, AwsRegion::new("eu-central-1"));
        assert_eq!(request.headers["x-amz-user-agent"], "stackform");

        let debug = format!("{:?}", request.credentials.as_ref().unwrap());
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("wJalrXUtnFEMI"));
    }

    #[test]
    fn test_should_reject_malformed_region_in_config() {
        let result = StackformConfig::from_lookup(|key| {
            (key == "DEFAULT_REGION").then(|| "Mars".to_owned())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_should_leave_tokenless_inputs_untouched() {
        let request = CloudFormationRequest::new(DescribeStacksInput::default())
            .unwrap()
            .with_generated_token();
        assert_eq!(request.into_input(), DescribeStacksInput::default());
    }
}
