use super::{api_error::ApiError, payment::Payment};

model! {
    pub struct ListPaymentsResponse {
        optional errors: Vec<ApiError> => "errors",
        optional payments: Vec<Payment> => "payments",
        /// 为空表示已是最后一页
        optional cursor: String => "cursor",
    }
}

#[cfg(test)]
mod tests {
    use crate::{decode::from_json_str, enums::ErrorCategory};

    use super::ListPaymentsResponse;

    #[test]
    fn decode_error_response() {
        let response: ListPaymentsResponse = from_json_str(
            r#"{"errors":[{"category":"INVALID_REQUEST_ERROR","code":"INVALID_VALUE","detail":"Invalid cursor","field":"cursor"}]}"#,
        )
        .unwrap();

        let errors = response.get_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].get_category(), &ErrorCategory::InvalidRequestError);
        assert_eq!(errors[0].get_code(), "INVALID_VALUE");
        assert_eq!(errors[0].get_field().map(String::as_str), Some("cursor"));
        assert_eq!(response.get_payments(), None);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result = from_json_str::<ListPaymentsResponse>(r#"{"errors":[{"category":"API_ERROR"}]}"#);
        assert!(result.is_err());
    }
}
