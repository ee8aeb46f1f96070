//! Response envelope contract shared by every catalog endpoint.
//!
//! The backend wraps every outcome (list, single item, mutation) in the
//! same envelope, so one rendering path handles all of them. The wire field
//! names (`isSuccess`, `data`, `message`, `errores`, `errorCode`,
//! `totalRecords`) are fixed by the backend and must not drift.

use serde::{Deserialize, Serialize};

/// Message carried by every synthesized transport-failure envelope.
pub const CONNECTIVITY_MESSAGE: &str = "Could not reach the catalog service";

// ============================================================================
// Error classification
// ============================================================================

/// Closed set of backend error categories. Wire format is a bare integer.
///
/// `None` is the success sentinel; every failure envelope carries one of the
/// other values. Integers outside the set fail decoding, which callers treat
/// the same as a malformed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ErrorCode {
    None = 0,
    NotFound = 1,
    ValidationError = 2,
    BadRequest = 3,
    InternalServerError = 4,
    Conflict = 5,
    ServiceUnavailable = 6,
    GatewayTimeout = 7,
}

impl TryFrom<u8> for ErrorCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(ErrorCode::None),
            1 => Ok(ErrorCode::NotFound),
            2 => Ok(ErrorCode::ValidationError),
            3 => Ok(ErrorCode::BadRequest),
            4 => Ok(ErrorCode::InternalServerError),
            5 => Ok(ErrorCode::Conflict),
            6 => Ok(ErrorCode::ServiceUnavailable),
            7 => Ok(ErrorCode::GatewayTimeout),
            other => Err(format!("Unknown error code: {}", other)),
        }
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        code as u8
    }
}

// ============================================================================
// Validation failures
// ============================================================================

/// One backend-reported field problem.
///
/// `property_name` uses the backend's own casing, which is not guaranteed to
/// match the client's field naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub property_name: String,
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempted_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

// ============================================================================
// Envelopes
// ============================================================================

/// Single-item operation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BaseResponse<T> {
    pub is_success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "errores", default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationFailure>>,
    pub error_code: ErrorCode,
}

/// List operation outcome. Same shape as [`BaseResponse`] plus the total
/// record count.
///
/// For the non-paginated endpoints this client talks to, `total_records`
/// tracks the payload length, but nothing here assumes they are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BaseResponseList<T> {
    pub is_success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "errores", default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationFailure>>,
    pub error_code: ErrorCode,
    pub total_records: u64,
}

impl<T> BaseResponse<T> {
    /// Envelope synthesized when the backend could not be reached or its
    /// body could not be decoded. The gateway never lets the underlying
    /// transport error escape past this.
    pub fn connection_failure() -> Self {
        Self {
            is_success: false,
            data: None,
            message: Some(CONNECTIVITY_MESSAGE.to_string()),
            validation_errors: None,
            error_code: ErrorCode::ServiceUnavailable,
        }
    }
}

impl BaseResponse<bool> {
    /// Transport-failure envelope for delete calls: the outcome payload is
    /// an explicit `false`.
    pub fn delete_connection_failure() -> Self {
        Self {
            data: Some(false),
            ..Self::connection_failure()
        }
    }
}

impl<T> BaseResponseList<T> {
    /// List counterpart of [`BaseResponse::connection_failure`]: empty
    /// payload, zero records.
    pub fn connection_failure() -> Self {
        Self {
            is_success: false,
            data: Some(Vec::new()),
            message: Some(CONNECTIVITY_MESSAGE.to_string()),
            validation_errors: None,
            error_code: ErrorCode::ServiceUnavailable,
            total_records: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;

    #[test]
    fn test_error_code_round_trip() {
        for raw in 0u8..=7 {
            let code = ErrorCode::try_from(raw).unwrap();
            assert_eq!(u8::from(code), raw);
        }
    }

    #[test]
    fn test_error_code_rejects_out_of_set_values() {
        assert!(ErrorCode::try_from(8).is_err());
        assert!(ErrorCode::try_from(42).is_err());
    }

    #[test]
    fn test_single_envelope_wire_names() {
        let envelope: BaseResponse<Product> = serde_json::from_str(
            r#"{
                "isSuccess": true,
                "data": {
                    "id": 1,
                    "title": "Backpack",
                    "price": 109.95,
                    "description": "Fits 15 inch laptops",
                    "category": "men's clothing",
                    "image": "https://example.com/backpack.jpg"
                },
                "errorCode": 0
            }"#,
        )
        .unwrap();

        assert!(envelope.is_success);
        assert_eq!(envelope.error_code, ErrorCode::None);
        assert!(envelope.validation_errors.is_none());
        assert_eq!(envelope.data.unwrap().id, 1);
    }

    #[test]
    fn test_failure_envelope_passes_validation_details_through() {
        let envelope: BaseResponse<Product> = serde_json::from_str(
            r#"{
                "isSuccess": false,
                "message": "Validation failed",
                "errores": [
                    {
                        "propertyName": "Title",
                        "errorMessage": "Title must not be empty",
                        "attemptedValue": "",
                        "errorCode": "NotEmptyValidator"
                    },
                    {
                        "propertyName": "Price",
                        "errorMessage": "Price must be greater than zero",
                        "attemptedValue": -3.5
                    }
                ],
                "errorCode": 2
            }"#,
        )
        .unwrap();

        assert!(!envelope.is_success);
        assert_eq!(envelope.error_code, ErrorCode::ValidationError);
        let failures = envelope.validation_errors.unwrap();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].property_name, "Title");
        assert_eq!(failures[0].error_code.as_deref(), Some("NotEmptyValidator"));
        assert_eq!(failures[1].attempted_value, Some(serde_json::json!(-3.5)));
    }

    #[test]
    fn test_list_envelope_carries_total_records() {
        let envelope: BaseResponseList<Product> = serde_json::from_str(
            r#"{"isSuccess": true, "data": [], "errorCode": 0, "totalRecords": 0}"#,
        )
        .unwrap();

        assert!(envelope.is_success);
        assert_eq!(envelope.total_records, 0);
        assert_eq!(envelope.data.unwrap().len(), 0);
    }

    #[test]
    fn test_serialized_envelope_uses_wire_names() {
        let envelope = BaseResponse::<bool> {
            is_success: false,
            data: Some(false),
            message: Some("not found".to_string()),
            validation_errors: None,
            error_code: ErrorCode::NotFound,
        };

        let value = serde_json::to_value(&envelope).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["isSuccess"], serde_json::json!(false));
        assert_eq!(object["errorCode"], serde_json::json!(1));
        assert!(!object.contains_key("errores"));
        assert!(!object.contains_key("is_success"));
    }

    #[test]
    fn test_unknown_error_code_fails_decoding() {
        let result: Result<BaseResponse<Product>, _> =
            serde_json::from_str(r#"{"isSuccess": false, "errorCode": 99}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_connection_failure_invariants() {
        let single = BaseResponse::<Product>::connection_failure();
        assert!(!single.is_success);
        assert!(single.data.is_none());
        assert_eq!(single.error_code, ErrorCode::ServiceUnavailable);
        assert_eq!(single.message.as_deref(), Some(CONNECTIVITY_MESSAGE));

        let list = BaseResponseList::<Product>::connection_failure();
        assert!(!list.is_success);
        assert_eq!(list.data.as_deref(), Some(&[] as &[Product]));
        assert_eq!(list.total_records, 0);
        assert_eq!(list.error_code, ErrorCode::ServiceUnavailable);

        let delete = BaseResponse::delete_connection_failure();
        assert_eq!(delete.data, Some(false));
        assert_eq!(delete.error_code, ErrorCode::ServiceUnavailable);
    }
}
