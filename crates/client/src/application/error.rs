//! Service layer error types
//!
//! This module defines errors that can occur in the application service
//! layer, plus the helper that unwraps the REST `{success, data, message}`
//! envelope into typed payloads.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Transport or HTTP-level failure
    Api(ApiError),
    /// Server answered but flagged the request as unsuccessful
    Rejected(String),
    /// Response arrived but its payload had an unexpected shape
    Parse(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Api(e) => write!(f, "API error: {}", e),
            ServiceError::Rejected(msg) => write!(f, "Request rejected: {}", msg),
            ServiceError::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        ServiceError::Api(e)
    }
}

impl ServiceError {
    /// Whether this failure is attributable to missing permission rather
    /// than a fault: HTTP 401/403, or a rejection that talks about
    /// permission or login.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            ServiceError::Api(e) => e.is_permission_denied(),
            ServiceError::Rejected(msg) => {
                let lower = msg.to_lowercase();
                lower.contains("permission")
                    || lower.contains("unauthorized")
                    || lower.contains("login")
                    || msg.contains("权限")
                    || msg.contains("登录")
            }
            ServiceError::Parse(_) => false,
        }
    }
}

/// Helper trait for unwrapping `{success, data, message}` envelopes.
///
/// Not every endpoint wraps consistently: list payloads sometimes sit one
/// level deeper under `data.data`, and some endpoints skip the envelope
/// entirely. Parsing tolerates all three shapes.
pub trait ParseEnvelope {
    /// Parse the enveloped payload into the expected type.
    fn parse_enveloped<T: DeserializeOwned>(self) -> Result<T, ServiceError>;
}

impl ParseEnvelope for Value {
    fn parse_enveloped<T: DeserializeOwned>(self) -> Result<T, ServiceError> {
        let payload = match self {
            Value::Object(mut map) if map.contains_key("success") => {
                let success = map
                    .get("success")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if !success {
                    let message = map
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("request was not successful")
                        .to_string();
                    return Err(ServiceError::Rejected(message));
                }
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        };

        match serde_json::from_value::<T>(payload.clone()) {
            Ok(parsed) => Ok(parsed),
            Err(first_err) => {
                // List endpoints wrap pages as data.data.
                if let Some(inner) = payload.get("data") {
                    if let Ok(parsed) = serde_json::from_value::<T>(inner.clone()) {
                        return Ok(parsed);
                    }
                }
                Err(ServiceError::Parse(first_err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Payload {
        id: String,
    }

    #[test]
    fn successful_envelope_unwraps_data() {
        let value = json!({"success": true, "data": {"id": "c1"}});
        let parsed: Payload = value.parse_enveloped().unwrap();
        assert_eq!(parsed.id, "c1");
    }

    #[test]
    fn double_wrapped_data_is_found() {
        let value = json!({"success": true, "data": {"data": [{"id": "c1"}], "total": 1}});
        let parsed: Vec<Payload> = value.parse_enveloped().unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn bare_payload_without_envelope_parses() {
        let value = json!([{"id": "a"}, {"id": "b"}]);
        let parsed: Vec<Payload> = value.parse_enveloped().unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn unsuccessful_envelope_carries_the_message() {
        let value = json!({"success": false, "message": "no such video"});
        let err = value.parse_enveloped::<Payload>().unwrap_err();
        match err {
            ServiceError::Rejected(msg) => assert_eq!(msg, "no such video"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn missing_success_flag_counts_as_failure_when_success_key_present() {
        let value = json!({"success": null, "message": "odd"});
        assert!(value.parse_enveloped::<Payload>().is_err());
    }

    #[test]
    fn permission_wording_is_detected() {
        assert!(ServiceError::Rejected("permission denied".to_string()).is_permission_denied());
        assert!(ServiceError::Rejected("请先登录".to_string()).is_permission_denied());
        assert!(!ServiceError::Rejected("server exploded".to_string()).is_permission_denied());
        assert!(ServiceError::Api(ApiError::Status {
            status: 403,
            detail: String::new()
        })
        .is_permission_denied());
    }
}
