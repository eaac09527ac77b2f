//! Raw API Port - Object-safe HTTP boundary
//!
//! Application services need an HTTP abstraction they can store behind
//! `Arc<dyn ...>`, so this boundary works in `serde_json::Value` and leaves
//! typed decoding to the service layer.
//!
//! Session endpoints ride on cookies, which the adapters attach on every
//! request. The VOD endpoints additionally accept an optional bearer token,
//! hence the `_auth` variants.

use serde_json::Value;
use thiserror::Error;

/// Errors crossing the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The response body was not the JSON we expected.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialize(String),
}

impl ApiError {
    /// True for statuses that mean "you may not", as opposed to "it broke".
    /// These drive the request-access affordance instead of an error panel.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            ApiError::Status {
                status: 401 | 403,
                ..
            }
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn get_json_auth(&self, path: &str, bearer: Option<&str>) -> Result<Value, ApiError>;

    async fn post_json_auth(
        &self,
        path: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Value, ApiError>;

    async fn post_empty(&self, path: &str, bearer: Option<&str>) -> Result<(), ApiError>;
}
