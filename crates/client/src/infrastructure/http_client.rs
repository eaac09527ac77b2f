//! HTTP adapter implementing `RawApiPort`
//!
//! Native builds use reqwest with a cookie store; web builds use gloo-net
//! with `credentials: include` so the session cookie rides along. Both
//! paths normalize responses to `(status, body)` and share the error
//! mapping below.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};
use crate::state::Platform;

#[derive(Clone, Copy)]
enum HttpMethod {
    Get,
    Post,
}

/// HTTP client bound to the platform's base URL configuration.
#[derive(Clone)]
pub struct ApiAdapter {
    platform: Platform,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(platform: Platform) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(concat!("minivinci-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { platform, client }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Join a REST path onto the configured base URL. An empty base means
    /// same-origin relative paths.
    fn request_url(&self, path: &str) -> String {
        let base = self.platform.api_base_url();
        if base.trim().is_empty() {
            return path.to_string();
        }
        match url::Url::parse(&base).and_then(|b| b.join(path)) {
            Ok(joined) => joined.to_string(),
            Err(e) => {
                tracing::warn!("bad base URL {:?}: {}; concatenating", base, e);
                format!("{}{}", base.trim_end_matches('/'), path)
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<(u16, String), ApiError> {
        let url = self.request_url(path);
        let mut request = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(json) = body {
            request = request.json(json);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, text))
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<(u16, String), ApiError> {
        let url = self.request_url(path);
        let builder = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
        };
        let mut builder = builder.credentials(web_sys::RequestCredentials::Include);
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .json(json)
                .map_err(|e| ApiError::Serialize(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, text))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let (status, body) = self.send(HttpMethod::Get, path, None, None).await?;
        parse_response(status, &body)
    }

    async fn get_json_auth(&self, path: &str, bearer: Option<&str>) -> Result<Value, ApiError> {
        let (status, body) = self.send(HttpMethod::Get, path, None, bearer).await?;
        parse_response(status, &body)
    }

    async fn post_json_auth(
        &self,
        path: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Value, ApiError> {
        let (status, text) = self.send(HttpMethod::Post, path, Some(body), bearer).await?;
        parse_response(status, &text)
    }

    async fn post_empty(&self, path: &str, bearer: Option<&str>) -> Result<(), ApiError> {
        let (status, body) = self.send(HttpMethod::Post, path, None, bearer).await?;
        if status >= 400 {
            return Err(ApiError::Status {
                status,
                detail: error_detail(status, &body),
            });
        }
        Ok(())
    }
}

/// Map a normalized `(status, body)` into a parsed JSON value or an error.
fn parse_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if status >= 400 {
        return Err(ApiError::Status {
            status,
            detail: error_detail(status, body),
        });
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull a human-readable detail out of an error body.
///
/// Server errors arrive as JSON with `message`, `error`, or `detail`
/// fields; anything else falls back to the (truncated) raw body.
fn error_detail(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("HTTP {}", status);
    }
    let mut detail: String = trimmed.chars().take(200).collect();
    if detail.len() < trimmed.len() {
        detail.push('…');
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    mod url_joining {
        use super::*;

        #[test]
        fn empty_base_keeps_relative_path() {
            let (platform, _) = create_mock_platform();
            let adapter = ApiAdapter::new(platform);
            assert_eq!(adapter.request_url("/api/courses"), "/api/courses");
        }

        #[test]
        fn absolute_base_is_joined() {
            let (platform, _) = create_mock_platform();
            platform.set_api_base_url("http://localhost:8000");
            let adapter = ApiAdapter::new(platform);
            assert_eq!(
                adapter.request_url("/api/courses"),
                "http://localhost:8000/api/courses"
            );
        }

        #[test]
        fn trailing_slash_on_base_does_not_double() {
            let (platform, _) = create_mock_platform();
            platform.set_api_base_url("http://localhost:8000/");
            let adapter = ApiAdapter::new(platform);
            assert_eq!(
                adapter.request_url("/api/auth/me"),
                "http://localhost:8000/api/auth/me"
            );
        }
    }

    mod error_mapping {
        use super::*;

        #[test]
        fn json_message_field_is_preferred() {
            let detail = error_detail(403, r#"{"success":false,"message":"无权限"}"#);
            assert_eq!(detail, "无权限");
        }

        #[test]
        fn error_field_is_accepted() {
            let detail = error_detail(500, r#"{"error":"boom"}"#);
            assert_eq!(detail, "boom");
        }

        #[test]
        fn non_json_body_is_passed_through() {
            let detail = error_detail(502, "Bad Gateway");
            assert_eq!(detail, "Bad Gateway");
        }

        #[test]
        fn empty_body_reports_status() {
            let detail = error_detail(404, "");
            assert_eq!(detail, "HTTP 404");
        }

        #[test]
        fn status_errors_carry_the_code() {
            let err = parse_response(401, r#"{"message":"login required"}"#).unwrap_err();
            match err {
                ApiError::Status { status, detail } => {
                    assert_eq!(status, 401);
                    assert_eq!(detail, "login required");
                }
                other => panic!("expected status error, got {:?}", other),
            }
            assert!(parse_response(401, "{}").unwrap_err().is_permission_denied());
            assert!(!parse_response(500, "{}").unwrap_err().is_permission_denied());
        }

        #[test]
        fn ok_empty_body_parses_as_null() {
            assert_eq!(parse_response(204, "").unwrap(), Value::Null);
        }
    }
}
