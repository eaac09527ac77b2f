//! Simple test fixtures used across unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// One call observed by [`StubApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Scripted `RawApiPort`: canned results per path, every call recorded.
///
/// Paths without a scripted response fail with a transport error, which
/// doubles as "the network is down" in fallback tests.
#[derive(Clone, Default)]
pub struct StubApi {
    responses: Arc<Mutex<HashMap<String, Result<Value, ApiError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, value: Value) -> &Self {
        if let Ok(mut guard) = self.responses.lock() {
            guard.insert(path.to_string(), Ok(value));
        }
        self
    }

    pub fn fail(&self, path: &str, error: ApiError) -> &Self {
        if let Ok(mut guard) = self.responses.lock() {
            guard.insert(path.to_string(), Err(error));
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|g| g.clone()).unwrap_or_default()
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls().iter().filter(|c| c.path == path).count()
    }

    fn record(&self, method: &'static str, path: &str, bearer: Option<&str>, body: Option<&Value>) {
        if let Ok(mut guard) = self.calls.lock() {
            guard.push(RecordedCall {
                method,
                path: path.to_string(),
                bearer: bearer.map(|b| b.to_string()),
                body: body.cloned(),
            });
        }
    }

    fn lookup(&self, path: &str) -> Result<Value, ApiError> {
        self.responses
            .lock()
            .ok()
            .and_then(|g| g.get(path).cloned())
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no stubbed response for {}", path))))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for StubApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.record("GET", path, None, None);
        self.lookup(path)
    }

    async fn get_json_auth(&self, path: &str, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.record("GET", path, bearer, None);
        self.lookup(path)
    }

    async fn post_json_auth(
        &self,
        path: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.record("POST", path, bearer, Some(body));
        self.lookup(path)
    }

    async fn post_empty(&self, path: &str, bearer: Option<&str>) -> Result<(), ApiError> {
        self.record("POST", path, bearer, None);
        self.lookup(path).map(|_| ())
    }
}
