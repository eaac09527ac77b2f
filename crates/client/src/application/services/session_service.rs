//! Session Probe - authentication state over the raw API port
//!
//! The probe never fails loudly: a dead network, an expired cookie, and a
//! plain signed-out visitor all land on `None`. The primary endpoint rides
//! on the session cookie; the hybrid endpoint additionally honors the
//! bearer token kept in platform storage.

use std::sync::Arc;

use minivinci_domain::UserProfile;

use crate::application::dto::extract_user;
use crate::application::error::ServiceError;
use crate::ports::outbound::{storage_keys, PlatformPort, RawApiPort};

/// Bearer token from platform storage, if a non-blank one is present.
pub(crate) fn stored_bearer(platform: &Arc<dyn PlatformPort>) -> Option<String> {
    platform
        .storage_load(storage_keys::AUTH_TOKEN)
        .filter(|token| !token.trim().is_empty())
}

pub struct SessionService {
    api: Arc<dyn RawApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl SessionService {
    pub fn new(api: Arc<dyn RawApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { api, platform }
    }

    /// Probe the current session: cookie endpoint first, hybrid fallback.
    /// `None` means signed out, whatever the reason.
    pub async fn check_session(&self) -> Option<UserProfile> {
        match self.api.get_json("/api/auth/web/me").await {
            Ok(value) => {
                if let Some(user) = extract_user(value) {
                    self.platform
                        .log_debug(&format!("session probe: signed in as {}", user.username));
                    return Some(user);
                }
            }
            Err(e) => {
                self.platform
                    .log_debug(&format!("session probe: web endpoint failed: {}", e));
            }
        }

        let bearer = self.bearer();
        match self
            .api
            .get_json_auth("/api/auth/hybrid/me", bearer.as_deref())
            .await
        {
            Ok(value) => extract_user(value),
            Err(e) => {
                self.platform
                    .log_debug(&format!("session probe: hybrid endpoint failed: {}", e));
                None
            }
        }
    }

    /// End the server-side session. Only a successful logout clears the
    /// local token; on failure the session state stays as it was.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        self.api
            .post_empty("/api/auth/web/logout", self.bearer().as_deref())
            .await?;
        self.clear_session();
        Ok(())
    }

    /// The stored bearer token, if any.
    pub fn bearer(&self) -> Option<String> {
        stored_bearer(&self.platform)
    }

    /// Accept the demo credential form: mint a local token and profile.
    /// Nothing touches the network; the hybrid probe will simply find the
    /// token on the next check.
    pub fn establish_demo_session(&self, username: &str) -> UserProfile {
        let now = self.platform.now_millis();
        let token = format!("demo-token-{}", now);
        self.platform.storage_save(storage_keys::AUTH_TOKEN, &token);
        self.platform
            .log_info(&format!("demo session established for {}", username));
        UserProfile {
            id: now as i64,
            username: username.to_string(),
            nickname: None,
            avatar_url: None,
            role: Some("student".to_string()),
        }
    }

    pub fn clear_session(&self) {
        self.platform.storage_remove(storage_keys::AUTH_TOKEN);
    }
}

impl Clone for SessionService {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            platform: Arc::clone(&self.platform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::infrastructure::testing::StubApi;
    use crate::ports::outbound::{ApiError, StorageProvider};
    use serde_json::json;

    fn service_with(api: &StubApi) -> SessionService {
        let (platform, _) = create_mock_platform();
        SessionService::new(Arc::new(api.clone()), Arc::new(platform))
    }

    #[tokio::test]
    async fn primary_endpoint_wins_without_fallback() {
        let api = StubApi::new();
        api.respond("/api/auth/web/me", json!({"id": 5, "username": "mira"}));
        let service = service_with(&api);

        let user = service.check_session().await.unwrap();
        assert_eq!(user.username, "mira");
        assert_eq!(api.call_count("/api/auth/hybrid/me"), 0);
    }

    #[tokio::test]
    async fn fallback_probe_attaches_stored_bearer() {
        let api = StubApi::new();
        api.fail(
            "/api/auth/web/me",
            ApiError::Status {
                status: 401,
                detail: String::new(),
            },
        );
        api.respond("/api/auth/hybrid/me", json!({"id": 5, "username": "mira"}));

        let (platform, handles) = create_mock_platform();
        handles.storage.save(storage_keys::AUTH_TOKEN, "tok-123");
        let service = SessionService::new(Arc::new(api.clone()), Arc::new(platform));

        let user = service.check_session().await;
        assert!(user.is_some());
        let hybrid_call = api
            .calls()
            .into_iter()
            .find(|c| c.path == "/api/auth/hybrid/me")
            .unwrap();
        assert_eq!(hybrid_call.bearer.as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn both_probes_failing_is_quietly_signed_out() {
        let api = StubApi::new();
        api.fail("/api/auth/web/me", ApiError::Transport("offline".to_string()));
        api.fail(
            "/api/auth/hybrid/me",
            ApiError::Transport("offline".to_string()),
        );
        let service = service_with(&api);

        assert!(service.check_session().await.is_none());
    }

    #[tokio::test]
    async fn non_user_payload_falls_through_to_hybrid() {
        let api = StubApi::new();
        api.respond("/api/auth/web/me", json!({"success": false, "message": "expired"}));
        api.respond("/api/auth/hybrid/me", json!({"id": 2, "username": "kai"}));
        let service = service_with(&api);

        let user = service.check_session().await.unwrap();
        assert_eq!(user.username, "kai");
    }

    #[tokio::test]
    async fn successful_logout_clears_the_token() {
        let api = StubApi::new();
        api.respond("/api/auth/web/logout", json!({"success": true}));

        let (platform, handles) = create_mock_platform();
        handles.storage.save(storage_keys::AUTH_TOKEN, "tok-123");
        let service = SessionService::new(Arc::new(api), Arc::new(platform));

        service.logout().await.unwrap();
        assert!(handles.storage.load(storage_keys::AUTH_TOKEN).is_none());
    }

    #[tokio::test]
    async fn failed_logout_keeps_the_token() {
        let api = StubApi::new();
        api.fail(
            "/api/auth/web/logout",
            ApiError::Status {
                status: 500,
                detail: "boom".to_string(),
            },
        );

        let (platform, handles) = create_mock_platform();
        handles.storage.save(storage_keys::AUTH_TOKEN, "tok-123");
        let service = SessionService::new(Arc::new(api), Arc::new(platform));

        assert!(service.logout().await.is_err());
        assert_eq!(
            handles.storage.load(storage_keys::AUTH_TOKEN).as_deref(),
            Some("tok-123")
        );
    }

    #[tokio::test]
    async fn demo_session_stores_a_token() {
        let (platform, handles) = create_mock_platform();
        handles.time.set_unix_secs(1_700_000_000);
        let service = SessionService::new(Arc::new(StubApi::new()), Arc::new(platform));

        let user = service.establish_demo_session("littlepainter");
        assert_eq!(user.username, "littlepainter");
        let token = handles.storage.load(storage_keys::AUTH_TOKEN).unwrap();
        assert!(token.starts_with("demo-token-"));
    }
}
