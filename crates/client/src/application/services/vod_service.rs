//! VOD credential and telemetry service
//!
//! Fetches signed playback credentials for the player and posts best-effort
//! playback reports. Permission failures are left intact for the caller:
//! the playback controller turns them into the request-access affordance
//! rather than an error panel.

use std::sync::Arc;

use minivinci_domain::{PlaybackCredential, VideoMeta};

use crate::application::dto::{PlaybackPayload, PlaybackReport};
use crate::application::error::{ParseEnvelope, ServiceError};
use crate::application::services::session_service::stored_bearer;
use crate::ports::outbound::{PlatformPort, RawApiPort};

pub struct VodService {
    api: Arc<dyn RawApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl VodService {
    pub fn new(api: Arc<dyn RawApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { api, platform }
    }

    /// Signed credential plus optional display metadata for one video.
    ///
    /// Field completeness is NOT validated here; the playback controller
    /// distinguishes "incomplete credential" from transport failures.
    pub async fn fetch_playback(
        &self,
        video_id: &str,
    ) -> Result<(PlaybackCredential, Option<VideoMeta>), ServiceError> {
        let bearer = stored_bearer(&self.platform);
        let value = self
            .api
            .get_json_auth(&format!("/api/vod/video/{}", video_id), bearer.as_deref())
            .await?;
        let payload: PlaybackPayload = value.parse_enveloped()?;
        payload.into_parts()
    }

    /// Post a playback report. Best-effort by contract: the caller decides
    /// whether a failure is even worth logging.
    pub async fn report_playback(&self, report: &PlaybackReport) -> Result<(), ServiceError> {
        let bearer = stored_bearer(&self.platform);
        let body = serde_json::to_value(report)
            .map_err(|e| ServiceError::Parse(e.to_string()))?;
        self.api
            .post_json_auth("/api/vod/playback/record", &body, bearer.as_deref())
            .await?;
        Ok(())
    }
}

impl Clone for VodService {
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
    use crate::ports::outbound::{storage_keys, ApiError, StorageProvider};
    use serde_json::json;

    fn service_with(api: &StubApi) -> VodService {
        let (platform, _) = create_mock_platform();
        VodService::new(Arc::new(api.clone()), Arc::new(platform))
    }

    #[tokio::test]
    async fn fetch_returns_credential_and_meta() {
        let api = StubApi::new();
        api.respond(
            "/api/vod/video/v77",
            json!({
                "success": true,
                "data": {
                    "playback": {
                        "file_id": "F1",
                        "app_id": "A1",
                        "psign": "S1",
                        "expire_at": "2026-12-01T10:00:00Z"
                    },
                    "video": {"title": "线条练习"}
                }
            }),
        );
        let service = service_with(&api);

        let (credential, meta) = service.fetch_playback("v77").await.unwrap();
        assert_eq!(credential.app_id, "A1");
        assert_eq!(meta.unwrap().title.as_deref(), Some("线条练习"));
    }

    #[tokio::test]
    async fn fetch_attaches_stored_bearer() {
        let api = StubApi::new();
        api.respond(
            "/api/vod/video/v1",
            json!({"success": true, "data": {"playback": {"file_id": "F", "app_id": "A", "psign": "P"}}}),
        );
        let (platform, handles) = create_mock_platform();
        handles.storage.save(storage_keys::AUTH_TOKEN, "tok-7");
        let service = VodService::new(Arc::new(api.clone()), Arc::new(platform));

        service.fetch_playback("v1").await.unwrap();
        assert_eq!(api.calls()[0].bearer.as_deref(), Some("tok-7"));
    }

    #[tokio::test]
    async fn permission_denial_stays_classifiable() {
        let api = StubApi::new();
        api.fail(
            "/api/vod/video/v1",
            ApiError::Status {
                status: 403,
                detail: "无权限".to_string(),
            },
        );
        let service = service_with(&api);

        let err = service.fetch_playback("v1").await.unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[tokio::test]
    async fn report_posts_the_serialized_body() {
        let api = StubApi::new();
        api.respond("/api/vod/playback/record", json!({"success": true}));
        let service = service_with(&api);

        let report = PlaybackReport::new("v9", 120, 48.0);
        service.report_playback(&report).await.unwrap();

        let call = api.calls().into_iter().next().unwrap();
        assert_eq!(call.method, "POST");
        let body = call.body.unwrap();
        assert_eq!(body["video_id"], "v9");
        assert_eq!(body["play_duration"], 120);
    }
}
