//! Learner dashboard service
//!
//! Stats and per-course progress for the signed-in user. Both endpoints
//! want authentication; the stored bearer token is attached so desktop
//! sessions work without cookies.

use std::sync::Arc;

use minivinci_domain::{CourseProgress, LearningStats};

use crate::application::error::{ParseEnvelope, ServiceError};
use crate::application::services::session_service::stored_bearer;
use crate::ports::outbound::{PlatformPort, RawApiPort};

pub struct UserService {
    api: Arc<dyn RawApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl UserService {
    pub fn new(api: Arc<dyn RawApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { api, platform }
    }

    pub async fn learning_stats(&self) -> Result<LearningStats, ServiceError> {
        let bearer = stored_bearer(&self.platform);
        let value = self
            .api
            .get_json_auth("/api/user/stats", bearer.as_deref())
            .await?;
        value.parse_enveloped()
    }

    /// The user's enrolled courses with progress, ongoing and completed.
    pub async fn my_courses(&self) -> Result<Vec<CourseProgress>, ServiceError> {
        let bearer = stored_bearer(&self.platform);
        let value = self
            .api
            .get_json_auth("/api/user/courses", bearer.as_deref())
            .await?;
        value.parse_enveloped()
    }
}

impl Clone for UserService {
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
    use crate::ports::outbound::{storage_keys, StorageProvider};
    use serde_json::json;

    #[tokio::test]
    async fn stats_request_carries_bearer() {
        let api = StubApi::new();
        api.respond(
            "/api/user/stats",
            json!({
                "success": true,
                "data": {"total_courses": 4, "completed_courses": 1, "ongoing_courses": 2}
            }),
        );
        let (platform, handles) = create_mock_platform();
        handles.storage.save(storage_keys::AUTH_TOKEN, "tok-9");
        let service = UserService::new(Arc::new(api.clone()), Arc::new(platform));

        let stats = service.learning_stats().await.unwrap();
        assert_eq!(stats.total_courses, 4);
        assert_eq!(api.calls()[0].bearer.as_deref(), Some("tok-9"));
    }

    #[tokio::test]
    async fn my_courses_parses_progress_rows() {
        let api = StubApi::new();
        api.respond(
            "/api/user/courses",
            json!({
                "success": true,
                "data": [{
                    "course": {
                        "id": 3,
                        "title": "国画入门",
                        "description": "",
                        "age_range": "10-12",
                        "duration": 50
                    },
                    "progress": 62.5,
                    "completed": false,
                    "lesson_count": 8
                }]
            }),
        );
        let (platform, _) = create_mock_platform();
        let service = UserService::new(Arc::new(api), Arc::new(platform));

        let rows = service.my_courses().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_ongoing());
        assert_eq!(rows[0].course.id, 3);
    }
}
