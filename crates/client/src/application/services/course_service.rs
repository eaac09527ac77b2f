//! Course catalog service
//!
//! Read-only access to the public course endpoints. Filtering by age and
//! stage happens client-side over the fetched list (`CourseFilter` in the
//! domain crate), so there are no query parameters here.

use std::sync::Arc;

use minivinci_domain::{Course, Lesson};

use crate::application::error::{ParseEnvelope, ServiceError};
use crate::ports::outbound::RawApiPort;

pub struct CourseService {
    api: Arc<dyn RawApiPort>,
}

impl CourseService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// All published courses, as the server lists them.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ServiceError> {
        let value = self.api.get_json("/api/courses").await?;
        value.parse_enveloped()
    }

    pub async fn get_course(&self, id: i64) -> Result<Course, ServiceError> {
        let value = self.api.get_json(&format!("/api/courses/{}", id)).await?;
        value.parse_enveloped()
    }

    /// Lessons of one course, in the server's sort order.
    pub async fn list_lessons(&self, course_id: i64) -> Result<Vec<Lesson>, ServiceError> {
        let value = self
            .api
            .get_json(&format!("/api/courses/{}/lessons", course_id))
            .await?;
        value.parse_enveloped()
    }
}

impl Clone for CourseService {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::StubApi;
    use minivinci_domain::{AccessLevel, GrowthStage};
    use serde_json::json;

    #[tokio::test]
    async fn course_list_parses_enveloped_page() {
        let api = StubApi::new();
        api.respond(
            "/api/courses",
            json!({
                "success": true,
                "data": {
                    "data": [
                        {
                            "id": 1,
                            "title": "水彩启蒙",
                            "description": "第一支画笔",
                            "age_range": "5-7",
                            "stage": "awakening",
                            "duration": 45,
                            "access_level": "free",
                            "status": "published"
                        }
                    ],
                    "total": 1
                }
            }),
        );
        let service = CourseService::new(Arc::new(api));

        let courses = service.list_courses().await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].stage, Some(GrowthStage::Awakening));
        assert_eq!(courses[0].access_level, AccessLevel::Free);
    }

    #[tokio::test]
    async fn single_course_parses_direct_data() {
        let api = StubApi::new();
        api.respond(
            "/api/courses/9",
            json!({
                "success": true,
                "data": {
                    "id": 9,
                    "title": "素描基础",
                    "description": "",
                    "age_range": "7-9",
                    "duration": 60
                }
            }),
        );
        let service = CourseService::new(Arc::new(api));

        let course = service.get_course(9).await.unwrap();
        assert_eq!(course.id, 9);
        assert_eq!(course.title, "素描基础");
    }

    #[tokio::test]
    async fn lessons_path_includes_course_id() {
        let api = StubApi::new();
        api.respond(
            "/api/courses/9/lessons",
            json!({"success": true, "data": []}),
        );
        let service = CourseService::new(Arc::new(api.clone()));

        let lessons: Vec<Lesson> = service.list_lessons(9).await.unwrap();
        assert!(lessons.is_empty());
        assert_eq!(api.call_count("/api/courses/9/lessons"), 1);
    }
}
