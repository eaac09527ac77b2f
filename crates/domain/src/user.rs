use serde::{Deserialize, Serialize};

use crate::course::Course;

// =============================================================================
// User Profile
// =============================================================================

/// The signed-in identity as reported by the session endpoints. Backends
/// differ in which optional fields they populate, so everything except the
/// id tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// Name shown in the nav bar: nickname when set, username otherwise.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nick) if !nick.is_empty() => nick,
            _ => &self.username,
        }
    }

    /// First character of the display name, for the avatar fallback badge.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

// =============================================================================
// Learning Stats
// =============================================================================

/// Aggregates behind the dashboard stat cards (`/api/user/stats`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LearningStats {
    #[serde(default)]
    pub total_courses: i64,
    #[serde(default)]
    pub completed_courses: i64,
    #[serde(default)]
    pub ongoing_courses: i64,
    #[serde(default)]
    pub average_progress: f64,
    #[serde(default)]
    pub total_learning_hours: f64,
    #[serde(default)]
    pub learning_days: i64,
    #[serde(default)]
    pub enrollment_count: i64,
}

// =============================================================================
// Course Progress
// =============================================================================

/// One enrollment row from `/api/user/courses`: the course plus how far the
/// learner has gotten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub course: Course,
    /// Percentage complete, 0-100.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub last_accessed_at: Option<String>,
    #[serde(default)]
    pub lesson_count: i64,
}

impl CourseProgress {
    /// Progress clamped into 0-100 for rendering; backends occasionally
    /// report overshoot on completed rows.
    pub fn progress_percent(&self) -> f64 {
        self.progress.clamp(0.0, 100.0)
    }

    pub fn is_ongoing(&self) -> bool {
        !self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_nickname() {
        let user = UserProfile {
            id: 7,
            username: "miya".to_string(),
            nickname: Some("Miya W.".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Miya W.");

        let user = UserProfile {
            id: 7,
            username: "miya".to_string(),
            nickname: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "miya");
    }

    #[test]
    fn initial_upper_cases_first_character() {
        let user = UserProfile {
            username: "leo".to_string(),
            ..Default::default()
        };
        assert_eq!(user.initial(), "L");

        let user = UserProfile::default();
        assert_eq!(user.initial(), "?");
    }

    #[test]
    fn progress_percent_is_clamped() {
        let row = CourseProgress {
            course: crate::course::Course {
                id: 1,
                title: "Lines".to_string(),
                description: String::new(),
                short_description: None,
                age_range: String::new(),
                stage: None,
                duration: 0,
                icon: None,
                color: None,
                cover_image: None,
                video_url: None,
                access_level: Default::default(),
                price: None,
                status: Default::default(),
                created_at: None,
                updated_at: None,
            },
            progress: 104.5,
            completed: true,
            started_at: None,
            last_accessed_at: None,
            lesson_count: 8,
        };
        assert_eq!(row.progress_percent(), 100.0);
    }

    #[test]
    fn stats_deserialize_with_missing_fields() {
        let stats: LearningStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_courses, 0);
        assert_eq!(stats.average_progress, 0.0);
    }
}
