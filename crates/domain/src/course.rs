use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Growth Stage
// =============================================================================

/// The four-stage teaching ladder every course is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Awakening,
    Expression,
    Structure,
    Style,
}

impl GrowthStage {
    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthStage::Awakening => "唤醒感知",
            GrowthStage::Expression => "自由表达",
            GrowthStage::Structure => "结构理解",
            GrowthStage::Style => "自我风格",
        }
    }

    /// One-line description shown on stage cards.
    pub fn tagline(&self) -> &'static str {
        match self {
            GrowthStage::Awakening => "通过色彩、形状、质感的探索，唤醒对艺术的敏感度和兴趣",
            GrowthStage::Expression => "鼓励自由创作，建立自信，发展个人表达风格",
            GrowthStage::Structure => "学习艺术原理和技巧，理解构图、色彩、光影的关系",
            GrowthStage::Style => "形成个人艺术语言，能够独立创作有深度的作品",
        }
    }

    /// Recommended age band for the stage.
    pub fn age_hint(&self) -> &'static str {
        match self {
            GrowthStage::Awakening => "5-7岁",
            GrowthStage::Expression => "8-10岁",
            GrowthStage::Structure => "11-13岁",
            GrowthStage::Style => "12岁以上",
        }
    }

    /// Parses a wire value; unknown strings yield `None` rather than an error.
    pub fn parse(value: &str) -> Option<GrowthStage> {
        match value {
            "awakening" => Some(GrowthStage::Awakening),
            "expression" => Some(GrowthStage::Expression),
            "structure" => Some(GrowthStage::Structure),
            "style" => Some(GrowthStage::Style),
            _ => None,
        }
    }

    /// Returns all stages in ladder order.
    pub fn all() -> [GrowthStage; 4] {
        [
            GrowthStage::Awakening,
            GrowthStage::Expression,
            GrowthStage::Structure,
            GrowthStage::Style,
        ]
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn lenient_stage<'de, D>(deserializer: D) -> Result<Option<GrowthStage>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(GrowthStage::parse))
}

// =============================================================================
// Access Level
// =============================================================================

/// Who may watch a course. Unknown wire values degrade to `Free` (the
/// behavior the catalog pages expect), never to a deserialization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AccessLevel {
    #[default]
    Free,
    Premium,
    Internal,
}

impl AccessLevel {
    /// Card status label: what watching this course requires.
    pub fn badge_label(&self) -> &'static str {
        match self {
            AccessLevel::Free => "可观看",
            AccessLevel::Premium => "需解锁",
            AccessLevel::Internal => "内部课程",
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, AccessLevel::Free)
    }
}

impl From<String> for AccessLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "premium" => AccessLevel::Premium,
            "internal" => AccessLevel::Internal,
            _ => AccessLevel::Free,
        }
    }
}

// =============================================================================
// Course Status
// =============================================================================

/// Publication state. Clients must keep rendering when the backend grows a
/// new status, so unknown wire values degrade to `Published`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum CourseStatus {
    Draft,
    #[default]
    Published,
    Offline,
}

impl CourseStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, CourseStatus::Published)
    }
}

impl From<String> for CourseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => CourseStatus::Draft,
            "offline" => CourseStatus::Offline,
            _ => CourseStatus::Published,
        }
    }
}

// =============================================================================
// Age Bracket
// =============================================================================

/// Age bands the catalog filters by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    Age5To7,
    Age8To10,
    Age11To13,
}

impl AgeBracket {
    pub fn display_name(&self) -> &'static str {
        match self {
            AgeBracket::Age5To7 => "5-7",
            AgeBracket::Age8To10 => "8-10",
            AgeBracket::Age11To13 => "11-13",
        }
    }

    pub fn all() -> [AgeBracket; 3] {
        [
            AgeBracket::Age5To7,
            AgeBracket::Age8To10,
            AgeBracket::Age11To13,
        ]
    }

    /// Classifies a free-form `age_range` string ("5-7", "Ages 8-10", ...)
    /// by its first number. Strings without a digit classify as `None`.
    pub fn from_age_range(age_range: &str) -> Option<AgeBracket> {
        let digits: String = age_range
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let first: u32 = digits.parse().ok()?;
        match first {
            5..=7 => Some(AgeBracket::Age5To7),
            8..=10 => Some(AgeBracket::Age8To10),
            11..=13 => Some(AgeBracket::Age11To13),
            _ => None,
        }
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// Course
// =============================================================================

/// A catalog course as served by `/api/courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub age_range: String,
    #[serde(default, deserialize_with = "lenient_stage")]
    pub stage: Option<GrowthStage>,
    /// Total length in minutes.
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub access_level: AccessLevel,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: CourseStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Course {
    /// Short blurb for cards: the short description when present, otherwise
    /// the full description.
    pub fn blurb(&self) -> &str {
        match self.short_description.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.description,
        }
    }

    pub fn age_bracket(&self) -> Option<AgeBracket> {
        AgeBracket::from_age_range(&self.age_range)
    }
}

// =============================================================================
// Lesson
// =============================================================================

/// A single lesson row from `/api/courses/{id}/lessons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    #[serde(default)]
    pub course_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Length in seconds.
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub is_free_preview: bool,
    #[serde(default)]
    pub sort_order: i64,
}

// =============================================================================
// Course Filter
// =============================================================================

/// Age-band side of the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeFilter {
    #[default]
    All,
    Bracket(AgeBracket),
}

/// Stage side of the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageFilter {
    #[default]
    All,
    Stage(GrowthStage),
}

/// Pure client-side predicate over already-fetched courses. Filtering never
/// triggers a re-fetch; pages recompute the visible set reactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseFilter {
    pub age: AgeFilter,
    pub stage: StageFilter,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        let age_ok = match self.age {
            AgeFilter::All => true,
            AgeFilter::Bracket(bracket) => course.age_bracket() == Some(bracket),
        };
        let stage_ok = match self.stage {
            StageFilter::All => true,
            StageFilter::Stage(stage) => course.stage == Some(stage),
        };
        age_ok && stage_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(age_range: &str, stage: Option<GrowthStage>) -> Course {
        Course {
            id: 1,
            title: "Color Play".to_string(),
            description: String::new(),
            short_description: None,
            age_range: age_range.to_string(),
            stage,
            duration: 45,
            icon: None,
            color: None,
            cover_image: None,
            video_url: None,
            access_level: AccessLevel::Free,
            price: None,
            status: CourseStatus::Published,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn unknown_access_level_degrades_to_free() {
        let level: AccessLevel = serde_json::from_str("\"vip\"").unwrap();
        assert_eq!(level, AccessLevel::Free);

        let level: AccessLevel = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(level, AccessLevel::Premium);
    }

    #[test]
    fn unknown_status_degrades_to_published() {
        let status: CourseStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, CourseStatus::Published);

        let status: CourseStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(status, CourseStatus::Draft);
    }

    #[test]
    fn unknown_stage_deserializes_to_none() {
        let parsed: Course = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "Sketch Lab",
            "stage": "experimental",
        }))
        .unwrap();
        assert_eq!(parsed.stage, None);

        let parsed: Course = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "Sketch Lab",
            "stage": "structure",
        }))
        .unwrap();
        assert_eq!(parsed.stage, Some(GrowthStage::Structure));
    }

    #[test]
    fn age_bracket_classifies_by_first_number() {
        assert_eq!(AgeBracket::from_age_range("5-7"), Some(AgeBracket::Age5To7));
        assert_eq!(
            AgeBracket::from_age_range("Ages 8-10"),
            Some(AgeBracket::Age8To10)
        );
        assert_eq!(
            AgeBracket::from_age_range("11-13 juniors"),
            Some(AgeBracket::Age11To13)
        );
        assert_eq!(AgeBracket::from_age_range("adults"), None);
        assert_eq!(AgeBracket::from_age_range("3-4"), None);
    }

    #[test]
    fn filter_matches_age_and_stage_independently() {
        let c = course("8-10", Some(GrowthStage::Expression));

        assert!(CourseFilter::default().matches(&c));
        assert!(CourseFilter {
            age: AgeFilter::Bracket(AgeBracket::Age8To10),
            stage: StageFilter::All,
        }
        .matches(&c));
        assert!(CourseFilter {
            age: AgeFilter::All,
            stage: StageFilter::Stage(GrowthStage::Expression),
        }
        .matches(&c));
        assert!(!CourseFilter {
            age: AgeFilter::Bracket(AgeBracket::Age5To7),
            stage: StageFilter::All,
        }
        .matches(&c));
        assert!(!CourseFilter {
            age: AgeFilter::All,
            stage: StageFilter::Stage(GrowthStage::Style),
        }
        .matches(&c));
    }

    #[test]
    fn course_without_stage_only_matches_all_stage_filter() {
        let c = course("5-7", None);

        assert!(CourseFilter::default().matches(&c));
        assert!(!CourseFilter {
            age: AgeFilter::All,
            stage: StageFilter::Stage(GrowthStage::Awakening),
        }
        .matches(&c));
    }

    #[test]
    fn blurb_prefers_short_description() {
        let mut c = course("5-7", None);
        c.description = "Long form".to_string();
        assert_eq!(c.blurb(), "Long form");

        c.short_description = Some("Short form".to_string());
        assert_eq!(c.blurb(), "Short form");

        c.short_description = Some(String::new());
        assert_eq!(c.blurb(), "Long form");
    }
}
