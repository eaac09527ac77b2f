//! Embedded sample catalog
//!
//! Fallback content for when the server is unreachable: two showcase
//! courses with lessons, plus dashboard rows and stats. Pages that render
//! any of this mark their [`ContentSource`](super::state::ContentSource)
//! as `Sample` so the degradation is visible, never silent.

use minivinci_domain::{
    AccessLevel, Course, CourseProgress, CourseStatus, GrowthStage, LearningStats, Lesson,
};

fn course(
    id: i64,
    title: &str,
    description: &str,
    short_description: &str,
    age_range: &str,
    stage: GrowthStage,
    duration: i64,
    access_level: AccessLevel,
    price: Option<f64>,
    icon: &str,
    color: &str,
) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: description.to_string(),
        short_description: Some(short_description.to_string()),
        age_range: age_range.to_string(),
        stage: Some(stage),
        duration,
        icon: Some(icon.to_string()),
        color: Some(color.to_string()),
        cover_image: None,
        video_url: None,
        access_level,
        price,
        status: CourseStatus::Published,
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_courses() -> Vec<Course> {
    vec![
        course(
            1,
            "创造性艺术与元认知成长课",
            "本课程通过系统的艺术创作活动，引导孩子建立对自我创作过程的觉察能力。课程不仅教授绘画技巧，更重要的是培养孩子的元认知能力——即\"思考自己的思考\"，帮助他们在创作中建立自信、发展独特的艺术表达方式。",
            "通过艺术培养观察力、创造力与自我觉察",
            "8-12",
            GrowthStage::Structure,
            450,
            AccessLevel::Premium,
            Some(299.0),
            "fas fa-brain",
            "#4A6FA5",
        ),
        course(
            2,
            "亲子美术课",
            "专为亲子设计的艺术体验课程，通过简单的艺术活动促进亲子情感交流。课程强调过程而非结果，在轻松愉快的创作氛围中，帮助孩子建立对艺术的基本感知，同时增进亲子间的理解与连接。",
            "在共同创作中建立情感连接",
            "5-8",
            GrowthStage::Awakening,
            300,
            AccessLevel::Free,
            None,
            "fas fa-users",
            "#E8B4BC",
        ),
    ]
}

/// Sample course by id; unknown ids get the free showcase course so the
/// detail page always has something coherent to render.
pub fn sample_course(id: i64) -> Course {
    sample_courses()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| {
            let mut fallback = sample_courses().remove(1);
            fallback.id = id;
            fallback
        })
}

fn lesson(
    id: i64,
    course_id: i64,
    title: &str,
    description: &str,
    duration_secs: i64,
    is_free_preview: bool,
    sort_order: i64,
) -> Lesson {
    Lesson {
        id,
        course_id,
        title: title.to_string(),
        description: Some(description.to_string()),
        video_url: None,
        duration: duration_secs,
        is_free_preview,
        sort_order,
    }
}

pub fn sample_lessons(course_id: i64) -> Vec<Lesson> {
    if course_id == 1 {
        vec![lesson(
            1,
            1,
            "观察力的觉醒",
            "学习如何观察周围的世界",
            15 * 60,
            true,
            1,
        )]
    } else {
        vec![
            lesson(1, course_id, "手印的印记", "通过手印创作", 10 * 60, true, 1),
            lesson(
                2,
                course_id,
                "色彩的情绪",
                "探索颜色情感",
                12 * 60,
                false,
                2,
            ),
        ]
    }
}

/// Enrollment rows for the dashboard fallback: one ongoing, one completed.
pub fn sample_progress() -> Vec<CourseProgress> {
    let courses = sample_courses();
    vec![
        CourseProgress {
            course: courses[1].clone(),
            progress: 75.0,
            completed: false,
            started_at: None,
            last_accessed_at: None,
            lesson_count: 8,
        },
        CourseProgress {
            course: courses[0].clone(),
            progress: 100.0,
            completed: true,
            started_at: None,
            last_accessed_at: None,
            lesson_count: 10,
        },
    ]
}

pub fn sample_stats() -> LearningStats {
    LearningStats {
        total_courses: 6,
        completed_courses: 1,
        ongoing_courses: 3,
        average_progress: 57.5,
        total_learning_hours: 24.0,
        learning_days: 18,
        enrollment_count: 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_course_falls_back_to_free_content() {
        let known = sample_course(1);
        assert_eq!(known.title, "创造性艺术与元认知成长课");

        let unknown = sample_course(999);
        assert_eq!(unknown.id, 999);
        assert!(unknown.access_level.is_free());
    }

    #[test]
    fn every_sample_course_has_lessons() {
        for c in sample_courses() {
            assert!(!sample_lessons(c.id).is_empty());
        }
    }

    #[test]
    fn lessons_carry_their_course_id() {
        for l in sample_lessons(42) {
            assert_eq!(l.course_id, 42);
        }
    }
}
