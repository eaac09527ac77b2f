//! Catalog card for a single course.

use dioxus::prelude::*;
use minivinci_domain::course::{AccessLevel, Course, GrowthStage};

use crate::presentation::helpers::format_helpers::format_course_minutes;
use crate::router::use_navigation;

#[component]
pub fn CourseCard(course: Course) -> Element {
    let nav = use_navigation();
    let detail_path = format!("/course/{}", course.id);
    let icon = card_icon(&course).to_string();
    let color = card_color(&course).to_string();
    let price = course.price.unwrap_or_default();

    rsx! {
        div {
            class: "course-card art-card art-shadow",
            style: "position: relative; z-index: 1;",
            onclick: {
                let mut nav = nav.clone();
                move |_| nav.navigate(&detail_path)
            },
            div {
                class: "course-image",
                style: "background: {color};",
                i { class: "{icon}", style: "font-size: 2rem; color: white;" }
            }
            div { class: "course-content",
                div { style: "display: flex; justify-content: space-between; align-items: start; margin-bottom: var(--space-sm);",
                    h3 { class: "course-title", {course.title.clone()} }
                    if let Some(stage) = course.stage {
                        span {
                            class: "course-badge {stage_badge_class(stage)}",
                            {stage.display_name()}
                        }
                    }
                }
                p { class: "course-description", {course.blurb().to_string()} }
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: var(--space-md);",
                    span { class: "course-age", "{course.age_range}岁" }
                    span { class: "course-duration", {format_course_minutes(course.duration)} }
                }
                div { style: "margin-top: var(--space-md);",
                    span {
                        class: "course-status {access_status_class(course.access_level)}",
                        {course.access_level.badge_label()}
                    }
                    if price > 0.0 {
                        span { style: "margin-left: var(--space-sm); color: var(--color-accent-warm); font-weight: 500;",
                            "¥{price}"
                        }
                    }
                }
            }
        }
    }
}

/// Stylesheet class for the stage badge in the card header.
pub(crate) fn stage_badge_class(stage: GrowthStage) -> &'static str {
    match stage {
        GrowthStage::Awakening => "badge-awakening",
        GrowthStage::Expression => "badge-expression",
        GrowthStage::Structure => "badge-structure",
        GrowthStage::Style => "badge-style",
    }
}

/// Stylesheet class for the access status chip.
pub(crate) fn access_status_class(level: AccessLevel) -> &'static str {
    match level {
        AccessLevel::Free => "status-available",
        AccessLevel::Premium => "status-locked",
        AccessLevel::Internal => "status-internal",
    }
}

/// Font Awesome class for the card header. The catalog stores free-form
/// icon strings; anything that is not a Font Awesome class falls back to
/// a keyword match on the title.
pub(crate) fn card_icon(course: &Course) -> &str {
    if let Some(icon) = course.icon.as_deref() {
        if icon.contains("fa-") {
            return icon;
        }
    }
    let title = &course.title;
    if title.contains("亲子") || title.contains("家庭") {
        "fas fa-users"
    } else if title.contains("色彩") || title.contains("颜色") {
        "fas fa-palette"
    } else if title.contains("线条") || title.contains("绘画") {
        "fas fa-paint-brush"
    } else if title.contains("形状") || title.contains("几何") {
        "fas fa-shapes"
    } else if title.contains("观察") || title.contains("感知") {
        "fas fa-eye"
    } else if title.contains("创造") || title.contains("创新") {
        "fas fa-lightbulb"
    } else if title.contains("元认知") || title.contains("思考") {
        "fas fa-brain"
    } else {
        "fas fa-graduation-cap"
    }
}

/// Header background. Stored color wins, then a stage gradient.
pub(crate) fn card_color(course: &Course) -> &str {
    if let Some(color) = course.color.as_deref() {
        if !color.is_empty() {
            return color;
        }
    }
    match course.stage {
        Some(GrowthStage::Awakening) => "linear-gradient(135deg, #ff9a9e, #fad0c4)",
        Some(GrowthStage::Expression) => "linear-gradient(135deg, #a1c4fd, #c2e9fb)",
        Some(GrowthStage::Structure) => "linear-gradient(135deg, #ffecd2, #fcb69f)",
        Some(GrowthStage::Style) => "linear-gradient(135deg, #d4fc79, #96e6a1)",
        None => "linear-gradient(135deg, #667eea, #764ba2)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str) -> Course {
        Course {
            id: 1,
            title: title.to_string(),
            description: String::new(),
            short_description: None,
            age_range: "8-10".to_string(),
            stage: None,
            duration: 0,
            icon: None,
            color: None,
            cover_image: None,
            video_url: None,
            access_level: AccessLevel::Free,
            price: None,
            status: Default::default(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn every_stage_has_a_distinct_badge_class() {
        let classes: Vec<_> = GrowthStage::all()
            .iter()
            .map(|s| stage_badge_class(*s))
            .collect();
        assert_eq!(classes.len(), 4);
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn access_levels_map_to_status_classes() {
        assert_eq!(access_status_class(AccessLevel::Free), "status-available");
        assert_eq!(access_status_class(AccessLevel::Premium), "status-locked");
        assert_eq!(access_status_class(AccessLevel::Internal), "status-internal");
    }

    #[test]
    fn stored_font_awesome_icon_wins() {
        let mut c = course("创造课");
        c.icon = Some("fas fa-brain".to_string());
        assert_eq!(card_icon(&c), "fas fa-brain");
    }

    #[test]
    fn emoji_icon_falls_back_to_title_keywords() {
        let mut c = course("亲子美术课");
        c.icon = Some("🎨".to_string());
        assert_eq!(card_icon(&c), "fas fa-users");
    }

    #[test]
    fn unmatched_title_gets_the_default_icon() {
        assert_eq!(card_icon(&course("素描基础")), "fas fa-graduation-cap");
    }

    #[test]
    fn stage_gradient_used_when_no_color_stored() {
        let mut c = course("x");
        c.stage = Some(GrowthStage::Awakening);
        assert!(card_color(&c).contains("#ff9a9e"));
        c.color = Some("#4A6FA5".to_string());
        assert_eq!(card_color(&c), "#4A6FA5");
    }
}
