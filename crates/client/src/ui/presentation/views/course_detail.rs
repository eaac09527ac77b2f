//! Course detail page
//!
//! Fetches one course and its lesson list, auto-selects the first lesson,
//! and feeds the selected lesson to the hosted player. The access policy
//! lives in [`lesson_access`]; the player only receives its verdict.

use dioxus::prelude::*;

use minivinci_domain::{AccessLevel, Course, Lesson};

use crate::application::ServiceError;
use crate::presentation::components::{Loading, SampleNotice, VodPlayer};
use crate::presentation::helpers::format_helpers::format_course_minutes;
use crate::presentation::sample_content::{sample_course, sample_lessons};
use crate::presentation::services::use_course_service;
use crate::presentation::state::{ContentSource, SessionState};
use crate::router::use_navigation;
use crate::use_platform;

#[component]
pub fn CourseDetailPage() -> Element {
    let platform = use_platform();
    let course_service = use_course_service();
    let nav = use_navigation();
    let session = use_context::<SessionState>();

    let mut course = use_signal(|| None::<Course>);
    let mut lessons = use_signal(Vec::<Lesson>::new);
    let mut selected = use_signal(|| None::<Lesson>);
    let mut source = use_signal(ContentSource::default);

    let load = {
        let service = course_service.clone();
        let platform = platform.clone();
        move |course_id: i64| {
            let service = service.clone();
            let platform = platform.clone();
            source.set(ContentSource::Loading);
            spawn(async move {
                let fetched = async {
                    let fetched_course = service.get_course(course_id).await?;
                    let fetched_lessons = service.list_lessons(course_id).await?;
                    Ok::<_, ServiceError>((fetched_course, fetched_lessons))
                }
                .await;
                let (loaded_course, loaded_lessons, state) = match fetched {
                    Ok((c, l)) => (c, l, ContentSource::Live),
                    Err(err) => {
                        platform.log_warn(&format!(
                            "course {course_id} unavailable, falling back to samples: {err}"
                        ));
                        (
                            sample_course(course_id),
                            sample_lessons(course_id),
                            ContentSource::Sample,
                        )
                    }
                };
                selected.set(loaded_lessons.first().cloned());
                course.set(Some(loaded_course));
                lessons.set(loaded_lessons);
                source.set(state);
            });
        }
    };

    {
        let mut load = load.clone();
        let nav = nav.clone();
        use_effect(move || {
            let course_id = nav
                .param("id")
                .and_then(|raw| raw.parse::<i64>().ok())
                .unwrap_or_default();
            load(course_id);
        });
    }

    let state = *source.read();
    let current = (!state.is_loading())
        .then(|| course.read().clone())
        .flatten();
    let Some(course) = current else {
        return rsx! {
            div { class: "course-detail-page",
                Loading { message: "正在加载课程详情..." }
            }
        };
    };

    let lesson_list = lessons.read().clone();
    let selected_lesson = selected.read().clone();
    let active_id = selected_lesson.as_ref().map(|l| l.id);
    let signed_in = session.is_signed_in();
    let header_color = course
        .color
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "#4A6FA5".to_string());
    let price = course.price.unwrap_or_default();
    // Where the lock overlay's button sends the viewer.
    let request_target = if course.access_level == AccessLevel::Premium {
        "/login"
    } else {
        "/courses"
    };

    rsx! {
        div { class: "course-detail-page",
            section { style: "background: {header_color}; color: white; padding: 40px 20px;",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    a {
                        href: "/courses",
                        style: "color: white; text-decoration: none; display: inline-flex; align-items: center; gap: 8px; margin-bottom: 20px;",
                        onclick: {
                            let mut nav = nav.clone();
                            move |evt: MouseEvent| {
                                evt.prevent_default();
                                nav.navigate("/courses");
                            }
                        },
                        i { class: "fas fa-arrow-left" }
                        " 返回课程列表"
                    }
                    h1 { style: "font-size: 2rem; margin: 0 0 10px 0;", "{course.title}" }
                    p { style: "opacity: 0.9; margin: 0 0 20px 0;", "{course.blurb()}" }
                    div { style: "display: flex; flex-wrap: wrap; gap: 15px; margin-bottom: 20px;",
                        span { class: "course-chip",
                            i { class: "fas fa-user-graduate" }
                            " {course.age_range}岁"
                        }
                        span { class: "course-chip",
                            i { class: "fas fa-clock" }
                            " {format_course_minutes(course.duration)}"
                        }
                        if price > 0.0 {
                            span { class: "course-chip course-chip-price",
                                i { class: "fas fa-tag" }
                                " ¥{price}"
                            }
                        }
                    }
                }
            }

            div { style: "max-width: 1200px; margin: 0 auto; padding: 30px 20px;",
                if state.is_sample() {
                    SampleNotice {
                        on_retry: {
                            let mut load = load.clone();
                            let nav = nav.clone();
                            move |_| {
                                let course_id = nav
                                    .param("id")
                                    .and_then(|raw| raw.parse::<i64>().ok())
                                    .unwrap_or_default();
                                load(course_id);
                            }
                        },
                    }
                }
                div { class: "course-detail-grid",
                    div {
                        section { style: "margin-bottom: 30px;",
                            h2 { style: "margin-bottom: 15px;", "课程介绍" }
                            div { class: "detail-panel",
                                p { style: "line-height: 1.6; color: #666;", "{course.description}" }
                            }
                        }
                        section {
                            h2 { style: "margin-bottom: 15px;", "课程章节" }
                            if lesson_list.is_empty() {
                                div { class: "detail-panel", style: "text-align: center; padding: 30px;",
                                    p { style: "color: #999;", "暂无可用章节" }
                                }
                            } else {
                                div { class: "detail-panel lesson-list",
                                    for (index, lesson) in lesson_list.iter().enumerate() {
                                        LessonRow {
                                            key: "{lesson.id}",
                                            lesson: lesson.clone(),
                                            index,
                                            active: active_id == Some(lesson.id),
                                            onselect: {
                                                let lesson = lesson.clone();
                                                move |_| selected.set(Some(lesson.clone()))
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        if let Some(lesson) = selected_lesson {
                            LessonPlayerPanel {
                                lesson: lesson.clone(),
                                access_level: course.access_level,
                                signed_in,
                                request_target,
                            }
                        } else {
                            section { class: "detail-panel", style: "padding: 30px 20px; text-align: center;",
                                i {
                                    class: "fas fa-video",
                                    style: "font-size: 2.5rem; color: #1976d2; margin-bottom: 15px;",
                                }
                                h3 { style: "margin: 0 0 8px 0; font-size: 1.1rem;", "选择章节开始学习" }
                                p { style: "color: #666; margin: 0; font-size: 0.9rem;",
                                    "从左侧章节列表中选择一个课程开始观看"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonRow(lesson: Lesson, index: usize, active: bool, onselect: EventHandler<()>) -> Element {
    let number = index + 1;

    rsx! {
        div {
            class: "lesson-row",
            class: if active { "active" },
            onclick: move |_| onselect.call(()),
            div { class: "lesson-index", "{number}" }
            div { style: "flex: 1;",
                div { style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                    h3 { style: "margin: 0; font-size: 1rem;", "{lesson.title}" }
                    if lesson.is_free_preview {
                        span { class: "lesson-preview-badge", "免费预览" }
                    }
                }
                div { style: "color: #666; font-size: 0.85rem;",
                    i { class: "fas fa-clock" }
                    " {lesson_minutes(lesson.duration)}"
                }
            }
            button {
                class: "art-btn art-btn-outline",
                style: "padding: 6px 12px; font-size: 0.85rem;",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    onselect.call(());
                },
                i { class: "fas fa-play" }
                " 播放"
            }
        }
    }
}

#[component]
fn LessonPlayerPanel(
    lesson: Lesson,
    access_level: AccessLevel,
    signed_in: bool,
    request_target: &'static str,
) -> Element {
    let mut nav = use_navigation();
    let (has_access, message) = lesson_access(access_level, lesson.is_free_preview, signed_in);
    let description = lesson
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "暂无详细描述".to_string());

    rsx! {
        section { class: "detail-panel",
            div { style: "padding: 15px; border-bottom: 1px solid #eee; display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 1.1rem;", "{lesson.title}" }
                if lesson.is_free_preview {
                    span { class: "lesson-preview-badge", "免费预览" }
                }
            }
            VodPlayer {
                video_id: lesson.id.to_string(),
                has_access,
                access_message: message.to_string(),
                autoplay: false,
                on_request_access: move |_| nav.navigate(request_target),
            }
            div { style: "padding: 15px; border-top: 1px solid #eee;",
                h4 { style: "margin: 0 0 8px 0; font-size: 0.95rem;", "课程内容" }
                p { style: "color: #666; font-size: 0.9rem; margin: 0; line-height: 1.5;",
                    "{description}"
                }
            }
        }
    }
}

/// Row duration label; lessons without a recorded length show the
/// catalog's stock estimate.
fn lesson_minutes(duration_secs: i64) -> String {
    if duration_secs > 0 {
        format_course_minutes(duration_secs / 60)
    } else {
        "15分钟".to_string()
    }
}

/// Access verdict for one lesson: may the current viewer watch it, and
/// the banner text explaining why or why not.
pub(crate) fn lesson_access(
    level: AccessLevel,
    is_free_preview: bool,
    signed_in: bool,
) -> (bool, &'static str) {
    match level {
        AccessLevel::Free => (true, "免费课程，可以观看"),
        AccessLevel::Premium if is_free_preview => (true, "免费预览章节，可以观看"),
        AccessLevel::Premium if signed_in => (true, "已登录，可以观看完整内容"),
        AccessLevel::Premium => (false, "付费课程，请登录并报名后观看完整内容"),
        AccessLevel::Internal => (false, "内部课程，请联系管理员获取访问权限"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_course_is_always_watchable() {
        let (granted, message) = lesson_access(AccessLevel::Free, false, false);
        assert!(granted);
        assert_eq!(message, "免费课程，可以观看");
    }

    #[test]
    fn premium_preview_is_watchable_signed_out() {
        let (granted, message) = lesson_access(AccessLevel::Premium, true, false);
        assert!(granted);
        assert_eq!(message, "免费预览章节，可以观看");
    }

    #[test]
    fn premium_full_lesson_needs_sign_in() {
        let (granted, message) = lesson_access(AccessLevel::Premium, false, false);
        assert!(!granted);
        assert_eq!(message, "付费课程，请登录并报名后观看完整内容");

        let (granted, _) = lesson_access(AccessLevel::Premium, false, true);
        assert!(granted);
    }

    #[test]
    fn internal_courses_stay_locked_even_signed_in() {
        let (granted, message) = lesson_access(AccessLevel::Internal, true, true);
        assert!(!granted);
        assert_eq!(message, "内部课程，请联系管理员获取访问权限");
    }

    #[test]
    fn missing_duration_shows_stock_estimate() {
        assert_eq!(lesson_minutes(900), "15分钟");
        assert_eq!(lesson_minutes(0), "15分钟");
        assert_eq!(lesson_minutes(600), "10分钟");
    }
}
