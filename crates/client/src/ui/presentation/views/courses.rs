//! Course catalog page
//!
//! Fetches the published course list once on mount, then filters it
//! client-side by age bracket and growth stage. A failed fetch swaps in
//! the embedded sample catalog behind a visible notice.

use dioxus::prelude::*;

use minivinci_domain::{AgeBracket, AgeFilter, Course, CourseFilter, GrowthStage, StageFilter};

use crate::presentation::components::{CourseCard, Loading, SampleNotice};
use crate::presentation::sample_content::sample_courses;
use crate::presentation::services::use_course_service;
use crate::presentation::state::ContentSource;
use crate::use_platform;

#[component]
pub fn CoursesPage() -> Element {
    let platform = use_platform();
    let course_service = use_course_service();

    let mut courses = use_signal(Vec::<Course>::new);
    let mut source = use_signal(ContentSource::default);
    let mut filter = use_signal(CourseFilter::default);

    let load = {
        let service = course_service.clone();
        let platform = platform.clone();
        move || {
            let service = service.clone();
            let platform = platform.clone();
            source.set(ContentSource::Loading);
            spawn(async move {
                match service.list_courses().await {
                    Ok(list) => {
                        courses.set(list);
                        source.set(ContentSource::Live);
                    }
                    Err(err) => {
                        platform.log_warn(&format!(
                            "course list unavailable, falling back to samples: {err}"
                        ));
                        courses.set(sample_courses());
                        source.set(ContentSource::Sample);
                    }
                }
            });
        }
    };

    {
        let mut load = load.clone();
        use_effect(move || load());
    }

    let active_filter = *filter.read();
    let visible: Vec<Course> = courses
        .read()
        .iter()
        .filter(|course| active_filter.matches(course))
        .cloned()
        .collect();
    let state = *source.read();

    rsx! {
        div { class: "courses-page",
            section { class: "art-hero", style: "min-height: 60vh;",
                div { class: "art-hero-content",
                    h1 { class: "art-hero-title", "在线课程" }
                    p { class: "art-hero-subtitle", "探索艺术成长路径，选择适合孩子的课程" }
                }
            }

            section { style: "padding: var(--space-2xl) var(--space-lg); background: var(--color-primary-100);",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    div { style: "display: flex; flex-wrap: wrap; gap: var(--space-md); justify-content: center; margin-bottom: var(--space-2xl);",
                        FilterChip {
                            label: "全部年龄段".to_string(),
                            active: active_filter.age == AgeFilter::All,
                            onselect: move |_| filter.write().age = AgeFilter::All,
                        }
                        for bracket in AgeBracket::all() {
                            FilterChip {
                                key: "{bracket.display_name()}",
                                label: format!("{}岁", bracket.display_name()),
                                active: active_filter.age == AgeFilter::Bracket(bracket),
                                onselect: move |_| filter.write().age = AgeFilter::Bracket(bracket),
                            }
                        }
                    }
                    div { style: "display: flex; flex-wrap: wrap; gap: var(--space-md); justify-content: center;",
                        FilterChip {
                            label: "全部阶段".to_string(),
                            active: active_filter.stage == StageFilter::All,
                            onselect: move |_| filter.write().stage = StageFilter::All,
                        }
                        for stage in GrowthStage::all() {
                            FilterChip {
                                key: "{stage.display_name()}",
                                label: stage.display_name().to_string(),
                                active: active_filter.stage == StageFilter::Stage(stage),
                                onselect: move |_| filter.write().stage = StageFilter::Stage(stage),
                            }
                        }
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg);",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    h2 { style: "text-align: center; margin-bottom: var(--space-2xl);", "课程列表" }

                    if state.is_loading() {
                        Loading { message: "正在加载课程数据..." }
                    } else {
                        if state.is_sample() {
                            SampleNotice {
                                on_retry: {
                                    let mut load = load.clone();
                                    move |_| load()
                                },
                            }
                        }
                        div { class: "courses-grid",
                            for course in visible.iter() {
                                CourseCard { key: "{course.id}", course: course.clone() }
                            }
                        }
                        if visible.is_empty() {
                            div { style: "text-align: center; padding: var(--space-2xl);",
                                i {
                                    class: "fas fa-search",
                                    style: "font-size: 3rem; color: var(--color-text-muted); margin-bottom: var(--space-md);",
                                }
                                h3 { "未找到符合条件的课程" }
                                p { style: "color: var(--color-text-secondary); margin-top: var(--space-sm);",
                                    "请尝试其他筛选条件"
                                }
                            }
                        }
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg); background: var(--color-primary-100);",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    h2 { style: "text-align: center; margin-bottom: var(--space-2xl);", "课程分类说明" }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: var(--space-xl);",
                        CategoryCard {
                            icon: "fas fa-unlock",
                            accent: "var(--color-accent-art)",
                            title: "公开课",
                            description: "免费体验课程，了解教学理念和方法",
                        }
                        CategoryCard {
                            icon: "fas fa-video",
                            accent: "var(--color-accent-warm)",
                            title: "录播课",
                            description: "系统化课程内容，随时学习，反复观看",
                        }
                        CategoryCard {
                            icon: "fas fa-users",
                            accent: "var(--color-accent-cool)",
                            title: "内部课",
                            description: "进阶课程，需要完成前置课程解锁",
                        }
                    }
                }
            }
        }
    }
}

/// One filter button; the active one gets the filled primary look on top
/// of the outline base.
#[component]
fn FilterChip(label: String, active: bool, onselect: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "art-btn art-btn-outline",
            class: if active { "art-btn-primary" },
            onclick: move |_| onselect.call(()),
            "{label}"
        }
    }
}

#[component]
fn CategoryCard(
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    description: &'static str,
) -> Element {
    rsx! {
        div { class: "art-card", style: "padding: var(--space-xl);",
            h3 { style: "margin-bottom: var(--space-md); color: {accent};",
                i { class: "{icon}", style: "margin-right: var(--space-sm);" }
                "{title}"
            }
            p { style: "color: var(--color-text-secondary);", "{description}" }
        }
    }
}
