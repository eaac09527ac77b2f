//! Learner dashboard
//!
//! Enrollment rows, a catalog-derived "available" tab, and stat cards,
//! all fetched on mount with sample fallback. `?tab=` deep-links into a
//! specific tab; the tab buttons themselves never touch the URL.

use std::collections::HashSet;

use dioxus::prelude::*;

use minivinci_domain::{Course, CourseProgress, LearningStats};

use crate::application::ServiceError;
use crate::presentation::components::course_card::{access_status_class, card_color, card_icon};
use crate::presentation::components::{Loading, SampleNotice};
use crate::presentation::sample_content::{sample_courses, sample_progress, sample_stats};
use crate::presentation::services::{use_course_service, use_user_service};
use crate::presentation::state::{ContentSource, SessionState};
use crate::router::use_navigation;
use crate::use_platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Ongoing,
    Completed,
    Available,
}

impl DashboardTab {
    fn all() -> [DashboardTab; 3] {
        [
            DashboardTab::Ongoing,
            DashboardTab::Completed,
            DashboardTab::Available,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Ongoing => "进行中",
            DashboardTab::Completed => "已完成",
            DashboardTab::Available => "可学习",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            DashboardTab::Ongoing => "暂无进行中的课程，快去开始学习吧！",
            DashboardTab::Completed => "暂无已完成的课程",
            DashboardTab::Available => "暂无可学习的课程",
        }
    }

    /// Deep-link names accepted in `?tab=`. The nav bar's "我的课程" entry
    /// links with `tab=courses`.
    fn from_query(value: &str) -> Option<DashboardTab> {
        match value {
            "ongoing" | "courses" => Some(DashboardTab::Ongoing),
            "completed" => Some(DashboardTab::Completed),
            "available" => Some(DashboardTab::Available),
            _ => None,
        }
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let platform = use_platform();
    let user_service = use_user_service();
    let course_service = use_course_service();
    let session = use_context::<SessionState>();
    let nav = use_navigation();

    let mut enrolled = use_signal(Vec::<CourseProgress>::new);
    let mut catalog = use_signal(Vec::<Course>::new);
    let mut stats = use_signal(LearningStats::default);
    let mut source = use_signal(ContentSource::default);
    let mut tab = use_signal(|| DashboardTab::Ongoing);

    let load = {
        let users = user_service.clone();
        let courses = course_service.clone();
        let platform = platform.clone();
        move || {
            let users = users.clone();
            let courses = courses.clone();
            let platform = platform.clone();
            source.set(ContentSource::Loading);
            spawn(async move {
                let fetched = async {
                    let rows = users.my_courses().await?;
                    let fetched_stats = users.learning_stats().await?;
                    let full_catalog = courses.list_courses().await?;
                    Ok::<_, ServiceError>((rows, fetched_stats, full_catalog))
                }
                .await;
                match fetched {
                    Ok((rows, fetched_stats, full_catalog)) => {
                        enrolled.set(rows);
                        stats.set(fetched_stats);
                        catalog.set(full_catalog);
                        source.set(ContentSource::Live);
                    }
                    Err(err) => {
                        platform.log_warn(&format!(
                            "dashboard data unavailable, falling back to samples: {err}"
                        ));
                        enrolled.set(sample_progress());
                        stats.set(sample_stats());
                        catalog.set(sample_courses());
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

    {
        let nav = nav.clone();
        use_effect(move || {
            let requested = nav
                .query_param("tab")
                .as_deref()
                .and_then(DashboardTab::from_query);
            if let Some(requested) = requested {
                tab.set(requested);
            }
        });
    }

    let state = *source.read();
    let current_tab = *tab.read();
    let rows = enrolled.read().clone();
    let stat = stats.read().clone();
    let display_name = session
        .display_name()
        .unwrap_or_else(|| "艺术学习者".to_string());

    let ongoing: Vec<CourseProgress> = rows.iter().filter(|r| r.is_ongoing()).cloned().collect();
    let completed: Vec<CourseProgress> = rows.iter().filter(|r| r.completed).cloned().collect();
    let enrolled_ids: HashSet<i64> = rows.iter().map(|r| r.course.id).collect();
    let available: Vec<Course> = catalog
        .read()
        .iter()
        .filter(|c| !enrolled_ids.contains(&c.id))
        .cloned()
        .collect();
    let tab_is_empty = match current_tab {
        DashboardTab::Ongoing => ongoing.is_empty(),
        DashboardTab::Completed => completed.is_empty(),
        DashboardTab::Available => available.is_empty(),
    };

    let hours = format!("{:.0}", stat.total_learning_hours);
    let average = format!("{:.0}%", stat.average_progress);

    rsx! {
        div { class: "dashboard-page",
            section { class: "art-hero", style: "min-height: 40vh;",
                div { class: "art-hero-content",
                    h1 { class: "art-hero-title", "用户中心" }
                    p { class: "art-hero-subtitle", "管理您的课程和学习进度" }
                }
            }

            if state.is_loading() {
                Loading { message: "正在加载学习数据..." }
            } else {
                section { style: "padding: var(--space-2xl) var(--space-lg);",
                    div { style: "max-width: 1200px; margin: 0 auto;",
                        if state.is_sample() {
                            SampleNotice {
                                on_retry: {
                                    let mut load = load.clone();
                                    move |_| load()
                                },
                            }
                        }
                        div { class: "art-card art-shadow", style: "padding: var(--space-2xl);",
                            div { style: "display: flex; align-items: center; gap: var(--space-xl); flex-wrap: wrap;",
                                div { class: "dashboard-avatar",
                                    i { class: "fas fa-user" }
                                }
                                div { style: "flex: 1;",
                                    h2 { style: "margin-bottom: var(--space-sm);", "{display_name}" }
                                    p { style: "color: var(--color-text-secondary); margin-bottom: var(--space-md);",
                                        "会员状态: "
                                        span { style: "color: var(--color-accent-art); font-weight: 500;",
                                            "标准会员"
                                        }
                                    }
                                    div { style: "display: flex; gap: var(--space-md); flex-wrap: wrap;",
                                        MiniStat { value: stat.total_courses.to_string(), label: "已学习课程" }
                                        MiniStat { value: hours.clone(), label: "学习时长(小时)" }
                                        MiniStat { value: stat.ongoing_courses.to_string(), label: "进行中课程" }
                                    }
                                }
                            }
                        }
                    }
                }

                section { style: "padding: var(--space-3xl) var(--space-lg); background: var(--color-primary-100);",
                    div { style: "max-width: 1200px; margin: 0 auto;",
                        h2 { style: "margin-bottom: var(--space-2xl);", "我的课程" }

                        div { class: "dashboard-tabs",
                            for entry in DashboardTab::all() {
                                button {
                                    key: "{entry.label()}",
                                    class: "dashboard-tab",
                                    class: if entry == current_tab { "active" },
                                    onclick: move |_| tab.set(entry),
                                    "{entry.label()}"
                                }
                            }
                        }

                        div { style: "display: flex; flex-direction: column; gap: var(--space-lg);",
                            {match current_tab {
                                DashboardTab::Ongoing => rsx! {
                                    for row in ongoing.iter() {
                                        OngoingRow { key: "{row.course.id}", row: row.clone() }
                                    }
                                },
                                DashboardTab::Completed => rsx! {
                                    for row in completed.iter() {
                                        CompletedRow { key: "{row.course.id}", row: row.clone() }
                                    }
                                },
                                DashboardTab::Available => rsx! {
                                    for course in available.iter() {
                                        AvailableRow { key: "{course.id}", course: course.clone() }
                                    }
                                },
                            }}
                        }

                        if tab_is_empty {
                            div { style: "text-align: center; padding: var(--space-2xl);",
                                i {
                                    class: "fas fa-book-open",
                                    style: "font-size: 3rem; color: var(--color-text-muted); margin-bottom: var(--space-md);",
                                }
                                h3 { "暂无课程" }
                                p { style: "color: var(--color-text-secondary); margin-top: var(--space-sm);",
                                    "{current_tab.empty_message()}"
                                }
                                button {
                                    class: "art-btn art-btn-primary",
                                    style: "margin-top: var(--space-lg);",
                                    onclick: {
                                        let mut nav = nav.clone();
                                        move |_| nav.navigate("/courses")
                                    },
                                    "浏览课程"
                                }
                            }
                        }
                    }
                }

                section { style: "padding: var(--space-3xl) var(--space-lg);",
                    div { style: "max-width: 1200px; margin: 0 auto;",
                        h2 { style: "margin-bottom: var(--space-2xl);", "学习统计" }
                        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: var(--space-xl);",
                            StatCard {
                                icon: "fas fa-calendar-alt",
                                accent: "var(--color-accent-art)",
                                title: "学习日历",
                                value: stat.learning_days.to_string(),
                                main: "连续学习天数".to_string(),
                                sub: format!("累计学习 {hours} 小时"),
                            }
                            StatCard {
                                icon: "fas fa-chart-line",
                                accent: "var(--color-accent-warm)",
                                title: "学习进度",
                                value: average.clone(),
                                main: "平均完成进度".to_string(),
                                sub: format!("{} 门课程进行中", stat.ongoing_courses),
                            }
                            StatCard {
                                icon: "fas fa-trophy",
                                accent: "var(--color-accent-cool)",
                                title: "学习成就",
                                value: stat.completed_courses.to_string(),
                                main: "已完成课程".to_string(),
                                sub: format!("共报名 {} 门课程", stat.enrollment_count),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MiniStat(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "dashboard-mini-stat",
            div { style: "font-size: 1.5rem; font-weight: 600; color: var(--color-secondary-800);",
                "{value}"
            }
            div { style: "font-size: 0.875rem; color: var(--color-text-secondary); margin-top: var(--space-xs);",
                "{label}"
            }
        }
    }
}

#[component]
fn CourseThumb(course: Course) -> Element {
    let color = card_color(&course).to_string();
    let icon = card_icon(&course).to_string();

    rsx! {
        div { class: "dashboard-course-thumb", style: "background: {color};",
            i { class: "{icon}" }
        }
    }
}

#[component]
fn OngoingRow(row: CourseProgress) -> Element {
    let nav = use_navigation();
    let percent = row.progress_percent();
    let progress_label = format!("{percent:.0}");
    let detail_path = format!("/course/{}", row.course.id);

    rsx! {
        div { class: "art-card art-shadow", style: "padding: var(--space-xl);",
            div { style: "display: flex; gap: var(--space-lg); align-items: center;",
                CourseThumb { course: row.course.clone() }
                div { style: "flex: 1;",
                    h3 { style: "margin-bottom: var(--space-xs);", "{row.course.title}" }
                    p { style: "color: var(--color-text-secondary); font-size: 0.875rem; margin-bottom: var(--space-sm);",
                        "{row.course.blurb()}"
                    }
                    div { style: "display: flex; align-items: center; gap: var(--space-md);",
                        div { style: "flex: 1;",
                            div { class: "dashboard-progress-track",
                                div {
                                    class: "dashboard-progress-fill",
                                    style: "width: {progress_label}%;",
                                }
                            }
                            div { style: "display: flex; justify-content: space-between; margin-top: var(--space-xs);",
                                span { style: "font-size: 0.75rem; color: var(--color-text-muted);",
                                    "进度 {progress_label}%"
                                }
                                span { style: "font-size: 0.75rem; color: var(--color-text-muted);",
                                    "共 {row.lesson_count} 节课"
                                }
                            }
                        }
                        button {
                            class: "art-btn",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate(&detail_path)
                            },
                            "继续学习"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompletedRow(row: CourseProgress) -> Element {
    rsx! {
        div { class: "art-card art-shadow", style: "padding: var(--space-xl);",
            div { style: "display: flex; gap: var(--space-lg); align-items: center;",
                CourseThumb { course: row.course.clone() }
                div { style: "flex: 1;",
                    h3 { style: "margin-bottom: var(--space-xs);", "{row.course.title}" }
                    p { style: "color: var(--color-text-secondary); font-size: 0.875rem; margin-bottom: var(--space-sm);",
                        "{row.course.blurb()}"
                    }
                    div { style: "display: flex; justify-content: space-between; align-items: center;",
                        span { style: "color: var(--color-accent-art); font-weight: 500;",
                            i { class: "fas fa-check-circle", style: "margin-right: var(--space-xs);" }
                            "已完成"
                        }
                        if let Some(date) = row.last_accessed_at.clone() {
                            span { style: "font-size: 0.875rem; color: var(--color-text-muted);",
                                "完成时间: {date}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AvailableRow(course: Course) -> Element {
    let nav = use_navigation();
    let detail_path = format!("/course/{}", course.id);
    let status_class = access_status_class(course.access_level);

    rsx! {
        div { class: "art-card art-shadow", style: "padding: var(--space-xl);",
            div { style: "display: flex; gap: var(--space-lg); align-items: center;",
                CourseThumb { course: course.clone() }
                div { style: "flex: 1;",
                    h3 { style: "margin-bottom: var(--space-xs);", "{course.title}" }
                    p { style: "color: var(--color-text-secondary); font-size: 0.875rem; margin-bottom: var(--space-sm);",
                        "{course.blurb()}"
                    }
                    div { style: "display: flex; justify-content: space-between; align-items: center;",
                        span { class: "course-status {status_class}",
                            "{course.access_level.badge_label()}"
                        }
                        button {
                            class: "art-btn art-btn-primary",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate(&detail_path)
                            },
                            "开始学习"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    value: String,
    main: String,
    sub: String,
) -> Element {
    rsx! {
        div { class: "art-card art-shadow", style: "padding: var(--space-xl);",
            h3 { style: "margin-bottom: var(--space-md); color: {accent};",
                i { class: "{icon}", style: "margin-right: var(--space-sm);" }
                "{title}"
            }
            div { style: "display: flex; align-items: center; gap: var(--space-md);",
                div { style: "font-size: 2.5rem; font-weight: 300; color: {accent};", "{value}" }
                div {
                    div { style: "font-weight: 500;", "{main}" }
                    div { style: "font-size: 0.875rem; color: var(--color-text-secondary);", "{sub}" }
                }
            }
        }
    }
}
