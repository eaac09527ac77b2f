//! Growth path page: the four-stage teaching ladder in full, with age
//! hints and links into the catalog.

use dioxus::prelude::*;

use minivinci_domain::GrowthStage;

use crate::router::use_navigation;

const STAGE_ORDINALS: [&str; 4] = ["第一阶段", "第二阶段", "第三阶段", "第四阶段"];

#[component]
pub fn GrowthPathPage() -> Element {
    let nav = use_navigation();

    rsx! {
        div { class: "growth-path-page",
            section { class: "art-hero", style: "min-height: 40vh;",
                div { class: "art-hero-content",
                    h1 { class: "art-hero-title", "成长路径" }
                    p { class: "art-hero-subtitle", "从感知到风格，四个阶段陪伴孩子的艺术成长" }
                }
            }

            section { class: "art-stages",
                div { class: "art-stages-container",
                    div { class: "art-stages-timeline",
                        for (index, stage) in GrowthStage::all().into_iter().enumerate() {
                            div { key: "{index}", class: "art-stage-item",
                                div { class: "art-stage-marker" }
                                div { class: "art-stage-content art-card art-shadow",
                                    div { class: "art-stage-number", "{STAGE_ORDINALS[index]}" }
                                    h3 { class: "art-stage-name", "{stage.display_name()}" }
                                    p { class: "art-stage-description", "{stage.tagline()}" }
                                    div { class: "art-stage-age",
                                        i { class: "fas fa-child" }
                                        " 适合年龄：{stage.age_hint()}"
                                    }
                                    button {
                                        class: "art-btn",
                                        style: "margin-top: var(--space-md);",
                                        onclick: {
                                            let mut nav = nav.clone();
                                            move |_| nav.navigate("/courses")
                                        },
                                        "查看相关课程"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg); text-align: center; background: var(--color-primary-100);",
                div { style: "max-width: 600px; margin: 0 auto;",
                    h2 { style: "margin-bottom: var(--space-lg);", "不确定从哪个阶段开始？" }
                    p { style: "color: var(--color-text-secondary); margin-bottom: var(--space-2xl);",
                        "每个孩子的起点不同。浏览全部课程，或与课程顾问聊聊孩子的情况。"
                    }
                    div { style: "display: flex; gap: var(--space-md); justify-content: center; flex-wrap: wrap;",
                        button {
                            class: "art-btn art-btn-primary",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/courses")
                            },
                            i { class: "fas fa-book-open" }
                            span { "浏览课程" }
                        }
                        button {
                            class: "art-btn art-btn-outline",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/about")
                            },
                            i { class: "fas fa-comments" }
                            span { "联系我们" }
                        }
                    }
                }
            }
        }
    }
}
