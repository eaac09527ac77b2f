//! Landing page: hero, value cards, the growth-stage ladder, audience
//! tags, and the sign-up call to action. Entirely static copy.

use dioxus::prelude::*;

use minivinci_domain::GrowthStage;

use crate::router::use_navigation;

const STAGE_ORDINALS: [&str; 4] = ["第一阶段", "第二阶段", "第三阶段", "第四阶段"];

#[component]
pub fn HomePage() -> Element {
    let nav = use_navigation();

    rsx! {
        div { class: "home-page",
            section { class: "art-hero art-fade-in",
                div { class: "art-hero-content",
                    h1 { class: "art-hero-title", "看见自己 · 从艺术开始" }
                    p { class: "art-hero-subtitle", "以创造性艺术教育，培养孩子的观察力、创造力与自我意识" }
                    div { class: "art-hero-actions",
                        button {
                            class: "art-btn art-btn-primary",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/courses")
                            },
                            i { class: "fas fa-book-open" }
                            span { "了解课程体系" }
                        }
                        button {
                            class: "art-btn art-btn-outline",
                            onclick: {
                                // The free showcase course with an openly
                                // viewable preview lesson.
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/course/2")
                            },
                            i { class: "fas fa-play-circle" }
                            span { "观看课程示例" }
                        }
                    }
                }
                div { class: "art-element", style: "top: 20%; left: 10%;",
                    div { class: "art-element-circle art-float" }
                }
                div { class: "art-element", style: "top: 60%; right: 15%;",
                    div { class: "art-element-line", style: "width: 100px;" }
                }
            }

            div { class: "art-divider" }

            section { class: "art-values",
                div { class: "art-values-container",
                    h2 { class: "art-values-title", "我们在做什么" }
                    div { class: "art-values-grid",
                        ValueCard {
                            icon: "fas fa-paint-brush",
                            title: "创造性艺术教育",
                            description: "通过艺术激发创造力，培养独立思考和表达能力",
                        }
                        ValueCard {
                            icon: "fas fa-eye",
                            title: "观察力与表达力培养",
                            description: "学习观察世界，用艺术语言表达内心感受",
                        }
                        ValueCard {
                            icon: "fas fa-brain",
                            title: "艺术中的元认知觉察",
                            description: "在创作过程中认识自我，培养反思和成长意识",
                        }
                    }
                }
            }

            section { class: "art-stages",
                div { class: "art-stages-container",
                    h2 { class: "art-stages-title", "艺术成长四阶段" }
                    div { class: "art-stages-timeline",
                        for (index, stage) in GrowthStage::all().into_iter().enumerate() {
                            div { key: "{index}", class: "art-stage-item",
                                div { class: "art-stage-marker" }
                                div { class: "art-stage-content art-card art-shadow",
                                    div { class: "art-stage-number", "{STAGE_ORDINALS[index]}" }
                                    h3 { class: "art-stage-name", "{stage.display_name()}" }
                                    p { class: "art-stage-description", "{stage.tagline()}" }
                                    button {
                                        class: "art-btn",
                                        style: "margin-top: var(--space-md);",
                                        onclick: {
                                            let mut nav = nav.clone();
                                            move |_| nav.navigate("/growth-path")
                                        },
                                        "了解更多"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "art-audience",
                div { class: "art-audience-container",
                    h2 { class: "art-audience-title", "谁适合小小达芬奇" }
                    div { class: "art-audience-tags",
                        div { class: "art-audience-tag", "情绪细腻的孩子" }
                        div { class: "art-audience-tag", "有想法但容易卡住" }
                        div { class: "art-audience-tag", "希望长期培养创造力" }
                        div { class: "art-audience-tag", "对艺术有天然兴趣" }
                        div { class: "art-audience-tag", "需要表达出口" }
                        div { class: "art-audience-tag", "寻求个性化成长" }
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg); text-align: center;",
                div { style: "max-width: 600px; margin: 0 auto;",
                    h2 { style: "margin-bottom: var(--space-lg);", "开启艺术成长之旅" }
                    p { style: "color: var(--color-text-secondary); margin-bottom: var(--space-2xl);",
                        "加入小小达芬奇，让孩子在艺术中发现自我，在创作中成长"
                    }
                    div { style: "display: flex; gap: var(--space-md); justify-content: center; flex-wrap: wrap;",
                        button {
                            class: "art-btn art-btn-primary",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/register")
                            },
                            i { class: "fas fa-user-plus" }
                            span { "立即注册" }
                        }
                        button {
                            class: "art-btn art-btn-outline",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/about")
                            },
                            i { class: "fas fa-comments" }
                            span { "咨询课程顾问" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ValueCard(icon: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "art-value-card art-card art-shadow",
            div { class: "art-value-icon",
                i { class: "{icon}" }
            }
            h3 { class: "art-value-title", "{title}" }
            p { class: "art-value-description", "{description}" }
        }
    }
}
