//! About page: platform story, the method in brief, and contact details.

use dioxus::prelude::*;

use minivinci_domain::GrowthStage;

use crate::router::use_navigation;

#[component]
pub fn AboutPage() -> Element {
    let nav = use_navigation();

    rsx! {
        div { class: "about-page",
            section { class: "art-hero", style: "min-height: 40vh;",
                div { class: "art-hero-content",
                    h1 { class: "art-hero-title", "关于我们" }
                    p { class: "art-hero-subtitle", "看见自己 · 从艺术开始" }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg);",
                div { style: "max-width: 800px; margin: 0 auto;",
                    h2 { style: "margin-bottom: var(--space-lg);", "我们的理念" }
                    div { class: "art-card art-shadow", style: "padding: var(--space-2xl);",
                        p { style: "line-height: 1.8; color: var(--color-text-secondary); margin-bottom: var(--space-md);",
                            "小小达芬奇是一个专注于儿童创造性艺术教育的在线平台。我们相信艺术不只是技巧，更是孩子认识世界、认识自己的方式。课程以观察力、创造力与自我意识的培养为核心，让孩子在创作中学会思考自己的思考。"
                        }
                        p { style: "line-height: 1.8; color: var(--color-text-secondary); margin: 0;",
                            "我们不追求画得像，而追求看得见：看见世界的细节，看见内心的感受，看见属于自己的表达方式。"
                        }
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg); background: var(--color-primary-100);",
                div { style: "max-width: 800px; margin: 0 auto;",
                    h2 { style: "margin-bottom: var(--space-lg);", "我们的方法" }
                    p { style: "color: var(--color-text-secondary); margin-bottom: var(--space-xl);",
                        "课程沿四个成长阶段展开，每个阶段都有与之匹配的年龄建议和课程内容。"
                    }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: var(--space-md);",
                        for stage in GrowthStage::all() {
                            div { key: "{stage.display_name()}", class: "art-card", style: "padding: var(--space-lg); text-align: center;",
                                h3 { style: "margin-bottom: var(--space-xs);", "{stage.display_name()}" }
                                p { style: "color: var(--color-text-muted); font-size: 0.875rem; margin: 0;",
                                    "{stage.age_hint()}"
                                }
                            }
                        }
                    }
                    button {
                        class: "art-btn art-btn-outline",
                        style: "margin-top: var(--space-xl);",
                        onclick: {
                            let mut nav = nav.clone();
                            move |_| nav.navigate("/growth-path")
                        },
                        "了解成长路径"
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg);",
                div { style: "max-width: 800px; margin: 0 auto;",
                    h2 { style: "margin-bottom: var(--space-lg);", "联系我们" }
                    div { class: "art-card art-shadow", style: "padding: var(--space-2xl);",
                        ContactLine { icon: "fas fa-envelope", text: "contact@xxdfq.com" }
                        ContactLine { icon: "fas fa-phone", text: "+86 100 0000 0000" }
                        ContactLine { icon: "fas fa-map-marker-alt", text: "北京市朝阳区艺术教育中心" }
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg); text-align: center; background: var(--color-primary-100);",
                div { style: "max-width: 600px; margin: 0 auto;",
                    h2 { style: "margin-bottom: var(--space-lg);", "和我们一起开始" }
                    button {
                        class: "art-btn art-btn-primary",
                        onclick: {
                            let mut nav = nav.clone();
                            move |_| nav.navigate("/register")
                        },
                        i { class: "fas fa-user-plus" }
                        span { "立即注册" }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactLine(icon: &'static str, text: &'static str) -> Element {
    rsx! {
        div { style: "display: flex; align-items: center; gap: var(--space-md); margin-bottom: var(--space-md); color: var(--color-text-secondary);",
            i { class: "{icon}", style: "color: var(--color-accent-art);" }
            span { "{text}" }
        }
    }
}
