//! Site footer with brand copy, quick links, and contact details.

use dioxus::prelude::*;

use crate::router::use_navigation;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "art-footer",
            div { class: "art-footer-container",
                div { class: "art-footer-content",
                    div { class: "art-footer-section",
                        h3 { class: "art-footer-section-title", "小小达芬奇" }
                        p { style: "color: var(--color-text-secondary); margin-bottom: var(--space-md);",
                            "看见自己 · 从艺术开始"
                        }
                        p { style: "font-size: 0.875rem; color: var(--color-text-muted);",
                            "以创造性艺术教育，培养孩子的观察力、创造力与自我意识"
                        }
                    }

                    div { class: "art-footer-section",
                        h3 { class: "art-footer-section-title", "快速链接" }
                        ul { class: "art-footer-links",
                            FooterLink { to: "/", label: "首页" }
                            FooterLink { to: "/courses", label: "在线课程" }
                            FooterLink { to: "/growth-path", label: "成长路径" }
                            FooterLink { to: "/about", label: "关于我们" }
                        }
                    }

                    div { class: "art-footer-section",
                        h3 { class: "art-footer-section-title", "联系我们" }
                        ul { class: "art-footer-links",
                            li {
                                a { class: "art-footer-link", href: "mailto:contact@xxdfq.com",
                                    i { class: "fas fa-envelope", style: "margin-right: 8px;" }
                                    "contact@xxdfq.com"
                                }
                            }
                            li {
                                a { class: "art-footer-link", href: "tel:+8610000000000",
                                    i { class: "fas fa-phone", style: "margin-right: 8px;" }
                                    "+86 100 0000 0000"
                                }
                            }
                            li { class: "art-footer-link",
                                i { class: "fas fa-map-marker-alt", style: "margin-right: 8px;" }
                                "北京市朝阳区艺术教育中心"
                            }
                        }
                    }

                    div { class: "art-footer-section",
                        h3 { class: "art-footer-section-title", "关注我们" }
                        div { style: "display: flex; gap: var(--space-md); margin-top: var(--space-md);",
                            a { class: "art-btn", style: "padding: var(--space-sm);", href: "#",
                                i { class: "fab fa-weixin" }
                            }
                            a { class: "art-btn", style: "padding: var(--space-sm);", href: "#",
                                i { class: "fab fa-weibo" }
                            }
                            a { class: "art-btn", style: "padding: var(--space-sm);", href: "#",
                                i { class: "fab fa-douban" }
                            }
                        }
                    }
                }

                div { class: "art-footer-bottom",
                    p { "© 2024 小小达芬奇艺术教育平台. 保留所有权利." }
                }
            }
        }
    }
}

#[component]
fn FooterLink(to: &'static str, label: &'static str) -> Element {
    let nav = use_navigation();

    rsx! {
        li {
            a {
                class: "art-footer-link",
                href: to,
                onclick: {
                    let mut nav = nav.clone();
                    move |evt: MouseEvent| {
                        evt.prevent_default();
                        nav.navigate(to);
                    }
                },
                {label}
            }
        }
    }
}
