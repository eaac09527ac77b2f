//! Top navigation bar
//!
//! Carries the brand, the page links, and the auth corner. The session
//! probe runs here on mount; every other page just reads `SessionState`.

use dioxus::prelude::*;

use crate::presentation::services::use_session_service;
use crate::presentation::state::SessionState;
use crate::router::{use_navigation, PageId};
use crate::use_platform;

#[component]
pub fn NavBar() -> Element {
    let platform = use_platform();
    let session_service = use_session_service();
    let session_state = use_context::<SessionState>();
    let nav = use_navigation();

    // One probe per mount; the bar lives in the app shell, so this is one
    // probe per page load.
    let probe_service = session_service.clone();
    let probe_state = session_state.clone();
    use_effect(move || {
        let service = probe_service.clone();
        let mut state = probe_state.clone();
        spawn(async move {
            let user = service.check_session().await;
            state.apply_probe(user);
        });
    });

    let logout_service = session_service.clone();
    let logout_state = session_state.clone();
    let logout_nav = nav.clone();
    let logout_platform = platform.clone();
    let on_logout = move |evt: MouseEvent| {
        evt.prevent_default();
        let service = logout_service.clone();
        let mut state = logout_state.clone();
        let mut nav = logout_nav.clone();
        let platform = logout_platform.clone();
        spawn(async move {
            match service.logout().await {
                Ok(()) => {
                    state.set_signed_out();
                    nav.navigate("/");
                }
                Err(e) => platform.log_error(&format!("logout failed: {}", e)),
            }
        });
    };

    let page = nav.page();
    let signed_in = session_state.is_signed_in();
    let display_name = session_state.display_name();

    rsx! {
        nav { class: "art-navbar",
            div { class: "art-navbar-container",
                a {
                    class: "art-navbar-brand",
                    href: "/",
                    onclick: {
                        let mut nav = nav.clone();
                        move |evt: MouseEvent| {
                            evt.prevent_default();
                            nav.navigate("/");
                        }
                    },
                    div { class: "art-navbar-logo", i { class: "fas fa-palette" } }
                    div { class: "art-navbar-title", "小小达芬奇" }
                }

                ul { class: "art-navbar-menu",
                    NavLink { to: "/", label: "首页", active: page == PageId::Home }
                    NavLink { to: "/courses", label: "在线课程", active: page == PageId::Courses }
                    NavLink { to: "/growth-path", label: "成长路径", active: page == PageId::GrowthPath }
                    NavLink { to: "/about", label: "关于我们", active: page == PageId::About }
                }

                div { class: "art-navbar-actions",
                    if signed_in {
                        div { class: "art-user-menu",
                            button {
                                class: "art-btn art-btn-outline",
                                onclick: {
                                    let mut nav = nav.clone();
                                    move |_| nav.navigate("/dashboard")
                                },
                                i { class: "fas fa-user-circle" }
                                span { {display_name.unwrap_or_default()} }
                            }
                            // Opens on hover, styled in the stylesheet.
                            div { class: "art-user-dropdown",
                                a {
                                    class: "art-dropdown-item",
                                    href: "/dashboard",
                                    onclick: {
                                        let mut nav = nav.clone();
                                        move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            nav.navigate("/dashboard");
                                        }
                                    },
                                    i { class: "fas fa-tachometer-alt" }
                                    "用户中心"
                                }
                                a {
                                    class: "art-dropdown-item",
                                    href: "/dashboard?tab=courses",
                                    onclick: {
                                        let mut nav = nav.clone();
                                        move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            nav.navigate("/dashboard?tab=courses");
                                        }
                                    },
                                    i { class: "fas fa-book-open" }
                                    "我的课程"
                                }
                                div { class: "art-dropdown-divider" }
                                a {
                                    class: "art-dropdown-item",
                                    href: "#",
                                    onclick: on_logout,
                                    i { class: "fas fa-sign-out-alt" }
                                    "退出登录"
                                }
                            }
                        }
                    } else {
                        button {
                            class: "art-btn art-btn-outline",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/login")
                            },
                            i { class: "fas fa-sign-in-alt" }
                            span { "登录" }
                        }
                        button {
                            class: "art-btn art-btn-primary",
                            onclick: {
                                let mut nav = nav.clone();
                                move |_| nav.navigate("/register")
                            },
                            i { class: "fas fa-user-plus" }
                            span { "注册" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: &'static str, label: &'static str, active: bool) -> Element {
    let nav = use_navigation();

    rsx! {
        li {
            a {
                class: "art-navbar-link",
                class: if active { "active" },
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
