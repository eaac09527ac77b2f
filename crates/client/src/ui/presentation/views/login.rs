//! Sign-in page
//!
//! Demo credential form: any non-empty username and password mint a local
//! demo session (token in platform storage, profile in session state) and
//! land on the dashboard. The forgot-password modal is static guidance.

use dioxus::prelude::*;

use crate::presentation::services::use_session_service;
use crate::presentation::state::SessionState;
use crate::router::use_navigation;
use crate::use_platform;

const INPUT_STYLE: &str = "width: 100%; padding: var(--space-md); border: 1px solid var(--color-primary-300); border-radius: var(--border-radius-md); font-size: 1rem;";
const LABEL_STYLE: &str = "display: block; margin-bottom: var(--space-sm); font-weight: 500; color: var(--color-secondary-800);";

#[component]
pub fn LoginPage() -> Element {
    let platform = use_platform();
    let session_service = use_session_service();
    let session_state = use_context::<SessionState>();
    let nav = use_navigation();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let mut show_forgot = use_signal(|| false);
    let mut forgot_email = use_signal(String::new);
    let mut forgot_message = use_signal(|| None::<String>);

    let on_login = {
        let service = session_service.clone();
        let state = session_state.clone();
        let nav = nav.clone();
        let platform = platform.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if *busy.peek() {
                return;
            }
            let name = username.peek().trim().to_string();
            let pass = password.peek().clone();
            if name.is_empty() || pass.is_empty() {
                error.set(Some("请输入用户名和密码".to_string()));
                return;
            }
            error.set(None);
            busy.set(true);
            let service = service.clone();
            let mut state = state.clone();
            let mut nav = nav.clone();
            let platform = platform.clone();
            spawn(async move {
                // Paced like a real round trip so the busy state shows.
                platform.sleep_ms(1000).await;
                let user = service.establish_demo_session(&name);
                state.set_signed_in(user);
                busy.set(false);
                nav.navigate("/dashboard");
            });
        }
    };

    let forgot_platform = platform.clone();
    let on_forgot = move |evt: FormEvent| {
        evt.prevent_default();
        let email = forgot_email.peek().trim().to_string();
        if email.is_empty() {
            return;
        }
        forgot_message.set(Some(format!("重置链接已发送到 {email}，请查收邮件")));
        let platform = forgot_platform.clone();
        spawn(async move {
            platform.sleep_ms(3000).await;
            show_forgot.set(false);
            forgot_email.set(String::new());
            forgot_message.set(None);
        });
    };

    rsx! {
        div { class: "login-page",
            section { class: "art-hero", style: "min-height: 40vh;",
                div { class: "art-hero-content",
                    h1 { class: "art-hero-title", "登录" }
                    p { class: "art-hero-subtitle", "欢迎回到小小达芬奇艺术教育平台" }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg);",
                div { style: "max-width: 500px; margin: 0 auto;",
                    div { class: "art-card art-shadow", style: "padding: var(--space-2xl);",
                        form { onsubmit: on_login,
                            div { style: "margin-bottom: var(--space-xl);",
                                label { style: LABEL_STYLE, "用户名或邮箱" }
                                input {
                                    r#type: "text",
                                    style: INPUT_STYLE,
                                    placeholder: "请输入用户名或邮箱",
                                    value: "{username}",
                                    oninput: move |evt| username.set(evt.value()),
                                }
                            }
                            div { style: "margin-bottom: var(--space-xl);",
                                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: var(--space-sm);",
                                    label { style: "font-weight: 500; color: var(--color-secondary-800);",
                                        "密码"
                                    }
                                    a {
                                        href: "#",
                                        style: "font-size: 0.875rem; color: var(--color-accent-art); text-decoration: none;",
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            show_forgot.set(true);
                                        },
                                        "忘记密码？"
                                    }
                                }
                                input {
                                    r#type: "password",
                                    style: INPUT_STYLE,
                                    placeholder: "请输入密码",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                }
                            }

                            if let Some(message) = error.read().clone() {
                                div { style: "margin-bottom: var(--space-xl); padding: var(--space-md); background: var(--color-error-light); border-radius: var(--border-radius-md); color: var(--color-error);",
                                    "{message}"
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "art-btn art-btn-primary",
                                style: "width: 100%; padding: var(--space-md); font-size: 1rem;",
                                disabled: busy(),
                                if busy() {
                                    i {
                                        class: "fas fa-spinner fa-spin",
                                        style: "margin-right: var(--space-sm);",
                                    }
                                    "登录中..."
                                } else {
                                    "登录"
                                }
                            }

                            div { style: "text-align: center; margin-top: var(--space-xl); color: var(--color-text-secondary);",
                                "还没有账号？"
                                a {
                                    href: "/register",
                                    style: "color: var(--color-accent-art); text-decoration: none; font-weight: 500;",
                                    onclick: {
                                        let mut nav = nav.clone();
                                        move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            nav.navigate("/register");
                                        }
                                    },
                                    "立即注册"
                                }
                            }
                        }
                    }

                    if show_forgot() {
                        div { class: "art-modal-backdrop",
                            div { class: "art-card art-shadow", style: "width: 90%; max-width: 400px; padding: var(--space-2xl);",
                                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: var(--space-xl);",
                                    h2 { style: "margin: 0;", "重置密码" }
                                    button {
                                        style: "background: none; border: none; font-size: 1.5rem; color: var(--color-text-secondary); cursor: pointer;",
                                        onclick: move |_| show_forgot.set(false),
                                        "×"
                                    }
                                }
                                form { onsubmit: on_forgot,
                                    div { style: "margin-bottom: var(--space-xl);",
                                        label { style: LABEL_STYLE, "邮箱地址" }
                                        input {
                                            r#type: "email",
                                            style: INPUT_STYLE,
                                            placeholder: "请输入注册时使用的邮箱",
                                            value: "{forgot_email}",
                                            oninput: move |evt| forgot_email.set(evt.value()),
                                        }
                                    }
                                    if let Some(message) = forgot_message.read().clone() {
                                        div { style: "margin-bottom: var(--space-xl); padding: var(--space-md); background: var(--color-success-light); border-radius: var(--border-radius-md); color: var(--color-success);",
                                            "{message}"
                                        }
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "art-btn art-btn-primary",
                                        style: "width: 100%; padding: var(--space-md); font-size: 1rem;",
                                        "发送重置链接"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg); background: var(--color-primary-100);",
                div { style: "max-width: 800px; margin: 0 auto; text-align: center;",
                    h2 { style: "margin-bottom: var(--space-lg);", "为什么选择小小达芬奇？" }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: var(--space-xl); margin-top: var(--space-2xl);",
                        FeatureBlock {
                            icon: "fas fa-paint-brush",
                            accent: "var(--color-accent-art)",
                            title: "专业艺术教育",
                            description: "由专业艺术教育团队设计，注重创造力和观察力培养",
                        }
                        FeatureBlock {
                            icon: "fas fa-user-graduate",
                            accent: "var(--color-accent-warm)",
                            title: "个性化学习路径",
                            description: "根据孩子年龄和兴趣定制学习计划，循序渐进",
                        }
                        FeatureBlock {
                            icon: "fas fa-video",
                            accent: "var(--color-accent-cool)",
                            title: "高质量录播课程",
                            description: "精心制作的课程内容，随时随地学习，反复观看",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureBlock(
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    description: &'static str,
) -> Element {
    rsx! {
        div {
            div { style: "width: 60px; height: 60px; border-radius: 50%; background: {accent}; display: flex; align-items: center; justify-content: center; margin: 0 auto var(--space-md);",
                i { class: "{icon}", style: "font-size: 1.5rem; color: white;" }
            }
            h3 { style: "margin-bottom: var(--space-sm);", "{title}" }
            p { style: "color: var(--color-text-secondary);", "{description}" }
        }
    }
}
