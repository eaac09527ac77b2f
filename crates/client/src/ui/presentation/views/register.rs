//! Registration page
//!
//! Demo flow like the sign-in form: valid input mints a local demo
//! session and lands on the dashboard. No account is created anywhere.

use dioxus::prelude::*;

use crate::presentation::services::use_session_service;
use crate::presentation::state::SessionState;
use crate::router::use_navigation;
use crate::use_platform;

const INPUT_STYLE: &str = "width: 100%; padding: var(--space-md); border: 1px solid var(--color-primary-300); border-radius: var(--border-radius-md); font-size: 1rem;";
const LABEL_STYLE: &str = "display: block; margin-bottom: var(--space-sm); font-weight: 500; color: var(--color-secondary-800);";

#[component]
pub fn RegisterPage() -> Element {
    let platform = use_platform();
    let session_service = use_session_service();
    let session_state = use_context::<SessionState>();
    let nav = use_navigation();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let on_register = {
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
            let mail = email.peek().trim().to_string();
            let pass = password.peek().clone();
            let check = confirm.peek().clone();
            if name.is_empty() || mail.is_empty() || pass.is_empty() || check.is_empty() {
                error.set(Some("请填写所有必填项".to_string()));
                return;
            }
            if pass != check {
                error.set(Some("两次输入的密码不一致".to_string()));
                return;
            }
            error.set(None);
            busy.set(true);
            let service = service.clone();
            let mut state = state.clone();
            let mut nav = nav.clone();
            let platform = platform.clone();
            spawn(async move {
                platform.sleep_ms(1000).await;
                let user = service.establish_demo_session(&name);
                state.set_signed_in(user);
                busy.set(false);
                nav.navigate("/dashboard");
            });
        }
    };

    rsx! {
        div { class: "register-page",
            section { class: "art-hero", style: "min-height: 40vh;",
                div { class: "art-hero-content",
                    h1 { class: "art-hero-title", "注册" }
                    p { class: "art-hero-subtitle", "加入小小达芬奇，开启孩子的艺术成长之旅" }
                }
            }

            section { style: "padding: var(--space-3xl) var(--space-lg);",
                div { style: "max-width: 500px; margin: 0 auto;",
                    div { class: "art-card art-shadow", style: "padding: var(--space-2xl);",
                        form { onsubmit: on_register,
                            div { style: "margin-bottom: var(--space-xl);",
                                label { style: LABEL_STYLE, "用户名" }
                                input {
                                    r#type: "text",
                                    style: INPUT_STYLE,
                                    placeholder: "请输入用户名",
                                    value: "{username}",
                                    oninput: move |evt| username.set(evt.value()),
                                }
                            }
                            div { style: "margin-bottom: var(--space-xl);",
                                label { style: LABEL_STYLE, "邮箱地址" }
                                input {
                                    r#type: "email",
                                    style: INPUT_STYLE,
                                    placeholder: "请输入邮箱地址",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                }
                            }
                            div { style: "margin-bottom: var(--space-xl);",
                                label { style: LABEL_STYLE, "密码" }
                                input {
                                    r#type: "password",
                                    style: INPUT_STYLE,
                                    placeholder: "请设置密码",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                }
                            }
                            div { style: "margin-bottom: var(--space-xl);",
                                label { style: LABEL_STYLE, "确认密码" }
                                input {
                                    r#type: "password",
                                    style: INPUT_STYLE,
                                    placeholder: "请再次输入密码",
                                    value: "{confirm}",
                                    oninput: move |evt| confirm.set(evt.value()),
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
                                    "注册中..."
                                } else {
                                    "立即注册"
                                }
                            }

                            div { style: "text-align: center; margin-top: var(--space-xl); color: var(--color-text-secondary);",
                                "已有账号？"
                                a {
                                    href: "/login",
                                    style: "color: var(--color-accent-art); text-decoration: none; font-weight: 500;",
                                    onclick: {
                                        let mut nav = nav.clone();
                                        move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            nav.navigate("/login");
                                        }
                                    },
                                    "立即登录"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
