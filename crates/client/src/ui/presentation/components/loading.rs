//! Loading and degraded-content indicators
//!
//! Pages show [`Loading`] while their first fetch is in flight and
//! [`SampleNotice`] above anything rendered from the embedded sample
//! catalog, so a dead server is visible instead of silently faked.

use dioxus::prelude::*;

use crate::presentation::state::SAMPLE_NOTICE;

#[component]
pub fn Loading(message: &'static str) -> Element {
    rsx! {
        div { style: "text-align: center; padding: var(--space-2xl);",
            div { class: "art-loader", style: "margin: 0 auto var(--space-lg);" }
            p { style: "color: var(--color-text-secondary);", "{message}" }
        }
    }
}

/// Banner above sample-rendered sections, with a reload button that
/// re-runs the live fetch.
#[component]
pub fn SampleNotice(#[props(default)] on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "art-sample-notice",
            i { class: "fas fa-info-circle" }
            span { "{SAMPLE_NOTICE}" }
            button {
                class: "art-btn art-btn-outline",
                onclick: move |_| on_retry.call(()),
                i { class: "fas fa-redo" }
                span { "重新加载" }
            }
        }
    }
}
