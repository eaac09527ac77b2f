//! Browser history integration
//!
//! Path changes ride the history API so navigation never reloads the
//! page. Back/forward pops and intercepted link clicks re-enter the
//! navigation layer through callbacks. `HistoryBinding` owns the DOM
//! listeners; dropping it detaches them. The native build has no
//! history or DOM, so everything here degrades to a no-op and
//! navigation only updates the signal.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    /// Owns the `popstate` and click-interception listeners.
    pub struct HistoryBinding {
        popstate: Closure<dyn FnMut()>,
        click: Closure<dyn FnMut(web_sys::MouseEvent)>,
    }

    impl HistoryBinding {
        /// Attaches both listeners. `on_link` receives the href of an
        /// intercepted in-page link; `on_pop` receives the location after
        /// a back/forward pop.
        pub fn install(
            mut on_link: impl FnMut(String) + 'static,
            mut on_pop: impl FnMut(String) + 'static,
        ) -> Option<Self> {
            let window = web_sys::window()?;
            let document = window.document()?;

            let popstate = Closure::<dyn FnMut()>::new(move || {
                on_pop(current_location());
            });
            window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .ok()?;

            let click =
                Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
                    if let Some(href) = internal_link_target(&event) {
                        event.prevent_default();
                        on_link(href);
                    }
                });
            if document
                .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
                .is_err()
            {
                // The popstate listener is already attached; detach it so
                // its closure does not outlive this function.
                let _ = window.remove_event_listener_with_callback(
                    "popstate",
                    popstate.as_ref().unchecked_ref(),
                );
                return None;
            }

            Some(Self { popstate, click })
        }
    }

    impl Drop for HistoryBinding {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "popstate",
                    self.popstate.as_ref().unchecked_ref(),
                );
                if let Some(document) = window.document() {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        self.click.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }

    /// The href to intercept, if this click is a plain primary-button
    /// click on an in-page root-relative link.
    fn internal_link_target(event: &web_sys::MouseEvent) -> Option<String> {
        if event.default_prevented()
            || event.button() != 0
            || event.ctrl_key()
            || event.meta_key()
            || event.shift_key()
            || event.alt_key()
        {
            return None;
        }

        let target = event.target()?;
        let element = target.dyn_ref::<web_sys::Element>()?;
        let anchor = element.closest("a").ok().flatten()?;
        if anchor.has_attribute("target") || anchor.has_attribute("download") {
            return None;
        }

        // The raw attribute, not the resolved property: "//" would be a
        // protocol-relative external URL.
        let href = anchor.get_attribute("href")?;
        if href.starts_with('/') && !href.starts_with("//") {
            Some(href)
        } else {
            None
        }
    }

    /// Pushes a new history entry without reloading.
    pub fn push(path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
            }
        }
    }

    /// Current pathname plus query string.
    pub fn current_location() -> String {
        let Some(window) = web_sys::window() else {
            return "/".to_string();
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        format!("{path}{search}")
    }

    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub struct HistoryBinding;

    impl HistoryBinding {
        pub fn install(
            _on_link: impl FnMut(String) + 'static,
            _on_pop: impl FnMut(String) + 'static,
        ) -> Option<Self> {
            Some(Self)
        }
    }

    pub fn push(_path: &str) {}

    pub fn current_location() -> String {
        "/".to_string()
    }

    pub fn scroll_to_top() {}
}

pub use imp::{current_location, push, scroll_to_top, HistoryBinding};
