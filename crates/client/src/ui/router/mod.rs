//! Client-side routing
//!
//! `matcher` turns a location path into a page plus extracted params;
//! `history` binds to the browser history on web. `Navigation` is the
//! shared handle components use to read the current route and move
//! around without page reloads.

pub mod history;
pub mod matcher;

pub use history::HistoryBinding;
pub use matcher::{PageId, RouteMatch};

use std::sync::Arc;

use dioxus::prelude::*;

use crate::ports::outbound::PlatformPort;

/// Shared navigation handle
///
/// Holds the matched route and the raw query string as signals, so any
/// component reading them re-renders on navigation. Cloning shares the
/// underlying signals.
#[derive(Clone)]
pub struct Navigation {
    current: Signal<RouteMatch>,
    query: Signal<String>,
    platform: Arc<dyn PlatformPort>,
}

impl Navigation {
    /// Resolve the starting location and build the handle.
    ///
    /// Must be called inside a component scope; the signals bind to it.
    pub fn new(initial: &str, platform: Arc<dyn PlatformPort>) -> Self {
        let (path, query) = split_location(initial);
        let matched = matcher::resolve(path);
        platform.set_page_title(matched.page.title());
        Self {
            current: Signal::new(matched),
            query: Signal::new(query),
            platform,
        }
    }

    /// Navigate to an in-app location, pushing a history entry.
    pub fn navigate(&mut self, location: &str) {
        self.apply(location);
        history::push(location);
        history::scroll_to_top();
    }

    /// Adopt a location change that already happened (back/forward pop).
    pub fn handle_location_change(&mut self, location: &str) {
        self.apply(location);
    }

    fn apply(&mut self, location: &str) {
        let (path, query) = split_location(location);
        let matched = matcher::resolve(path);
        self.platform
            .log_debug(&format!("navigating to {path} ({:?})", matched.page));
        self.platform.set_page_title(matched.page.title());
        self.current.set(matched);
        self.query.set(query);
    }

    /// Currently matched page.
    pub fn page(&self) -> PageId {
        self.current.read().page
    }

    /// Path parameter extracted by the route pattern, e.g. `:id`.
    pub fn param(&self, name: &str) -> Option<String> {
        self.current.read().params.get(name).cloned()
    }

    /// Query-string parameter, e.g. `tab` in `/dashboard?tab=courses`.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.read();
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Split a location into its path and query string (without the `?`).
fn split_location(location: &str) -> (&str, String) {
    match location.split_once('?') {
        Some((path, query)) => (path, query.to_string()),
        None => (location, String::new()),
    }
}

/// Hook to access the navigation handle from context.
pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_path_and_query() {
        assert_eq!(
            split_location("/dashboard?tab=courses"),
            ("/dashboard", "tab=courses".to_string())
        );
    }

    #[test]
    fn plain_path_has_empty_query() {
        assert_eq!(split_location("/courses"), ("/courses", String::new()));
    }

    #[test]
    fn keeps_later_question_marks_in_query() {
        assert_eq!(
            split_location("/a?x=1?y=2"),
            ("/a", "x=1?y=2".to_string())
        );
    }
}
