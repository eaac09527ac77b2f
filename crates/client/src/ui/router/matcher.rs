//! Route matching
//!
//! A static ordered table maps location paths to pages. Exact entries win;
//! patterns with `:name` segments are tried in declaration order; a path
//! nothing matches degrades to Home rather than erroring.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Pages the shell can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Courses,
    CourseDetail,
    Login,
    Register,
    Dashboard,
    GrowthPath,
    About,
}

impl PageId {
    /// Browser tab title for this page.
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "小小达芬奇 - 首页",
            PageId::Courses => "小小达芬奇 - 课程中心",
            PageId::CourseDetail => "小小达芬奇 - 课程详情",
            PageId::Login => "小小达芬奇 - 登录",
            PageId::Register => "小小达芬奇 - 注册",
            PageId::Dashboard => "小小达芬奇 - 用户中心",
            PageId::GrowthPath => "小小达芬奇 - 成长路径",
            PageId::About => "小小达芬奇 - 关于我们",
        }
    }
}

/// One resolved navigation target.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub page: PageId,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    fn bare(page: PageId) -> Self {
        Self {
            page,
            params: HashMap::new(),
        }
    }
}

impl Default for RouteMatch {
    fn default() -> Self {
        Self::bare(PageId::Home)
    }
}

/// Declaration order decides precedence among parameterized patterns.
const ROUTES: [(&str, PageId); 8] = [
    ("/", PageId::Home),
    ("/courses", PageId::Courses),
    ("/course/:id", PageId::CourseDetail),
    ("/login", PageId::Login),
    ("/register", PageId::Register),
    ("/dashboard", PageId::Dashboard),
    ("/growth-path", PageId::GrowthPath),
    ("/about", PageId::About),
];

struct CompiledRoute {
    page: PageId,
    regex: Regex,
    names: Vec<&'static str>,
}

static DYNAMIC_ROUTES: LazyLock<Vec<CompiledRoute>> = LazyLock::new(|| {
    ROUTES
        .iter()
        .filter(|(pattern, _)| pattern.contains(':'))
        .map(|(pattern, page)| compile(pattern, *page))
        .collect()
});

/// Static segments in the table are plain words, so they go into the
/// pattern unescaped.
fn compile(pattern: &'static str, page: PageId) -> CompiledRoute {
    let mut names = Vec::new();
    let mut source = String::from("^");
    for segment in pattern.split('/').skip(1) {
        source.push('/');
        match segment.strip_prefix(':') {
            Some(name) => {
                names.push(name);
                source.push_str("([^/]+)");
            }
            None => source.push_str(segment),
        }
    }
    source.push('$');
    CompiledRoute {
        page,
        regex: Regex::new(&source).expect("valid route pattern"),
        names,
    }
}

/// Resolves a location path (query string already stripped) to a page and
/// its extracted parameters. Never fails.
pub fn resolve(path: &str) -> RouteMatch {
    for (pattern, page) in ROUTES {
        if !pattern.contains(':') && pattern == path {
            return RouteMatch::bare(page);
        }
    }

    for route in DYNAMIC_ROUTES.iter() {
        if let Some(caps) = route.regex.captures(path) {
            let params = route
                .names
                .iter()
                .enumerate()
                .filter_map(|(i, name)| {
                    caps.get(i + 1)
                        .map(|m| (name.to_string(), m.as_str().to_string()))
                })
                .collect();
            return RouteMatch {
                page: route.page,
                params,
            };
        }
    }

    RouteMatch::bare(PageId::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_resolve_with_empty_params() {
        for (path, page) in [
            ("/", PageId::Home),
            ("/courses", PageId::Courses),
            ("/login", PageId::Login),
            ("/register", PageId::Register),
            ("/dashboard", PageId::Dashboard),
            ("/growth-path", PageId::GrowthPath),
            ("/about", PageId::About),
        ] {
            let matched = resolve(path);
            assert_eq!(matched.page, page, "path {path}");
            assert!(matched.params.is_empty(), "path {path}");
        }
    }

    #[test]
    fn course_detail_extracts_the_id() {
        let matched = resolve("/course/42");
        assert_eq!(matched.page, PageId::CourseDetail);
        assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn named_segment_accepts_any_run_without_slashes() {
        let matched = resolve("/course/shuimo-101");
        assert_eq!(matched.page, PageId::CourseDetail);
        assert_eq!(
            matched.params.get("id").map(String::as_str),
            Some("shuimo-101")
        );
    }

    #[test]
    fn named_segment_does_not_cross_slashes() {
        let matched = resolve("/course/42/lessons");
        assert_eq!(matched.page, PageId::Home);
        assert!(matched.params.is_empty());
    }

    #[test]
    fn unknown_paths_degrade_to_home() {
        for path in ["/nope", "/courses/", "/course/", "", "course/42"] {
            let matched = resolve(path);
            assert_eq!(matched.page, PageId::Home, "path {path:?}");
            assert!(matched.params.is_empty());
        }
    }

    #[test]
    fn empty_segment_is_not_a_parameter_value() {
        // "[^/]+" requires at least one character.
        assert_eq!(resolve("/course/").page, PageId::Home);
    }

    #[test]
    fn exact_match_beats_parameterized_patterns() {
        // "/courses" would also be reachable as a one-segment wildcard if
        // the table ever grows one; the exact pass must win regardless.
        assert_eq!(resolve("/courses").page, PageId::Courses);
    }

    #[test]
    fn every_page_has_a_title() {
        for (_, page) in ROUTES {
            assert!(page.title().starts_with("小小达芬奇"));
        }
    }
}
