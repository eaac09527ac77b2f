use std::sync::Arc;

use dioxus::prelude::*;

use crate::ports::outbound::{PlatformPort, ScriptHost};

pub mod presentation;
pub mod router;

use presentation::components::{Footer, NavBar};
use presentation::state::SessionState;
use presentation::views::{
    AboutPage, CourseDetailPage, CoursesPage, DashboardPage, GrowthPathPage, HomePage, LoginPage,
    RegisterPage,
};
use router::{history, HistoryBinding, Navigation, PageId};

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook to access the player SDK script host from Dioxus context
pub fn use_script_host() -> Arc<dyn ScriptHost> {
    use_context::<Arc<dyn ScriptHost>>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    let platform = use_platform();

    // These must be created inside an active Dioxus runtime.
    use_context_provider(SessionState::new);
    let nav = use_context_provider({
        let platform = platform.clone();
        move || Navigation::new(&history::current_location(), platform)
    });

    // Keeps the browser listeners attached for the app's lifetime; the
    // native build installs a no-op binding.
    use_hook({
        let nav = nav.clone();
        move || {
            let on_link = {
                let mut nav = nav.clone();
                move |href: String| nav.navigate(&href)
            };
            let on_pop = {
                let mut nav = nav.clone();
                move |location: String| nav.handle_location_change(&location)
            };
            Arc::new(HistoryBinding::install(on_link, on_pop))
        }
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }

        div { class: "app",
            NavBar {}
            main { class: "app-main",
                {
                    match nav.page() {
                        PageId::Home => rsx! { HomePage {} },
                        PageId::Courses => rsx! { CoursesPage {} },
                        PageId::CourseDetail => rsx! { CourseDetailPage {} },
                        PageId::Login => rsx! { LoginPage {} },
                        PageId::Register => rsx! { RegisterPage {} },
                        PageId::Dashboard => rsx! { DashboardPage {} },
                        PageId::GrowthPath => rsx! { GrowthPathPage {} },
                        PageId::About => rsx! { AboutPage {} },
                    }
                }
            }
            Footer {}
        }
    }
}
