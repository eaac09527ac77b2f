//! Service providers for the presentation layer
//!
//! Dioxus context providers for application services. Components reach
//! services through `use_context` and never depend on infrastructure
//! adapter types directly.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{CourseService, SessionService, UserService, VodService};
use crate::ports::outbound::{PlatformPort, RawApiPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub session: Arc<SessionService>,
    pub course: Arc<CourseService>,
    pub user: Arc<UserService>,
    pub vod: Arc<VodService>,
}

impl Services {
    /// Create all services over the shared API port and platform.
    pub fn new(api: Arc<dyn RawApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            session: Arc::new(SessionService::new(api.clone(), platform.clone())),
            course: Arc::new(CourseService::new(api.clone())),
            user: Arc::new(UserService::new(api.clone(), platform.clone())),
            vod: Arc::new(VodService::new(api, platform)),
        }
    }
}

/// Hook to access the SessionService from context
pub fn use_session_service() -> Arc<SessionService> {
    let services = use_context::<Services>();
    services.session.clone()
}

/// Hook to access the CourseService from context
pub fn use_course_service() -> Arc<CourseService> {
    let services = use_context::<Services>();
    services.course.clone()
}

/// Hook to access the UserService from context
pub fn use_user_service() -> Arc<UserService> {
    let services = use_context::<Services>();
    services.user.clone()
}

/// Hook to access the VodService from context
pub fn use_vod_service() -> Arc<VodService> {
    let services = use_context::<Services>();
    services.vod.clone()
}
