//! Application services
//!
//! Use-case implementations over the outbound ports. Services depend on
//! port traits, never on concrete infrastructure.

pub mod course_service;
pub mod session_service;
pub mod user_service;
pub mod vod_service;

pub use course_service::CourseService;
pub use session_service::SessionService;
pub use user_service::UserService;
pub use vod_service::VodService;
