//! Page views, one per route

mod about;
mod course_detail;
mod courses;
mod dashboard;
mod growth_path;
mod home;
mod login;
mod register;

pub use about::AboutPage;
pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use growth_path::GrowthPathPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
