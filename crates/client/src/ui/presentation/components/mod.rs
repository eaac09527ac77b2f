//! Reusable presentation components shared across pages.

pub(crate) mod course_card;
mod footer;
mod loading;
mod nav_bar;
mod vod_player;

pub use course_card::CourseCard;
pub use footer::Footer;
pub use loading::{Loading, SampleNotice};
pub use nav_bar::NavBar;
pub use vod_player::VodPlayer;
