//! Presentation-layer state shared through Dioxus context

pub mod content;
pub mod playback_state;
pub mod session_state;

pub use content::{ContentSource, SAMPLE_NOTICE};
pub use playback_state::PlaybackState;
pub use session_state::{SessionState, SessionStatus};
