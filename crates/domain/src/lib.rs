//! Core domain types for the Minivinci client.
//!
//! Pure data and invariants only: catalog records, playback value objects,
//! and the retry/expiry rules the player component enforces. No I/O, no UI,
//! no framework types.

pub mod course;
pub mod playback;
pub mod user;

pub use course::{
    AccessLevel, AgeBracket, AgeFilter, Course, CourseFilter, CourseStatus, GrowthStage, Lesson,
    StageFilter,
};
pub use playback::{
    PlaybackCredential, PlaybackPhase, PlaybackProgress, RetryDecision, RetryState, VideoMeta,
    CREDENTIAL_REFRESH_HORIZON_SECS, EXPIRY_CHECK_INTERVAL_MS, MAX_AUTO_RETRIES, RETRY_DELAY_MS,
};
pub use user::{CourseProgress, LearningStats, UserProfile};
