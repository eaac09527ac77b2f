//! Unified Minivinci client crate.
//!
//! This crate contains UI, application logic, and infrastructure adapters.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::router;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, use_script_host, Platform};
