//! Presentation layer: views, shared components, and UI-side state.
//!
//! Everything here renders through Dioxus and talks to the application
//! layer via the service handles in [`services`]. Views that cannot
//! reach the backend fall back to the bundled sample content so the
//! page still demonstrates its layout.

pub mod components;
pub mod helpers;
pub mod sample_content;
pub mod services;
pub mod state;
pub mod views;

pub use services::Services;
