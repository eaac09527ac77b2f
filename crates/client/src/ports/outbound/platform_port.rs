//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific
//! operations needed by the UI layer. It abstracts the Platform DI container
//! behind a single injectable object.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `state/platform.rs`.
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time as Unix timestamp in seconds
    fn now_unix_secs(&self) -> u64;

    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    /// Log an info message
    fn log_info(&self, msg: &str);

    /// Log an error message
    fn log_error(&self, msg: &str);

    /// Log a debug message
    fn log_debug(&self, msg: &str);

    /// Log a warning message
    fn log_warn(&self, msg: &str);

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    // -------------------------------------------------------------------------
    // API config operations
    // -------------------------------------------------------------------------

    /// Base URL all REST paths are joined to; empty means same-origin
    fn api_base_url(&self) -> String;

    /// Persist a new base URL (desktop settings)
    fn set_api_base_url(&self, url: &str);
}
