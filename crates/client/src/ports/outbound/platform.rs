//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here. The ports layer contains only
//! trait definitions.

use std::{future::Future, pin::Pin};

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time as Unix timestamp in seconds
    fn now_unix_secs(&self) -> u64;

    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Async sleep abstraction
///
/// All player timers (retry delay, expiry ticker, SDK-load timeout) are
/// awaited sleeps through this trait, which keeps them mockable.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Logging abstraction
pub trait LogProvider: Clone + 'static {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// API base-URL configuration.
///
/// The web build talks to its own origin (empty base, relative paths);
/// the desktop build points at a configurable server URL.
pub trait ApiConfigProvider: Clone + 'static {
    /// Base URL all REST paths are joined to; empty means same-origin.
    fn api_base_url(&self) -> String;

    /// Persist a new base URL (desktop settings).
    fn set_api_base_url(&self, url: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const SERVER_URL: &str = "minivinci_server_url";
    pub const AUTH_TOKEN: &str = "minivinci_auth_token";
}
