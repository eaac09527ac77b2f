//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! The Platform struct lives outside the ports layer because:
//! 1. It's a concrete implementation (DI container with Arc<dyn> fields)
//! 2. It contains type erasure logic (*Dyn traits and blanket impls)
//! 3. The ports layer should only contain pure interface definitions
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/{desktop,wasm}.rs
//! - Injected into Dioxus context at launch
//! - Accessed in UI via `use_context::<Platform>()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    ApiConfigProvider, DocumentProvider, LogProvider, SleepProvider, StorageProvider, TimeProvider,
};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
/// Use via Dioxus context: `use_context::<Platform>()`
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    log: Arc<dyn LogProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    api_config: Arc<dyn ApiConfigProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_unix_secs(&self) -> u64;
    fn now_millis(&self) -> u64;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait LogProviderDyn: Send + Sync {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait ApiConfigProviderDyn: Send + Sync {
    fn api_base_url(&self) -> String;
    fn set_api_base_url(&self, url: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_unix_secs(&self) -> u64 {
        TimeProvider::now_unix_secs(self)
    }
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: LogProvider + Send + Sync> LogProviderDyn for T {
    fn info(&self, msg: &str) {
        LogProvider::info(self, msg)
    }
    fn error(&self, msg: &str) {
        LogProvider::error(self, msg)
    }
    fn debug(&self, msg: &str) {
        LogProvider::debug(self, msg)
    }
    fn warn(&self, msg: &str) {
        LogProvider::warn(self, msg)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: ApiConfigProvider + Send + Sync> ApiConfigProviderDyn for T {
    fn api_base_url(&self) -> String {
        ApiConfigProvider::api_base_url(self)
    }

    fn set_api_base_url(&self, url: &str) {
        ApiConfigProvider::set_api_base_url(self, url)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Sl, S, L, D, A>(
        time: Tm,
        sleep: Sl,
        storage: S,
        log: L,
        document: D,
        api_config: A,
    ) -> Self
    where
        Tm: TimeProvider + Send + Sync + 'static,
        Sl: SleepProvider + Send + Sync + 'static,
        S: StorageProvider + Send + Sync + 'static,
        L: LogProvider + Send + Sync + 'static,
        D: DocumentProvider + Send + Sync + 'static,
        A: ApiConfigProvider + Send + Sync + 'static,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            log: Arc::new(log),
            document: Arc::new(document),
            api_config: Arc::new(api_config),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time as Unix timestamp in seconds
    pub fn now_unix_secs(&self) -> u64 {
        self.time.now_unix_secs()
    }

    /// Get current time in milliseconds since epoch
    pub fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds.
    pub fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    /// Log an info message
    pub fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    /// Log an error message
    pub fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    /// Log a debug message
    pub fn log_debug(&self, msg: &str) {
        self.log.debug(msg)
    }

    /// Log a warning message
    pub fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    // -------------------------------------------------------------------------
    // API config operations
    // -------------------------------------------------------------------------

    /// Base URL all REST paths are joined to; empty means same-origin
    pub fn api_base_url(&self) -> String {
        self.api_config.api_base_url()
    }

    /// Persist a new base URL (desktop settings)
    pub fn set_api_base_url(&self, url: &str) {
        self.api_config.set_api_base_url(url)
    }
}

// =============================================================================
// PlatformPort implementation - enables the UI to use trait abstraction
// =============================================================================

use crate::ports::outbound::PlatformPort;

impl PlatformPort for Platform {
    fn now_unix_secs(&self) -> u64 {
        self.time.now_unix_secs()
    }

    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    fn log_debug(&self, msg: &str) {
        self.log.debug(msg)
    }

    fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn api_base_url(&self) -> String {
        self.api_config.api_base_url()
    }

    fn set_api_base_url(&self, url: &str) {
        self.api_config.set_api_base_url(url)
    }
}
