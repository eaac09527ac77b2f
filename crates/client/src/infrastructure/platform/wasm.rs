//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys, js-sys, and gloo crates.

use crate::ports::outbound::platform::{
    ApiConfigProvider, DocumentProvider, LogProvider, SleepProvider, StorageProvider,
    TimeProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// WASM time provider using js Date
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        (js_sys::Date::now() / 1000.0) as u64
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM sleep provider using browser timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms as u32).await;
        })
    }
}

/// WASM storage provider backed by localStorage
///
/// Private browsing modes can make localStorage unavailable; all
/// operations degrade to no-ops with a console warning in that case.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::warn!("localStorage set failed for {}: {:?}", key, e);
                }
            }
            None => tracing::warn!("localStorage unavailable, dropping {}", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("localStorage remove failed for {}: {:?}", key, e);
            }
        }
    }
}

/// WASM log provider using tracing (forwarded to the browser console)
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// WASM document provider (sets document.title)
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// WASM API configuration: always same-origin
///
/// The web build is served by the same host that exposes the REST API, so
/// paths stay relative and the browser handles the origin.
#[derive(Clone, Default)]
pub struct WasmApiConfigProvider;

impl ApiConfigProvider for WasmApiConfigProvider {
    fn api_base_url(&self) -> String {
        String::new()
    }

    fn set_api_base_url(&self, url: &str) {
        tracing::warn!("ignoring base URL override on web build: {}", url);
    }
}

/// Create platform services for WASM
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmStorageProvider,
        WasmLogProvider,
        WasmDocumentProvider,
        WasmApiConfigProvider,
    )
}
