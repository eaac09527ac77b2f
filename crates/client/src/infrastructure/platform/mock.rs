//! In-memory platform for unit tests
//!
//! Every provider records what was asked of it through shared handles, so
//! tests can assert on storage writes, log lines, requested sleeps, and
//! page titles without touching a real platform.

use crate::ports::outbound::platform::{
    ApiConfigProvider, DocumentProvider, LogProvider, SleepProvider, StorageProvider,
    TimeProvider,
};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use std::{future::Future, pin::Pin};

/// Settable clock for tests
#[derive(Clone, Default)]
pub struct MockTimeProvider {
    now_millis: Arc<AtomicU64>,
}

impl MockTimeProvider {
    pub fn set_unix_secs(&self, secs: u64) {
        self.now_millis.store(secs * 1000, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.now_millis.fetch_add(secs * 1000, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        self.now_millis.load(Ordering::SeqCst) / 1000
    }

    fn now_millis(&self) -> u64 {
        self.now_millis.load(Ordering::SeqCst)
    }
}

/// Sleep provider that resolves immediately and records requested durations
#[derive(Clone, Default)]
pub struct InstantSleepProvider {
    requested: Arc<Mutex<Vec<u64>>>,
}

impl InstantSleepProvider {
    pub fn requested(&self) -> Vec<u64> {
        self.requested.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl SleepProvider for InstantSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut guard) = self.requested.lock() {
            guard.push(ms);
        }
        Box::pin(std::future::ready(()))
    }
}

/// HashMap-backed storage provider
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.remove(key);
        }
    }
}

/// Log provider that captures lines as "level: message"
#[derive(Clone, Default)]
pub struct RecordingLogProvider {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogProvider {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|g| g.clone()).unwrap_or_default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, level: &str, msg: &str) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push(format!("{}: {}", level, msg));
        }
    }
}

impl LogProvider for RecordingLogProvider {
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }

    fn error(&self, msg: &str) {
        self.push("error", msg);
    }

    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
}

/// Document provider that records set titles
#[derive(Clone, Default)]
pub struct RecordingDocumentProvider {
    titles: Arc<Mutex<Vec<String>>>,
}

impl RecordingDocumentProvider {
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl DocumentProvider for RecordingDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.titles.lock() {
            guard.push(title.to_string());
        }
    }
}

/// In-memory API config
#[derive(Clone, Default)]
pub struct MemoryApiConfigProvider {
    base: Arc<Mutex<String>>,
}

impl ApiConfigProvider for MemoryApiConfigProvider {
    fn api_base_url(&self) -> String {
        self.base.lock().map(|g| g.clone()).unwrap_or_default()
    }

    fn set_api_base_url(&self, url: &str) {
        if let Ok(mut guard) = self.base.lock() {
            *guard = url.to_string();
        }
    }
}

/// Handles into the mock providers for assertions
#[derive(Clone)]
pub struct MockPlatformHandles {
    pub time: MockTimeProvider,
    pub sleep: InstantSleepProvider,
    pub storage: MemoryStorageProvider,
    pub log: RecordingLogProvider,
    pub document: RecordingDocumentProvider,
    pub api_config: MemoryApiConfigProvider,
}

/// Create a fully in-memory platform plus the handles observing it
pub fn create_mock_platform() -> (Platform, MockPlatformHandles) {
    let handles = MockPlatformHandles {
        time: MockTimeProvider::default(),
        sleep: InstantSleepProvider::default(),
        storage: MemoryStorageProvider::default(),
        log: RecordingLogProvider::default(),
        document: RecordingDocumentProvider::default(),
        api_config: MemoryApiConfigProvider::default(),
    };
    let platform = Platform::new(
        handles.time.clone(),
        handles.sleep.clone(),
        handles.storage.clone(),
        handles.log.clone(),
        handles.document.clone(),
        handles.api_config.clone(),
    );
    (platform, handles)
}
