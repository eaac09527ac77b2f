//! Scriptable VOD fakes for unit tests
//!
//! `FakeScriptHost` plays back configured per-URL outcomes and records the
//! load order; `FakePlayerSdk`/`FakePlayer` record construction, calls and
//! disposal, and let tests push events into the stream a component (or the
//! bootstrap) would consume.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, AtomicU32, Ordering},
    Arc, Mutex,
};

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

use crate::ports::outbound::vod_sdk::{
    sdk_sources, PlayerEvent, PlayerHandle, PlayerOptions, PlayerSdk, ScriptHost, SdkError,
};

/// What a `load_script` call should do for one URL.
#[derive(Clone)]
pub enum ScriptOutcome {
    /// Resolve successfully.
    Succeed,
    /// Fail with a load error carrying this detail.
    Fail(String),
    /// Never resolve (exercises the load timeout).
    Hang,
}

#[derive(Default)]
struct FakeScriptHostState {
    loads: Mutex<Vec<String>>,
    outcomes: Mutex<HashMap<String, ScriptOutcome>>,
    decoder_ready: AtomicBool,
    globals: Mutex<Vec<String>>,
    sdk: Mutex<Option<Arc<dyn PlayerSdk>>>,
    /// `(url, sdk)`: once `url` loads successfully, `sdk` becomes resolvable.
    publish: Mutex<Option<(String, Arc<dyn PlayerSdk>)>>,
}

#[derive(Clone, Default)]
pub struct FakeScriptHost {
    state: Arc<FakeScriptHostState>,
}

impl FakeScriptHost {
    /// All loads succeed, nothing ever becomes resolvable.
    pub fn new() -> Self {
        Self::default()
    }

    /// All loads succeed and `sdk` appears after the first player source
    /// loads, the common happy path.
    pub fn with_sdk(sdk: Arc<dyn PlayerSdk>) -> Self {
        let host = Self::default();
        host.publish_after(sdk_sources::PLAYER[0], sdk);
        host
    }

    /// Host whose SDK is resolvable before any script loads, as when the
    /// page embedded the SDK itself.
    pub fn preloaded(sdk: Arc<dyn PlayerSdk>) -> Self {
        let host = Self::default();
        host.state.decoder_ready.store(true, Ordering::SeqCst);
        if let Ok(mut guard) = host.state.sdk.lock() {
            *guard = Some(sdk);
        }
        host
    }

    pub fn set_outcome(&self, url: &str, outcome: ScriptOutcome) {
        if let Ok(mut guard) = self.state.outcomes.lock() {
            guard.insert(url.to_string(), outcome);
        }
    }

    pub fn publish_after(&self, url: &str, sdk: Arc<dyn PlayerSdk>) {
        if let Ok(mut guard) = self.state.publish.lock() {
            *guard = Some((url.to_string(), sdk));
        }
    }

    pub fn set_globals(&self, names: &[&str]) {
        if let Ok(mut guard) = self.state.globals.lock() {
            *guard = names.iter().map(|n| n.to_string()).collect();
        }
    }

    pub fn set_decoder_ready(&self, ready: bool) {
        self.state.decoder_ready.store(ready, Ordering::SeqCst);
    }

    /// URLs passed to `load_script`, in order.
    pub fn loads(&self) -> Vec<String> {
        self.state
            .loads
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ScriptHost for FakeScriptHost {
    fn resolve_sdk(&self) -> Option<Arc<dyn PlayerSdk>> {
        self.state.sdk.lock().ok()?.clone()
    }

    fn decoder_ready(&self) -> bool {
        self.state.decoder_ready.load(Ordering::SeqCst)
    }

    fn present_globals(&self) -> Vec<String> {
        self.state
            .globals
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default()
    }

    async fn load_script(&self, url: &str) -> Result<(), SdkError> {
        if let Ok(mut guard) = self.state.loads.lock() {
            guard.push(url.to_string());
        }
        let outcome = self
            .state
            .outcomes
            .lock()
            .ok()
            .and_then(|g| g.get(url).cloned())
            .unwrap_or(ScriptOutcome::Succeed);
        match outcome {
            ScriptOutcome::Succeed => {
                if url == sdk_sources::DECODER {
                    self.state.decoder_ready.store(true, Ordering::SeqCst);
                }
                let published = self
                    .state
                    .publish
                    .lock()
                    .ok()
                    .and_then(|mut guard| match guard.take() {
                        Some((trigger, sdk)) if trigger == url => Some(sdk),
                        other => {
                            *guard = other;
                            None
                        }
                    });
                if let Some(sdk) = published {
                    if let Ok(mut guard) = self.state.sdk.lock() {
                        *guard = Some(sdk);
                    }
                }
                Ok(())
            }
            ScriptOutcome::Fail(detail) => Err(SdkError::ScriptLoad {
                url: url.to_string(),
                detail,
            }),
            ScriptOutcome::Hang => {
                std::future::pending::<()>().await;
                Ok(())
            }
        }
    }
}

// =============================================================================
// Fake player
// =============================================================================

/// Shared observable state of one fake player.
#[derive(Clone)]
pub struct FakePlayerState {
    dispose_calls: Arc<AtomicU32>,
    play_calls: Arc<AtomicU32>,
    pause_calls: Arc<AtomicU32>,
    load_calls: Arc<AtomicU32>,
    paused: Arc<AtomicBool>,
    dispose_fails: Arc<AtomicBool>,
    current_time: Arc<Mutex<f64>>,
    duration: Arc<Mutex<f64>>,
    sender: UnboundedSender<PlayerEvent>,
    receiver: Arc<Mutex<Option<UnboundedReceiver<PlayerEvent>>>>,
}

impl FakePlayerState {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            dispose_calls: Arc::new(AtomicU32::new(0)),
            play_calls: Arc::new(AtomicU32::new(0)),
            pause_calls: Arc::new(AtomicU32::new(0)),
            load_calls: Arc::new(AtomicU32::new(0)),
            paused: Arc::new(AtomicBool::new(true)),
            dispose_fails: Arc::new(AtomicBool::new(false)),
            current_time: Arc::new(Mutex::new(0.0)),
            duration: Arc::new(Mutex::new(0.0)),
            sender,
            receiver: Arc::new(Mutex::new(Some(receiver))),
        }
    }

    /// Push an event into the stream the component consumes.
    pub fn emit(&self, event: PlayerEvent) {
        let _ = self.sender.unbounded_send(event);
    }

    pub fn dispose_count(&self) -> u32 {
        self.dispose_calls.load(Ordering::SeqCst)
    }

    pub fn play_count(&self) -> u32 {
        self.play_calls.load(Ordering::SeqCst)
    }

    pub fn pause_count(&self) -> u32 {
        self.pause_calls.load(Ordering::SeqCst)
    }

    pub fn load_count(&self) -> u32 {
        self.load_calls.load(Ordering::SeqCst)
    }

    pub fn set_times(&self, current: f64, duration: f64) {
        if let Ok(mut guard) = self.current_time.lock() {
            *guard = current;
        }
        if let Ok(mut guard) = self.duration.lock() {
            *guard = duration;
        }
    }

    pub fn set_dispose_fails(&self, fails: bool) {
        self.dispose_fails.store(fails, Ordering::SeqCst);
    }
}

impl Default for FakePlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// `PlayerHandle` backed by `FakePlayerState`.
pub struct FakePlayer {
    state: FakePlayerState,
}

impl FakePlayer {
    pub fn new(state: FakePlayerState) -> Self {
        Self { state }
    }
}

impl PlayerHandle for FakePlayer {
    fn take_events(&self) -> Option<UnboundedReceiver<PlayerEvent>> {
        self.state.receiver.lock().ok()?.take()
    }

    fn play(&self) {
        self.state.play_calls.fetch_add(1, Ordering::SeqCst);
        self.state.paused.store(false, Ordering::SeqCst);
    }

    fn pause(&self) {
        self.state.pause_calls.fetch_add(1, Ordering::SeqCst);
        self.state.paused.store(true, Ordering::SeqCst);
    }

    fn paused(&self) -> bool {
        self.state.paused.load(Ordering::SeqCst)
    }

    fn current_time(&self) -> f64 {
        self.state
            .current_time
            .lock()
            .map(|g| *g)
            .unwrap_or_default()
    }

    fn seek_to(&self, seconds: f64) {
        if let Ok(mut guard) = self.state.current_time.lock() {
            *guard = seconds.max(0.0);
        }
    }

    fn duration(&self) -> f64 {
        self.state.duration.lock().map(|g| *g).unwrap_or_default()
    }

    fn volume(&self) -> f64 {
        1.0
    }

    fn set_volume(&self, _volume: f64) {}

    fn muted(&self) -> bool {
        false
    }

    fn set_muted(&self, _muted: bool) {}

    fn playback_rate(&self) -> f64 {
        1.0
    }

    fn set_playback_rate(&self, _rate: f64) {}

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request_fullscreen(&self) {}

    fn exit_fullscreen(&self) {}

    fn load(&self) {
        self.state.load_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn video_size(&self) -> Option<(u32, u32)> {
        None
    }

    fn dispose(&self) -> Result<(), SdkError> {
        self.state.dispose_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.dispose_fails.load(Ordering::SeqCst) {
            return Err(SdkError::Call("forced dispose failure".to_string()));
        }
        Ok(())
    }
}

/// `PlayerSdk` that returns fake players and records every construction.
#[derive(Clone, Default)]
pub struct FakePlayerSdk {
    created: Arc<Mutex<Vec<FakePlayerState>>>,
    element_ids: Arc<Mutex<Vec<String>>>,
    fail_construction: Arc<AtomicBool>,
}

impl FakePlayerSdk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_construction(&self, fail: bool) {
        self.fail_construction.store(fail, Ordering::SeqCst);
    }

    /// States of every player this SDK created, in creation order.
    pub fn created(&self) -> Vec<FakePlayerState> {
        self.created.lock().map(|g| g.clone()).unwrap_or_default()
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn element_ids(&self) -> Vec<String> {
        self.element_ids
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default()
    }
}

impl PlayerSdk for FakePlayerSdk {
    fn create_player(
        &self,
        element_id: &str,
        _options: &PlayerOptions,
    ) -> Result<Box<dyn PlayerHandle>, SdkError> {
        if self.fail_construction.load(Ordering::SeqCst) {
            return Err(SdkError::Constructor("forced construction failure".to_string()));
        }
        let state = FakePlayerState::new();
        if let Ok(mut guard) = self.created.lock() {
            guard.push(state.clone());
        }
        if let Ok(mut guard) = self.element_ids.lock() {
            guard.push(element_id.to_string());
        }
        Ok(Box::new(FakePlayer::new(state)))
    }
}
