//! WASM VOD adapter driving the hosted player SDK
//!
//! This adapter uses `send_wrapper::SendWrapper` to satisfy the Send + Sync
//! requirements of the SDK ports in a WASM single-threaded environment.
//!
//! # Safety
//!
//! `SendWrapper` is safe to use here because:
//! 1. WASM is single-threaded - there IS only one thread
//! 2. SendWrapper will panic if accessed from a different thread, but this
//!    cannot happen in WASM
//! 3. Dioxus context requires Send + Sync, but all access happens on the
//!    main thread
//!
//! Player events are bridged from SDK callbacks into an unbounded channel;
//! the channel sender is Send, so only the registration side touches JS.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_channel::oneshot;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::ports::outbound::vod_sdk::{
    PlayerErrorInfo, PlayerEvent, PlayerHandle, PlayerOptions, PlayerSdk, ScriptHost, SdkError,
};
use crate::ports::outbound::sdk_sources;

// =============================================================================
// JS helpers
// =============================================================================

fn js_method(instance: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(instance, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn js_call0(instance: &JsValue, name: &str) -> Option<JsValue> {
    js_method(instance, name)?.call0(instance).ok()
}

fn js_call1(instance: &JsValue, name: &str, arg: &JsValue) -> Option<JsValue> {
    js_method(instance, name)?.call1(instance, arg).ok()
}

fn js_number(instance: &JsValue, name: &str) -> Option<f64> {
    js_call0(instance, name)?.as_f64().filter(|n| n.is_finite())
}

fn js_bool(instance: &JsValue, name: &str) -> Option<bool> {
    js_call0(instance, name)?.as_bool()
}

fn global_value(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

// =============================================================================
// Script host
// =============================================================================

/// Browser script host: probes globals and injects `<script>` tags into
/// the document head.
#[derive(Clone, Default)]
pub struct WasmScriptHost;

#[async_trait::async_trait(?Send)]
impl ScriptHost for WasmScriptHost {
    fn resolve_sdk(&self) -> Option<Arc<dyn PlayerSdk>> {
        for name in sdk_sources::GLOBAL_NAMES {
            if let Some(value) = global_value(name) {
                if let Ok(constructor) = value.dyn_into::<js_sys::Function>() {
                    tracing::debug!("player SDK constructor found under {}", name);
                    return Some(Arc::new(WasmPlayerSdk::new(constructor)));
                }
            }
        }
        None
    }

    fn decoder_ready(&self) -> bool {
        global_value("Hls").is_some()
    }

    fn present_globals(&self) -> Vec<String> {
        sdk_sources::ALTERNATE_GLOBALS
            .iter()
            .filter(|name| global_value(name).is_some())
            .map(|name| name.to_string())
            .collect()
    }

    async fn load_script(&self, url: &str) -> Result<(), SdkError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SdkError::Unsupported("no document".to_string()))?;

        // Reuse an in-flight tag for the same source instead of injecting a
        // duplicate; its load/error events resolve us the same way.
        let selector = format!("script[src=\"{}\"]", url);
        let element: web_sys::Element = match document.query_selector(&selector).ok().flatten() {
            Some(existing) => {
                tracing::debug!("awaiting existing script tag for {}", url);
                existing
            }
            None => {
                let script = document
                    .create_element("script")
                    .map_err(|e| script_load_error(url, &e))?
                    .dyn_into::<web_sys::HtmlScriptElement>()
                    .map_err(|_| SdkError::ScriptLoad {
                        url: url.to_string(),
                        detail: "created element is not a script".to_string(),
                    })?;
                script.set_src(url);
                let head = document
                    .head()
                    .ok_or_else(|| SdkError::Unsupported("document has no head".to_string()))?;
                head.append_child(&script)
                    .map_err(|e| script_load_error(url, &e))?;
                script.into()
            }
        };

        await_script_events(&element, url).await
    }
}

fn script_load_error(url: &str, err: &JsValue) -> SdkError {
    SdkError::ScriptLoad {
        url: url.to_string(),
        detail: format!("{:?}", err),
    }
}

/// Await the load/error events of one script element.
async fn await_script_events(element: &web_sys::Element, url: &str) -> Result<(), SdkError> {
    let (tx, rx) = oneshot::channel::<Result<(), ()>>();
    let slot = Rc::new(RefCell::new(Some(tx)));

    let slot_ok = Rc::clone(&slot);
    let on_load = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = slot_ok.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });
    let slot_err = Rc::clone(&slot);
    let on_error = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = slot_err.borrow_mut().take() {
            let _ = tx.send(Err(()));
        }
    });

    element
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(|e| script_load_error(url, &e))?;
    element
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .map_err(|e| script_load_error(url, &e))?;

    let outcome = rx.await;

    let _ = element
        .remove_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    let _ = element
        .remove_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());

    match outcome {
        Ok(Ok(())) => {
            tracing::debug!("script loaded: {}", url);
            Ok(())
        }
        Ok(Err(())) => Err(SdkError::ScriptLoad {
            url: url.to_string(),
            detail: "script error event".to_string(),
        }),
        Err(_) => Err(SdkError::ScriptLoad {
            url: url.to_string(),
            detail: "load listener dropped".to_string(),
        }),
    }
}

// =============================================================================
// Player SDK
// =============================================================================

/// The SDK constructor found under one of the accepted globals.
pub struct WasmPlayerSdk {
    constructor: SendWrapper<js_sys::Function>,
}

impl WasmPlayerSdk {
    pub fn new(constructor: js_sys::Function) -> Self {
        Self {
            constructor: SendWrapper::new(constructor),
        }
    }
}

impl PlayerSdk for WasmPlayerSdk {
    fn create_player(
        &self,
        element_id: &str,
        options: &PlayerOptions,
    ) -> Result<Box<dyn PlayerHandle>, SdkError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SdkError::Unsupported("no document".to_string()))?;
        if document.get_element_by_id(element_id).is_none() {
            return Err(SdkError::Constructor(format!(
                "video element #{} not in the document",
                element_id
            )));
        }

        let js_options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| SdkError::Constructor(format!("options serialization: {}", e)))?;
        let args = js_sys::Array::of2(&JsValue::from_str(element_id), &js_options);
        let instance = js_sys::Reflect::construct(&self.constructor, &args)
            .map_err(|e| SdkError::Constructor(format!("{:?}", e)))?;
        if instance.is_undefined() || instance.is_null() {
            return Err(SdkError::Constructor(
                "constructor returned no instance".to_string(),
            ));
        }

        let handle = WasmPlayerHandle::new(instance.into())?;
        Ok(Box::new(handle))
    }
}

// =============================================================================
// Player handle
// =============================================================================

/// Inner player data (not Send + Sync)
struct PlayerInstance {
    instance: JsValue,
    /// Registered event closures; kept alive for the player's lifetime.
    _callbacks: Vec<Closure<dyn FnMut(JsValue)>>,
}

/// One live SDK player bound to a `<video>` element.
pub struct WasmPlayerHandle {
    inner: SendWrapper<PlayerInstance>,
    events: Mutex<Option<UnboundedReceiver<PlayerEvent>>>,
}

impl WasmPlayerHandle {
    fn new(instance: JsValue) -> Result<Self, SdkError> {
        let on_fn = js_method(&instance, "on").ok_or_else(|| {
            SdkError::Constructor("player has no event registration".to_string())
        })?;

        let (tx, rx) = unbounded::<PlayerEvent>();
        let mut callbacks = Vec::new();

        let simple: [(&str, PlayerEvent); 8] = [
            ("ready", PlayerEvent::Ready),
            ("play", PlayerEvent::Play),
            ("pause", PlayerEvent::Pause),
            ("ended", PlayerEvent::Ended),
            ("loadeddata", PlayerEvent::LoadedData),
            ("waiting", PlayerEvent::Waiting),
            ("canplay", PlayerEvent::CanPlay),
            ("resolutionchange", PlayerEvent::ResolutionChange),
        ];
        for (name, event) in simple {
            register_callback(&on_fn, &instance, name, &mut callbacks, {
                let tx = tx.clone();
                move |_| {
                    let _ = tx.unbounded_send(event.clone());
                }
            })?;
        }

        register_callback(&on_fn, &instance, "timeupdate", &mut callbacks, {
            let tx = tx.clone();
            let instance = instance.clone();
            move |_| {
                let current_time = js_number(&instance, "currentTime").unwrap_or(0.0);
                let duration = js_number(&instance, "duration").unwrap_or(0.0);
                let _ = tx.unbounded_send(PlayerEvent::TimeUpdate {
                    current_time,
                    duration,
                });
            }
        })?;

        register_callback(&on_fn, &instance, "error", &mut callbacks, {
            let tx = tx.clone();
            let instance = instance.clone();
            move |event| {
                let info = extract_error_info(&event, &instance);
                let _ = tx.unbounded_send(PlayerEvent::Error(info));
            }
        })?;

        Ok(Self {
            inner: SendWrapper::new(PlayerInstance {
                instance,
                _callbacks: callbacks,
            }),
            events: Mutex::new(Some(rx)),
        })
    }

    fn instance(&self) -> &JsValue {
        &self.inner.instance
    }
}

fn register_callback(
    on_fn: &js_sys::Function,
    instance: &JsValue,
    event_name: &str,
    callbacks: &mut Vec<Closure<dyn FnMut(JsValue)>>,
    handler: impl FnMut(JsValue) + 'static,
) -> Result<(), SdkError> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    on_fn
        .call2(
            instance,
            &JsValue::from_str(event_name),
            closure.as_ref().unchecked_ref(),
        )
        .map_err(|e| SdkError::Constructor(format!("registering {}: {:?}", event_name, e)))?;
    callbacks.push(closure);
    Ok(())
}

/// Pull code/name/message out of an SDK error event, falling back to the
/// player's own `error()` accessor.
fn extract_error_info(event: &JsValue, instance: &JsValue) -> PlayerErrorInfo {
    let mut info = PlayerErrorInfo::default();

    let data = js_sys::Reflect::get(event, &JsValue::from_str("data")).unwrap_or(JsValue::UNDEFINED);
    let player_error = js_call0(instance, "error").unwrap_or(JsValue::UNDEFINED);
    for source in [event.clone(), data, player_error] {
        if !source.is_object() {
            continue;
        }
        if info.code.is_none() {
            info.code = js_sys::Reflect::get(&source, &JsValue::from_str("code"))
                .ok()
                .and_then(|v| v.as_f64())
                .map(|c| c as i64);
        }
        if info.name.is_none() {
            info.name = js_sys::Reflect::get(&source, &JsValue::from_str("name"))
                .ok()
                .and_then(|v| v.as_string());
        }
        if info.message.is_none() {
            info.message = js_sys::Reflect::get(&source, &JsValue::from_str("message"))
                .ok()
                .and_then(|v| v.as_string());
        }
    }
    info
}

impl PlayerHandle for WasmPlayerHandle {
    fn take_events(&self) -> Option<UnboundedReceiver<PlayerEvent>> {
        self.events.lock().ok()?.take()
    }

    fn play(&self) {
        // play() returns a promise; a rejection only means autoplay was
        // blocked, so consume it instead of letting it surface as uncaught.
        if let Some(result) = js_call0(self.instance(), "play") {
            if result.is_instance_of::<js_sys::Promise>() {
                let promise = js_sys::Promise::from(result);
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
                });
            }
        }
    }

    fn pause(&self) {
        js_call0(self.instance(), "pause");
    }

    fn paused(&self) -> bool {
        js_bool(self.instance(), "paused").unwrap_or(true)
    }

    fn current_time(&self) -> f64 {
        js_number(self.instance(), "currentTime").unwrap_or(0.0)
    }

    fn seek_to(&self, seconds: f64) {
        js_call1(
            self.instance(),
            "currentTime",
            &JsValue::from_f64(seconds.max(0.0)),
        );
    }

    fn duration(&self) -> f64 {
        js_number(self.instance(), "duration").unwrap_or(0.0)
    }

    fn volume(&self) -> f64 {
        js_number(self.instance(), "volume").unwrap_or(1.0)
    }

    fn set_volume(&self, volume: f64) {
        js_call1(
            self.instance(),
            "volume",
            &JsValue::from_f64(volume.clamp(0.0, 1.0)),
        );
    }

    fn muted(&self) -> bool {
        js_bool(self.instance(), "muted").unwrap_or(false)
    }

    fn set_muted(&self, muted: bool) {
        js_call1(self.instance(), "muted", &JsValue::from_bool(muted));
    }

    fn playback_rate(&self) -> f64 {
        js_number(self.instance(), "playbackRate").unwrap_or(1.0)
    }

    fn set_playback_rate(&self, rate: f64) {
        js_call1(self.instance(), "playbackRate", &JsValue::from_f64(rate));
    }

    fn is_fullscreen(&self) -> bool {
        js_bool(self.instance(), "isFullscreen").unwrap_or(false)
    }

    fn request_fullscreen(&self) {
        js_call0(self.instance(), "requestFullscreen");
    }

    fn exit_fullscreen(&self) {
        js_call0(self.instance(), "exitFullscreen");
    }

    fn load(&self) {
        js_call0(self.instance(), "load");
    }

    fn video_size(&self) -> Option<(u32, u32)> {
        let width = js_number(self.instance(), "videoWidth")? as u32;
        let height = js_number(self.instance(), "videoHeight")? as u32;
        if width == 0 || height == 0 {
            return None;
        }
        Some((width, height))
    }

    fn dispose(&self) -> Result<(), SdkError> {
        let instance = self.instance();
        let dispose = js_method(instance, "dispose")
            .ok_or_else(|| SdkError::Call("player has no dispose method".to_string()))?;
        dispose
            .call0(instance)
            .map_err(|e| SdkError::Call(format!("dispose: {:?}", e)))?;
        Ok(())
    }
}

/// Create the script host for web builds
pub fn create_script_host() -> Arc<dyn ScriptHost> {
    Arc::new(WasmScriptHost)
}
