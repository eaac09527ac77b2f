//! VOD player SDK ports
//!
//! The hosted player SDK is injected as a capability instead of being read
//! from ambient globals: `ScriptHost` resolves (or installs) the SDK entry
//! point, `PlayerSdk` constructs players, and `PlayerHandle` is the surface
//! of one live player instance.
//!
//! Events cross the JS boundary as a stream: the adapter bridges the SDK's
//! callback registration into an unbounded channel, and the player
//! component consumes the receiver on the UI task.

use std::sync::Arc;

use futures_channel::mpsc::UnboundedReceiver;
use serde::Serialize;
use thiserror::Error;

use minivinci_domain::PlaybackCredential;

/// Errors from SDK installation and player construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// One script source failed to load (error event, or rejected install).
    #[error("failed to load {url}: {detail}")]
    ScriptLoad { url: String, detail: String },

    /// Every source in the fallback chain failed.
    #[error("every player SDK source failed to load")]
    AllSourcesFailed,

    /// A script loaded but no constructor appeared under the accepted names.
    #[error("player SDK script loaded but no constructor appeared")]
    MissingGlobal,

    /// The current platform cannot host the SDK at all.
    #[error("player SDK is not available on this platform: {0}")]
    Unsupported(String),

    /// The SDK constructor threw or the rendering surface was missing.
    #[error("player constructor failed: {0}")]
    Constructor(String),

    /// A call on a live player instance failed.
    #[error("player call failed: {0}")]
    Call(String),
}

// =============================================================================
// Player options
// =============================================================================

/// Control-bar toggles forwarded to the SDK.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlBarOptions {
    pub progress_control: bool,
    pub current_time_display: bool,
    pub duration_display: bool,
    pub playback_rate_menu_button: bool,
    pub volume_panel: bool,
    pub fullscreen_toggle: bool,
}

impl Default for ControlBarOptions {
    fn default() -> Self {
        Self {
            progress_control: true,
            current_time_display: true,
            duration_display: true,
            playback_rate_menu_button: true,
            volume_panel: true,
            fullscreen_toggle: true,
        }
    }
}

/// Options handed to the SDK constructor. Field names follow the SDK's
/// wire casing, hence the serde renames.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerOptions {
    #[serde(rename = "fileID")]
    pub file_id: String,
    #[serde(rename = "appID")]
    pub app_id: String,
    pub psign: String,
    pub autoplay: bool,
    pub controls: bool,
    pub preload: String,
    pub fluid: bool,
    #[serde(rename = "playbackRates")]
    pub playback_rates: Vec<f64>,
    #[serde(rename = "controlBar")]
    pub control_bar: ControlBarOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl PlayerOptions {
    /// Standard options for a signed credential. Autoplay and poster are
    /// decided by the player component.
    pub fn for_credential(credential: &PlaybackCredential) -> Self {
        Self {
            file_id: credential.file_id.clone(),
            app_id: credential.app_id.clone(),
            psign: credential.psign.clone(),
            autoplay: false,
            controls: true,
            preload: "auto".to_string(),
            fluid: true,
            playback_rates: vec![0.5, 0.75, 1.0, 1.25, 1.5, 2.0],
            control_bar: ControlBarOptions::default(),
            poster: None,
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_poster(mut self, poster: Option<String>) -> Self {
        self.poster = poster;
        self
    }
}

// =============================================================================
// Player events
// =============================================================================

/// Raw error payload from the SDK, before mapping to user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerErrorInfo {
    /// Numeric SDK error code, when the SDK provides one.
    pub code: Option<i64>,
    /// Media-element string code (e.g. "MEDIA_ERR_NETWORK").
    pub name: Option<String>,
    /// Free-form message attached to the error.
    pub message: Option<String>,
}

/// Lifecycle events surfaced by a live player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Ready,
    Play,
    Pause,
    Ended,
    LoadedData,
    Waiting,
    CanPlay,
    TimeUpdate { current_time: f64, duration: f64 },
    ResolutionChange,
    Error(PlayerErrorInfo),
}

// =============================================================================
// Capability traits
// =============================================================================

/// One live player instance. Exactly one exists per mounted player
/// component; dropped instances must be disposed first.
pub trait PlayerHandle: Send + Sync {
    /// Takes the event stream. Yields `Some` exactly once, right after
    /// construction; the component owns the receiver from then on.
    fn take_events(&self) -> Option<UnboundedReceiver<PlayerEvent>>;

    /// Starts playback. Browser autoplay rejection is swallowed by the
    /// adapter, never surfaced as an error.
    fn play(&self);

    fn pause(&self);

    fn paused(&self) -> bool;

    fn current_time(&self) -> f64;

    fn seek_to(&self, seconds: f64);

    fn duration(&self) -> f64;

    fn volume(&self) -> f64;

    fn set_volume(&self, volume: f64);

    fn muted(&self) -> bool;

    fn set_muted(&self, muted: bool);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&self, rate: f64);

    fn is_fullscreen(&self) -> bool;

    fn request_fullscreen(&self);

    fn exit_fullscreen(&self);

    /// Reissues a load of the current source (the automatic-retry path).
    fn load(&self);

    /// Natural video dimensions once known, for resolution detection.
    fn video_size(&self) -> Option<(u32, u32)>;

    /// Tears the player down. Errors are reported, not thrown; callers log
    /// and move on.
    fn dispose(&self) -> Result<(), SdkError>;
}

/// The SDK constructor capability, normalized from whichever accepted
/// global name it was found under.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PlayerSdk: Send + Sync {
    /// Instantiates a player bound to the `<video>` element with this id.
    fn create_player(
        &self,
        element_id: &str,
        options: &PlayerOptions,
    ) -> Result<Box<dyn PlayerHandle>, SdkError>;
}

impl std::fmt::Debug for dyn PlayerSdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PlayerSdk")
    }
}

/// Resolve-or-install access to the page's script environment.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ScriptHost: Send + Sync {
    /// The SDK constructor, if an entry point is already present under
    /// either accepted global name.
    fn resolve_sdk(&self) -> Option<Arc<dyn PlayerSdk>>;

    /// True when the decoding-support library is already present.
    fn decoder_ready(&self) -> bool;

    /// Which of the alternate constructor names exist in the page's global
    /// scope. Feeds the load-timeout diagnostic only.
    fn present_globals(&self) -> Vec<String>;

    /// Loads one script and resolves when its load event fires. An existing
    /// tag for the same source is awaited via attached listeners instead of
    /// a duplicate injection.
    async fn load_script(&self, url: &str) -> Result<(), SdkError>;
}

/// Script sources and global names for the hosted player SDK.
///
/// Kept in the ports layer like `storage_keys`: they are part of the
/// integration contract, not an adapter detail.
pub mod sdk_sources {
    /// Decoding-support library loaded before the SDK itself.
    pub const DECODER: &str = "https://unpkg.com/hls.js@1.4.10/dist/hls.min.js";

    /// Ordered SDK sources: vendor CDN first, then mirrors.
    pub const PLAYER: [&str; 3] = [
        "https://web.sdk.qcloud.com/player/tcplayer/release/v4.5.0/tcplayer.v4.5.0.min.js",
        "https://cdnjs.cloudflare.com/ajax/libs/tcplayer/4.5.0/tcplayer.v4.5.0.min.js",
        "https://unpkg.com/tcplayer@4.5.0/dist/tcplayer.v4.5.0.min.js",
    ];

    /// Accepted constructor globals, in normalization order.
    pub const GLOBAL_NAMES: [&str; 2] = ["TCPlayer", "TcPlayer"];

    /// Additional names probed purely for the timeout diagnostic.
    pub const ALTERNATE_GLOBALS: [&str; 8] = [
        "TCPlayer",
        "TcPlayer",
        "tcPlayer",
        "tcplayer",
        "TencentPlayer",
        "tencentPlayer",
        "VodPlayer",
        "vodPlayer",
    ];
}
