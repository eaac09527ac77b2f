//! Hosted VOD player component
//!
//! Owns one playback session per mounted instance: fetch the signed
//! credential, resolve or install the player SDK, bind a player to the
//! `<video>` surface, then pump SDK events into view state. Session
//! mechanics (staleness, retry budget, player ownership) live in
//! [`PlaybackRuntime`]; this component decides when sessions start and
//! what each event means for the markup.
//!
//! A new session starts on mount, on a video-id change, and on manual
//! retry. A session-status change or an approaching credential expiry
//! re-fetches the credential and re-binds the player without restarting
//! the session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use minivinci_domain::playback::{
    PlaybackPhase, PlaybackProgress, RetryDecision, EXPIRY_CHECK_INTERVAL_MS, MAX_AUTO_RETRIES,
};

use crate::application::dto::PlaybackReport;
use crate::application::playback::{bootstrap_sdk, error_text, PlaybackError, PlaybackRuntime};
use crate::application::services::VodService;
use crate::ports::outbound::{PlatformPort, PlayerEvent, PlayerHandle, PlayerOptions, ScriptHost};
use crate::presentation::helpers::format_helpers::{format_clock, resolution_label};
use crate::presentation::services::use_vod_service;
use crate::presentation::state::{PlaybackState, SessionState};
use crate::{use_platform, use_script_host};

/// Sequence for unique `<video>` element ids; several players may be
/// mounted at once and each needs its own surface.
static PLAYER_DOM_SEQ: AtomicU64 = AtomicU64::new(0);

#[component]
pub fn VodPlayer(
    /// Backend video id the credential is fetched for.
    video_id: ReadOnlySignal<String>,
    /// Caller-decided access policy; `false` renders the lock overlay and
    /// never fetches.
    has_access: ReadOnlySignal<bool>,
    /// Lock-overlay message; falls back to the stock wording.
    #[props(default)] access_message: Option<String>,
    #[props(default = false)] autoplay: bool,
    #[props(default)] poster: Option<String>,
    /// Raised when the viewer needs an access upgrade: lock-overlay button,
    /// or a permission-denied credential fetch.
    #[props(default)] on_request_access: EventHandler<()>,
    #[props(default)] on_play: EventHandler<()>,
    #[props(default)] on_pause: EventHandler<()>,
    #[props(default)] on_ended: EventHandler<()>,
    #[props(default)] on_progress: EventHandler<PlaybackProgress>,
) -> Element {
    let platform = use_platform();
    let script_host = use_script_host();
    let vod_service = use_vod_service();
    let session_status = use_context::<SessionState>().status;

    let state = use_hook(PlaybackState::new);
    let mut runtime = use_signal({
        let platform = platform.clone();
        move || PlaybackRuntime::new(platform)
    });
    let element_id = use_hook(|| {
        format!(
            "vod-player-{}",
            PLAYER_DOM_SEQ.fetch_add(1, Ordering::Relaxed)
        )
    });

    let build_ctx = {
        let state = state.clone();
        let platform = platform.clone();
        let script_host = script_host.clone();
        let vod = vod_service.clone();
        let element_id = element_id.clone();
        let poster = poster.clone();
        move |video_id: String, has_access: bool| SessionCtx {
            state: state.clone(),
            runtime,
            platform: platform.clone(),
            script_host: script_host.clone(),
            vod: vod.clone(),
            element_id: element_id.clone(),
            video_id,
            has_access,
            autoplay,
            poster: poster.clone(),
            on_request_access,
            on_play,
            on_pause,
            on_ended,
            on_progress,
        }
    };

    // Session lifecycle: restart on mount, on video-id change, and when
    // access flips to granted. Losing access tears the session down.
    {
        let build_ctx = build_ctx.clone();
        use_effect(move || {
            let vid = video_id();
            let access = has_access();
            if !access {
                runtime.write().begin_session();
                return;
            }
            spawn(run_session(build_ctx(vid, access)));
        });
    }

    // A sign-in or sign-out changes which bearer the credential endpoint
    // sees; re-sign the running session without tearing the player down.
    let mut last_status = use_signal(|| None);
    {
        let build_ctx = build_ctx.clone();
        use_effect(move || {
            let current = *session_status.read();
            let previous = *last_status.peek();
            last_status.set(Some(current));
            if previous.is_some_and(|p| p != current) && runtime.peek().has_player() {
                spawn(refresh_credential(build_ctx(
                    video_id.peek().clone(),
                    *has_access.peek(),
                )));
            }
        });
    }

    use_drop(move || {
        runtime.write().destroy();
    });

    let on_retry = {
        let build_ctx = build_ctx.clone();
        move |_| {
            spawn(run_session(build_ctx(
                video_id.peek().clone(),
                *has_access.peek(),
            )));
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let guard = runtime.read();
        let Some(player) = guard.player() else {
            return;
        };
        match evt.key() {
            Key::Character(c) => match c.as_str() {
                " " => {
                    evt.prevent_default();
                    toggle_play(player, *has_access.peek());
                }
                "m" | "M" => player.set_muted(!player.muted()),
                "f" | "F" => toggle_fullscreen(player),
                digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                    let tenths = f64::from(digit.as_bytes()[0] - b'0');
                    let duration = player.duration();
                    if duration.is_finite() && duration > 0.0 {
                        player.seek_to(duration * tenths / 10.0);
                    }
                }
                _ => {}
            },
            Key::ArrowLeft => {
                evt.prevent_default();
                player.seek_to((player.current_time() - 10.0).max(0.0));
            }
            Key::ArrowRight => {
                evt.prevent_default();
                player.seek_to(player.current_time() + 10.0);
            }
            _ => {}
        }
    };

    let phase = state.phase();
    let buffering = *state.buffering.read();
    let error = state.error_text.read().clone();
    let retry_attempt = *state.retry_attempt.read();
    let retries_exhausted = *state.retries_exhausted.read();
    let video_height = *state.video_height.read();
    let video_title = state.video_title.read().clone();
    let progress = *state.progress.read();

    let locked = !has_access() || *state.needs_access.read();
    let lock_message = access_message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| error_text::DEFAULT_LOCK_MESSAGE.to_string());
    let show_error = !locked && error.is_some() && !phase.is_loading();
    let show_loading = !locked && !show_error && (phase.is_loading() || buffering);
    let show_info = !locked && !show_error && !show_loading && phase != PlaybackPhase::Uninitialized;
    let retry_hint = (retry_attempt > 0 && !retries_exhausted)
        .then(|| format!("即将自动重试（第 {retry_attempt}/{MAX_AUTO_RETRIES} 次）"));

    rsx! {
        div {
            class: "tencent-vod-player",
            tabindex: 0,
            onkeydown: on_keydown,
            if locked {
                div { class: "vod-access-denied",
                    div { class: "access-denied-content",
                        i { class: "fas fa-lock" }
                        h4 { "需要解锁" }
                        p { {lock_message} }
                        button {
                            class: "art-btn art-btn-primary",
                            onclick: move |_| on_request_access.call(()),
                            "获取访问权限"
                        }
                    }
                }
            } else {
                div { class: "vod-player-container",
                    video {
                        id: "{element_id}",
                        class: "tcplayer",
                        poster: poster.clone().unwrap_or_default(),
                    }
                }
                if show_loading {
                    div { class: "vod-loading",
                        div { class: "art-loader" }
                        p { "视频加载中..." }
                    }
                }
                if show_error {
                    div { class: "vod-error",
                        i { class: "fas fa-exclamation-triangle" }
                        h4 { "视频加载失败" }
                        p { {error.unwrap_or_default()} }
                        if let Some(hint) = retry_hint {
                            p { class: "vod-retry-hint", {hint} }
                        }
                        button {
                            class: "art-btn art-btn-primary",
                            onclick: on_retry,
                            "重试"
                        }
                    }
                }
                if show_info {
                    div { class: "vod-video-info",
                        div { class: "video-meta",
                            if let Some(title) = video_title {
                                span {
                                    i { class: "fas fa-film" }
                                    " {title}"
                                }
                            }
                            if progress.duration > 0.0 {
                                span {
                                    i { class: "fas fa-clock" }
                                    " {format_clock(progress.duration)}"
                                }
                            }
                            if let Some(height) = video_height {
                                span {
                                    i { class: "fas fa-expand" }
                                    " {resolution_label(height)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// =============================================================================
// Session mechanics
// =============================================================================

/// Everything one playback session's async arcs need. Built fresh from the
/// current props whenever a session or refresh starts.
#[derive(Clone)]
struct SessionCtx {
    state: PlaybackState,
    runtime: Signal<PlaybackRuntime>,
    platform: Arc<dyn PlatformPort>,
    script_host: Arc<dyn ScriptHost>,
    vod: Arc<VodService>,
    element_id: String,
    video_id: String,
    has_access: bool,
    autoplay: bool,
    poster: Option<String>,
    on_request_access: EventHandler<()>,
    on_play: EventHandler<()>,
    on_pause: EventHandler<()>,
    on_ended: EventHandler<()>,
    on_progress: EventHandler<PlaybackProgress>,
}

/// One full session: invalidate the previous one, then fetch and bind
/// under the new generation. The expiry watch lives exactly as long as
/// the generation it was spawned for.
async fn run_session(mut ctx: SessionCtx) {
    let generation = ctx.runtime.write().begin_session();
    ctx.state.begin_loading();
    ctx.platform.log_info(&format!(
        "starting playback session {generation} for video {}",
        ctx.video_id
    ));
    spawn_expiry_watch(ctx.clone(), generation);
    fetch_and_bind(ctx, generation).await;
}

/// Credential-only refresh: same generation, so the live player keeps
/// playing until the replacement is adopted over it.
async fn refresh_credential(ctx: SessionCtx) {
    let generation = ctx.runtime.peek().generation();
    ctx.platform
        .log_info("re-signing playback credential for the running session");
    fetch_and_bind(ctx, generation).await;
}

/// Fetch the credential, bootstrap the SDK, construct a player, and hand
/// both to the runtime. Every await is followed by a staleness check; a
/// stale arc simply stops.
async fn fetch_and_bind(mut ctx: SessionCtx, generation: u64) {
    let fetched = ctx.vod.fetch_playback(&ctx.video_id).await;
    if !ctx.runtime.peek().is_current(generation) {
        return;
    }

    let (credential, meta) = match fetched {
        Ok(parts) => parts,
        Err(err) => {
            handle_failure(&mut ctx, generation, PlaybackError::from_service(err));
            return;
        }
    };
    if let Some(field) = credential.missing_field() {
        handle_failure(
            &mut ctx,
            generation,
            PlaybackError::IncompleteCredential { field },
        );
        return;
    }
    if !ctx.runtime.write().adopt_credential(generation, credential.clone()) {
        return;
    }
    let meta = meta.unwrap_or_default();
    if meta.title.is_some() {
        ctx.state.video_title.set(meta.title.clone());
    }

    ctx.state.phase.set(PlaybackPhase::SdkLoading);
    let sdk = match bootstrap_sdk(&ctx.script_host, &ctx.platform).await {
        Ok(sdk) => sdk,
        Err(err) => {
            if ctx.runtime.peek().is_current(generation) {
                handle_failure(&mut ctx, generation, err);
            }
            return;
        }
    };
    if !ctx.runtime.peek().is_current(generation) {
        return;
    }

    let options = PlayerOptions::for_credential(&credential)
        .with_autoplay(ctx.autoplay && ctx.has_access)
        .with_poster(meta.cover_url.clone().or_else(|| ctx.poster.clone()));
    let player = match sdk.create_player(&ctx.element_id, &options) {
        Ok(player) => player,
        Err(err) => {
            handle_failure(
                &mut ctx,
                generation,
                PlaybackError::Player {
                    message: format!("播放器初始化失败: {err}"),
                },
            );
            return;
        }
    };

    let events = player.take_events();
    if !ctx.runtime.write().adopt_player(generation, player) {
        return;
    }
    if let Some(events) = events {
        spawn_event_pump(ctx, generation, events);
    }
}

fn spawn_event_pump(
    mut ctx: SessionCtx,
    generation: u64,
    mut events: UnboundedReceiver<PlayerEvent>,
) {
    spawn(async move {
        while let Some(event) = events.next().await {
            if !ctx.runtime.peek().is_current(generation) {
                break;
            }
            apply_player_event(&mut ctx, generation, event);
        }
    });
}

fn apply_player_event(ctx: &mut SessionCtx, generation: u64, event: PlayerEvent) {
    match event {
        PlayerEvent::Ready => {
            ctx.platform.log_debug("player ready");
            ctx.state.phase.set(PlaybackPhase::PlayerReady);
            ctx.state.buffering.set(false);
            ctx.state.retry_attempt.set(0);
            ctx.state.retries_exhausted.set(false);
            ctx.runtime.write().reset_retries();

            let guard = ctx.runtime.read();
            if let Some(player) = guard.player() {
                let duration = player.duration();
                if duration.is_finite() && duration > 0.0 {
                    ctx.state
                        .progress
                        .set(PlaybackProgress::from_times(0.0, duration));
                }
                if let Some((_, height)) = player.video_size() {
                    ctx.state.video_height.set(Some(height));
                }
                // Autoplay rejection is swallowed by the adapter.
                if ctx.autoplay && ctx.has_access {
                    player.play();
                }
            }
        }
        PlayerEvent::Play => {
            ctx.state.phase.set(PlaybackPhase::Playing);
            ctx.state.buffering.set(false);
            ctx.on_play.call(());
        }
        PlayerEvent::Pause => {
            ctx.state.phase.set(PlaybackPhase::Paused);
            ctx.on_pause.call(());
            report_playback(ctx);
        }
        PlayerEvent::Ended => {
            ctx.state.phase.set(PlaybackPhase::Paused);
            ctx.on_ended.call(());
            report_playback(ctx);
        }
        PlayerEvent::LoadedData | PlayerEvent::CanPlay => {
            ctx.state.buffering.set(false);
            if ctx.state.phase().is_loading() {
                ctx.state.phase.set(PlaybackPhase::PlayerReady);
            }
        }
        PlayerEvent::Waiting => {
            ctx.state.buffering.set(true);
        }
        PlayerEvent::TimeUpdate {
            current_time,
            duration,
        } => {
            let progress = PlaybackProgress::from_times(current_time, duration);
            ctx.state.progress.set(progress);
            ctx.on_progress.call(progress);
        }
        PlayerEvent::ResolutionChange => {
            let height = ctx
                .runtime
                .read()
                .player()
                .and_then(|p| p.video_size())
                .map(|(_, h)| h);
            if height.is_some() {
                ctx.state.video_height.set(height);
            }
        }
        PlayerEvent::Error(info) => {
            ctx.platform
                .log_error(&format!("player error event: {info:?}"));
            let message = error_text::player_error_text(&info);
            handle_failure(ctx, generation, PlaybackError::Player { message });
        }
    }
}

/// Shared failure path for credential, SDK, and player errors: show the
/// mapped text, raise the access affordance for permission denials, and
/// spend one automatic-reload attempt when a player exists to reload.
fn handle_failure(ctx: &mut SessionCtx, generation: u64, error: PlaybackError) {
    ctx.platform
        .log_error(&format!("playback session failed: {error}"));
    let text = error.user_text();
    if error.requests_access() {
        ctx.state.fail_needs_access(text);
        ctx.on_request_access.call(());
    } else {
        ctx.state.fail(text);
    }

    let decision = ctx.runtime.write().register_error();
    match decision {
        RetryDecision::Schedule { delay_ms, attempt } => {
            if !ctx.runtime.peek().has_player() {
                // Nothing to reload against; manual retry restarts from the
                // credential fetch instead.
                return;
            }
            ctx.state.retry_attempt.set(attempt);
            ctx.platform
                .log_info(&format!("automatic reload {attempt} in {delay_ms} ms"));
            let mut retry_ctx = ctx.clone();
            spawn(async move {
                retry_ctx.platform.sleep_ms(delay_ms).await;
                if !retry_ctx.runtime.peek().is_current(generation) {
                    return;
                }
                retry_ctx.state.begin_reload();
                if let Some(player) = retry_ctx.runtime.read().player() {
                    player.load();
                }
            });
        }
        RetryDecision::GiveUp => {
            ctx.platform.log_error("automatic reload budget exhausted");
            ctx.state.retries_exhausted.set(true);
        }
    }
}

/// Re-check the credential's expiry once a minute for as long as this
/// generation is current; a credential inside the refresh horizon gets
/// re-fetched before the signature lapses.
fn spawn_expiry_watch(ctx: SessionCtx, generation: u64) {
    spawn(async move {
        loop {
            ctx.platform.sleep_ms(EXPIRY_CHECK_INTERVAL_MS).await;
            if !ctx.runtime.peek().is_current(generation) {
                break;
            }
            let due = {
                let now = chrono::DateTime::from_timestamp(ctx.platform.now_unix_secs() as i64, 0)
                    .unwrap_or_else(chrono::Utc::now);
                ctx.runtime
                    .read()
                    .credential()
                    .is_some_and(|c| c.refresh_due(now))
            };
            if due {
                ctx.platform
                    .log_info("playback credential expiring soon, refreshing");
                fetch_and_bind(ctx.clone(), generation).await;
            }
        }
    });
}

/// Best-effort telemetry on pause and ended.
fn report_playback(ctx: &SessionCtx) {
    let progress = *ctx.state.progress.peek();
    let report = PlaybackReport::new(
        &ctx.video_id,
        progress.current_time.max(0.0) as u64,
        progress.percentage,
    );
    let vod = ctx.vod.clone();
    let platform = ctx.platform.clone();
    spawn(async move {
        if let Err(err) = vod.report_playback(&report).await {
            platform.log_debug(&format!("playback report not recorded: {err}"));
        }
    });
}

fn toggle_play(player: &dyn PlayerHandle, has_access: bool) {
    if !has_access {
        return;
    }
    if player.paused() {
        player.play();
    } else {
        player.pause();
    }
}

fn toggle_fullscreen(player: &dyn PlayerHandle) {
    if player.is_fullscreen() {
        player.exit_fullscreen();
    } else {
        player.request_fullscreen();
    }
}
