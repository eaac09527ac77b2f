//! Playback view state
//!
//! Signals the player component renders from. Session mechanics (the
//! generation counter, the retry budget, the live player handle) live in
//! `application::playback::PlaybackRuntime`; this struct is only what the
//! markup shows: phase, error panel text, progress, and the resolution
//! label input.

use dioxus::prelude::*;

use minivinci_domain::{PlaybackPhase, PlaybackProgress};

#[derive(Clone)]
pub struct PlaybackState {
    pub phase: Signal<PlaybackPhase>,
    /// Error-panel message, already in product language.
    pub error_text: Signal<Option<String>>,
    /// Set while the player stalls mid-stream (`waiting` without an error);
    /// shows the spinner without leaving the playing phase.
    pub buffering: Signal<bool>,
    pub progress: Signal<PlaybackProgress>,
    /// Picture height in pixels once the player reports it.
    pub video_height: Signal<Option<u32>>,
    /// Title from the credential response, when the server sent one.
    pub video_title: Signal<Option<String>>,
    /// Automatic reload attempts consumed so far (shown while retrying).
    pub retry_attempt: Signal<u32>,
    /// Set when the automatic budget ran out and only the manual retry
    /// button remains.
    pub retries_exhausted: Signal<bool>,
    /// Set when the failure was a permission denial; the panel swaps the
    /// retry button for the request-access affordance.
    pub needs_access: Signal<bool>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            phase: Signal::new(PlaybackPhase::Uninitialized),
            error_text: Signal::new(None),
            buffering: Signal::new(false),
            progress: Signal::new(PlaybackProgress::default()),
            video_height: Signal::new(None),
            video_title: Signal::new(None),
            retry_attempt: Signal::new(0),
            retries_exhausted: Signal::new(false),
            needs_access: Signal::new(false),
        }
    }

    /// Back to a clean loading screen; used on mount and on manual retry.
    pub fn begin_loading(&mut self) {
        self.phase.set(PlaybackPhase::FetchingCredential);
        self.error_text.set(None);
        self.buffering.set(false);
        self.progress.set(PlaybackProgress::default());
        self.video_height.set(None);
        self.retry_attempt.set(0);
        self.retries_exhausted.set(false);
        self.needs_access.set(false);
    }

    /// Back to a loading screen for an automatic reload, keeping the
    /// retry ledger and the video info intact.
    pub fn begin_reload(&mut self) {
        self.phase.set(PlaybackPhase::SdkLoading);
        self.error_text.set(None);
        self.buffering.set(false);
    }

    /// Enter the failed phase with a panel message.
    pub fn fail(&mut self, text: String) {
        self.phase.set(PlaybackPhase::Failed);
        self.error_text.set(Some(text));
    }

    /// Failed specifically because access was denied.
    pub fn fail_needs_access(&mut self, text: String) {
        self.fail(text);
        self.needs_access.set(true);
    }

    pub fn phase(&self) -> PlaybackPhase {
        *self.phase.read()
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
