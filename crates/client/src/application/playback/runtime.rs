//! Playback session ownership
//!
//! A playback surface runs many overlapping async arcs: credential
//! fetches, SDK installs, retry timers, expiry ticks. `PlaybackRuntime`
//! owns the resources those arcs produce and the generation counter that
//! decides which of them are still welcome. Every session change bumps
//! the generation; an arc that kept an older generation token finds its
//! results rejected on arrival, so a stale fetch can never resurrect a
//! torn-down player.
//!
//! The invariant it maintains: at most one live player, bound to the
//! credential of the current generation.

use std::sync::Arc;

use minivinci_domain::playback::{PlaybackCredential, RetryDecision, RetryState};

use crate::ports::outbound::{PlatformPort, PlayerHandle};

pub struct PlaybackRuntime {
    platform: Arc<dyn PlatformPort>,
    generation: u64,
    player: Option<Box<dyn PlayerHandle>>,
    credential: Option<PlaybackCredential>,
    retry: RetryState,
}

impl PlaybackRuntime {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            platform,
            generation: 0,
            player: None,
            credential: None,
            retry: RetryState::default(),
        }
    }

    /// Starts a fresh session: tears down the live player, forgets the
    /// credential, resets the retry budget and invalidates every
    /// outstanding generation token. Returns the token async arcs of the
    /// new session must carry.
    pub fn begin_session(&mut self) -> u64 {
        self.dispose_player();
        self.credential = None;
        self.retry.reset();
        self.generation += 1;
        self.generation
    }

    /// Terminal teardown on unmount. Indistinguishable from
    /// [`begin_session`](Self::begin_session) except that nobody keeps
    /// the returned token, so no future arc can pass the guard.
    pub fn destroy(&mut self) {
        self.begin_session();
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether results produced under `generation` may still land.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Installs the player a bootstrap arc produced. A stale arc's player
    /// is disposed on the spot and never stored; within the current
    /// generation a replacement disposes its predecessor, which is how a
    /// credential refresh re-binds.
    pub fn adopt_player(&mut self, generation: u64, player: Box<dyn PlayerHandle>) -> bool {
        if !self.is_current(generation) {
            self.platform.log_debug(&format!(
                "discarding player built for stale session {generation} (current {})",
                self.generation
            ));
            if let Err(err) = player.dispose() {
                self.platform
                    .log_warn(&format!("stale player dispose failed: {err}"));
            }
            return false;
        }
        self.dispose_player();
        self.player = Some(player);
        true
    }

    /// Installs a fetched credential under the same staleness rule.
    pub fn adopt_credential(&mut self, generation: u64, credential: PlaybackCredential) -> bool {
        if !self.is_current(generation) {
            self.platform.log_debug(&format!(
                "discarding credential fetched for stale session {generation} (current {})",
                self.generation
            ));
            return false;
        }
        self.credential = Some(credential);
        true
    }

    pub fn player(&self) -> Option<&dyn PlayerHandle> {
        self.player.as_deref()
    }

    pub fn has_player(&self) -> bool {
        self.player.is_some()
    }

    pub fn credential(&self) -> Option<&PlaybackCredential> {
        self.credential.as_ref()
    }

    /// Records a player error against the retry budget.
    pub fn register_error(&mut self) -> RetryDecision {
        self.retry.register_error()
    }

    /// Clears the retry budget, as on a successful (re)load.
    pub fn reset_retries(&mut self) {
        self.retry.reset();
    }

    pub fn retry_count(&self) -> u32 {
        self.retry.count()
    }

    fn dispose_player(&mut self) {
        if let Some(player) = self.player.take() {
            if let Err(err) = player.dispose() {
                self.platform
                    .log_warn(&format!("player dispose failed: {err}"));
            }
        }
    }
}

impl Drop for PlaybackRuntime {
    fn drop(&mut self) {
        self.dispose_player();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{create_mock_platform, MockPlatformHandles};
    use crate::infrastructure::vod::fake::{FakePlayer, FakePlayerState};
    use minivinci_domain::playback::MAX_AUTO_RETRIES;

    fn runtime() -> (PlaybackRuntime, MockPlatformHandles) {
        let (platform, handles) = create_mock_platform();
        (PlaybackRuntime::new(Arc::new(platform)), handles)
    }

    fn player() -> (Box<dyn PlayerHandle>, FakePlayerState) {
        let state = FakePlayerState::new();
        (Box::new(FakePlayer::new(state.clone())), state)
    }

    fn credential() -> PlaybackCredential {
        PlaybackCredential {
            file_id: "243791579912345678".to_string(),
            app_id: "1500012345".to_string(),
            psign: "sig".to_string(),
            expire_at: None,
        }
    }

    #[test]
    fn each_session_invalidates_the_previous_token() {
        let (mut runtime, _) = runtime();
        let first = runtime.begin_session();
        assert!(runtime.is_current(first));

        let second = runtime.begin_session();
        assert!(!runtime.is_current(first));
        assert!(runtime.is_current(second));
    }

    #[test]
    fn current_session_adopts_player_and_credential() {
        let (mut runtime, _) = runtime();
        let generation = runtime.begin_session();
        let (boxed, state) = player();

        assert!(runtime.adopt_credential(generation, credential()));
        assert!(runtime.adopt_player(generation, boxed));
        assert!(runtime.has_player());
        assert!(runtime.credential().is_some());
        assert_eq!(state.dispose_count(), 0);
    }

    #[test]
    fn stale_player_is_disposed_on_arrival() {
        let (mut runtime, _) = runtime();
        let old = runtime.begin_session();
        runtime.begin_session();

        let (boxed, state) = player();
        assert!(!runtime.adopt_player(old, boxed));
        assert!(!runtime.has_player());
        assert_eq!(state.dispose_count(), 1);
    }

    #[test]
    fn stale_credential_is_discarded() {
        let (mut runtime, _) = runtime();
        let old = runtime.begin_session();
        runtime.begin_session();

        assert!(!runtime.adopt_credential(old, credential()));
        assert!(runtime.credential().is_none());
    }

    #[test]
    fn replacement_within_a_session_disposes_the_predecessor() {
        let (mut runtime, _) = runtime();
        let generation = runtime.begin_session();

        let (first_boxed, first) = player();
        let (second_boxed, second) = player();
        runtime.adopt_player(generation, first_boxed);
        runtime.adopt_player(generation, second_boxed);

        assert_eq!(first.dispose_count(), 1);
        assert_eq!(second.dispose_count(), 0);
        assert!(runtime.has_player());
    }

    #[test]
    fn new_session_tears_down_player_credential_and_retries() {
        let (mut runtime, _) = runtime();
        let generation = runtime.begin_session();
        let (boxed, state) = player();
        runtime.adopt_player(generation, boxed);
        runtime.adopt_credential(generation, credential());
        runtime.register_error();
        runtime.register_error();

        runtime.begin_session();

        assert!(!runtime.has_player());
        assert!(runtime.credential().is_none());
        assert_eq!(state.dispose_count(), 1);
        assert_eq!(runtime.retry_count(), 0);
    }

    #[test]
    fn rapid_session_changes_leave_exactly_one_live_player() {
        let (mut runtime, _) = runtime();
        let mut states = Vec::new();

        for _ in 0..3 {
            let generation = runtime.begin_session();
            let (boxed, state) = player();
            runtime.adopt_player(generation, boxed);
            states.push(state);
        }

        assert_eq!(states[0].dispose_count(), 1);
        assert_eq!(states[1].dispose_count(), 1);
        assert_eq!(states[2].dispose_count(), 0);
        assert!(runtime.has_player());
    }

    #[test]
    fn retry_budget_is_bounded_and_resettable() {
        let (mut runtime, _) = runtime();
        runtime.begin_session();

        for _ in 0..MAX_AUTO_RETRIES {
            assert!(matches!(
                runtime.register_error(),
                RetryDecision::Schedule { .. }
            ));
        }
        assert!(matches!(runtime.register_error(), RetryDecision::GiveUp));

        runtime.reset_retries();
        assert!(matches!(
            runtime.register_error(),
            RetryDecision::Schedule { attempt: 1, .. }
        ));
    }

    #[test]
    fn destroy_disposes_and_invalidates() {
        let (mut runtime, _) = runtime();
        let generation = runtime.begin_session();
        let (boxed, state) = player();
        runtime.adopt_player(generation, boxed);

        runtime.destroy();

        assert_eq!(state.dispose_count(), 1);
        assert!(!runtime.is_current(generation));
        let (late_boxed, late_state) = player();
        assert!(!runtime.adopt_player(generation, late_boxed));
        assert_eq!(late_state.dispose_count(), 1);
    }

    #[test]
    fn dispose_failure_is_logged_and_non_fatal() {
        let (mut runtime, handles) = runtime();
        let generation = runtime.begin_session();
        let (boxed, state) = player();
        state.set_dispose_fails(true);
        runtime.adopt_player(generation, boxed);

        runtime.begin_session();

        assert!(!runtime.has_player());
        assert!(handles.log.contains("dispose failed"));
    }

    #[test]
    fn dropping_the_runtime_disposes_the_player() {
        let (mut runtime, _) = runtime();
        let generation = runtime.begin_session();
        let (boxed, state) = player();
        runtime.adopt_player(generation, boxed);

        drop(runtime);

        assert_eq!(state.dispose_count(), 1);
    }
}
