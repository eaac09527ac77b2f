//! Session state shared across pages
//!
//! One probe result, read everywhere. The nav bar runs the probe on mount;
//! pages only read the signals and never probe on their own.

use dioxus::prelude::*;

use minivinci_domain::UserProfile;

/// Where the session probe currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Probe has not answered yet. Pages render their signed-out shape
    /// without flashing login prompts that may be wrong a moment later.
    #[default]
    Unknown,
    SignedIn,
    SignedOut,
}

/// Session state for the signed-in user
#[derive(Clone)]
pub struct SessionState {
    pub status: Signal<SessionStatus>,
    pub user: Signal<Option<UserProfile>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            status: Signal::new(SessionStatus::Unknown),
            user: Signal::new(None),
        }
    }

    /// Adopt a probe result. `None` is definitive signed-out, not unknown.
    pub fn apply_probe(&mut self, user: Option<UserProfile>) {
        match user {
            Some(profile) => self.set_signed_in(profile),
            None => self.set_signed_out(),
        }
    }

    /// Local sign-in (demo session) without waiting for a probe round-trip.
    pub fn set_signed_in(&mut self, profile: UserProfile) {
        self.user.set(Some(profile));
        self.status.set(SessionStatus::SignedIn);
    }

    pub fn set_signed_out(&mut self) {
        self.user.set(None);
        self.status.set(SessionStatus::SignedOut);
    }

    pub fn is_signed_in(&self) -> bool {
        *self.status.read() == SessionStatus::SignedIn
    }

    /// Name shown in the nav bar user menu.
    pub fn display_name(&self) -> Option<String> {
        self.user
            .read()
            .as_ref()
            .map(|user| user.display_name().to_string())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
