use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Automatic reload attempts before the player gives up and waits for a
/// manual retry.
pub const MAX_AUTO_RETRIES: u32 = 3;

/// Delay before an automatic reload attempt.
pub const RETRY_DELAY_MS: u64 = 3_000;

/// How often the credential expiry is re-checked while a player is mounted.
pub const EXPIRY_CHECK_INTERVAL_MS: u64 = 60_000;

/// Remaining-validity horizon under which the credential is re-fetched
/// before the signature actually lapses.
pub const CREDENTIAL_REFRESH_HORIZON_SECS: i64 = 5 * 60;

// =============================================================================
// Playback Credential
// =============================================================================

/// Signed playback parameters for one video, as issued by
/// `/api/vod/video/{id}`. Owned by exactly one player instance and torn
/// down together with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlaybackCredential {
    #[serde(default)]
    pub file_id: String,
    #[serde(default)]
    pub app_id: String,
    /// Opaque signature token; the player SDK consumes it as-is.
    #[serde(default)]
    pub psign: String,
    /// Expiry timestamp (RFC 3339, possibly without an offset).
    #[serde(default)]
    pub expire_at: Option<String>,
}

impl PlaybackCredential {
    /// Returns the first required field that is missing or empty, in the
    /// order the player needs them. `None` means the credential is complete.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.file_id.is_empty() {
            Some("file_id")
        } else if self.app_id.is_empty() {
            Some("app_id")
        } else if self.psign.is_empty() {
            Some("psign")
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Parses `expire_at`, tolerating offset-less timestamps (treated as
    /// UTC, which is what the credential issuer emits).
    pub fn expire_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.expire_at.as_deref()?;
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// True when fewer than [`CREDENTIAL_REFRESH_HORIZON_SECS`] remain
    /// before expiry (including already-expired credentials). Credentials
    /// without a parseable expiry are never proactively refreshed.
    pub fn refresh_due(&self, now: DateTime<Utc>) -> bool {
        match self.expire_at_utc() {
            Some(expiry) => {
                expiry.signed_duration_since(now)
                    < Duration::seconds(CREDENTIAL_REFRESH_HORIZON_SECS)
            }
            None => false,
        }
    }
}

/// Display metadata that rides along with the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VideoMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

// =============================================================================
// Playback Phase
// =============================================================================

/// Lifecycle of one playback session. `Failed` is recoverable through
/// retry; `Destroyed` is terminal and reachable from every other phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Uninitialized,
    FetchingCredential,
    SdkLoading,
    PlayerReady,
    Playing,
    Paused,
    Failed,
    Destroyed,
}

impl PlaybackPhase {
    /// Phases during which the loading overlay is shown.
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            PlaybackPhase::FetchingCredential | PlaybackPhase::SdkLoading
        )
    }
}

// =============================================================================
// Retry State
// =============================================================================

/// What the controller should do after a player error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Schedule an automatic reload after `delay_ms`.
    Schedule { delay_ms: u64, attempt: u32 },
    /// Automatic retries are exhausted; only a manual retry may continue.
    GiveUp,
}

/// Bounded automatic-retry counter, owned by one playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    count: u32,
    max: u32,
}

impl Default for RetryState {
    fn default() -> Self {
        Self::new(MAX_AUTO_RETRIES)
    }
}

impl RetryState {
    pub fn new(max: u32) -> Self {
        Self { count: 0, max }
    }

    /// Records an error and decides whether an automatic reload is still
    /// allowed. Increments only when a retry is actually scheduled.
    pub fn register_error(&mut self) -> RetryDecision {
        if self.count < self.max {
            self.count += 1;
            RetryDecision::Schedule {
                delay_ms: RETRY_DELAY_MS,
                attempt: self.count,
            }
        } else {
            RetryDecision::GiveUp
        }
    }

    /// Clears the counter on a successful load or a manual retry.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_exhausted(&self) -> bool {
        self.count >= self.max
    }
}

// =============================================================================
// Playback Progress
// =============================================================================

/// Snapshot republished on every time-update event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackProgress {
    pub current_time: f64,
    pub duration: f64,
    pub percentage: f64,
}

impl PlaybackProgress {
    /// Computes the percentage, guarding against zero, negative, and
    /// not-yet-known durations.
    pub fn from_times(current_time: f64, duration: f64) -> Self {
        let percentage = if duration.is_finite() && duration > 0.0 {
            ((current_time / duration) * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            current_time,
            duration,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_credential(expire_at: Option<&str>) -> PlaybackCredential {
        PlaybackCredential {
            file_id: "243791579912345678".to_string(),
            app_id: "1500012345".to_string(),
            psign: "eyJhbGciOiJIUzI1NiJ9.sig".to_string(),
            expire_at: expire_at.map(str::to_string),
        }
    }

    mod credential_validation {
        use super::*;

        #[test]
        fn complete_credential_has_no_missing_field() {
            assert_eq!(complete_credential(None).missing_field(), None);
            assert!(complete_credential(None).is_complete());
        }

        #[test]
        fn missing_fields_are_reported_in_order() {
            let mut cred = complete_credential(None);
            cred.file_id = String::new();
            assert_eq!(cred.missing_field(), Some("file_id"));

            let mut cred = complete_credential(None);
            cred.app_id = String::new();
            assert_eq!(cred.missing_field(), Some("app_id"));

            let mut cred = complete_credential(None);
            cred.psign = String::new();
            assert_eq!(cred.missing_field(), Some("psign"));
        }

        #[test]
        fn empty_credential_reports_file_id_first() {
            assert_eq!(PlaybackCredential::default().missing_field(), Some("file_id"));
        }
    }

    mod expiry {
        use super::*;

        fn at(rfc3339: &str) -> DateTime<Utc> {
            DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
        }

        #[test]
        fn fresh_credential_is_not_due() {
            let now = at("2024-06-01T10:00:00Z");
            let cred = complete_credential(Some("2024-06-01T12:00:00Z"));
            assert!(!cred.refresh_due(now));
        }

        #[test]
        fn credential_inside_horizon_is_due() {
            let now = at("2024-06-01T10:00:00Z");
            let cred = complete_credential(Some("2024-06-01T10:03:00Z"));
            assert!(cred.refresh_due(now));
        }

        #[test]
        fn expired_credential_is_due() {
            let now = at("2024-06-01T10:00:00Z");
            let cred = complete_credential(Some("2024-06-01T09:00:00Z"));
            assert!(cred.refresh_due(now));
        }

        #[test]
        fn missing_expiry_is_never_due() {
            let now = at("2024-06-01T10:00:00Z");
            assert!(!complete_credential(None).refresh_due(now));
            assert!(!complete_credential(Some("not a timestamp")).refresh_due(now));
        }

        #[test]
        fn offsetless_expiry_parses_as_utc() {
            let cred = complete_credential(Some("2024-06-01T12:30:00"));
            assert_eq!(cred.expire_at_utc(), Some(at("2024-06-01T12:30:00Z")));

            let cred = complete_credential(Some("2024-06-01T12:30:00.250000"));
            assert!(cred.expire_at_utc().is_some());
        }
    }

    mod retry {
        use super::*;

        #[test]
        fn schedules_up_to_max_then_gives_up() {
            let mut retry = RetryState::default();

            for attempt in 1..=MAX_AUTO_RETRIES {
                match retry.register_error() {
                    RetryDecision::Schedule { delay_ms, attempt: n } => {
                        assert_eq!(delay_ms, RETRY_DELAY_MS);
                        assert_eq!(n, attempt);
                    }
                    RetryDecision::GiveUp => panic!("gave up before attempt {attempt}"),
                }
            }

            assert_eq!(retry.register_error(), RetryDecision::GiveUp);
            assert_eq!(retry.count(), MAX_AUTO_RETRIES);
        }

        #[test]
        fn exhausted_state_keeps_giving_up() {
            let mut retry = RetryState::default();
            for _ in 0..MAX_AUTO_RETRIES {
                retry.register_error();
            }
            assert!(retry.is_exhausted());
            assert_eq!(retry.register_error(), RetryDecision::GiveUp);
            assert_eq!(retry.register_error(), RetryDecision::GiveUp);
        }

        #[test]
        fn reset_restores_automatic_retries() {
            let mut retry = RetryState::default();
            for _ in 0..=MAX_AUTO_RETRIES {
                retry.register_error();
            }
            retry.reset();
            assert_eq!(retry.count(), 0);
            assert!(matches!(
                retry.register_error(),
                RetryDecision::Schedule { attempt: 1, .. }
            ));
        }
    }

    mod progress {
        use super::*;

        #[test]
        fn percentage_from_valid_times() {
            let p = PlaybackProgress::from_times(30.0, 120.0);
            assert_eq!(p.percentage, 25.0);
        }

        #[test]
        fn zero_duration_yields_zero_percentage() {
            assert_eq!(PlaybackProgress::from_times(10.0, 0.0).percentage, 0.0);
            assert_eq!(PlaybackProgress::from_times(10.0, f64::NAN).percentage, 0.0);
        }

        #[test]
        fn percentage_is_clamped_to_hundred() {
            let p = PlaybackProgress::from_times(500.0, 100.0);
            assert_eq!(p.percentage, 100.0);
        }
    }
}
