//! Data transfer objects for REST payloads
//!
//! Thin shapes between the wire and the domain types. Anything lenient
//! about field presence lives on the domain structs themselves; this module
//! only knows where payloads sit inside responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use minivinci_domain::{PlaybackCredential, UserProfile, VideoMeta};

use crate::application::error::{ParseEnvelope, ServiceError};

/// Payload of GET `/api/vod/video/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaybackPayload {
    #[serde(default)]
    pub playback: Option<PlaybackCredential>,
    #[serde(default)]
    pub video: Option<VideoMeta>,
}

impl PlaybackPayload {
    /// Split into credential and metadata; a missing playback section is a
    /// shape error, the caller never sees a half-present credential here.
    pub fn into_parts(self) -> Result<(PlaybackCredential, Option<VideoMeta>), ServiceError> {
        let credential = self.playback.ok_or_else(|| {
            ServiceError::Parse("response has no playback section".to_string())
        })?;
        Ok((credential, self.video))
    }
}

/// Body of POST `/api/vod/playback/record`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackReport {
    pub video_id: String,
    /// Seconds actually watched in this playback session.
    pub play_duration: u64,
    /// Position percentage 0..=100 at report time.
    pub progress: f64,
    pub device_type: &'static str,
}

impl PlaybackReport {
    pub fn new(video_id: &str, play_duration: u64, progress: f64) -> Self {
        Self {
            video_id: video_id.to_string(),
            play_duration,
            progress: progress.clamp(0.0, 100.0),
            device_type: current_device_type(),
        }
    }
}

/// Device tag sent with telemetry.
pub fn current_device_type() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "web"
    } else {
        "desktop"
    }
}

/// Pull a user out of an auth probe response.
///
/// Accepts `{success, data: {user}}`, `{user}`, and a bare user object;
/// anything else (including a rejected envelope) yields `None` because the
/// probe treats every failure as signed-out.
pub fn extract_user(value: Value) -> Option<UserProfile> {
    let payload: Value = value.parse_enveloped().ok()?;
    let candidates = [payload.get("user").cloned(), Some(payload)];
    for candidate in candidates.into_iter().flatten() {
        if let Ok(user) = serde_json::from_value::<UserProfile>(candidate) {
            if user.id != 0 || !user.username.is_empty() {
                return Some(user);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn playback_payload_splits_credential_and_meta() {
        let value = json!({
            "success": true,
            "data": {
                "playback": {
                    "file_id": "F1",
                    "app_id": "A1",
                    "psign": "SIGN",
                    "expire_at": "2026-01-01T00:00:00Z"
                },
                "video": {"title": "Color basics", "cover_url": "/img/c.jpg"}
            }
        });
        let payload: PlaybackPayload = value.parse_enveloped().unwrap();
        let (credential, meta) = payload.into_parts().unwrap();
        assert_eq!(credential.file_id, "F1");
        assert_eq!(meta.unwrap().title.as_deref(), Some("Color basics"));
    }

    #[test]
    fn missing_playback_section_is_a_shape_error() {
        let payload = PlaybackPayload {
            playback: None,
            video: None,
        };
        assert!(payload.into_parts().is_err());
    }

    #[test]
    fn report_serializes_with_wire_names() {
        let report = PlaybackReport::new("v42", 95, 37.5);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["video_id"], "v42");
        assert_eq!(value["play_duration"], 95);
        assert_eq!(value["progress"], 37.5);
        assert!(value["device_type"].is_string());
    }

    #[test]
    fn report_progress_is_clamped() {
        assert_eq!(PlaybackReport::new("v", 1, 250.0).progress, 100.0);
        assert_eq!(PlaybackReport::new("v", 1, -3.0).progress, 0.0);
    }

    mod user_extraction {
        use super::*;

        #[test]
        fn enveloped_nested_user() {
            let value = json!({
                "success": true,
                "data": {"user": {"id": 7, "username": "mira", "nickname": "Mira"}}
            });
            let user = extract_user(value).unwrap();
            assert_eq!(user.id, 7);
            assert_eq!(user.display_name(), "Mira");
        }

        #[test]
        fn bare_user_object() {
            let value = json!({"id": 3, "username": "kai"});
            assert_eq!(extract_user(value).unwrap().username, "kai");
        }

        #[test]
        fn rejected_envelope_is_none() {
            let value = json!({"success": false, "message": "not signed in"});
            assert!(extract_user(value).is_none());
        }

        #[test]
        fn empty_object_is_none() {
            assert!(extract_user(json!({})).is_none());
        }
    }
}
