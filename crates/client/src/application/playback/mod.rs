//! Playback session control
//!
//! Everything between "play this video" and a live player: failure
//! classification, SDK resolve-or-install, and the ownership bookkeeping
//! that keeps at most one live player per surface.

pub mod bootstrap;
pub mod error_text;
pub mod runtime;

pub use bootstrap::{bootstrap_sdk, SDK_LOAD_TIMEOUT_MS};
pub use runtime::PlaybackRuntime;

use crate::application::error::ServiceError;
use crate::ports::outbound::ApiError;

/// Failures of one playback session, classified for presentation: access
/// problems raise the lock overlay, everything else the error panel.
#[derive(Debug, Clone)]
pub enum PlaybackError {
    /// The server refused to issue a credential for this viewer.
    AccessDenied { detail: String },
    /// The credential arrived but a required field was empty.
    IncompleteCredential { field: &'static str },
    /// Credential fetch failed for a non-permission reason.
    Service(ServiceError),
    /// The SDK definitively failed to install.
    SdkUnavailable(String),
    /// The SDK neither resolved nor installed within the load timeout.
    SdkTimeout(String),
    /// A live player reported an error.
    Player { message: String },
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackError::AccessDenied { detail } => write!(f, "access denied: {}", detail),
            PlaybackError::IncompleteCredential { field } => {
                write!(f, "incomplete playback credential: missing {}", field)
            }
            PlaybackError::Service(e) => write!(f, "credential fetch failed: {}", e),
            PlaybackError::SdkUnavailable(msg) => write!(f, "player SDK unavailable: {}", msg),
            PlaybackError::SdkTimeout(msg) => write!(f, "player SDK load timed out: {}", msg),
            PlaybackError::Player { message } => write!(f, "player error: {}", message),
        }
    }
}

impl std::error::Error for PlaybackError {}

impl PlaybackError {
    /// Classifies a service failure: permission problems become
    /// [`PlaybackError::AccessDenied`], everything else stays a service
    /// failure.
    pub fn from_service(err: ServiceError) -> Self {
        if err.is_permission_denied() {
            let detail = match err {
                ServiceError::Api(ApiError::Status { detail, .. }) if !detail.is_empty() => detail,
                ServiceError::Rejected(msg) => msg,
                other => other.to_string(),
            };
            PlaybackError::AccessDenied { detail }
        } else {
            PlaybackError::Service(err)
        }
    }

    /// True when this failure should raise the lock overlay and the
    /// access-request signal instead of the error panel.
    pub fn requests_access(&self) -> bool {
        matches!(self, PlaybackError::AccessDenied { .. })
    }

    /// Message for the error panel. Raw detail belongs in the logs, which
    /// get the `Display` rendering instead.
    pub fn user_text(&self) -> String {
        match self {
            PlaybackError::AccessDenied { detail } => error_text::credential_fetch_failed(detail),
            PlaybackError::IncompleteCredential { .. } => {
                error_text::INCOMPLETE_CREDENTIAL.to_string()
            }
            PlaybackError::Service(e) => error_text::credential_fetch_failed(&e.to_string()),
            PlaybackError::SdkUnavailable(msg) | PlaybackError::SdkTimeout(msg) => msg.clone(),
            PlaybackError::Player { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_status_classifies_as_access_denied() {
        let err = PlaybackError::from_service(ServiceError::Api(ApiError::Status {
            status: 403,
            detail: "无权限观看此视频".to_string(),
        }));
        match &err {
            PlaybackError::AccessDenied { detail } => assert_eq!(detail, "无权限观看此视频"),
            other => panic!("expected access denial, got {other:?}"),
        }
        assert!(err.requests_access());
    }

    #[test]
    fn rejection_with_permission_wording_classifies_as_access_denied() {
        let err = PlaybackError::from_service(ServiceError::Rejected("请先登录".to_string()));
        assert!(err.requests_access());
    }

    #[test]
    fn server_fault_stays_a_service_error() {
        let err = PlaybackError::from_service(ServiceError::Api(ApiError::Status {
            status: 500,
            detail: "boom".to_string(),
        }));
        assert!(!err.requests_access());
        assert!(matches!(err, PlaybackError::Service(_)));
    }

    #[test]
    fn transport_failure_stays_a_service_error() {
        let err =
            PlaybackError::from_service(ServiceError::Api(ApiError::Transport("dns".to_string())));
        assert!(matches!(err, PlaybackError::Service(_)));
    }

    #[test]
    fn user_text_names_the_failure_in_product_language() {
        let incomplete = PlaybackError::IncompleteCredential { field: "psign" };
        assert_eq!(incomplete.user_text(), error_text::INCOMPLETE_CREDENTIAL);

        let service = PlaybackError::Service(ServiceError::Rejected("video missing".to_string()));
        assert!(service.user_text().starts_with("获取视频播放参数失败"));

        let player = PlaybackError::Player {
            message: "视频网络错误".to_string(),
        };
        assert_eq!(player.user_text(), "视频网络错误");
    }

    #[test]
    fn display_keeps_the_field_name_for_logs() {
        let incomplete = PlaybackError::IncompleteCredential { field: "app_id" };
        assert!(incomplete.to_string().contains("app_id"));
    }
}
