//! SDK resolve-or-install
//!
//! The player SDK arrives as a hosted script, so before any player can be
//! created the constructor has to either already exist in the page or be
//! installed from a CDN. Install order: decoding-support library first
//! (the player probes for it at startup), then the SDK itself from an
//! ordered source list, probing for the constructor after each load. The
//! whole sequence races one load timeout; there is no polling.

use std::sync::Arc;

use crate::application::playback::{error_text, PlaybackError};
use crate::ports::outbound::{sdk_sources, PlatformPort, PlayerSdk, ScriptHost, SdkError};

/// How long the SDK gets to resolve or install before the session fails
/// with the multi-cause diagnostic.
pub const SDK_LOAD_TIMEOUT_MS: u64 = 15_000;

/// Resolves the player SDK, installing it if the host does not expose it
/// yet. Returns the constructor capability on success; on failure the
/// error already carries panel-ready text.
pub async fn bootstrap_sdk(
    host: &Arc<dyn ScriptHost>,
    platform: &Arc<dyn PlatformPort>,
) -> Result<Arc<dyn PlayerSdk>, PlaybackError> {
    use futures_util::future::{select, Either};

    if let Some(sdk) = host.resolve_sdk() {
        platform.log_debug("player SDK already present");
        return Ok(sdk);
    }

    platform.log_info("player SDK not present, installing");
    let install = install_sdk(host, platform);
    let timeout = platform.sleep_ms(SDK_LOAD_TIMEOUT_MS);

    match select(Box::pin(install), timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            let present = host.present_globals();
            platform.log_error(&format!(
                "player SDK did not resolve within {SDK_LOAD_TIMEOUT_MS} ms, globals present: {present:?}"
            ));
            Err(PlaybackError::SdkTimeout(error_text::load_timeout_text(
                &present,
            )))
        }
    }
}

/// Runs the install sequence to a definitive outcome. Cancelled by the
/// timeout race when a script load stalls without erroring.
async fn install_sdk(
    host: &Arc<dyn ScriptHost>,
    platform: &Arc<dyn PlatformPort>,
) -> Result<Arc<dyn PlayerSdk>, PlaybackError> {
    if !host.decoder_ready() {
        if let Err(err) = host.load_script(sdk_sources::DECODER).await {
            platform.log_error(&format!("decoder library install failed: {err}"));
            return Err(match err {
                SdkError::Unsupported(_) => {
                    PlaybackError::SdkUnavailable(error_text::UNSUPPORTED_HOST.to_string())
                }
                _ => PlaybackError::SdkUnavailable(error_text::DECODER_LOAD_FAILED.to_string()),
            });
        }
        platform.log_debug("decoder library installed");
    }

    let mut any_loaded = false;
    for url in sdk_sources::PLAYER {
        match host.load_script(url).await {
            Ok(()) => {
                any_loaded = true;
                if let Some(sdk) = host.resolve_sdk() {
                    platform.log_info(&format!("player SDK installed from {url}"));
                    return Ok(sdk);
                }
                platform.log_warn(&format!(
                    "script loaded from {url} but no constructor global appeared"
                ));
            }
            Err(SdkError::Unsupported(detail)) => {
                platform.log_warn(&format!("player SDK unsupported on this host: {detail}"));
                return Err(PlaybackError::SdkUnavailable(
                    error_text::UNSUPPORTED_HOST.to_string(),
                ));
            }
            Err(err) => {
                platform.log_warn(&format!("player SDK source failed: {err}"));
            }
        }
    }

    // Either every source failed to load, or at least one loaded without
    // producing a constructor. Both read as "SDK never became available"
    // to the viewer; the distinction lives in the logs.
    let outcome = if any_loaded {
        SdkError::MissingGlobal
    } else {
        SdkError::AllSourcesFailed
    };
    let present = host.present_globals();
    platform.log_error(&format!(
        "player SDK install failed: {outcome}, globals present: {present:?}"
    ));
    Err(PlaybackError::SdkUnavailable(error_text::load_timeout_text(
        &present,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{create_mock_platform, MockPlatformHandles};
    use crate::infrastructure::vod::fake::{FakePlayerSdk, FakeScriptHost, ScriptOutcome};
    use crate::infrastructure::vod::create_script_host;
    use crate::ports::outbound::PlatformPort;

    fn mock_platform() -> (Arc<dyn PlatformPort>, MockPlatformHandles) {
        let (platform, handles) = create_mock_platform();
        (Arc::new(platform), handles)
    }

    fn as_host(host: &FakeScriptHost) -> Arc<dyn ScriptHost> {
        Arc::new(host.clone())
    }

    #[tokio::test]
    async fn resolved_sdk_short_circuits_without_loading_anything() {
        // No create_player expectation: resolving must not touch the SDK.
        let sdk = crate::ports::outbound::vod_sdk::MockPlayerSdk::new();
        let host = FakeScriptHost::preloaded(Arc::new(sdk));
        let (platform, _) = mock_platform();

        let result = bootstrap_sdk(&as_host(&host), &platform).await;

        assert!(result.is_ok());
        assert!(host.loads().is_empty());
    }

    #[tokio::test]
    async fn installs_decoder_first_then_primary_source() {
        let sdk = FakePlayerSdk::new();
        let host = FakeScriptHost::with_sdk(Arc::new(sdk));
        let (platform, _) = mock_platform();

        let result = bootstrap_sdk(&as_host(&host), &platform).await;

        assert!(result.is_ok());
        assert_eq!(
            host.loads(),
            vec![
                sdk_sources::DECODER.to_string(),
                sdk_sources::PLAYER[0].to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn present_decoder_is_not_reinstalled() {
        let sdk = FakePlayerSdk::new();
        let host = FakeScriptHost::with_sdk(Arc::new(sdk));
        host.set_decoder_ready(true);
        let (platform, _) = mock_platform();

        bootstrap_sdk(&as_host(&host), &platform).await.unwrap();

        assert_eq!(host.loads(), vec![sdk_sources::PLAYER[0].to_string()]);
    }

    #[tokio::test]
    async fn falls_back_through_the_source_list_in_order() {
        let sdk = FakePlayerSdk::new();
        let host = FakeScriptHost::new();
        host.set_outcome(
            sdk_sources::PLAYER[0],
            ScriptOutcome::Fail("blocked".to_string()),
        );
        host.publish_after(sdk_sources::PLAYER[1], Arc::new(sdk));
        let (platform, _) = mock_platform();

        let result = bootstrap_sdk(&as_host(&host), &platform).await;

        assert!(result.is_ok());
        assert_eq!(
            host.loads(),
            vec![
                sdk_sources::DECODER.to_string(),
                sdk_sources::PLAYER[0].to_string(),
                sdk_sources::PLAYER[1].to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn every_source_failing_reports_the_diagnostic() {
        let host = FakeScriptHost::new();
        for url in sdk_sources::PLAYER {
            host.set_outcome(url, ScriptOutcome::Fail("offline".to_string()));
        }
        let (platform, _) = mock_platform();

        let err = bootstrap_sdk(&as_host(&host), &platform).await.unwrap_err();

        match err {
            PlaybackError::SdkUnavailable(msg) => {
                assert!(msg.contains("网络连接问题"));
                assert!(msg.contains("CDN不可访问"));
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
        assert_eq!(host.loads().len(), 1 + sdk_sources::PLAYER.len());
    }

    #[tokio::test]
    async fn decoder_failure_reports_decoder_text() {
        let host = FakeScriptHost::new();
        host.set_outcome(sdk_sources::DECODER, ScriptOutcome::Fail("403".to_string()));
        let (platform, _) = mock_platform();

        let err = bootstrap_sdk(&as_host(&host), &platform).await.unwrap_err();

        match err {
            PlaybackError::SdkUnavailable(msg) => {
                assert_eq!(msg, error_text::DECODER_LOAD_FAILED)
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
        assert_eq!(host.loads(), vec![sdk_sources::DECODER.to_string()]);
    }

    #[tokio::test]
    async fn stalled_load_hits_the_timeout_race() {
        let host = FakeScriptHost::new();
        host.set_outcome(sdk_sources::PLAYER[0], ScriptOutcome::Hang);
        let (platform, handles) = mock_platform();

        let err = bootstrap_sdk(&as_host(&host), &platform).await.unwrap_err();

        match err {
            PlaybackError::SdkTimeout(msg) => assert!(msg.contains("加载超时")),
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(handles.sleep.requested(), vec![SDK_LOAD_TIMEOUT_MS]);
    }

    #[tokio::test]
    async fn timeout_diagnostic_lists_globals_that_were_present() {
        let host = FakeScriptHost::new();
        host.set_outcome(sdk_sources::PLAYER[0], ScriptOutcome::Hang);
        host.set_globals(&["tcPlayer"]);
        let (platform, _) = mock_platform();

        let err = bootstrap_sdk(&as_host(&host), &platform).await.unwrap_err();

        match err {
            PlaybackError::SdkTimeout(msg) => assert!(msg.contains("tcPlayer")),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn loaded_scripts_without_a_constructor_report_the_diagnostic() {
        let host = FakeScriptHost::new();
        host.set_globals(&["tencentPlayer"]);
        let (platform, _) = mock_platform();

        let err = bootstrap_sdk(&as_host(&host), &platform).await.unwrap_err();

        match err {
            PlaybackError::SdkUnavailable(msg) => assert!(msg.contains("tencentPlayer")),
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn scriptless_host_reports_unsupported() {
        let host = create_script_host();
        let (platform, _) = mock_platform();

        let err = bootstrap_sdk(&host, &platform).await.unwrap_err();

        match err {
            PlaybackError::SdkUnavailable(msg) => {
                assert_eq!(msg, error_text::UNSUPPORTED_HOST)
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
    }
}
