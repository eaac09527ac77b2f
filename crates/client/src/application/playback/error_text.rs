//! User-facing text for playback failures.
//!
//! The player SDK reports errors three ways: numeric codes of its own,
//! standard media element error names, or a free-form message. Mapping
//! picks the most specific rendering available; the raw error goes to
//! the logs, never to the panel.

use crate::ports::outbound::PlayerErrorInfo;

/// Fallback when the error carries nothing identifiable.
pub const GENERIC_FAILURE: &str = "视频播放失败，请检查网络连接或联系管理员";

/// Shown when the credential response is missing a required field.
pub const INCOMPLETE_CREDENTIAL: &str = "播放参数不完整，无法初始化播放器";

/// Default lock-overlay message when the page does not supply one.
pub const DEFAULT_LOCK_MESSAGE: &str = "您需要登录或购买课程才能观看此视频";

/// Shown when the decoding-support library cannot be installed.
pub const DECODER_LOAD_FAILED: &str = "HLS.js库加载失败，视频播放器无法工作";

/// Shown on hosts that cannot run the script-based player at all.
pub const UNSUPPORTED_HOST: &str = "当前环境不支持网页视频播放器";

/// Wraps a credential fetch failure for the error panel.
pub fn credential_fetch_failed(detail: &str) -> String {
    format!("获取视频播放参数失败: {detail}")
}

/// SDK-specific numeric codes.
fn code_text(code: i64) -> Option<&'static str> {
    Some(match code {
        1000 => "播放器初始化失败",
        1001 => "视频格式不支持",
        1002 => "视频解码失败",
        1003 => "视频加载超时",
        1004 => "视频网络错误",
        1005 => "视频数据损坏",
        1006 => "视频源错误",
        1007 => "视频信息获取失败（请检查fileID、appID和psign）",
        1008 => "播放器配置错误",
        1009 => "播放器内部错误",
        1010 => "视频权限验证失败",
        _ => return None,
    })
}

/// Standard media element error names.
fn media_text(name: &str) -> Option<&'static str> {
    Some(match name {
        "MEDIA_ERR_NETWORK" => "网络错误，请检查网络连接",
        "MEDIA_ERR_DECODE" => "视频解码错误，文件可能已损坏",
        "MEDIA_ERR_SRC_NOT_SUPPORTED" => "不支持的视频格式",
        "MEDIA_ERR_ABORTED" => "视频加载被中止",
        _ => return None,
    })
}

/// Most specific message for a player error: SDK code, then media error
/// name, then the error's own message, then [`GENERIC_FAILURE`].
pub fn player_error_text(info: &PlayerErrorInfo) -> String {
    if let Some(text) = info.code.and_then(code_text) {
        return text.to_string();
    }
    if let Some(text) = info.name.as_deref().and_then(media_text) {
        return text.to_string();
    }
    if let Some(message) = info.message.as_deref().filter(|m| !m.trim().is_empty()) {
        return format!("视频播放失败: {message}");
    }
    GENERIC_FAILURE.to_string()
}

/// Diagnostic for the SDK load timeout. Lists any constructor-like
/// globals that were present, which separates "nothing loaded" from
/// "loaded under an unexpected name".
pub fn load_timeout_text(present_globals: &[String]) -> String {
    let mut text = String::from(
        "腾讯云点播播放器SDK加载超时。可能原因：1. 网络连接问题 2. CDN不可访问 3. 浏览器安全限制",
    );
    if !present_globals.is_empty() {
        text.push_str("（检测到的全局对象: ");
        text.push_str(&present_globals.join(", "));
        text.push('）');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(code: Option<i64>, name: Option<&str>, message: Option<&str>) -> PlayerErrorInfo {
        PlayerErrorInfo {
            code,
            name: name.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn sdk_code_wins_over_everything_else() {
        let text = player_error_text(&info(Some(1007), Some("MEDIA_ERR_NETWORK"), Some("raw")));
        assert_eq!(text, "视频信息获取失败（请检查fileID、appID和psign）");
    }

    #[test]
    fn media_error_name_is_mapped() {
        let text = player_error_text(&info(None, Some("MEDIA_ERR_SRC_NOT_SUPPORTED"), None));
        assert_eq!(text, "不支持的视频格式");
    }

    #[test]
    fn unknown_code_falls_through_to_media_name() {
        let text = player_error_text(&info(Some(42), Some("MEDIA_ERR_ABORTED"), None));
        assert_eq!(text, "视频加载被中止");
    }

    #[test]
    fn own_message_is_wrapped() {
        let text = player_error_text(&info(None, None, Some("signature expired")));
        assert_eq!(text, "视频播放失败: signature expired");
    }

    #[test]
    fn blank_message_falls_back_to_generic() {
        assert_eq!(player_error_text(&info(None, None, Some("  "))), GENERIC_FAILURE);
        assert_eq!(player_error_text(&info(None, None, None)), GENERIC_FAILURE);
    }

    #[test]
    fn every_documented_code_has_text() {
        for code in 1000..=1010 {
            assert!(code_text(code).is_some(), "code {code} unmapped");
        }
        assert!(code_text(999).is_none());
        assert!(code_text(1011).is_none());
    }

    #[test]
    fn timeout_text_lists_present_globals() {
        let bare = load_timeout_text(&[]);
        assert!(bare.contains("网络连接问题"));
        assert!(bare.contains("CDN不可访问"));
        assert!(!bare.contains("检测到的全局对象"));

        let listed = load_timeout_text(&["tcPlayer".to_string(), "VodPlayer".to_string()]);
        assert!(listed.contains("tcPlayer, VodPlayer"));
    }
}
