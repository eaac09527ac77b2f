//! Native VOD adapter: the hosted SDK needs a browser document
//!
//! Desktop builds cannot inject script tags or host the SDK's DOM player,
//! so every capability reports unsupported. The player component turns
//! that into a clear message instead of spinning forever.

use std::sync::Arc;

use crate::ports::outbound::vod_sdk::{PlayerSdk, ScriptHost, SdkError};

#[derive(Clone, Default)]
pub struct NativeScriptHost;

#[async_trait::async_trait]
impl ScriptHost for NativeScriptHost {
    fn resolve_sdk(&self) -> Option<Arc<dyn PlayerSdk>> {
        None
    }

    fn decoder_ready(&self) -> bool {
        false
    }

    fn present_globals(&self) -> Vec<String> {
        Vec::new()
    }

    async fn load_script(&self, url: &str) -> Result<(), SdkError> {
        Err(SdkError::Unsupported(format!(
            "cannot load {} without a browser document",
            url
        )))
    }
}

/// Create the script host for native builds
pub fn create_script_host() -> Arc<dyn ScriptHost> {
    Arc::new(NativeScriptHost)
}
