//! Minivinci client - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minivinci_client::ports::outbound::PlatformPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minivinci_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Minivinci client");

    // Platform
    let platform = minivinci_client::infrastructure::platform::create_platform();

    // HTTP
    let raw_api = std::sync::Arc::new(minivinci_client::infrastructure::http_client::ApiAdapter::new(
        platform.clone(),
    ));

    // Player SDK script host
    let script_host = minivinci_client::infrastructure::vod::create_script_host();

    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_client_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform.clone())
        .with_context(script_host)
        .with_context(minivinci_client::presentation::Services::new(
            raw_api, platform,
        ))
        .launch(minivinci_client::app);
}

/// The desktop webview gets the stylesheet injected into its head; there
/// is no asset pipeline serving it like on web.
#[cfg(not(target_arch = "wasm32"))]
fn load_client_css() -> String {
    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_default()
}
