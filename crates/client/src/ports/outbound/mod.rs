//! Outbound ports: contracts the application layer depends on, implemented
//! by infrastructure adapters.

pub mod platform;
pub mod platform_port;
pub mod raw_api_port;
pub mod vod_sdk;

pub use platform::{
    storage_keys, ApiConfigProvider, DocumentProvider, LogProvider, SleepProvider,
    StorageProvider, TimeProvider,
};
pub use platform_port::PlatformPort;
pub use raw_api_port::{ApiError, RawApiPort};
pub use vod_sdk::{
    sdk_sources, ControlBarOptions, PlayerErrorInfo, PlayerEvent, PlayerHandle, PlayerOptions,
    PlayerSdk, ScriptHost, SdkError,
};
