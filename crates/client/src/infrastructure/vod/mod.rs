//! VOD player SDK adapters
//!
//! The browser adapter drives the hosted player SDK through wasm-bindgen;
//! the native adapter reports the capability as unsupported so desktop
//! builds degrade to an explanatory panel instead of a broken player.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod native;

pub mod fake;

#[cfg(target_arch = "wasm32")]
pub use wasm::{create_script_host, WasmScriptHost};

#[cfg(not(target_arch = "wasm32"))]
pub use native::{create_script_host, NativeScriptHost};
