//! Infrastructure adapters: concrete implementations of the outbound ports.

pub mod http_client;
pub mod platform;
pub mod vod;

pub mod testing;
