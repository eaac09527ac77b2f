//! Test support: fixtures shared by unit tests across layers.

pub mod fixtures;

pub use fixtures::{RecordedCall, StubApi};
