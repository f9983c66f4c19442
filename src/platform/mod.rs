//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Input guards against browser zoom gestures

pub mod input;
pub mod storage;

pub use input::{DoubleTapGuard, wheel_zoom_blocked};
pub use storage::{KeyValueStore, MemoryStorage};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
