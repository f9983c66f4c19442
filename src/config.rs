//! Start-up configuration

use crate::consts;

/// Settings the start-up sequence and input guards run with
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Storage key for the score record
    pub storage_key: String,
    /// CSS selector of the UI mount target
    pub mount_selector: String,
    /// Name of the UI's outbound score-save port
    pub save_port: String,
    /// Double-tap detection window (ms)
    pub double_tap_window_ms: f64,
    /// Console log level
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_string(),
            mount_selector: consts::MOUNT_SELECTOR.to_string(),
            save_port: consts::SAVE_PORT.to_string(),
            double_tap_window_ms: consts::DOUBLE_TAP_WINDOW_MS,
            log_level: log::Level::Info,
        }
    }
}
