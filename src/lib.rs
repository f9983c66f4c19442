//! Math Drill - browser glue for the math practice game
//!
//! The game UI itself is a separately compiled component mounted into the
//! page. This crate owns everything around it:
//! - `highscores`: Per-mode best score record
//! - `persistence`: Loading/saving the record with parse-failure recovery
//! - `platform`: Storage backends and touch/wheel zoom guards
//! - `seed`: Random seed handed to the UI at start-up
//! - `app`: Start-up sequence wiring the UI to the score store
//! - `config`: Start-up configuration

pub mod app;
pub mod config;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod seed;

pub use app::{AppError, GameView, InitPayload, bootstrap};
pub use config::AppConfig;
pub use highscores::{GameMode, ScoreRecord};
pub use persistence::{ScoreStore, StoreError};
pub use seed::SeedGenerator;

/// Start-up constants
pub mod consts {
    /// Seeds are drawn from [0, SEED_UPPER_BOUND)
    pub const SEED_UPPER_BOUND: u32 = 999_999;

    /// LocalStorage key holding the serialized score record
    pub const STORAGE_KEY: &str = "mathDrill.highScores";

    /// CSS selector of the element the game UI mounts into
    pub const MOUNT_SELECTOR: &str = "main";

    /// Outbound port the game UI sends updated score records on
    pub const SAVE_PORT: &str = "saveHighScores";

    /// Two `touchend`s this close together (ms, inclusive) count as a double tap
    pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
}
