//! Start-up sequence
//!
//! Seed → load scores → mount the game UI with both → persist every score
//! record the UI sends back. Runs once; afterwards only the save handler
//! (and the platform input guards) remain active.

use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;

use crate::highscores::ScoreRecord;
use crate::persistence::ScoreStore;
use crate::platform::KeyValueStore;
use crate::seed::SeedGenerator;

/// Start-up failures
#[derive(Debug, Error)]
pub enum AppError {
    #[error("mount target `{0}` not found")]
    MountTargetMissing(String),
    #[error("game UI failed to start: {0}")]
    Mount(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Flags the game UI is constructed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPayload {
    pub initial_seed: u32,
    pub high_scores: ScoreRecord,
}

/// Handler invoked with each score record the UI asks to save
pub type SaveHandler = Box<dyn FnMut(ScoreRecord)>;

/// A mounted game UI
pub trait GameView {
    /// Register the handler for the UI's score-save events
    fn on_save_scores(&mut self, handler: SaveHandler);
}

/// Run the start-up sequence and return the mounted view
///
/// `mount` is called exactly once with the init payload. Save failures
/// after start-up are logged, never surfaced to the UI.
pub fn bootstrap<S, V, F>(
    store: Rc<ScoreStore<S>>,
    seeds: &mut SeedGenerator,
    mount: F,
) -> Result<V, AppError>
where
    S: KeyValueStore + 'static,
    V: GameView,
    F: FnOnce(InitPayload) -> Result<V, AppError>,
{
    let payload = InitPayload {
        initial_seed: seeds.next_seed(),
        high_scores: store.load(),
    };
    log::info!("Starting game with seed: {}", payload.initial_seed);

    let mut view = mount(payload)?;

    view.on_save_scores(Box::new(move |record| {
        if let Err(e) = store.save(&record) {
            log::error!("Failed to save high scores: {}", e);
        }
    }));

    Ok(view)
}
