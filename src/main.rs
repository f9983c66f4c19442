//! Math Drill entry point
//!
//! Loads high scores, mounts the game UI and installs the input guards.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use math_drill::app::SaveHandler;
    use math_drill::platform::LocalStorage;
    use math_drill::platform::input::install_zoom_guards;
    use math_drill::{
        AppConfig, AppError, GameView, InitPayload, ScoreRecord, ScoreStore, SeedGenerator,
        bootstrap,
    };

    // JS bindings for the compiled game UI (loaded as the global `Elm`)
    #[wasm_bindgen(inline_js = "
        export function mount_game_ui(node, flags) {
            return window.Elm.Main.init({ node: node, flags: flags });
        }

        export function subscribe_port(app, port, callback) {
            const p = app.ports && app.ports[port];
            if (!p) {
                return false;
            }
            p.subscribe(callback);
            return true;
        }
    ")]
    extern "C" {
        #[wasm_bindgen(catch)]
        fn mount_game_ui(node: &Element, flags: JsValue) -> Result<JsValue, JsValue>;
        fn subscribe_port(app: &JsValue, port: &str, callback: &Closure<dyn FnMut(JsValue)>)
        -> bool;
    }

    /// The mounted game UI
    struct ElmView {
        app: JsValue,
        save_port: String,
    }

    impl ElmView {
        fn mount(node: &Element, payload: InitPayload, save_port: String) -> Result<Self, AppError> {
            let json = serde_json::to_string(&payload).map_err(|e| AppError::Mount(e.to_string()))?;
            let flags = js_sys::JSON::parse(&json).map_err(|e| AppError::Mount(format!("{:?}", e)))?;
            let app = mount_game_ui(node, flags).map_err(|e| AppError::Mount(format!("{:?}", e)))?;
            Ok(Self { app, save_port })
        }
    }

    impl GameView for ElmView {
        fn on_save_scores(&mut self, mut handler: SaveHandler) {
            let closure = Closure::<dyn FnMut(_)>::new(move |value: JsValue| {
                match decode_record(&value) {
                    Some(record) => handler(record),
                    None => log::warn!("Dropping malformed score record: {:?}", value),
                }
            });
            if !subscribe_port(&self.app, &self.save_port, &closure) {
                log::warn!("Game UI has no `{}` port, scores will not be saved", self.save_port);
            }
            closure.forget();
        }
    }

    fn decode_record(value: &JsValue) -> Option<ScoreRecord> {
        let json = js_sys::JSON::stringify(value).ok()?.as_string()?;
        serde_json::from_str(&json).ok()
    }

    pub fn run() -> Result<(), AppError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or_else(|| AppError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| AppError::Dom("no document".into()))?;

        let config = AppConfig::default();
        log::set_max_level(config.log_level.to_level_filter());

        log::info!("Math Drill starting...");

        let target = document
            .query_selector(&config.mount_selector)
            .ok()
            .flatten()
            .ok_or_else(|| AppError::MountTargetMissing(config.mount_selector.clone()))?;

        let store = Rc::new(ScoreStore::new(LocalStorage::open(), config.storage_key.clone()));
        let mut seeds = SeedGenerator::from_entropy();
        let save_port = config.save_port.clone();
        bootstrap(store, &mut seeds, |payload| ElmView::mount(&target, payload, save_port))?;

        install_zoom_guards(&document, config.double_tap_window_ms)?;

        log::info!("Math Drill running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = web::run() {
        log::error!("Start-up failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use math_drill::platform::MemoryStorage;
    use math_drill::{AppConfig, InitPayload, ScoreStore, SeedGenerator};

    env_logger::init();
    log::info!("Math Drill (native) starting...");
    log::info!("The game UI only runs in the browser - build for wasm32-unknown-unknown");

    // Show the flags a fresh browser session would mount the UI with
    let config = AppConfig::default();
    let store = ScoreStore::new(MemoryStorage::new(), config.storage_key);
    let payload = InitPayload {
        initial_seed: SeedGenerator::from_entropy().next_seed(),
        high_scores: store.load(),
    };
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode init payload: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
