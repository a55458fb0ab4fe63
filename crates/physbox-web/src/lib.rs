pub mod runner;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use runner::GameRunner;

// Used by `export_game!` so game crates need not depend on these directly.
#[doc(hidden)]
pub use console_error_panic_hook;
#[doc(hidden)]
pub use console_log;
#[doc(hidden)]
pub use log;
pub use physbox_engine;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, frame accessors)
///
/// The page renders from `get_frame_json()` after every `game_tick(dt)`.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// physbox_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `physbox_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::physbox_engine::{InputEvent, Key, MouseButton};

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            $crate::log::info!("{}: initialized", $game_name);
        }

        /// Replace the game's settings with a JSON document and restart.
        #[wasm_bindgen]
        pub fn game_load_config(json: &str) -> Result<(), JsError> {
            with_runner(|r| r.load_config(json)).map_err(|e| JsError::new(&e.to_string()))
        }

        /// Advance one frame; `dt` is the real time since the last call, in seconds.
        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_button_down(button: u8, x: f32, y: f32) {
            let button = MouseButton::from_index(button);
            with_runner(|r| r.push_input(InputEvent::ButtonDown { button, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_button_up(button: u8, x: f32, y: f32) {
            let button = MouseButton::from_index(button);
            with_runner(|r| r.push_input(InputEvent::ButtonUp { button, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            let key = Key::from_code(key_code);
            with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            let key = Key::from_code(key_code);
            with_runner(|r| r.push_input(InputEvent::KeyUp { key }));
        }

        #[wasm_bindgen]
        pub fn game_quit() {
            with_runner(|r| r.push_input(InputEvent::Quit));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_json() -> Result<String, JsError> {
            with_runner(|r| r.frame_json()).map_err(|e| JsError::new(&e.to_string()))
        }

        #[wasm_bindgen]
        pub fn is_running() -> bool {
            with_runner(|r| r.is_running())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }
    };
}
