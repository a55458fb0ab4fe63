use wasm_bindgen::prelude::*;

pub mod brush;
pub mod config;
pub mod game;
pub mod overlay;
pub mod router;
pub mod session;
pub mod spawn;

pub use config::SandboxConfig;
pub use game::Sandbox;

physbox_web::export_game!(Sandbox, "sandbox");
