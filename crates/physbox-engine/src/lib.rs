pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{Color, EntityId};
pub use components::entity::{Entity, ShapeKind};
pub use core::scene::Scene;
pub use core::time::FramePacer;
pub use core::physics::{
    PhysicsWorld, PhysicsBody, PhysicsError, BodyDesc, BodyType,
    ColliderDesc, ColliderMaterial, MassProps, ShapeDesc,
};
pub use input::queue::{InputEvent, InputQueue, Key, MouseButton};
pub use renderer::{draw_frame, Anchor, DrawCommand, FrameData, Renderer, ShapeInstance};
pub use systems::render::build_frame;
pub use systems::text::{AtlasText, FontConfig, TextImage, TextRasterizer};
