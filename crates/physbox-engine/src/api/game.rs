use glam::Vec2;

use crate::api::types::{Color, EntityId};
use crate::components::entity::Entity;
use crate::core::physics::{BodyDesc, PhysicsError, PhysicsWorld};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::frame::{DrawCommand, FrameData};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Frames (and physics steps) per second (default: 60).
    pub tick_rate: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Initial entity capacity of the scene.
    pub max_entities: usize,
    /// Gravity vector; positive Y pulls toward the bottom of the screen.
    pub gravity: Vec2,
    /// Window title shown until the game overrides it.
    pub title: String,
}

impl GameConfig {
    /// Seconds advanced by each physics step.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_entities: 512,
            gravity: Vec2::new(0.0, 900.0),
            title: "2D Physics Sandbox".into(),
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called before init and after every
    /// configuration reload.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply a JSON configuration document. The default accepts nothing.
    fn load_config(&mut self, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }

    /// Setup initial state and spawn the first entities.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick: route this frame's input, spawn entities.
    /// Physics is stepped by the runner right after this returns.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only pass adding overlays, background and title.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub physics: PhysicsWorld,
    next_id: u32,
    exit_requested: bool,
    config: GameConfig,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let mut physics = PhysicsWorld::new(config.gravity);
        physics.set_dt(config.fixed_dt());
        Self {
            scene: Scene::with_capacity(config.max_entities),
            physics,
            next_id: 1,
            exit_requested: false,
            config: config.clone(),
        }
    }

    /// The configuration this context was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Replace the scene and physics world with fresh, empty ones.
    ///
    /// The old world is dropped wholesale, taking every body with it, so no
    /// entity can outlive its body. A pending exit request survives.
    pub fn reset(&mut self) {
        let exit_requested = self.exit_requested;
        *self = Self::new(&self.config);
        self.exit_requested = exit_requested;
        log::info!("world reset");
    }

    /// Request that the runner stop after the current frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    // -- Physics convenience methods --

    /// Register the body described by `desc`, then spawn the entity with it.
    /// Nothing is spawned if the world rejects the body.
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
    ) -> Result<EntityId, PhysicsError> {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc)?;
        let entity = entity
            .with_pos(desc.position)
            .with_rotation(desc.rotation)
            .with_body(body);
        self.scene.spawn(entity);
        Ok(id)
    }

    /// Step the physics simulation once and sync positions back to entities.
    /// Called by the game runner after `Game::update()`.
    pub fn step_physics(&mut self) {
        self.physics.step();

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }
}

/// Render context handed to `Game::render` after the scene's shapes have
/// been collected into the frame.
pub struct RenderContext<'a> {
    pub frame: &'a mut FrameData,
    /// Measured frames per second.
    pub fps: f32,
}

impl RenderContext<'_> {
    pub fn set_background(&mut self, color: Color) {
        self.frame.background = color;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.frame.title = title.into();
    }

    /// Queue a command drawn before the scene's shapes.
    pub fn push_underlay(&mut self, command: DrawCommand) {
        self.frame.underlay.push(command);
    }

    /// Queue a command drawn after the scene's shapes and decorations.
    pub fn push_overlay(&mut self, command: DrawCommand) {
        self.frame.overlay.push(command);
    }
}
