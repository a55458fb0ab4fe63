use glam::Vec2;
use physbox_engine::{
    AtlasText, Color, EngineContext, EntityId, Game, GameConfig, InputQueue, PhysicsError,
    RenderContext, TextRasterizer,
};

use crate::config::SandboxConfig;
use crate::overlay;
use crate::router::{route, Action, SpawnKind};
use crate::session::SessionState;
use crate::spawn;

/// Labels are rasterized at this fraction of the spawn radius.
const LABEL_SCALE: f32 = 0.8;

pub struct Sandbox {
    config: SandboxConfig,
    session: SessionState,
    text: Box<dyn TextRasterizer>,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_config(SandboxConfig::default())
    }

    pub fn with_config(config: SandboxConfig) -> Self {
        Self {
            session: SessionState::new(&config),
            config,
            text: Box::new(AtlasText::default()),
        }
    }

    /// Measure labels with the host's font instead of the built-in atlas.
    pub fn with_rasterizer(mut self, text: Box<dyn TextRasterizer>) -> Self {
        self.text = text;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Fresh world with only the floor; selector, radius and brush back to
    /// defaults. The watermark is left alone.
    pub fn reset(&mut self, ctx: &mut EngineContext) {
        ctx.reset();
        self.session.reset();
        self.spawn_floor(ctx);
    }

    /// `reset` that also clears the watermark and the trigger.
    pub fn full_reset(&mut self, ctx: &mut EngineContext) {
        self.reset(ctx);
        self.session.full_reset();
    }

    fn spawn_floor(&mut self, ctx: &mut EngineContext) {
        if let Err(err) = spawn::floor(ctx) {
            log::error!("floor rejected: {err}");
        }
    }

    fn apply(&mut self, ctx: &mut EngineContext, action: Action) {
        match action {
            Action::Quit => ctx.request_exit(),
            Action::Spawn { kind, at } => {
                if let Err(err) = self.spawn(ctx, kind, at) {
                    log::warn!("{kind:?} at {at} rejected: {err}");
                }
            }
            Action::BeginFreeform(at) => {
                self.session.brush.begin_freeform(at);
            }
            Action::EndFreeform => self.finish_freeform(ctx),
            Action::BeginWall(at) => {
                self.session.brush.begin_wall(at);
            }
            Action::EndWall => {
                self.session.brush.end_wall();
            }
            Action::AdjustRadius(delta) => self.session.adjust_radius(delta),
            Action::FullReset => self.full_reset(ctx),
            Action::AppendWatermark(letter) => {
                if self.session.append_watermark(letter) {
                    log::info!("watermark complete: {}", self.session.target_word());
                }
            }
            Action::Select(selector) => self.session.select(selector),
        }
    }

    fn spawn(
        &mut self,
        ctx: &mut EngineContext,
        kind: SpawnKind,
        at: Vec2,
    ) -> Result<EntityId, PhysicsError> {
        let radius = self.session.radius();
        match kind {
            SpawnKind::Circle => spawn::circle(ctx, at, radius),
            SpawnKind::Segment => spawn::segment(
                ctx,
                at,
                self.config.segment_offset,
                self.session.brush_thickness(),
            ),
            SpawnKind::Polygon { sides } => spawn::polygon(ctx, at, sides, radius),
            SpawnKind::HollowCircle => spawn::hollow_circle(ctx, at, radius),
            SpawnKind::LabeledBox => {
                let font_size = (radius * LABEL_SCALE) as u32;
                let label = self.text.rasterize(&self.config.label_text, font_size);
                spawn::labeled_box(ctx, at, label)
            }
        }
    }

    fn finish_freeform(&mut self, ctx: &mut EngineContext) {
        let Some(points) = self.session.brush.end_freeform() else {
            return;
        };
        if let Err(err) = spawn::freeform(ctx, &points) {
            log::debug!("dropped freeform stroke of {} points: {err}", points.len());
        }
    }

    /// Once-per-frame brush sampling at the current pointer.
    fn sample_brush(&mut self, ctx: &mut EngineContext, pointer: Vec2) {
        let Some((a, b)) = self.session.brush.sample(pointer) else {
            return;
        };
        log::trace!("wall {a} -> {b}");
        if let Err(err) = spawn::brush_wall(ctx, a, b, self.session.brush_thickness()) {
            log::warn!("wall {a} -> {b} rejected: {err}");
        }
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Sandbox {
    fn config(&self) -> GameConfig {
        self.config.game_config()
    }

    fn load_config(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.config = SandboxConfig::from_json(json)?;
        self.session = SessionState::new(&self.config);
        log::info!("configuration loaded");
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.session = SessionState::new(&self.config);
        self.spawn_floor(ctx);
        log::info!("sandbox ready: radius {}", self.session.radius());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            if let Some(action) = route(event, self.session.selector()) {
                self.apply(ctx, action);
            }
        }
        self.sample_brush(ctx, input.pointer());
    }

    fn render(&self, ctx: &mut RenderContext) {
        if self.session.triggered() {
            ctx.set_background(Color::WHITE);
            ctx.set_title(self.session.target_word());
        }
        overlay::watermark(ctx, self.session.watermark().as_str());
        overlay::help(ctx);
        overlay::hud(ctx, self.session.radius(), self.session.selector());
    }
}
