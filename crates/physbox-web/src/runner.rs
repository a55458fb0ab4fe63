use physbox_engine::{
    build_frame, EngineContext, FrameData, FramePacer, Game, GameConfig, InputEvent, InputQueue,
    RenderContext,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. Native hosts drive it through `native::run`.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    frame: FrameData,
    pacer: FramePacer,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            frame: FrameData::new(config.world_width, config.world_height, config.title.clone()),
            pacer: FramePacer::new(config.tick_rate),
            game,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction; calling again
    /// starts over with a fresh world.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.ctx = EngineContext::new(&self.config);
        self.frame = FrameData::new(
            self.config.world_width,
            self.config.world_height,
            self.config.title.clone(),
        );
        self.pacer = FramePacer::new(self.config.tick_rate);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "runner initialized: {}x{} at {} Hz",
            self.config.world_width,
            self.config.world_height,
            self.config.tick_rate
        );
    }

    /// Hand a JSON configuration to the game. An initialized runner restarts
    /// so the new settings take effect immediately.
    pub fn load_config(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.game.load_config(json)?;
        if self.initialized {
            self.init();
        }
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// The pending input queue, for backends that poll.
    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// Run one frame: update the game with this frame's input, advance
    /// physics by exactly one fixed step, then rebuild the frame snapshot.
    ///
    /// `frame_dt` is the real time since the previous frame in seconds and
    /// only feeds the FPS readout.
    pub fn tick(&mut self, frame_dt: f32) {
        if !self.initialized || self.ctx.exit_requested() {
            return;
        }
        self.pacer.record(frame_dt);

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.ctx.step_physics();

        self.frame.clear();
        self.frame.title.clone_from(&self.config.title);
        build_frame(self.ctx.scene.iter(), &self.ctx.physics, &mut self.frame);

        // Allow game to add overlays and recolor the frame
        let mut render_ctx = RenderContext {
            frame: &mut self.frame,
            fps: self.pacer.fps(),
        };
        self.game.render(&mut render_ctx);
    }

    /// False once the game asked to quit; the last frame stays readable.
    pub fn is_running(&self) -> bool {
        !self.ctx.exit_requested()
    }

    pub fn frame(&self) -> &FrameData {
        &self.frame
    }

    pub fn frame_json(&self) -> Result<String, serde_json::Error> {
        self.frame.to_json()
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
