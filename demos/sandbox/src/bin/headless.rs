//! Scripted, windowless run of the sandbox.
//!
//! Plays a fixed session (every body type, a wall stroke, a freeform blob,
//! the watermark word) through the paced native loop and logs what would be
//! drawn. Usage: `sandbox-headless [config.json]`, logging via `RUST_LOG`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::collections::VecDeque;

    use anyhow::Context;
    use glam::Vec2;
    use physbox_engine::{
        Anchor, Color, Game, InputEvent, InputQueue, Key, MouseButton, Renderer, ShapeInstance,
        TextImage,
    };
    use physbox_web::native::{run, InputSource};
    use physbox_web::GameRunner;
    use sandbox::Sandbox;

    /// Frames to let bodies settle between scripted gestures.
    const SETTLE_FRAMES: usize = 30;

    /// One batch of events per frame; quits when the script runs out.
    struct Script {
        frames: VecDeque<Vec<InputEvent>>,
    }

    impl Script {
        fn new() -> Self {
            Self {
                frames: VecDeque::new(),
            }
        }

        fn frame(mut self, events: Vec<InputEvent>) -> Self {
            self.frames.push_back(events);
            self
        }

        fn idle(mut self, frames: usize) -> Self {
            self.frames.extend(std::iter::repeat_with(Vec::new).take(frames));
            self
        }

        fn key(self, key: Key) -> Self {
            self.frame(vec![InputEvent::KeyDown { key }])
        }

        fn click(self, button: MouseButton, at: Vec2) -> Self {
            self.frame(vec![
                InputEvent::ButtonDown { button, x: at.x, y: at.y },
                InputEvent::ButtonUp { button, x: at.x, y: at.y },
            ])
        }

        /// Press, visit each point on its own frame, release at the last.
        fn drag(mut self, button: MouseButton, path: &[Vec2]) -> Self {
            let Some((first, rest)) = path.split_first() else {
                return self;
            };
            self = self.frame(vec![InputEvent::ButtonDown { button, x: first.x, y: first.y }]);
            for p in rest {
                self = self.frame(vec![InputEvent::PointerMove { x: p.x, y: p.y }]);
            }
            let last = rest.last().unwrap_or(first);
            self.frame(vec![InputEvent::ButtonUp { button, x: last.x, y: last.y }])
        }

        fn demo() -> Self {
            let wall: Vec<Vec2> = (0..8).map(|i| Vec2::new(150.0 + i as f32 * 20.0, 420.0 + i as f32 * 5.0)).collect();
            let blob: Vec<Vec2> = (0..12)
                .map(|i| Vec2::new(550.0, 150.0) + Vec2::from_angle(i as f32 * 0.5) * 40.0)
                .collect();
            let mut script = Script::new()
                .click(MouseButton::Primary, Vec2::new(200.0, 100.0))
                .key(Key::Digit(2))
                .click(MouseButton::Primary, Vec2::new(300.0, 100.0))
                .key(Key::Digit(6))
                .frame(vec![InputEvent::Wheel { delta: 10.0 }])
                .click(MouseButton::Primary, Vec2::new(400.0, 100.0))
                .key(Key::Digit(9))
                .click(MouseButton::Primary, Vec2::new(500.0, 100.0))
                .click(MouseButton::Middle, Vec2::new(600.0, 100.0))
                .idle(SETTLE_FRAMES)
                .drag(MouseButton::Secondary, &wall)
                .key(Key::Digit(0))
                .drag(MouseButton::Primary, &blob)
                .idle(SETTLE_FRAMES);
            for letter in "QRKLY".chars() {
                script = script.key(Key::Letter(letter));
            }
            script.idle(SETTLE_FRAMES).key(Key::Space).idle(2)
        }
    }

    impl InputSource for Script {
        fn poll(&mut self, queue: &mut InputQueue) -> anyhow::Result<()> {
            match self.frames.pop_front() {
                Some(events) => events.into_iter().for_each(|e| queue.push(e)),
                None => queue.push(InputEvent::Quit),
            }
            Ok(())
        }
    }

    /// Logs a one-line summary of every frame.
    #[derive(Default)]
    struct LogRenderer {
        frame: u64,
        shapes: usize,
        dynamic: usize,
        texts: usize,
        images: usize,
        background: Option<Color>,
    }

    impl Renderer for LogRenderer {
        fn backend(&self) -> &'static str {
            "log"
        }

        fn clear(&mut self, color: Color) -> anyhow::Result<()> {
            self.shapes = 0;
            self.dynamic = 0;
            self.texts = 0;
            self.images = 0;
            self.background = Some(color);
            Ok(())
        }

        fn draw_shape(&mut self, shape: &ShapeInstance) -> anyhow::Result<()> {
            self.shapes += 1;
            if !shape.is_static {
                self.dynamic += 1;
            }
            Ok(())
        }

        fn draw_cross(&mut self, _center: Vec2, _half_len: f32, _color: Color) -> anyhow::Result<()> {
            Ok(())
        }

        fn draw_image(&mut self, image: &TextImage, pos: Vec2, _alpha: u8) -> anyhow::Result<()> {
            self.images += 1;
            log::trace!("image {:?} at {pos}", image.text);
            Ok(())
        }

        fn draw_text(
            &mut self,
            _text: &str,
            _size: u32,
            _pos: Vec2,
            _color: Color,
            _alpha: u8,
            _anchor: Anchor,
        ) -> anyhow::Result<()> {
            self.texts += 1;
            Ok(())
        }

        fn set_title(&mut self, title: &str) -> anyhow::Result<()> {
            log::info!("title: {title}");
            Ok(())
        }

        fn present(&mut self) -> anyhow::Result<()> {
            log::debug!(
                "frame {}: {} shapes ({} dynamic), {} texts, {} images, background {:?}",
                self.frame,
                self.shapes,
                self.dynamic,
                self.texts,
                self.images,
                self.background,
            );
            self.frame += 1;
            Ok(())
        }
    }

    pub fn main() -> anyhow::Result<()> {
        env_logger::init();

        let mut game = Sandbox::new();
        if let Some(path) = std::env::args().nth(1) {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            game.load_config(&json)
                .with_context(|| format!("parsing config {path}"))?;
            log::info!("using config {path}");
        }

        let mut runner = GameRunner::new(game);
        let mut script = Script::demo();
        let mut renderer = LogRenderer::default();
        run(&mut runner, &mut script, &mut renderer)?;

        log::info!(
            "finished after {} frames with {} entities",
            renderer.frame,
            runner.context().scene.len()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build enters through the exported game_init.
}
