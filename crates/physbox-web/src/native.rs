//! Paced frame loop for native hosts (desktop windows, headless runs).
//!
//! The browser drives `GameRunner::tick` from `requestAnimationFrame`; here
//! the loop owns the clock and sleeps out whatever is left of each frame.

use std::time::Instant;

use anyhow::Context;
use physbox_engine::{draw_frame, Game, InputQueue, Renderer};

use crate::GameRunner;

/// Delivers the frame's device events and keeps the pointer current.
pub trait InputSource {
    fn poll(&mut self, queue: &mut InputQueue) -> anyhow::Result<()>;
}

/// Run until the game requests exit. Collaborator failures end the loop and
/// are returned with the stage that failed.
pub fn run<G, I, R>(runner: &mut GameRunner<G>, input: &mut I, renderer: &mut R) -> anyhow::Result<()>
where
    G: Game,
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    runner.init();
    log::info!("native loop started on {}", renderer.backend());

    let mut title = String::new();
    let mut last = Instant::now();
    let mut frames: u64 = 0;

    while runner.is_running() {
        let start = Instant::now();
        let frame_dt = start.duration_since(last).as_secs_f32();
        last = start;

        input
            .poll(runner.input_mut())
            .with_context(|| format!("polling input for frame {frames}"))?;
        runner.tick(frame_dt);

        let frame = runner.frame();
        if frame.title != title {
            renderer
                .set_title(&frame.title)
                .context("setting window title")?;
            title.clone_from(&frame.title);
        }
        draw_frame(renderer, frame).with_context(|| format!("drawing frame {frames}"))?;
        frames += 1;

        let remaining = runner.pacer().remaining(start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }

    log::info!("native loop stopped after {frames} frames");
    Ok(())
}
