use std::collections::VecDeque;
use std::time::Duration;

/// Number of recent frames averaged for the FPS readout.
const FPS_WINDOW: usize = 10;

/// Paces a one-step-per-frame loop to a target tick rate.
///
/// There is no accumulator: every frame advances the simulation by exactly
/// `dt()`, so simulated time runs slow when frames take longer than budget.
pub struct FramePacer {
    /// The fixed delta time per tick.
    dt: f32,
    /// Most recent real frame durations, in seconds.
    recent: VecDeque<f32>,
}

impl FramePacer {
    pub fn new(tick_rate: f32) -> Self {
        Self {
            dt: 1.0 / tick_rate,
            recent: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Wall-clock budget for one frame.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f32(self.dt)
    }

    /// How long to sleep after a frame that took `work` to complete.
    pub fn remaining(&self, work: Duration) -> Duration {
        self.frame_budget().saturating_sub(work)
    }

    /// Record the real duration of the last frame (seconds).
    pub fn record(&mut self, frame_dt: f32) {
        if frame_dt <= 0.0 {
            return;
        }
        if self.recent.len() == FPS_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(frame_dt);
    }

    /// Average frames per second over the recent window, 0 before any frame.
    pub fn fps(&self) -> f32 {
        if self.recent.is_empty() {
            return 0.0;
        }
        let total: f32 = self.recent.iter().sum();
        self.recent.len() as f32 / total
    }
}
