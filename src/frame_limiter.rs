use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate by sleeping off whatever is left of
/// each frame's time budget. A target of 0 disables the cap.
pub struct FrameLimiter {
    frame_budget: Option<Duration>,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        let frame_budget = (target_fps > 0).then(|| Duration::from_secs(1) / target_fps);
        FrameLimiter {
            frame_budget,
            frame_start: Instant::now(),
        }
    }

    /// How long to sleep after a frame that took `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_budget
            .map(|budget| budget.saturating_sub(elapsed))
            .unwrap_or(Duration::ZERO)
    }

    /// Sleep until the current frame's budget is used up, then start the next frame
    pub fn wait(&mut self) {
        let sleep_for = self.remaining(self.frame_start.elapsed());
        if !sleep_for.is_zero() {
            std::thread::sleep(sleep_for);
        }
        self.frame_start = Instant::now();
    }
}
