// fps.rs - Frame rate from render timestamps

use std::time::Instant;

/// Instantaneous frame rate: the inverse of the time between the last two renders.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    last: Option<Instant>,
    fps: Option<f64>,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self) {
        self.record_at(Instant::now());
    }

    pub fn record_at(&mut self, now: Instant) {
        if let Some(last) = self.last {
            let elapsed = now.saturating_duration_since(last).as_secs_f64();
            self.fps = (elapsed > 0.0).then(|| 1.0 / elapsed);
        }
        self.last = Some(now);
    }

    /// `None` until two renders have been recorded.
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }
}
