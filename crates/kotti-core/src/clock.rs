//! Monotonic uptime source for hosts whose native events carry no timestamp.

// web_time keeps this usable on wasm32 as well as native targets.
use web_time::Instant;

/// Milliseconds elapsed since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct UptimeClock {
    origin: Instant,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}
