//! Time-based easing curves.
//!
//! The free functions take the classic `(t, b, c, d)` arguments: elapsed
//! time, start value, total change, and duration.

/// Easing curves available to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Decelerates towards the end, following `1 - (1 - x)^3`.
    OutCubic,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::OutCubic => {
                let inverse = fraction - 1.0;
                inverse * inverse * inverse + 1.0
            }
        }
    }

    /// Value at `elapsed` for a move from `start` by `change` over `duration`.
    ///
    /// A non-positive duration jumps straight to the end value.
    pub fn interpolate(&self, elapsed: f32, start: f32, change: f32, duration: f32) -> f32 {
        if duration <= 0.0 {
            return start + change;
        }
        start + change * self.transform(elapsed / duration)
    }
}

/// Linear interpolation of `c` over `d`, starting at `b`.
pub fn ease_linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    Easing::Linear.interpolate(t, b, c, d)
}

/// Cubic ease-out of `c` over `d`, starting at `b`.
pub fn ease_out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    Easing::OutCubic.interpolate(t, b, c, d)
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
