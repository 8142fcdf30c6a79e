//! Release velocity estimation.
//!
//! Momentum is the mean pixel distance of the trailing move samples. Elapsed
//! time per sample is recorded but not used: samples are assumed to arrive
//! at roughly one per frame.

use crate::session::{AxisTrack, Session};
use kotti_core::{AxisMomentum, Momentum, TouchConfig};

impl AxisTrack {
    /// Net travel between the first and last recorded positions.
    pub fn distance_from_origin(&self) -> f32 {
        match (self.path.first(), self.path.last()) {
            (Some(first), Some(last)) => (last - first).abs(),
            _ => 0.0,
        }
    }

    /// Mean distance of the last `max_samples` speed samples.
    pub(crate) fn px_per_frame(&self, max_samples: usize) -> f32 {
        let count = max_samples.min(self.speed.len());
        if count == 0 {
            return 0.0;
        }
        let recent = &self.speed[self.speed.len() - count..];
        recent.iter().map(|sample| sample.distance).sum::<f32>() / count as f32
    }
}

impl Session {
    /// Per-axis release velocity for the configured axes.
    ///
    /// Axes whose net travel is below `min_px_for_momentum` report zero.
    pub(crate) fn estimate_momentum(&self, config: &TouchConfig) -> Momentum {
        let mut momentum = Momentum::default();
        for axis in config.axis.iter() {
            let track = &self.tracks[axis];
            momentum[axis] = Some(if track.path.is_empty()
                || track.distance_from_origin() < config.min_px_for_momentum
            {
                AxisMomentum::default()
            } else {
                AxisMomentum {
                    direction: track.direction,
                    px_per_frame: track.px_per_frame(config.max_points_for_momentum),
                }
            });
        }
        momentum
    }
}
