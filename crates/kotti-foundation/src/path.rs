//! Direction and path engine.

use crate::session::{AxisTrack, Session, SpeedSample};
use kotti_core::{AxisPush, AxisSet, Direction, Point, PushBy};

impl AxisTrack {
    /// Appends one sample and returns the direction it implies together with
    /// the pixels moved since the previous sample.
    ///
    /// The returned direction is not committed; see [`AxisTrack::commit`].
    pub(crate) fn record(&mut self, position: f32, elapsed_ms: u64) -> AxisPush {
        let Some(&last) = self.path.last() else {
            // An unseeded track takes the sample as its origin.
            self.path.push(position);
            return AxisPush {
                direction: self.direction,
                px: 0.0,
            };
        };

        let delta = position - last;
        self.path.push(position);
        self.speed.push(SpeedSample {
            distance: delta.abs(),
            elapsed_ms,
        });

        // A zero delta usually means the finger paused while turning around.
        let direction = if delta == 0.0 {
            self.direction.reversed()
        } else {
            Direction::from_delta(delta)
        };

        // prev_direction is still Still on the first sample after a reset.
        if direction != self.direction && !self.prev_direction.is_still() {
            log::trace!(
                "reversal {:?} -> {:?} at {}; restarting path",
                self.direction,
                direction,
                position
            );
            self.restart(position);
        }

        AxisPush {
            direction,
            px: delta.abs(),
        }
    }

    pub(crate) fn commit(&mut self, direction: Direction) {
        self.prev_direction = self.direction;
        self.direction = direction;
    }
}

impl Session {
    /// Records one move sample on every configured axis and commits the new
    /// directions for all of them at once.
    pub(crate) fn record_move(&mut self, point: Point, axes: AxisSet, uptime_ms: u64) -> PushBy {
        let elapsed_ms = uptime_ms.saturating_sub(self.timestamps.move_ms);
        let mut push = PushBy::default();

        for axis in axes.iter() {
            push[axis] = Some(self.tracks[axis].record(axis.project(point), elapsed_ms));
        }
        for axis in axes.iter() {
            if let Some(sample) = push[axis] {
                self.tracks[axis].commit(sample.direction);
            }
        }

        self.timestamps.move_ms = uptime_ms;
        push
    }
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
