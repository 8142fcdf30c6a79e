//! Mutable record of one gesture.
//!
//! A [`Session`] lives as long as its tracker and is logically reset at
//! every gesture start; it is never reallocated.

use kotti_core::{Axis, AxisSet, Direction, PerAxis, Point};
use smallvec::SmallVec;

/// Samples kept inline per axis before spilling to the heap.
const INLINE_SAMPLES: usize = 16;

/// Distance travelled by one move sample and the time since the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedSample {
    pub distance: f32,
    pub elapsed_ms: u64,
}

/// Path and speed history for one axis.
///
/// Once seeded, `path.len() == speed.len() + 1`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTrack {
    pub(crate) path: SmallVec<[f32; INLINE_SAMPLES]>,
    pub(crate) speed: SmallVec<[SpeedSample; INLINE_SAMPLES]>,
    pub(crate) direction: Direction,
    pub(crate) prev_direction: Direction,
}

impl AxisTrack {
    pub fn path(&self) -> &[f32] {
        &self.path
    }

    pub fn speed(&self) -> &[SpeedSample] {
        &self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn prev_direction(&self) -> Direction {
        self.prev_direction
    }

    /// Drops all history and starts a new path at `origin`.
    pub(crate) fn restart(&mut self, origin: f32) {
        self.clear();
        self.path.push(origin);
    }

    pub(crate) fn clear(&mut self) {
        self.path.clear();
        self.speed.clear();
    }

    pub(crate) fn reset_directions(&mut self) {
        self.direction = Direction::Still;
        self.prev_direction = Direction::Still;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timestamps {
    pub start_ms: u64,
    pub move_ms: u64,
}

impl Timestamps {
    pub fn at(uptime_ms: u64) -> Self {
        Self {
            start_ms: uptime_ms,
            move_ms: uptime_ms,
        }
    }
}

/// Axis-lock arbitration state of the current gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockState {
    /// Not enough move samples yet to tell the intended direction.
    #[default]
    Probing,
    /// The gesture follows the locked axis; this tracker owns it.
    Claimed,
    /// The gesture follows the other axis; yielded to other consumers.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    pub(crate) active_finger: Option<usize>,
    pub(crate) start_point: Point,
    pub(crate) tracks: PerAxis<AxisTrack>,
    pub(crate) timestamps: Timestamps,
    pub(crate) move_count: u32,
    pub(crate) lock: LockState,
    pub(crate) is_active: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index into the current contact list of the tracked finger; `None`
    /// forces re-resolution on the next move.
    pub fn active_finger(&self) -> Option<usize> {
        self.active_finger
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn track(&self, axis: Axis) -> &AxisTrack {
        &self.tracks[axis]
    }

    pub fn timestamps(&self) -> Timestamps {
        self.timestamps
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    /// Sticky for the rest of the gesture once the lock was lost.
    pub fn ignore_movements(&self) -> bool {
        self.lock == LockState::Ignored
    }

    /// Sticky for the rest of the gesture once the lock was claimed.
    pub fn stop_events(&self) -> bool {
        self.lock == LockState::Claimed
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn reset_arbitration(&mut self) {
        self.lock = LockState::Probing;
        self.move_count = 0;
    }

    pub(crate) fn invalidate_finger(&mut self) {
        self.active_finger = None;
    }

    pub(crate) fn clear_tracks(&mut self, axes: AxisSet) {
        for axis in axes.iter() {
            self.tracks[axis].clear();
        }
    }
}
