//! Axis-lock arbitration.
//!
//! With a single locked axis, the first move samples of a gesture decide
//! whether it belongs to this tracker (the finger follows the locked axis)
//! or to a sibling consumer scrolling along the other axis.

use crate::session::{LockState, Session};
use kotti_core::{Axis, Point};

/// Move samples needed before the intended direction is trusted.
pub const LOCK_PROBE_SAMPLES: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Arbitration {
    /// Still undecided; suppress the event and record nothing.
    Probe,
    /// The gesture follows the other axis.
    Yield,
    /// The gesture belongs to this tracker.
    Own,
}

impl Session {
    pub(crate) fn arbitrate(&mut self, point: Point, locked: Axis) -> Arbitration {
        match self.lock {
            LockState::Claimed => return Arbitration::Own,
            LockState::Ignored => return Arbitration::Yield,
            LockState::Probing => {}
        }

        self.move_count += 1;
        if self.move_count < LOCK_PROBE_SAMPLES {
            return Arbitration::Probe;
        }

        let offset = point - self.start_point;
        let along = locked.project(offset).abs();
        let across = locked.orthogonal().project(offset).abs();

        if across > along {
            log::debug!("axis lock on {locked} lost ({across}px across vs {along}px along)");
            self.lock = LockState::Ignored;
            Arbitration::Yield
        } else {
            log::debug!("axis lock on {locked} claimed ({along}px along vs {across}px across)");
            self.lock = LockState::Claimed;
            Arbitration::Own
        }
    }
}
