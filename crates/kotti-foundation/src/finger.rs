//! Active-finger resolution.

use crate::input::TouchSnapshot;
use crate::session::{Session, Timestamps};
use kotti_core::{AxisSet, Point};

impl Session {
    /// Re-selects the tracked finger from `snapshot`.
    ///
    /// When the finger changes, or `force_reset` is set, all per-axis history
    /// restarts from the new finger's position so that direction and momentum
    /// never straddle two fingers. Returns whether a reset happened.
    pub(crate) fn resolve_active_finger(
        &mut self,
        snapshot: &TouchSnapshot,
        axes: AxisSet,
        force_reset: bool,
    ) -> bool {
        let Some(index) = snapshot.changed_index() else {
            log::trace!("no contacts in snapshot; keeping finger {:?}", self.active_finger);
            return false;
        };

        if self.active_finger == Some(index) && !force_reset {
            return false;
        }

        let Some(origin) = snapshot.position_at(index) else {
            return false;
        };

        if !force_reset {
            log::debug!(
                "active finger changed {:?} -> {} at {:?}",
                self.active_finger,
                index,
                origin
            );
        }

        self.active_finger = Some(index);
        self.start_point = origin;
        self.timestamps = Timestamps::at(snapshot.uptime_ms);

        for axis in axes.iter() {
            let track = &mut self.tracks[axis];
            track.restart(axis.project(origin));
            track.reset_directions();
        }
        true
    }

    /// Position of the tracked finger in `snapshot`.
    pub(crate) fn active_point(&self, snapshot: &TouchSnapshot) -> Option<Point> {
        self.active_finger
            .and_then(|index| snapshot.position_at(index))
    }
}
