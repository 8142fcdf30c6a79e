//! Output events published by the touch tracker.

use crate::axis::{Axis, PerAxis};
use crate::direction::Direction;

/// Displacement of one move sample along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisPush {
    pub direction: Direction,
    pub px: f32,
}

/// Release velocity along one axis, in pixels per move sample.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisMomentum {
    pub direction: Direction,
    pub px_per_frame: f32,
}

/// Per-move displacement. Only configured axes are `Some`.
pub type PushBy = PerAxis<Option<AxisPush>>;

/// Release velocity. Only configured axes are `Some`.
pub type Momentum = PerAxis<Option<AxisMomentum>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchEventKind {
    TouchStart,
    PushBy,
    TouchEnd,
    TouchEndWithMomentum,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// A gesture began.
    TouchStart,
    /// A finger moved.
    PushBy(PushBy),
    /// The gesture ended with no fingers left down, or was terminated.
    TouchEnd,
    /// Emitted after `TouchEnd` when the release carried velocity.
    TouchEndWithMomentum(Momentum),
}

impl TouchEvent {
    pub fn kind(&self) -> TouchEventKind {
        match self {
            TouchEvent::TouchStart => TouchEventKind::TouchStart,
            TouchEvent::PushBy(_) => TouchEventKind::PushBy,
            TouchEvent::TouchEnd => TouchEventKind::TouchEnd,
            TouchEvent::TouchEndWithMomentum(_) => TouchEventKind::TouchEndWithMomentum,
        }
    }

    pub fn push_by(&self) -> Option<&PushBy> {
        match self {
            TouchEvent::PushBy(push) => Some(push),
            _ => None,
        }
    }

    pub fn momentum(&self) -> Option<&Momentum> {
        match self {
            TouchEvent::TouchEndWithMomentum(momentum) => Some(momentum),
            _ => None,
        }
    }
}

impl PerAxis<Option<AxisPush>> {
    /// Pixels moved along `axis`, zero for unconfigured axes.
    pub fn px(&self, axis: Axis) -> f32 {
        self[axis].map_or(0.0, |push| push.px)
    }
}

impl PerAxis<Option<AxisMomentum>> {
    /// Pixels per frame along `axis`, zero for unconfigured axes.
    pub fn px_per_frame(&self, axis: Axis) -> f32 {
        self[axis].map_or(0.0, |momentum| momentum.px_per_frame)
    }

    pub fn is_zero(&self) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| self.px_per_frame(axis) <= 0.0)
    }
}
